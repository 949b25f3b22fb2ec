mod booking;
mod person;
mod reminder;
mod status;

pub mod dtos {
    pub use crate::booking::dtos::*;
    pub use crate::person::dtos::*;
    pub use crate::reminder::dtos::*;
}

pub use crate::booking::api::*;
pub use crate::person::api::*;
pub use crate::reminder::api::*;
pub use crate::status::api::*;
