use crate::dtos::BookingDTO;
use serde::{Deserialize, Serialize};
use slotkeeper_domain::{Booking, BookingStatus, ID};

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingResponse {
    pub booking: BookingDTO,
}

impl BookingResponse {
    pub fn new(booking: Booking) -> Self {
        Self {
            booking: BookingDTO::new(booking),
        }
    }
}

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingsResponse {
    pub bookings: Vec<BookingDTO>,
}

impl BookingsResponse {
    pub fn new(bookings: Vec<Booking>) -> Self {
        Self {
            bookings: bookings.into_iter().map(BookingDTO::new).collect(),
        }
    }
}

pub mod create_booking {
    use super::*;

    #[derive(Debug, Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct RequestBody {
        pub requester_id: ID,
        pub provider_id: ID,
        pub requested_date: String,
        pub requested_time: String,
        #[serde(default)]
        pub topic: String,
        #[serde(default)]
        pub description: String,
        #[serde(default)]
        pub comment: Option<String>,
    }

    pub type APIResponse = BookingResponse;
}

pub mod respond_to_booking {
    use super::*;

    #[derive(Debug, Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct PathParams {
        pub booking_id: ID,
    }

    #[derive(Debug, Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct RequestBody {
        pub status: BookingStatus,
        #[serde(default)]
        pub response: String,
    }

    pub type APIResponse = BookingResponse;
}

pub mod get_provider_bookings {
    use super::*;

    #[derive(Debug, Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct PathParams {
        pub provider_id: ID,
    }

    #[derive(Debug, Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct QueryParams {
        pub status: Option<BookingStatus>,
    }

    pub type APIResponse = BookingsResponse;
}

pub mod get_requester_bookings {
    use super::*;

    #[derive(Debug, Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct PathParams {
        pub requester_id: ID,
    }

    pub type APIResponse = BookingsResponse;
}

pub mod get_slot_availability {
    use super::*;

    #[derive(Debug, Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct PathParams {
        pub provider_id: ID,
    }

    #[derive(Debug, Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct QueryParams {
        pub date: String,
        pub time: Option<String>,
    }

    #[derive(Debug, Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct APIResponse {
        pub date: String,
        pub occupied_times: Vec<String>,
        /// Only present when a time was given in the query
        pub free: Option<bool>,
    }
}
