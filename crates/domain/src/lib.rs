mod booking;
pub mod date;
mod notification;
mod person;
mod reminder;
mod shared;
mod slot;

pub use booking::{Booking, BookingStatus, BookingTransitionError, InvalidBookingStatusError};
pub use notification::Channel;
pub use person::Person;
pub use reminder::{
    format_reminder_message, LedgerCreateResult, ParticipantRole, ReminderLedgerEntry,
    ScheduleWindow, SentTo,
};
pub use shared::entity::{Entity, InvalidIDError, ID};
pub use slot::{occupied_times, Slot};
