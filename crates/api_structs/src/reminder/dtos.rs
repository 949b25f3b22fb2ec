use serde::{Deserialize, Serialize};
use slotkeeper_domain::{SentTo, ID};

/// A `Booking` for which a reminder was dispatched during a tick
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SentReminderDTO {
    pub booking_id: ID,
    pub sent_to: SentTo,
}

impl SentReminderDTO {
    pub fn new(booking_id: ID, sent_to: SentTo) -> Self {
        Self {
            booking_id,
            sent_to,
        }
    }
}
