use serde::{Deserialize, Serialize};
use slotkeeper_domain::{Booking, BookingStatus, ID};

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingDTO {
    pub id: ID,
    pub requester_id: ID,
    pub provider_id: ID,
    pub requested_date: String,
    pub requested_time: String,
    pub status: BookingStatus,
    pub topic: String,
    pub description: String,
    pub comment: Option<String>,
    pub response: Option<String>,
    pub response_timestamp: Option<i64>,
    pub created: i64,
}

impl BookingDTO {
    pub fn new(booking: Booking) -> Self {
        Self {
            id: booking.id,
            requester_id: booking.requester_id,
            provider_id: booking.provider_id,
            requested_date: booking.requested_date,
            requested_time: booking.requested_time,
            status: booking.status,
            topic: booking.topic,
            description: booking.description,
            comment: booking.comment,
            response: booking.response,
            response_timestamp: booking.response_timestamp,
            created: booking.created,
        }
    }
}
