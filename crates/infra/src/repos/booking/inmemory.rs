use super::{BookingInsertResult, IBookingRepo};
use crate::repos::shared::inmemory_repo::*;
use slotkeeper_domain::{Booking, BookingStatus, Slot, ID};

pub struct InMemoryBookingRepo {
    bookings: std::sync::Mutex<Vec<Booking>>,
}

impl InMemoryBookingRepo {
    pub fn new() -> Self {
        Self {
            bookings: std::sync::Mutex::new(Vec::new()),
        }
    }
}

#[async_trait::async_trait]
impl IBookingRepo for InMemoryBookingRepo {
    async fn insert(&self, booking: &Booking) -> anyhow::Result<BookingInsertResult> {
        let slot = Slot::new(
            booking.provider_id.clone(),
            booking.requested_date.clone(),
            booking.requested_time.clone(),
        );
        let inserted = insert_if_absent(booking, &self.bookings, |b| {
            booking.status.holds_slot() && slot.is_held_by(b)
        });
        if inserted {
            Ok(BookingInsertResult::Inserted)
        } else {
            Ok(BookingInsertResult::SlotTaken)
        }
    }

    async fn find(&self, booking_id: &ID) -> anyhow::Result<Option<Booking>> {
        Ok(find(booking_id, &self.bookings))
    }

    async fn find_by_status(&self, status: BookingStatus) -> anyhow::Result<Vec<Booking>> {
        Ok(find_by(&self.bookings, |b| b.status == status))
    }

    async fn find_by_provider_and_date(
        &self,
        provider_id: &ID,
        date: &str,
    ) -> anyhow::Result<Vec<Booking>> {
        Ok(find_by(&self.bookings, |b| {
            b.provider_id == *provider_id && b.requested_date == date
        }))
    }

    async fn find_by_provider(
        &self,
        provider_id: &ID,
        status: Option<BookingStatus>,
    ) -> anyhow::Result<Vec<Booking>> {
        Ok(find_by(&self.bookings, |b| {
            b.provider_id == *provider_id && status.map(|s| s == b.status).unwrap_or(true)
        }))
    }

    async fn find_by_requester(&self, requester_id: &ID) -> anyhow::Result<Vec<Booking>> {
        Ok(find_by(&self.bookings, |b| b.requester_id == *requester_id))
    }

    async fn save_response(&self, booking: &Booking) -> anyhow::Result<bool> {
        let updated = update_if(
            &booking.id,
            &self.bookings,
            |b| b.status == BookingStatus::Pending,
            |b| {
                b.status = booking.status;
                b.response = booking.response.clone();
                b.response_timestamp = booking.response_timestamp;
            },
        );
        Ok(updated.is_some())
    }
}
