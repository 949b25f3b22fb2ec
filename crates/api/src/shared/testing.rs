use slotkeeper_domain::{Booking, BookingStatus, ID};
use slotkeeper_infra::{BookingInsertResult, IBookingRepo};

/// Booking store where every call fails
pub struct UnreachableBookingRepo {}

fn unreachable<T>() -> anyhow::Result<T> {
    Err(anyhow::anyhow!("Booking store is unreachable"))
}

#[async_trait::async_trait]
impl IBookingRepo for UnreachableBookingRepo {
    async fn insert(&self, _booking: &Booking) -> anyhow::Result<BookingInsertResult> {
        unreachable()
    }

    async fn find(&self, _booking_id: &ID) -> anyhow::Result<Option<Booking>> {
        unreachable()
    }

    async fn find_by_status(&self, _status: BookingStatus) -> anyhow::Result<Vec<Booking>> {
        unreachable()
    }

    async fn find_by_provider_and_date(
        &self,
        _provider_id: &ID,
        _date: &str,
    ) -> anyhow::Result<Vec<Booking>> {
        unreachable()
    }

    async fn find_by_provider(
        &self,
        _provider_id: &ID,
        _status: Option<BookingStatus>,
    ) -> anyhow::Result<Vec<Booking>> {
        unreachable()
    }

    async fn find_by_requester(&self, _requester_id: &ID) -> anyhow::Result<Vec<Booking>> {
        unreachable()
    }

    async fn save_response(&self, _booking: &Booking) -> anyhow::Result<bool> {
        unreachable()
    }
}
