mod inmemory;
mod postgres;

pub use inmemory::InMemoryBookingRepo;
pub use postgres::PostgresBookingRepo;
use slotkeeper_domain::{Booking, BookingStatus, ID};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookingInsertResult {
    Inserted,
    /// Some pending or approved `Booking` already holds the slot
    SlotTaken,
}

#[async_trait::async_trait]
pub trait IBookingRepo: Send + Sync {
    /// Inserts the `Booking` unless its slot is already held
    async fn insert(&self, booking: &Booking) -> anyhow::Result<BookingInsertResult>;
    async fn find(&self, booking_id: &ID) -> anyhow::Result<Option<Booking>>;
    async fn find_by_status(&self, status: BookingStatus) -> anyhow::Result<Vec<Booking>>;
    /// All `Booking`s of a provider on a given date, in any status
    async fn find_by_provider_and_date(
        &self,
        provider_id: &ID,
        date: &str,
    ) -> anyhow::Result<Vec<Booking>>;
    async fn find_by_provider(
        &self,
        provider_id: &ID,
        status: Option<BookingStatus>,
    ) -> anyhow::Result<Vec<Booking>>;
    async fn find_by_requester(&self, requester_id: &ID) -> anyhow::Result<Vec<Booking>>;
    /// Stores `status`, `response` and `response_timestamp` of the given
    /// `Booking` if the stored one is still pending. Returns whether it was
    /// updated.
    async fn save_response(&self, booking: &Booking) -> anyhow::Result<bool>;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn booking(provider_id: &ID, date: &str, time: &str) -> Booking {
        Booking::new(ID::new(), provider_id.clone(), date.into(), time.into(), 0)
    }

    #[tokio::test]
    async fn test_inmemory_booking_queries() {
        let repo = InMemoryBookingRepo::new();
        let provider = ID::new();

        let mut b1 = booking(&provider, "2024-05-10", "10:00");
        assert_eq!(repo.insert(&b1).await.unwrap(), BookingInsertResult::Inserted);
        let b2 = booking(&provider, "2024-05-10", "10:00");
        assert_eq!(repo.insert(&b2).await.unwrap(), BookingInsertResult::SlotTaken);
        let b3 = booking(&provider, "2024-05-11", "10:00");
        assert_eq!(repo.insert(&b3).await.unwrap(), BookingInsertResult::Inserted);

        assert_eq!(repo.find(&b1.id).await.unwrap(), Some(b1.clone()));
        assert_eq!(repo.find(&b2.id).await.unwrap(), None);

        let on_date = repo
            .find_by_provider_and_date(&provider, "2024-05-10")
            .await
            .unwrap();
        assert_eq!(on_date, vec![b1.clone()]);
        assert_eq!(
            repo.find_by_requester(&b3.requester_id).await.unwrap(),
            vec![b3.clone()]
        );

        b1.respond(BookingStatus::Approved, "Ok".into(), 5).unwrap();
        assert!(repo.save_response(&b1).await.unwrap());
        // Only a pending booking can be responded to
        assert!(!repo.save_response(&b1).await.unwrap());

        let approved = repo.find_by_status(BookingStatus::Approved).await.unwrap();
        assert_eq!(approved, vec![b1.clone()]);
        assert_eq!(
            repo.find_by_provider(&provider, Some(BookingStatus::Pending))
                .await
                .unwrap(),
            vec![b3.clone()]
        );
        assert_eq!(repo.find_by_provider(&provider, None).await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn rejected_booking_frees_slot_for_new_inserts() {
        let repo = InMemoryBookingRepo::new();
        let provider = ID::new();

        let mut b1 = booking(&provider, "2024-05-10", "10:00");
        repo.insert(&b1).await.unwrap();
        b1.respond(BookingStatus::Rejected, "Busy".into(), 5).unwrap();
        assert!(repo.save_response(&b1).await.unwrap());

        let b2 = booking(&provider, "2024-05-10", "10:00");
        assert_eq!(repo.insert(&b2).await.unwrap(), BookingInsertResult::Inserted);
    }
}
