mod inmemory;
mod postgres;

pub use inmemory::InMemoryReminderLedgerRepo;
pub use postgres::PostgresReminderLedgerRepo;
use slotkeeper_domain::{LedgerCreateResult, ReminderLedgerEntry, ID};

/// Idempotency records of sent reminders, keyed by (booking id, window tag)
#[async_trait::async_trait]
pub trait IReminderLedgerRepo: Send + Sync {
    async fn exists(&self, booking_id: &ID, window_tag: &str) -> anyhow::Result<bool>;
    /// Atomic insert if absent. When several callers race on the same key
    /// exactly one of them observes `LedgerCreateResult::Created`.
    async fn create(&self, entry: &ReminderLedgerEntry) -> anyhow::Result<LedgerCreateResult>;
    async fn find(
        &self,
        booking_id: &ID,
        window_tag: &str,
    ) -> anyhow::Result<Option<ReminderLedgerEntry>>;
    async fn find_by_booking(&self, booking_id: &ID) -> anyhow::Result<Vec<ReminderLedgerEntry>>;
}
