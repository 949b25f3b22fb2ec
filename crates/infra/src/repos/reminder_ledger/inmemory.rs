use super::IReminderLedgerRepo;
use crate::repos::shared::inmemory_repo::*;
use slotkeeper_domain::{LedgerCreateResult, ReminderLedgerEntry, ID};

pub struct InMemoryReminderLedgerRepo {
    entries: std::sync::Mutex<Vec<ReminderLedgerEntry>>,
}

impl InMemoryReminderLedgerRepo {
    pub fn new() -> Self {
        Self {
            entries: std::sync::Mutex::new(Vec::new()),
        }
    }
}

#[async_trait::async_trait]
impl IReminderLedgerRepo for InMemoryReminderLedgerRepo {
    async fn exists(&self, booking_id: &ID, window_tag: &str) -> anyhow::Result<bool> {
        Ok(!find_by(&self.entries, |e| e.key() == (booking_id, window_tag)).is_empty())
    }

    async fn create(&self, entry: &ReminderLedgerEntry) -> anyhow::Result<LedgerCreateResult> {
        if insert_if_absent(entry, &self.entries, |e| e.key() == entry.key()) {
            Ok(LedgerCreateResult::Created)
        } else {
            Ok(LedgerCreateResult::Conflict)
        }
    }

    async fn find(
        &self,
        booking_id: &ID,
        window_tag: &str,
    ) -> anyhow::Result<Option<ReminderLedgerEntry>> {
        Ok(find_by(&self.entries, |e| e.key() == (booking_id, window_tag))
            .into_iter()
            .next())
    }

    async fn find_by_booking(&self, booking_id: &ID) -> anyhow::Result<Vec<ReminderLedgerEntry>> {
        Ok(find_by(&self.entries, |e| e.booking_id == *booking_id))
    }
}
