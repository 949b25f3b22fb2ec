use super::IReminderLedgerRepo;
use slotkeeper_domain::{LedgerCreateResult, ReminderLedgerEntry, SentTo, ID};
use sqlx::{types::Uuid, FromRow, PgPool};

pub struct PostgresReminderLedgerRepo {
    pool: PgPool,
}

impl PostgresReminderLedgerRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct LedgerEntryRaw {
    booking_uid: Uuid,
    window_tag: String,
    sent_to_requester: bool,
    sent_to_provider: bool,
    created_at: i64,
}

impl Into<ReminderLedgerEntry> for LedgerEntryRaw {
    fn into(self) -> ReminderLedgerEntry {
        ReminderLedgerEntry {
            booking_id: self.booking_uid.into(),
            window_tag: self.window_tag,
            sent_to: SentTo {
                requester: self.sent_to_requester,
                provider: self.sent_to_provider,
            },
            created_at: self.created_at,
        }
    }
}

#[async_trait::async_trait]
impl IReminderLedgerRepo for PostgresReminderLedgerRepo {
    async fn exists(&self, booking_id: &ID, window_tag: &str) -> anyhow::Result<bool> {
        Ok(self.find(booking_id, window_tag).await?.is_some())
    }

    async fn create(&self, entry: &ReminderLedgerEntry) -> anyhow::Result<LedgerCreateResult> {
        let res = sqlx::query(
            r#"
            INSERT INTO reminder_ledger
            (booking_uid, window_tag, sent_to_requester, sent_to_provider, created_at)
            VALUES($1, $2, $3, $4, $5)
            ON CONFLICT DO NOTHING
            "#,
        )
        .bind(entry.booking_id.inner_ref())
        .bind(&entry.window_tag)
        .bind(entry.sent_to.requester)
        .bind(entry.sent_to.provider)
        .bind(entry.created_at)
        .execute(&self.pool)
        .await?;

        if res.rows_affected() == 1 {
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
        let raw = sqlx::query_as::<_, LedgerEntryRaw>(
            r#"
            SELECT * FROM reminder_ledger AS r
            WHERE r.booking_uid = $1 AND r.window_tag = $2
            "#,
        )
        .bind(booking_id.inner_ref())
        .bind(window_tag)
        .fetch_optional(&self.pool)
        .await?;
        Ok(raw.map(|e| e.into()))
    }

    async fn find_by_booking(&self, booking_id: &ID) -> anyhow::Result<Vec<ReminderLedgerEntry>> {
        let rows = sqlx::query_as::<_, LedgerEntryRaw>(
            r#"
            SELECT * FROM reminder_ledger AS r
            WHERE r.booking_uid = $1
            ORDER BY r.created_at
            "#,
        )
        .bind(booking_id.inner_ref())
        .fetch_all(&self.pool)
        .await?;
        Ok(rows.into_iter().map(|e| e.into()).collect())
    }
}
