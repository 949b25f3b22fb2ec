mod booking;
mod person;
mod reminder_ledger;
mod shared;

pub use booking::{
    BookingInsertResult, IBookingRepo, InMemoryBookingRepo, PostgresBookingRepo,
};
pub use person::{IPersonRepo, InMemoryPersonRepo, PostgresPersonRepo};
pub use reminder_ledger::{
    IReminderLedgerRepo, InMemoryReminderLedgerRepo, PostgresReminderLedgerRepo,
};
use sqlx::postgres::PgPoolOptions;
use std::sync::Arc;
use tracing::info;

#[derive(Clone)]
pub struct Repos {
    pub bookings: Arc<dyn IBookingRepo>,
    pub persons: Arc<dyn IPersonRepo>,
    pub reminder_ledger: Arc<dyn IReminderLedgerRepo>,
}

impl Repos {
    pub async fn create_postgres(connection_string: &str) -> anyhow::Result<Self> {
        info!("DB CHECKING CONNECTION ...");
        let pool = PgPoolOptions::new()
            .max_connections(5)
            .connect(connection_string)
            .await?;
        info!("DB CHECKING CONNECTION ... [done]");

        Ok(Self {
            bookings: Arc::new(PostgresBookingRepo::new(pool.clone())),
            persons: Arc::new(PostgresPersonRepo::new(pool.clone())),
            reminder_ledger: Arc::new(PostgresReminderLedgerRepo::new(pool)),
        })
    }

    pub fn create_inmemory() -> Self {
        Self {
            bookings: Arc::new(InMemoryBookingRepo::new()),
            persons: Arc::new(InMemoryPersonRepo::new()),
            reminder_ledger: Arc::new(InMemoryReminderLedgerRepo::new()),
        }
    }
}
