mod config;
mod repos;
mod services;
mod system;

pub use config::{Config, EmailConfig, WhatsappConfig};
pub use repos::{
    BookingInsertResult, IBookingRepo, IPersonRepo, IReminderLedgerRepo, InMemoryBookingRepo,
    InMemoryPersonRepo, InMemoryReminderLedgerRepo, Repos,
};
pub use services::*;
use sqlx::migrate::MigrateError;
use sqlx::postgres::PgPoolOptions;
use std::sync::Arc;
pub use system::{ISys, StaticTimeSys};
use system::RealSys;
use tracing::warn;

#[derive(Clone)]
pub struct SlotkeeperContext {
    pub repos: Repos,
    pub config: Config,
    pub sys: Arc<dyn ISys>,
    pub notifications: Arc<dyn INotificationGateway>,
    pub providers_cache: Arc<ProvidersCache>,
}

impl SlotkeeperContext {
    fn create(
        repos: Repos,
        config: Config,
        sys: Arc<dyn ISys>,
        notifications: Arc<dyn INotificationGateway>,
    ) -> Self {
        let providers_cache = Arc::new(ProvidersCache::new(
            repos.persons.clone(),
            sys.clone(),
            config.providers_cache_ttl_millis,
        ));
        Self {
            repos,
            config,
            sys,
            notifications,
            providers_cache,
        }
    }

    /// Context with in memory repositories and a recording notification gateway
    pub fn create_inmemory() -> Self {
        Self::create(
            Repos::create_inmemory(),
            Config::new(),
            Arc::new(RealSys {}),
            Arc::new(InMemoryNotificationGateway::new()),
        )
    }

    /// Replaces the clock, also for the collaborators depending on it
    pub fn with_sys(self, sys: Arc<dyn ISys>) -> Self {
        Self::create(self.repos, self.config, sys, self.notifications)
    }

    /// Replaces the notification gateway
    pub fn with_notifications(mut self, notifications: Arc<dyn INotificationGateway>) -> Self {
        self.notifications = notifications;
        self
    }
}

/// Will setup the infrastructure context given the environment
pub async fn setup_context() -> anyhow::Result<SlotkeeperContext> {
    let config = Config::new();
    let notifications = Arc::new(HttpNotificationGateway::new(
        config.whatsapp.clone(),
        config.email.clone(),
    ));
    let repos = match get_psql_connection_string() {
        Some(connection_string) => Repos::create_postgres(&connection_string).await?,
        None => {
            warn!("DATABASE_URL env var is not set, falling back to in memory repositories. Nothing will be persisted.");
            Repos::create_inmemory()
        }
    };

    Ok(SlotkeeperContext::create(
        repos,
        config,
        Arc::new(RealSys {}),
        notifications,
    ))
}

fn get_psql_connection_string() -> Option<String> {
    const PSQL_CONNECTION_STRING: &str = "DATABASE_URL";

    std::env::var(PSQL_CONNECTION_STRING).ok()
}

/// Runs the database migrations when `DATABASE_URL` is set
pub async fn run_migration() -> Result<(), MigrateError> {
    let connection_string = match get_psql_connection_string() {
        Some(connection_string) => connection_string,
        None => return Ok(()),
    };
    let pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(&connection_string)
        .await
        .map_err(MigrateError::from)?;

    sqlx::migrate!().run(&pool).await
}
