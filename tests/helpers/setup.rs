use chrono::{NaiveDate, NaiveDateTime};
use slotkeeper_api::Application;
use slotkeeper_infra::{InMemoryNotificationGateway, SlotkeeperContext, StaticTimeSys};
use std::sync::Arc;

pub struct TestApp {
    pub address: String,
    pub now: NaiveDateTime,
    pub gateway: Arc<InMemoryNotificationGateway>,
    pub client: reqwest::Client,
}

impl TestApp {
    pub fn url(&self, path: &str) -> String {
        format!("{}/api/v1{}", self.address, path)
    }
}

pub fn now() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 5, 10)
        .unwrap()
        .and_hms_opt(13, 30, 0)
        .unwrap()
}

pub async fn spawn_app() -> TestApp {
    spawn_app_with_gateway(InMemoryNotificationGateway::new()).await
}

// Launch the application as a background task
pub async fn spawn_app_with_gateway(gateway: InMemoryNotificationGateway) -> TestApp {
    let now = now();
    let gateway = Arc::new(gateway);
    let mut ctx = SlotkeeperContext::create_inmemory()
        .with_sys(Arc::new(StaticTimeSys { now }))
        .with_notifications(gateway.clone());
    ctx.config.port = 0; // Random port
    ctx.config.reminder_job_enabled = false;

    let application = Application::new(ctx)
        .await
        .expect("Failed to build application.");

    let address = format!("http://localhost:{}", application.port());
    let _ = actix_web::rt::spawn(async move {
        application
            .start()
            .await
            .expect("Expected application to start");
    });

    TestApp {
        address,
        now,
        gateway,
        client: reqwest::Client::new(),
    }
}
