mod http;
mod inmemory;

pub use http::HttpNotificationGateway;
pub use inmemory::{InMemoryNotificationGateway, SentNotification};
use slotkeeper_domain::Channel;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum GatewayConfigError {
    #[error("Missing credentials for the {0} channel")]
    MissingCredentials(Channel),
}

#[derive(Error, Debug)]
pub enum SendError {
    #[error(transparent)]
    NotConfigured(#[from] GatewayConfigError),
    #[error("Invalid {channel} address: `{address}`")]
    InvalidAddress { channel: Channel, address: String },
    #[error("Unable to deliver message: {0}")]
    Transport(String),
}

/// Delivers a message to a single recipient over a `Channel`
#[async_trait::async_trait]
pub trait INotificationGateway: Send + Sync {
    /// Fails when the credentials needed by `channel` are missing.
    /// Callers are expected to check this before doing any work.
    fn ensure_configured(&self, channel: Channel) -> Result<(), GatewayConfigError>;

    async fn send(&self, channel: Channel, address: &str, body: &str) -> Result<(), SendError>;
}
