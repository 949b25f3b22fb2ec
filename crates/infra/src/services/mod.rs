mod notifications;
mod providers_cache;

pub use notifications::{
    GatewayConfigError, HttpNotificationGateway, INotificationGateway,
    InMemoryNotificationGateway, SendError, SentNotification,
};
pub use providers_cache::ProvidersCache;
