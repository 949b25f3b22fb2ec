use super::{GatewayConfigError, INotificationGateway, SendError};
use slotkeeper_domain::Channel;
use std::collections::HashSet;
use std::sync::Mutex;

#[derive(Debug, Clone, PartialEq)]
pub struct SentNotification {
    pub channel: Channel,
    pub address: String,
    pub body: String,
}

/// Gateway that records every delivered message instead of sending it.
/// Used when running the server without external services and in tests.
pub struct InMemoryNotificationGateway {
    configured: HashSet<Channel>,
    failing_addresses: Mutex<HashSet<String>>,
    sent: Mutex<Vec<SentNotification>>,
}

impl InMemoryNotificationGateway {
    pub fn new() -> Self {
        Self::with_channels(&[Channel::WhatsApp, Channel::Email])
    }

    pub fn with_channels(channels: &[Channel]) -> Self {
        Self {
            configured: channels.iter().copied().collect(),
            failing_addresses: Mutex::new(HashSet::new()),
            sent: Mutex::new(Vec::new()),
        }
    }

    /// Makes every later send to the normalized `address` fail with a transport error
    pub fn fail_for(&self, address: &str) {
        self.failing_addresses
            .lock()
            .unwrap()
            .insert(address.to_string());
    }

    pub fn sent(&self) -> Vec<SentNotification> {
        self.sent.lock().unwrap().clone()
    }
}

impl Default for InMemoryNotificationGateway {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl INotificationGateway for InMemoryNotificationGateway {
    fn ensure_configured(&self, channel: Channel) -> Result<(), GatewayConfigError> {
        if self.configured.contains(&channel) {
            Ok(())
        } else {
            Err(GatewayConfigError::MissingCredentials(channel))
        }
    }

    async fn send(&self, channel: Channel, address: &str, body: &str) -> Result<(), SendError> {
        self.ensure_configured(channel)?;
        let address = channel
            .normalize_address(address)
            .ok_or_else(|| SendError::InvalidAddress {
                channel,
                address: address.to_string(),
            })?;
        // Behave like a remote call and give other tasks a chance to run
        tokio::task::yield_now().await;

        if self.failing_addresses.lock().unwrap().contains(&address) {
            return Err(SendError::Transport(format!("{} is unreachable", address)));
        }
        self.sent.lock().unwrap().push(SentNotification {
            channel,
            address,
            body: body.to_string(),
        });
        Ok(())
    }
}
