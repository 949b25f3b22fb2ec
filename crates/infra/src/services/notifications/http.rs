use super::{GatewayConfigError, INotificationGateway, SendError};
use crate::config::{EmailConfig, WhatsappConfig};
use reqwest::Client;
use serde::Serialize;
use slotkeeper_domain::Channel;
use tracing::info;

const TWILIO_API_URL: &str = "https://api.twilio.com/2010-04-01";
const EMAILJS_API_URL: &str = "https://api.emailjs.com/api/v1.0/email/send";

#[derive(Debug, Serialize)]
struct EmailTemplateParams<'a> {
    to_email: &'a str,
    message: &'a str,
}

#[derive(Debug, Serialize)]
struct EmailRequest<'a> {
    service_id: &'a str,
    template_id: &'a str,
    user_id: &'a str,
    template_params: EmailTemplateParams<'a>,
}

/// Sends WhatsApp messages through the Twilio messages API and emails
/// through the EmailJS REST API
pub struct HttpNotificationGateway {
    client: Client,
    whatsapp: Option<WhatsappConfig>,
    email: Option<EmailConfig>,
}

impl HttpNotificationGateway {
    pub fn new(whatsapp: Option<WhatsappConfig>, email: Option<EmailConfig>) -> Self {
        Self {
            client: Client::new(),
            whatsapp,
            email,
        }
    }

    async fn send_whatsapp(
        &self,
        config: &WhatsappConfig,
        to: &str,
        body: &str,
    ) -> Result<(), SendError> {
        let from = Channel::WhatsApp
            .normalize_address(&config.from)
            .ok_or_else(|| SendError::InvalidAddress {
                channel: Channel::WhatsApp,
                address: config.from.clone(),
            })?;
        let url = format!(
            "{}/Accounts/{}/Messages.json",
            TWILIO_API_URL, config.account_sid
        );
        let params = [("From", from.as_str()), ("To", to), ("Body", body)];

        self.client
            .post(&url)
            .basic_auth(&config.account_sid, Some(&config.auth_token))
            .form(&params)
            .send()
            .await
            .and_then(|res| res.error_for_status())
            .map_err(|e| SendError::Transport(e.to_string()))?;
        Ok(())
    }

    async fn send_email(&self, config: &EmailConfig, to: &str, body: &str) -> Result<(), SendError> {
        let request = EmailRequest {
            service_id: &config.service_id,
            template_id: &config.template_id,
            user_id: &config.public_key,
            template_params: EmailTemplateParams {
                to_email: to,
                message: body,
            },
        };

        self.client
            .post(EMAILJS_API_URL)
            .json(&request)
            .send()
            .await
            .and_then(|res| res.error_for_status())
            .map_err(|e| SendError::Transport(e.to_string()))?;
        Ok(())
    }
}

#[async_trait::async_trait]
impl INotificationGateway for HttpNotificationGateway {
    fn ensure_configured(&self, channel: Channel) -> Result<(), GatewayConfigError> {
        let configured = match channel {
            Channel::WhatsApp => self.whatsapp.is_some(),
            Channel::Email => self.email.is_some(),
        };
        if configured {
            Ok(())
        } else {
            Err(GatewayConfigError::MissingCredentials(channel))
        }
    }

    async fn send(&self, channel: Channel, address: &str, body: &str) -> Result<(), SendError> {
        self.ensure_configured(channel)?;
        let to = channel
            .normalize_address(address)
            .ok_or_else(|| SendError::InvalidAddress {
                channel,
                address: address.to_string(),
            })?;

        match (channel, &self.whatsapp, &self.email) {
            (Channel::WhatsApp, Some(config), _) => self.send_whatsapp(config, &to, body).await?,
            (Channel::Email, _, Some(config)) => self.send_email(config, &to, body).await?,
            _ => return Err(GatewayConfigError::MissingCredentials(channel).into()),
        }
        info!("Sent {} message to {}", channel, to);
        Ok(())
    }
}
