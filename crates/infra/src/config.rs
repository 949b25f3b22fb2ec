use tracing::{info, warn};

/// Credentials for the phone addressed messaging channel
#[derive(Debug, Clone, PartialEq)]
pub struct WhatsappConfig {
    pub account_sid: String,
    pub auth_token: String,
    /// The sender number registered for WhatsApp messaging
    pub from: String,
}

/// Credentials for the email relay used by the email channel
#[derive(Debug, Clone, PartialEq)]
pub struct EmailConfig {
    pub service_id: String,
    pub template_id: String,
    pub public_key: String,
}

#[derive(Debug, Clone)]
pub struct Config {
    /// Port for the application to run on
    pub port: usize,
    /// Upper bound in millis for every external call made while sending
    /// reminders (store reads, contact lookups, gateway sends, ledger writes).
    /// A call exceeding it counts as a failure of that step.
    pub external_call_timeout_millis: u64,
    /// How long the list of providers is served from memory before it is
    /// read from the contact directory again
    pub providers_cache_ttl_millis: i64,
    /// Whether the periodic reminder job should be started with the server
    pub reminder_job_enabled: bool,
    pub whatsapp: Option<WhatsappConfig>,
    pub email: Option<EmailConfig>,
}

fn env_or_default<T: std::str::FromStr + std::fmt::Display>(name: &str, default: T) -> T {
    match std::env::var(name) {
        Ok(value) => match value.parse::<T>() {
            Ok(value) => value,
            Err(_) => {
                warn!(
                    "The given {}: {} is not valid, falling back to the default value: {}.",
                    name, value, default
                );
                default
            }
        },
        Err(_) => default,
    }
}

fn non_empty_env(name: &str) -> Option<String> {
    std::env::var(name)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

impl Config {
    pub fn new() -> Self {
        let whatsapp = match (
            non_empty_env("TWILIO_ACCOUNT_SID"),
            non_empty_env("TWILIO_AUTH_TOKEN"),
            non_empty_env("TWILIO_WHATSAPP_FROM"),
        ) {
            (Some(account_sid), Some(auth_token), Some(from)) => Some(WhatsappConfig {
                account_sid,
                auth_token,
                from,
            }),
            _ => {
                info!("Did not find TWILIO_ACCOUNT_SID, TWILIO_AUTH_TOKEN and TWILIO_WHATSAPP_FROM environment variables. Reminders can not be sent.");
                None
            }
        };
        let email = match (
            non_empty_env("EMAILJS_SERVICE_ID"),
            non_empty_env("EMAILJS_TEMPLATE_ID"),
            non_empty_env("EMAILJS_PUBLIC_KEY"),
        ) {
            (Some(service_id), Some(template_id), Some(public_key)) => Some(EmailConfig {
                service_id,
                template_id,
                public_key,
            }),
            _ => {
                info!("Did not find EMAILJS_SERVICE_ID, EMAILJS_TEMPLATE_ID and EMAILJS_PUBLIC_KEY environment variables. Emails can not be sent.");
                None
            }
        };

        Self {
            port: env_or_default("PORT", 5000),
            external_call_timeout_millis: env_or_default("EXTERNAL_CALL_TIMEOUT_MILLIS", 10_000),
            providers_cache_ttl_millis: env_or_default::<i64>("PROVIDERS_CACHE_TTL_SECS", 300)
                * 1000,
            reminder_job_enabled: env_or_default("REMINDER_JOB_ENABLED", true),
            whatsapp,
            email,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VARS: [&str; 7] = [
        "PORT",
        "EXTERNAL_CALL_TIMEOUT_MILLIS",
        "TWILIO_ACCOUNT_SID",
        "TWILIO_AUTH_TOKEN",
        "TWILIO_WHATSAPP_FROM",
        "PROVIDERS_CACHE_TTL_SECS",
        "REMINDER_JOB_ENABLED",
    ];

    fn clear_env() {
        for var in VARS.iter() {
            std::env::remove_var(var);
        }
    }

    #[test]
    #[serial_test::serial]
    fn falls_back_to_defaults() {
        clear_env();
        std::env::set_var("PORT", "not-a-port");
        let config = Config::new();
        assert_eq!(config.port, 5000);
        assert_eq!(config.external_call_timeout_millis, 10_000);
        assert_eq!(config.providers_cache_ttl_millis, 300_000);
        assert!(config.reminder_job_enabled);
        assert!(config.whatsapp.is_none());
        clear_env();
    }

    #[test]
    #[serial_test::serial]
    fn reads_whatsapp_credentials_only_when_complete() {
        clear_env();
        std::env::set_var("TWILIO_ACCOUNT_SID", "AC123");
        std::env::set_var("TWILIO_AUTH_TOKEN", "secret");
        assert!(Config::new().whatsapp.is_none());

        std::env::set_var("TWILIO_WHATSAPP_FROM", "whatsapp:+14155238886");
        std::env::set_var("PORT", "8080");
        std::env::set_var("REMINDER_JOB_ENABLED", "false");
        let config = Config::new();
        assert_eq!(
            config.whatsapp,
            Some(WhatsappConfig {
                account_sid: "AC123".into(),
                auth_token: "secret".into(),
                from: "whatsapp:+14155238886".into(),
            })
        );
        assert_eq!(config.port, 8080);
        assert!(!config.reminder_job_enabled);
        clear_env();
    }
}
