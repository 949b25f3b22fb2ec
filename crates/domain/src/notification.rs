use serde::{Deserialize, Serialize};
use std::fmt::Display;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Channel {
    /// Phone addressed messaging
    WhatsApp,
    Email,
}

impl Channel {
    /// Normalizes a raw address for this `Channel`. Returns `None` when
    /// nothing usable remains.
    ///
    /// Phone numbers get a leading `+` and are prefixed with `whatsapp:`.
    pub fn normalize_address(&self, address: &str) -> Option<String> {
        let address = address.trim();
        if address.is_empty() {
            return None;
        }
        match self {
            Self::WhatsApp => {
                let number = address.strip_prefix("whatsapp:").unwrap_or(address);
                let digits: String = number
                    .chars()
                    .filter(|c| !c.is_whitespace() && *c != '-')
                    .collect();
                let digits = digits.trim_start_matches('+');
                if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_digit()) {
                    return None;
                }
                Some(format!("whatsapp:+{}", digits))
            }
            Self::Email => {
                if !address.contains('@') {
                    return None;
                }
                Some(address.to_lowercase())
            }
        }
    }
}

impl Display for Channel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::WhatsApp => write!(f, "whatsapp"),
            Self::Email => write!(f, "email"),
        }
    }
}
