use crate::dtos::SentReminderDTO;
use serde::{Deserialize, Serialize};

pub mod send_test_reminders {
    use super::*;

    #[derive(Debug, Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct APIResponse {
        pub success: bool,
        pub reminders_sent: Vec<SentReminderDTO>,
    }

    impl APIResponse {
        pub fn new(reminders_sent: Vec<SentReminderDTO>) -> Self {
            Self {
                success: true,
                reminders_sent,
            }
        }
    }
}
