use crate::{shared::entity::ID, Booking, Person};
use chrono::Duration;
use serde::{Deserialize, Serialize};

/// A reminder policy. A `Booking` whose start lies between
/// `window_start_minutes` and `window_end_minutes` (both inclusive)
/// from now is eligible for a reminder under `tag`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduleWindow {
    pub tag: String,
    pub window_start_minutes: i64,
    pub window_end_minutes: i64,
}

impl ScheduleWindow {
    pub const ONE_HOUR_AHEAD_TAG: &'static str = "one-hour-ahead";
    pub const TEST_TAG: &'static str = "test";

    pub fn new(tag: &str, window_start_minutes: i64, window_end_minutes: i64) -> Self {
        Self {
            tag: tag.to_string(),
            window_start_minutes,
            window_end_minutes,
        }
    }

    /// Used by the periodic trigger
    pub fn one_hour_ahead() -> Self {
        Self::new(Self::ONE_HOUR_AHEAD_TAG, 59, 61)
    }

    /// Short window used by the on-demand trigger to validate the pipeline
    pub fn test() -> Self {
        Self::new(Self::TEST_TAG, 2, 3)
    }

    /// Compares the exact lead time, it is never rounded to whole minutes
    pub fn contains(&self, time_until_start: Duration) -> bool {
        time_until_start >= Duration::minutes(self.window_start_minutes)
            && time_until_start <= Duration::minutes(self.window_end_minutes)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ParticipantRole {
    Requester,
    Provider,
}

/// Which participants of a `Booking` actually received the reminder
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SentTo {
    pub requester: bool,
    pub provider: bool,
}

impl SentTo {
    pub fn mark(&mut self, role: ParticipantRole) {
        match role {
            ParticipantRole::Requester => self.requester = true,
            ParticipantRole::Provider => self.provider = true,
        }
    }

    pub fn get(&self, role: ParticipantRole) -> bool {
        match role {
            ParticipantRole::Requester => self.requester,
            ParticipantRole::Provider => self.provider,
        }
    }
}

/// Proof that a (`Booking`, window tag) pair has been handled. At most one
/// entry exists per pair and it is never rewritten once created.
#[derive(Debug, Clone, PartialEq)]
pub struct ReminderLedgerEntry {
    pub booking_id: ID,
    pub window_tag: String,
    pub sent_to: SentTo,
    pub created_at: i64,
}

impl ReminderLedgerEntry {
    pub fn new(booking_id: ID, window_tag: String, sent_to: SentTo, created_at: i64) -> Self {
        Self {
            booking_id,
            window_tag,
            sent_to,
            created_at,
        }
    }

    pub fn key(&self) -> (&ID, &str) {
        (&self.booking_id, &self.window_tag)
    }
}

/// Outcome of the atomic "create if absent" on the reminder ledger
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LedgerCreateResult {
    Created,
    /// Another tick already created the entry for this key
    Conflict,
}

/// Body of the reminder sent to one participant of a `Booking`
pub fn format_reminder_message(
    booking: &Booking,
    role: ParticipantRole,
    counterpart: Option<&Person>,
) -> String {
    let counterpart_name = counterpart
        .map(|p| p.display_name.as_str())
        .unwrap_or(match role {
            ParticipantRole::Requester => "your provider",
            ParticipantRole::Provider => "your requester",
        });
    let topic = if booking.topic.trim().is_empty() {
        "your session".to_string()
    } else {
        format!("\"{}\"", booking.topic.trim())
    };
    format!(
        "Reminder: {} with {} starts at {} on {}.",
        topic, counterpart_name, booking.requested_time, booking.requested_date
    )
}
