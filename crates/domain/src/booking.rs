use crate::{
    date::{parse_date, parse_time},
    shared::entity::{Entity, ID},
};
use chrono::{Duration, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::{fmt::Display, str::FromStr};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum BookingStatus {
    Pending,
    Approved,
    Rejected,
}

impl BookingStatus {
    /// Pending and approved `Booking`s both hold their slot, only a
    /// rejection frees it.
    pub fn holds_slot(&self) -> bool {
        matches!(self, Self::Pending | Self::Approved)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Approved => "approved",
            Self::Rejected => "rejected",
        }
    }
}

impl Display for BookingStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Error, Debug, PartialEq)]
#[error("Invalid booking status: {0}")]
pub struct InvalidBookingStatusError(String);

impl FromStr for BookingStatus {
    type Err = InvalidBookingStatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(Self::Pending),
            "approved" => Ok(Self::Approved),
            "rejected" => Ok(Self::Rejected),
            _ => Err(InvalidBookingStatusError(s.to_string())),
        }
    }
}

/// A requested session between a requester and a provider at a
/// given local date and time.
#[derive(Debug, Clone, PartialEq)]
pub struct Booking {
    pub id: ID,
    pub requester_id: ID,
    pub provider_id: ID,
    /// `YYYY-MM-DD`, stored as given by the requester
    pub requested_date: String,
    /// `HH:MM`, stored as given by the requester
    pub requested_time: String,
    pub status: BookingStatus,
    pub topic: String,
    pub description: String,
    pub comment: Option<String>,
    pub response: Option<String>,
    pub response_timestamp: Option<i64>,
    pub created: i64,
}

#[derive(Error, Debug, PartialEq)]
pub enum BookingTransitionError {
    #[error("Booking has already been responded to with status: {0}")]
    AlreadyResponded(BookingStatus),
    #[error("A booking can only be responded to with approved or rejected")]
    InvalidTarget,
}

impl Booking {
    pub fn new(
        requester_id: ID,
        provider_id: ID,
        requested_date: String,
        requested_time: String,
        created: i64,
    ) -> Self {
        Self {
            id: Default::default(),
            requester_id,
            provider_id,
            requested_date,
            requested_time,
            status: BookingStatus::Pending,
            topic: String::new(),
            description: String::new(),
            comment: None,
            response: None,
            response_timestamp: None,
            created,
        }
    }

    /// Applies the one provider action a `Booking` can receive
    pub fn respond(
        &mut self,
        status: BookingStatus,
        response: String,
        timestamp: i64,
    ) -> Result<(), BookingTransitionError> {
        if status == BookingStatus::Pending {
            return Err(BookingTransitionError::InvalidTarget);
        }
        if self.status != BookingStatus::Pending {
            return Err(BookingTransitionError::AlreadyResponded(self.status));
        }
        self.status = status;
        self.response = Some(response);
        self.response_timestamp = Some(timestamp);
        Ok(())
    }

    /// The local start of this `Booking`, or `None` when either the stored
    /// date or time cannot be parsed.
    pub fn starts_at(&self) -> Option<NaiveDateTime> {
        let date = parse_date(&self.requested_date).ok()?;
        let time = parse_time(&self.requested_time).ok()?;
        Some(date.and_time(time))
    }

    /// Time from `now` until the start of this `Booking`.
    /// Negative when the start lies in the past.
    pub fn time_until_start(&self, now: &NaiveDateTime) -> Option<Duration> {
        self.starts_at()
            .map(|start| start.signed_duration_since(*now))
    }
}

impl Entity for Booking {
    fn id(&self) -> &ID {
        &self.id
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use chrono::NaiveDate;

    fn booking(date: &str, time: &str) -> Booking {
        Booking::new(ID::new(), ID::new(), date.into(), time.into(), 0)
    }

    #[test]
    fn it_parses_start() {
        let b = booking("2024-05-10", "14:30");
        assert_eq!(
            b.starts_at(),
            Some(NaiveDate::from_ymd_opt(2024, 5, 10).unwrap().and_hms_opt(14, 30, 0).unwrap())
        );
        assert_eq!(booking("", "14:30").starts_at(), None);
        assert_eq!(booking("2024-05-10", "").starts_at(), None);
        assert_eq!(booking("2024-05-10", "half past two").starts_at(), None);
    }

    #[test]
    fn it_computes_time_until_start() {
        let b = booking("2024-05-10", "14:30");
        let now = NaiveDate::from_ymd_opt(2024, 5, 10).unwrap().and_hms_opt(13, 30, 0).unwrap();
        assert_eq!(b.time_until_start(&now), Some(Duration::minutes(60)));

        let now = NaiveDate::from_ymd_opt(2024, 5, 10).unwrap().and_hms_opt(15, 0, 0).unwrap();
        assert_eq!(b.time_until_start(&now), Some(Duration::minutes(-30)));

        // Seconds are kept
        let now = NaiveDate::from_ymd_opt(2024, 5, 10).unwrap().and_hms_opt(13, 28, 30).unwrap();
        assert_eq!(
            b.time_until_start(&now),
            Some(Duration::minutes(61) + Duration::seconds(30))
        );

        let b = booking("2024-05-10", "14:30:00");
        let now = NaiveDate::from_ymd_opt(2024, 5, 9).unwrap().and_hms_opt(14, 30, 0).unwrap();
        assert_eq!(b.time_until_start(&now), Some(Duration::days(1)));
    }

    #[test]
    fn pending_and_approved_hold_slot() {
        assert!(BookingStatus::Pending.holds_slot());
        assert!(BookingStatus::Approved.holds_slot());
        assert!(!BookingStatus::Rejected.holds_slot());
    }

    #[test]
    fn it_responds_exactly_once() {
        let mut b = booking("2024-05-10", "14:30");
        assert_eq!(
            b.respond(BookingStatus::Pending, "".into(), 1),
            Err(BookingTransitionError::InvalidTarget)
        );
        assert!(b.respond(BookingStatus::Approved, "See you".into(), 10).is_ok());
        assert_eq!(b.status, BookingStatus::Approved);
        assert_eq!(b.response.as_deref(), Some("See you"));
        assert_eq!(b.response_timestamp, Some(10));

        assert_eq!(
            b.respond(BookingStatus::Rejected, "Changed my mind".into(), 20),
            Err(BookingTransitionError::AlreadyResponded(BookingStatus::Approved))
        );
        assert_eq!(b.status, BookingStatus::Approved);
    }

    #[test]
    fn status_round_trips_through_str() {
        for status in [
            BookingStatus::Pending,
            BookingStatus::Approved,
            BookingStatus::Rejected,
        ]
        .iter()
        {
            assert_eq!(status.as_str().parse::<BookingStatus>(), Ok(*status));
        }
        assert!("aprobada".parse::<BookingStatus>().is_err());
    }
}
