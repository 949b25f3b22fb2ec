use crate::{Booking, ID};
use std::collections::BTreeSet;

/// A point in time of a provider's agenda. Bookings are modeled as
/// slots and two slots only conflict when date and time match exactly.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Slot {
    pub provider_id: ID,
    pub date: String,
    pub time: String,
}

impl Slot {
    pub fn new(provider_id: ID, date: String, time: String) -> Self {
        Self {
            provider_id,
            date,
            time,
        }
    }

    /// Whether the given `Booking` occupies this slot
    pub fn is_held_by(&self, booking: &Booking) -> bool {
        booking.status.holds_slot()
            && booking.provider_id == self.provider_id
            && booking.requested_date == self.date
            && booking.requested_time == self.time
    }

    pub fn is_free(&self, bookings: &[Booking]) -> bool {
        !bookings.iter().any(|b| self.is_held_by(b))
    }
}

/// The times of `date` that are held by some non terminal `Booking`
/// for the given provider
pub fn occupied_times(provider_id: &ID, date: &str, bookings: &[Booking]) -> BTreeSet<String> {
    bookings
        .iter()
        .filter(|b| {
            b.status.holds_slot() && b.provider_id == *provider_id && b.requested_date == date
        })
        .map(|b| b.requested_time.clone())
        .collect()
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::BookingStatus;

    fn booking(provider_id: &ID, date: &str, time: &str, status: BookingStatus) -> Booking {
        let mut b = Booking::new(ID::new(), provider_id.clone(), date.into(), time.into(), 0);
        b.status = status;
        b
    }

    #[test]
    fn exact_match_only() {
        let provider = ID::new();
        let bookings = vec![booking(&provider, "2024-05-10", "10:00", BookingStatus::Approved)];

        let slot = Slot::new(provider.clone(), "2024-05-10".into(), "10:00".into());
        assert!(!slot.is_free(&bookings));

        let slot = Slot::new(provider.clone(), "2024-05-10".into(), "10:30".into());
        assert!(slot.is_free(&bookings));

        let slot = Slot::new(provider, "2024-05-11".into(), "10:00".into());
        assert!(slot.is_free(&bookings));

        let slot = Slot::new(ID::new(), "2024-05-10".into(), "10:00".into());
        assert!(slot.is_free(&bookings));
    }

    #[test]
    fn rejected_bookings_free_the_slot() {
        let provider = ID::new();
        let mut bookings = vec![booking(&provider, "2024-05-10", "10:00", BookingStatus::Pending)];
        let slot = Slot::new(provider, "2024-05-10".into(), "10:00".into());
        assert!(!slot.is_free(&bookings));

        bookings[0].status = BookingStatus::Rejected;
        assert!(slot.is_free(&bookings));
    }

    #[test]
    fn collects_occupied_times() {
        let provider = ID::new();
        let bookings = vec![
            booking(&provider, "2024-05-10", "10:00", BookingStatus::Approved),
            booking(&provider, "2024-05-10", "09:00", BookingStatus::Pending),
            booking(&provider, "2024-05-10", "11:00", BookingStatus::Rejected),
            booking(&provider, "2024-05-11", "12:00", BookingStatus::Approved),
            booking(&ID::new(), "2024-05-10", "13:00", BookingStatus::Approved),
        ];
        let times = occupied_times(&provider, "2024-05-10", &bookings);
        assert_eq!(
            times.into_iter().collect::<Vec<_>>(),
            vec!["09:00".to_string(), "10:00".to_string()]
        );
    }
}
