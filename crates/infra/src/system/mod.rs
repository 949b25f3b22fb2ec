use chrono::{Local, NaiveDateTime, Utc};

// Mocking out time so that it is possible to run tests that depend on time.
pub trait ISys: Send + Sync {
    /// The current timestamp in millis
    fn get_timestamp_millis(&self) -> i64;
    /// The current wall clock time of the server. Bookings are stored in
    /// the same local frame, so no timezone conversion happens.
    fn get_local_datetime(&self) -> NaiveDateTime;
}

/// System that gets the real time and is used when not testing
pub struct RealSys {}
impl ISys for RealSys {
    fn get_timestamp_millis(&self) -> i64 {
        Utc::now().timestamp_millis()
    }

    fn get_local_datetime(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// Clock frozen at a given local datetime
pub struct StaticTimeSys {
    pub now: NaiveDateTime,
}

impl ISys for StaticTimeSys {
    fn get_timestamp_millis(&self) -> i64 {
        self.now.timestamp_millis()
    }

    fn get_local_datetime(&self) -> NaiveDateTime {
        self.now
    }
}
