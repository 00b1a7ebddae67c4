//! Deterministic clock.

use chrono::{DateTime, TimeZone, Utc};

use crate::port::Clock;

/// A clock frozen at one instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(DateTime<Utc>);

impl FixedClock {
    pub const fn new(now: DateTime<Utc>) -> Self {
        Self(now)
    }

    /// Clock frozen at the given UTC wall time.
    ///
    /// # Panics
    ///
    /// Panics if the components do not form a valid timestamp.
    pub fn at_utc(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> Self {
        Self(
            Utc.with_ymd_and_hms(year, month, day, hour, minute, 0)
                .single()
                .expect("valid test timestamp"),
        )
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}
