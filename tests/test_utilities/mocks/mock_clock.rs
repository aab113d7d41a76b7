use chrono::{DateTime, TimeZone, Utc};
use openssl_buildmeta::prelude::*;

/// Mock BuildClock for testing that always returns a fixed moment
#[derive(Debug, Clone, Copy)]
pub struct FixedClock {
    moment: DateTime<Utc>,
}

impl FixedClock {
    pub fn new(moment: DateTime<Utc>) -> Self {
        Self { moment }
    }

    /// Pins the clock to the given UTC wall-clock time.
    pub fn at(year: i32, month: u32, day: u32, hour: u32, minute: u32, second: u32) -> Self {
        Self::new(
            Utc.with_ymd_and_hms(year, month, day, hour, minute, second)
                .unwrap(),
        )
    }
}

impl BuildClock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.moment
    }
}
