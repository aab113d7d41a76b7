use chrono::{DateTime, Utc};

use crate::ports::outbound::BuildClock;

/// SystemClock adapter reading the ambient UTC clock
///
/// This is the production implementation of the BuildClock port; tests
/// substitute a fixed clock to keep encoding deterministic.
pub struct SystemClock;

impl SystemClock {
    pub fn new() -> Self {
        Self
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl BuildClock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::version_encoding::domain::BuildTimestamp;

    #[test]
    fn test_now_is_monotonic_enough() {
        let clock = SystemClock::new();
        let first = clock.now();
        let second = clock.now();
        assert!(second >= first);
    }

    #[test]
    fn test_now_renders_as_compact_timestamp() {
        let clock = SystemClock::new();
        let timestamp = BuildTimestamp::from_datetime(clock.now());
        assert_eq!(timestamp.as_str().len(), 14);
        assert!(timestamp.as_str().chars().all(|c| c.is_ascii_digit()));
    }
}
