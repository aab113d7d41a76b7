use chrono::{DateTime, Utc};

/// BuildClock port for reading the current build time
///
/// Encoding falls back to "now" when no explicit timestamp is supplied.
/// Routing that read through a port keeps the codec itself deterministic
/// and lets tests pin the clock to a fixed moment.
pub trait BuildClock {
    /// Returns the current moment in UTC
    fn now(&self) -> DateTime<Utc>;
}
