//! Time sources for the issued-at and expiry claims

use chrono::{DateTime, Utc};

/// Source of the current instant.
///
/// Closures returning a `DateTime<Utc>` are clocks too.
pub trait Clock: Send + Sync {
    /// The current instant
    fn now(&self) -> DateTime<Utc>;
}

/// Wall-clock time
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// A clock pinned to one instant
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(DateTime<Utc>);

impl FixedClock {
    /// Pin the clock to `instant`
    #[must_use]
    pub fn new(instant: DateTime<Utc>) -> Self {
        Self(instant)
    }

    /// Pin the clock to a unix timestamp in seconds; `None` if out of range
    #[must_use]
    pub fn from_unix_seconds(seconds: i64) -> Option<Self> {
        DateTime::from_timestamp(seconds, 0).map(Self)
    }
}

impl From<DateTime<Utc>> for FixedClock {
    fn from(instant: DateTime<Utc>) -> Self {
        Self(instant)
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

impl<F> Clock for F
where
    F: Fn() -> DateTime<Utc> + Send + Sync,
{
    fn now(&self) -> DateTime<Utc> {
        self()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_clock_returns_pinned_instant() {
        let clock = FixedClock::from_unix_seconds(1_655_383_113).expect("in range");
        assert_eq!(clock.now().timestamp(), 1_655_383_113);
        assert_eq!(clock.now(), clock.now());
    }

    #[test]
    fn closures_are_clocks() {
        let pinned = DateTime::from_timestamp(42, 0).expect("in range");
        let clock = move || pinned;
        assert_eq!(Clock::now(&clock).timestamp(), 42);
    }

    #[test]
    fn system_clock_is_after_fixed_test_instant() {
        assert!(SystemClock.now().timestamp() > 1_655_383_113);
    }
}
