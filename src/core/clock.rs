//! Time source for result uids

use chrono::Utc;

/// Source of the unix timestamp stamped into every rendered uid
pub trait Clock {
    fn unix_timestamp(&self) -> i64;
}

/// Wall clock
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn unix_timestamp(&self) -> i64 {
        Utc::now().timestamp()
    }
}

/// Clock frozen at a given timestamp
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub i64);

impl Clock for FixedClock {
    fn unix_timestamp(&self) -> i64 {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_clock() {
        assert_eq!(FixedClock(42).unix_timestamp(), 42);
    }

    #[test]
    fn test_system_clock_is_recent() {
        // 2014-01-01T00:00:00Z
        assert!(SystemClock.unix_timestamp() > 1_388_534_400);
    }
}
