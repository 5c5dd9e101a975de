//! Remaining-duration breakdown

use std::fmt;

use serde::{Deserialize, Serialize};

const MILLIS_PER_HOUR: u64 = 3_600_000;
const MILLIS_PER_MINUTE: u64 = 60_000;
const MILLIS_PER_SECOND: u64 = 1_000;

/// Time left until the deadline, split into display fields.
///
/// There is no day field: anything beyond 24 hours stays in `hours`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemainingDuration {
    pub hours: u64,
    pub minutes: u64,
    pub seconds: u64,
}

impl RemainingDuration {
    pub fn zero() -> Self {
        Self::default()
    }

    /// Floor-divide a millisecond span into hours, minutes and seconds
    pub fn from_millis(millis: u64) -> Self {
        Self {
            hours: millis / MILLIS_PER_HOUR,
            minutes: (millis % MILLIS_PER_HOUR) / MILLIS_PER_MINUTE,
            seconds: (millis % MILLIS_PER_MINUTE) / MILLIS_PER_SECOND,
        }
    }

    pub fn total_seconds(&self) -> u64 {
        self.hours * 3600 + self.minutes * 60 + self.seconds
    }

    pub fn is_zero(&self) -> bool {
        self.total_seconds() == 0
    }
}

impl fmt::Display for RemainingDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}:{:02}", self.hours, self.minutes, self.seconds)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn breakdown_floors_each_field() {
        let millis = MILLIS_PER_HOUR + 2 * MILLIS_PER_MINUTE + 3_999;
        let remaining = RemainingDuration::from_millis(millis);

        assert_eq!(
            remaining,
            RemainingDuration { hours: 1, minutes: 2, seconds: 3 }
        );
    }

    #[test]
    fn sub_second_span_rounds_down_to_zero() {
        assert!(RemainingDuration::from_millis(999).is_zero());
    }

    #[test]
    fn hours_absorb_days() {
        let millis = 50 * MILLIS_PER_HOUR + 59 * MILLIS_PER_SECOND;
        let remaining = RemainingDuration::from_millis(millis);

        assert_eq!(remaining.hours, 50);
        assert_eq!(remaining.minutes, 0);
        assert_eq!(remaining.seconds, 59);
    }

    #[test]
    fn total_seconds_matches_floored_span() {
        for millis in [0, 1_000, 59_999, 3_599_999, 86_400_000, 123_456_789] {
            let remaining = RemainingDuration::from_millis(millis);
            assert_eq!(remaining.total_seconds(), millis / 1000, "span of {millis}ms");
        }
    }

    #[test]
    fn displays_zero_padded() {
        assert_eq!(RemainingDuration::from_millis(2_000).to_string(), "00:00:02");
        assert_eq!(RemainingDuration::from_millis(100 * MILLIS_PER_HOUR).to_string(), "100:00:00");
    }
}
