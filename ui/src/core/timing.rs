//! Wall-clock interval arithmetic shared by the countdown and the form stamps.

use time::{Duration, OffsetDateTime};

pub const MS_PER_SECOND: i64 = 1_000;
pub const MS_PER_MINUTE: i64 = 60 * MS_PER_SECOND;
pub const MS_PER_HOUR: i64 = 60 * MS_PER_MINUTE;
pub const MS_PER_DAY: i64 = 24 * MS_PER_HOUR;

/// Breakdown of a millisecond delta into calendar-free units.
///
/// `total_ms` may be negative once a deadline has passed; callers treat
/// `total_ms <= 0` as "done" (see [`TimeInterval::is_done`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TimeInterval {
    pub total_ms: i64,
    pub days: i64,
    pub hours: i64,
    pub minutes: i64,
    pub seconds: i64,
}

impl TimeInterval {
    /// Split a delta into units.
    ///
    /// Each unit is `floor((total / unit) mod base)` with a truncating `mod`,
    /// so negative deltas produce negative fields exactly the way the page
    /// scripts always computed them (e.g. `-1500 ms` gives `seconds == -2`).
    pub fn from_millis(total_ms: i64) -> Self {
        Self {
            total_ms,
            days: total_ms.div_euclid(MS_PER_DAY),
            hours: (total_ms % MS_PER_DAY).div_euclid(MS_PER_HOUR),
            minutes: (total_ms % MS_PER_HOUR).div_euclid(MS_PER_MINUTE),
            seconds: (total_ms % MS_PER_MINUTE).div_euclid(MS_PER_SECOND),
        }
    }

    pub fn is_done(&self) -> bool {
        self.total_ms <= 0
    }

    /// Milliseconds covered by the whole-unit fields (always `<= total_ms`
    /// for non-negative deltas, within one second of it).
    pub fn whole_units_ms(&self) -> i64 {
        self.days * MS_PER_DAY
            + self.hours * MS_PER_HOUR
            + self.minutes * MS_PER_MINUTE
            + self.seconds * MS_PER_SECOND
    }
}

/// Interval between two instants, `end - start`, at millisecond resolution.
pub fn compute_interval(start: OffsetDateTime, end: OffsetDateTime) -> TimeInterval {
    TimeInterval::from_millis(delta_ms(end - start))
}

/// Time left until `deadline`, measured from now.
pub fn remaining(deadline: OffsetDateTime) -> TimeInterval {
    compute_interval(now(), deadline)
}

pub fn now() -> OffsetDateTime {
    OffsetDateTime::now_utc()
}

fn delta_ms(delta: Duration) -> i64 {
    let ms = delta.whole_milliseconds();
    ms.clamp(i64::MIN as i128, i64::MAX as i128) as i64
}

/// Cooperative sleep on whichever executor drives the current platform.
pub async fn sleep_ms(ms: u64) {
    #[cfg(target_arch = "wasm32")]
    {
        gloo_timers::future::TimeoutFuture::new(ms.min(u32::MAX as u64) as u32).await;
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        tokio::time::sleep(std::time::Duration::from_millis(ms)).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::datetime;

    #[test]
    fn splits_positive_delta_into_units() {
        let start = datetime!(2017-01-10 12:00:00 UTC);
        let end = start + Duration::days(1)
            + Duration::hours(2)
            + Duration::minutes(3)
            + Duration::milliseconds(4_750);

        let interval = compute_interval(start, end);
        assert_eq!(interval.total_ms, 93_784_750);
        assert_eq!(interval.days, 1);
        assert_eq!(interval.hours, 2);
        assert_eq!(interval.minutes, 3);
        assert_eq!(interval.seconds, 4);
    }

    #[test]
    fn whole_units_stay_within_one_second_of_total() {
        let start = datetime!(2017-01-10 12:00:00 UTC);
        for ms in [0_i64, 1, 999, 1_000, 59_999, 60_000, 3_599_999, 86_400_001, 190_000_123] {
            let interval = compute_interval(start, start + Duration::milliseconds(ms));
            assert_eq!(interval.total_ms, ms);
            let covered = interval.whole_units_ms();
            assert!(covered <= interval.total_ms, "{ms}: {covered} > total");
            assert!(interval.total_ms < covered + 1_000, "{ms}: gap >= 1s");
        }
    }

    #[test]
    fn negative_delta_floors_each_unit() {
        let interval = TimeInterval::from_millis(-1_500);
        assert_eq!(interval.total_ms, -1_500);
        assert_eq!(interval.seconds, -2);
        assert_eq!(interval.minutes, -1);
        assert_eq!(interval.hours, -1);
        assert_eq!(interval.days, -1);
        assert!(interval.is_done());
    }

    #[test]
    fn negative_delta_past_a_minute_keeps_truncated_remainder() {
        // -61.5 s: (-61.5 mod 60) = -1.5 -> floor -2; (-1.025 mod 60) -> floor -2
        let interval = TimeInterval::from_millis(-61_500);
        assert_eq!(interval.seconds, -2);
        assert_eq!(interval.minutes, -2);
    }

    #[test]
    fn past_deadline_is_done() {
        let deadline = now() - Duration::seconds(5);
        assert!(remaining(deadline).total_ms <= 0);
        assert!(remaining(deadline).is_done());
    }

    #[test]
    fn future_deadline_is_running() {
        let deadline = now() + Duration::minutes(2);
        let left = remaining(deadline);
        assert!(!left.is_done());
        assert!(left.minutes <= 2);
    }
}
