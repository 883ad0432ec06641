//! Timestamp value helpers.

use chrono::{DateTime, Duration, Utc};
use rand::Rng;

/// Generate an RFC 3339 timestamp drawn uniformly from the last `days_back`
/// days up to now (at call time).
pub(crate) fn recent_timestamp<R: Rng>(rng: &mut R, days_back: i64) -> String {
    let now = Utc::now();
    let earliest = (now - Duration::days(days_back)).timestamp();
    let secs = rng.random_range(earliest..=now.timestamp());

    DateTime::from_timestamp(secs, 0).unwrap_or(now).to_rfc3339()
}

/// Current wall-clock time in nanoseconds since the Unix epoch.
pub(crate) fn nanos_now() -> i64 {
    // The i64 nanosecond range runs out in 2262.
    Utc::now().timestamp_nanos_opt().unwrap_or(i64::MAX)
}
