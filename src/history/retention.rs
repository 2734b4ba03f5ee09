//! Retention-period boundary computation.
//!
//! The history UI lets users keep a sliding window of days; this module
//! turns a "days ago" count into the millisecond timestamp bounding that
//! window. Boundaries are day-aligned in the caller's timezone:
//!
//! - the first kept timestamp is 00:00:00.000 of the first day of retention
//! - the last kept timestamp is 24:00:00.000 of the last day of retention
//!   (the instant the following day begins)
//!
//! The computation depends on wall-clock time, so the workhorse functions
//! take `now` explicitly and tests inject a fixed value; only
//! [`retention_period_boundary`] reads the system clock.

use chrono::{DateTime, Days, Duration, Local, NaiveDate, NaiveTime, TimeZone, Utc};

/// Computes a retention boundary relative to the current local time.
///
/// Convenience wrapper over [`retention_period_boundary_at`] for callers
/// that want "now" to mean the system clock; see that function for the
/// boundary semantics.
pub fn retention_period_boundary(days_ago: u32, is_last_ts: bool) -> i64 {
    retention_period_boundary_at(days_ago, is_last_ts, &Local::now())
}

/// Computes a retention boundary relative to an explicit `now`.
///
/// Takes the calendar day `days_ago` days before `now` in `now`'s
/// timezone, and returns the start of that day (`is_last_ts == false`,
/// the lower bound of the kept window) or the start of the following day
/// (`is_last_ts == true`, the upper bound), as Unix milliseconds.
///
/// `days_ago` is not validated; a count reaching before the calendar
/// epoch saturates at the earliest representable day.
///
/// # Arguments
///
/// * `days_ago` - How many days before `now` the boundary day lies
/// * `is_last_ts` - Whether to produce the upper (end-of-day) boundary
/// * `now` - The reference instant, in the timezone the user observes
pub fn retention_period_boundary_at<Tz: TimeZone>(
    days_ago: u32,
    is_last_ts: bool,
    now: &DateTime<Tz>,
) -> i64 {
    let day = now
        .date_naive()
        .checked_sub_days(Days::new(u64::from(days_ago)))
        .unwrap_or(NaiveDate::MIN);

    // 24:00 of the boundary day is 00:00 of the day after it
    let boundary_day = if is_last_ts {
        day.checked_add_days(Days::new(1)).unwrap_or(NaiveDate::MAX)
    } else {
        day
    };

    day_start_millis(&now.timezone(), boundary_day)
}

/// Resolves local midnight of `date` to Unix milliseconds.
///
/// A midnight swallowed by a DST gap resolves to the first representable
/// instant after it; an ambiguous midnight resolves to its earlier
/// occurrence.
fn day_start_millis<Tz: TimeZone>(tz: &Tz, date: NaiveDate) -> i64 {
    let mut candidate = date.and_time(NaiveTime::MIN);
    for _ in 0..48 {
        if let Some(resolved) = tz.from_local_datetime(&candidate).earliest() {
            return resolved.timestamp_millis();
        }
        candidate = candidate + Duration::hours(1);
    }

    // No timezone in tzdb leaves two consecutive days unrepresentable
    Utc.from_utc_datetime(&date.and_time(NaiveTime::MIN))
        .timestamp_millis()
}
