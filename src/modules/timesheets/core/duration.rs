use chrono::{DateTime, Utc};

/// Whole seconds between `start` and `end`, floored.
///
/// Total over any pair of instants: an end before the start yields a negative
/// value and nothing is clamped.
pub fn duration_seconds(start: DateTime<Utc>, end: DateTime<Utc>) -> i64 {
    (end - start).num_milliseconds().div_euclid(1000)
}
