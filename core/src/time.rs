//! Time related utils.

use chrono::Utc;

/// DateTime is the alias for `chrono::DateTime<Utc>`.
pub type DateTime = chrono::DateTime<Utc>;

/// Create datetime of now.
pub fn now() -> DateTime {
    Utc::now()
}

/// Convert datetime into POSIX seconds.
pub fn unix_timestamp(time: DateTime) -> i64 {
    time.timestamp()
}
