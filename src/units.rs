//! Time unit conversion constants.

/// Milliseconds in one second.
pub const MILLIS_PER_SECOND: u64 = 1000;

/// Seconds in one minute.
pub const SECONDS_PER_MINUTE: u64 = 60;

/// Milliseconds in one minute.
pub const MILLIS_PER_MINUTE: u64 = MILLIS_PER_SECOND * SECONDS_PER_MINUTE;

/// Seconds in one hour.
pub const SECONDS_PER_HOUR: u64 = 60 * SECONDS_PER_MINUTE;

/// Seconds in one day.
pub const SECONDS_PER_DAY: u64 = 24 * SECONDS_PER_HOUR;

/// Convert whole minutes to seconds.
///
/// Saturates at `u64::MAX`.
pub const fn minutes_to_seconds(minutes: u64) -> u64 {
    minutes.saturating_mul(SECONDS_PER_MINUTE)
}
