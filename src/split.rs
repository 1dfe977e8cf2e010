//! Elapsed time split into calendar-free components.
//!
//! Both split types come from a whole-seconds total using integer division.
//! `Hms` lets hours grow without bound; `Dhms` carries whole days and keeps
//! hours below 24.

use crate::units::{SECONDS_PER_DAY, SECONDS_PER_HOUR, SECONDS_PER_MINUTE};
use core::fmt::{self, Write};

/// Fixed-capacity text buffer for rendered split times.
///
/// Large enough for the widest `Dhms` rendering (20-digit day count).
pub type ElapsedText = heapless::String<32>;

/// Hours, minutes and seconds.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Hms {
    /// Whole hours (unbounded)
    pub hours: u64,
    /// Minutes (0-59)
    pub minutes: u8,
    /// Seconds (0-59)
    pub seconds: u8,
}

impl Hms {
    /// Split a whole-seconds total.
    pub const fn from_total_seconds(total: u64) -> Self {
        Self {
            hours: total / SECONDS_PER_HOUR,
            minutes: ((total % SECONDS_PER_HOUR) / SECONDS_PER_MINUTE) as u8,
            seconds: (total % SECONDS_PER_MINUTE) as u8,
        }
    }

    /// Recombine into whole seconds (saturating).
    pub const fn total_seconds(&self) -> u64 {
        self.hours
            .saturating_mul(SECONDS_PER_HOUR)
            .saturating_add(self.minutes as u64 * SECONDS_PER_MINUTE)
            .saturating_add(self.seconds as u64)
    }

    /// Render as `HH:MM:SS` into a fixed buffer.
    pub fn to_text(&self) -> ElapsedText {
        let mut text = ElapsedText::new();
        // Capacity covers the widest possible rendering
        let _ = write!(text, "{}", self);
        text
    }
}

impl From<Hms> for (u64, u8, u8) {
    fn from(hms: Hms) -> Self {
        (hms.hours, hms.minutes, hms.seconds)
    }
}

impl fmt::Display for Hms {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:02}:{:02}:{:02}",
            self.hours, self.minutes, self.seconds
        )
    }
}

/// Days, hours, minutes and seconds.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Dhms {
    /// Whole days (unbounded)
    pub days: u64,
    /// Hours (0-23)
    pub hours: u8,
    /// Minutes (0-59)
    pub minutes: u8,
    /// Seconds (0-59)
    pub seconds: u8,
}

impl Dhms {
    /// Split a whole-seconds total.
    pub const fn from_total_seconds(total: u64) -> Self {
        let within_day = Hms::from_total_seconds(total % SECONDS_PER_DAY);
        Self {
            days: total / SECONDS_PER_DAY,
            hours: within_day.hours as u8,
            minutes: within_day.minutes,
            seconds: within_day.seconds,
        }
    }

    /// Recombine into whole seconds (saturating).
    pub const fn total_seconds(&self) -> u64 {
        self.days
            .saturating_mul(SECONDS_PER_DAY)
            .saturating_add(self.hours as u64 * SECONDS_PER_HOUR)
            .saturating_add(self.minutes as u64 * SECONDS_PER_MINUTE)
            .saturating_add(self.seconds as u64)
    }

    /// Render as `Dd HH:MM:SS` into a fixed buffer.
    pub fn to_text(&self) -> ElapsedText {
        let mut text = ElapsedText::new();
        let _ = write!(text, "{}", self);
        text
    }
}

impl From<Dhms> for (u64, u8, u8, u8) {
    fn from(dhms: Dhms) -> Self {
        (dhms.days, dhms.hours, dhms.minutes, dhms.seconds)
    }
}

impl From<Dhms> for Hms {
    fn from(dhms: Dhms) -> Self {
        Hms::from_total_seconds(dhms.total_seconds())
    }
}

impl fmt::Display for Dhms {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}d {:02}:{:02}:{:02}",
            self.days, self.hours, self.minutes, self.seconds
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hms_split() {
        let hms = Hms::from_total_seconds(3661);
        assert_eq!(<(u64, u8, u8)>::from(hms), (1, 1, 1));

        // Hours are not wrapped at a day
        let hms = Hms::from_total_seconds(90_000);
        assert_eq!(<(u64, u8, u8)>::from(hms), (25, 0, 0));
    }

    #[test]
    fn test_dhms_split() {
        let dhms = Dhms::from_total_seconds(90_061);
        assert_eq!(<(u64, u8, u8, u8)>::from(dhms), (1, 1, 1, 1));

        let dhms = Dhms::from_total_seconds(86_399);
        assert_eq!(<(u64, u8, u8, u8)>::from(dhms), (0, 23, 59, 59));
    }

    #[test]
    fn test_split_consistency() {
        for total in [
            0u64, 1, 59, 60, 3599, 3600, 86_399, 86_400, 1_000_000,
        ] {
            let hms = Hms::from_total_seconds(total);
            assert_eq!(hms.total_seconds(), total);

            let dhms = Dhms::from_total_seconds(total);
            assert_eq!(dhms.total_seconds(), total);
            assert_eq!(
                u64::from(dhms.hours) * 3600
                    + u64::from(dhms.minutes) * 60
                    + u64::from(dhms.seconds),
                total % 86_400
            );
            assert_eq!(Hms::from(dhms), hms);
        }
    }

    #[test]
    fn test_hms_text() {
        assert_eq!(Hms::from_total_seconds(0).to_text().as_str(), "00:00:00");
        assert_eq!(Hms::from_total_seconds(3723).to_text().as_str(), "01:02:03");
        assert_eq!(Hms::from_total_seconds(360_000).to_text().as_str(), "100:00:00");
    }

    #[test]
    fn test_dhms_text() {
        assert_eq!(Dhms::from_total_seconds(90_061).to_text().as_str(), "1d 01:01:01");

        // Widest rendering still fits
        let widest = Dhms {
            days: u64::MAX,
            hours: 23,
            minutes: 59,
            seconds: 59,
        };
        assert_eq!(widest.to_text().as_str(), "18446744073709551615d 23:59:59");
    }
}
