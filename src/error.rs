//! Error types for chrono conversions.
//!
//! The stopwatch operations themselves are total and never fail. `ChronoError`
//! only covers rebuilding a chrono or status from raw values.

use core::fmt;

/// Chrono conversion error.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ChronoError {
    /// Numeric status code is not one of the known codes (0, 1, 2)
    InvalidStatus(u8),

    /// Stopped chrono carried a nonzero elapsed time or anchor
    ///
    /// A stopped chrono is always fully reset.
    InconsistentStopped {
        /// Elapsed milliseconds supplied
        elapsed: u64,
        /// Anchor milliseconds supplied
        anchor: u64,
    },
}

impl fmt::Display for ChronoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChronoError::InvalidStatus(code) => write!(f, "Invalid status code {}", code),
            ChronoError::InconsistentStopped { elapsed, anchor } => write!(
                f,
                "Stopped chrono must be reset (elapsed {} ms, anchor {} ms)",
                elapsed, anchor
            ),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ChronoError {}

#[cfg(test)]
mod tests {
    use super::*;
    extern crate std;
    use std::format;

    #[test]
    fn test_error_display() {
        assert_eq!(
            format!("{}", ChronoError::InvalidStatus(7)),
            "Invalid status code 7"
        );

        let err = ChronoError::InconsistentStopped {
            elapsed: 250,
            anchor: 0,
        };
        assert_eq!(
            format!("{}", err),
            "Stopped chrono must be reset (elapsed 250 ms, anchor 0 ms)"
        );
    }

    #[test]
    fn test_error_equality() {
        assert_eq!(ChronoError::InvalidStatus(3), ChronoError::InvalidStatus(3));
        assert_ne!(ChronoError::InvalidStatus(3), ChronoError::InvalidStatus(4));
    }
}
