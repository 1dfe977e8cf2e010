//! # nut-chrono
//!
//! Lightweight elapsed-time stopwatch for embedded systems with zero heap allocation.
//!
//! **Key features:**
//! - **Pure state machine** - `Chrono` is plain `Copy` data driven by explicit clock readings
//! - **Injected clock** - Any tick function, closure or shared clock via `ClockSource`
//! - **Pause/resume** - Paused intervals are excluded from elapsed time
//! - **Split queries** - Hours/minutes/seconds and days/hours/minutes/seconds
//! - **Fixed buffers** - Split times render into `heapless` strings
//!
//! ```
//! use nut_chrono::{Chrono, Chronometer, ManualClock};
//!
//! let clock = ManualClock::new(0);
//! let chronometer = Chronometer::new(&clock);
//! let mut chrono = Chrono::new();
//!
//! chronometer.start(&mut chrono);
//! clock.advance(1500);
//! chronometer.pause(&mut chrono);
//! clock.advance(60_000); // paused, not counted
//!
//! assert_eq!(chronometer.elapsed_millis(&chrono), 1500);
//! assert_eq!(chronometer.split_hms(&chrono).to_text().as_str(), "00:00:01");
//! ```
//!
//! ## Optional Features
//!
//! - `std` - `StdClock` backed by `std::time::Instant`, `std::error::Error` for `ChronoError`
//! - `defmt` - Trace events via defmt, `defmt::Format` on public types
//! - `log` - Trace events via the `log` facade
//!
//! This library is `no_std` compatible.

#![no_std]
#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

#[cfg(feature = "std")]
extern crate std;

// Internal logging macros
mod fmt;

// ============================================================================
// Module Declarations
// ============================================================================

pub mod chrono;
pub mod chronometer;
pub mod clock;
pub mod error;
pub mod split;
pub mod units;

// ============================================================================
// Re-exports - Public API
// ============================================================================

pub use chrono::{Chrono, ChronoStatus};
pub use chronometer::Chronometer;

pub use clock::{ClockSource, FnClock, ManualClock};

#[cfg(feature = "std")]
pub use clock::StdClock;

pub use error::ChronoError;

pub use split::{Dhms, ElapsedText, Hms};

// ============================================================================
// Library Metadata
// ============================================================================

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
