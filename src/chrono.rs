//! Chrono value type and its state machine.
//!
//! `Chrono` is plain data: it never reads a clock itself. Every transition that
//! depends on the current time takes the reading as an explicit `now` argument,
//! which keeps the state machine deterministic. [`Chronometer`](crate::Chronometer)
//! supplies the readings from its clock source.
//!
//! Transitions:
//! - `start_at`: any state -> Running, accumulated time kept
//! - `reset_and_start_at`: any state -> Running, accumulated time cleared
//! - `update_at`: fold running time, status unchanged
//! - `pause_at`: fold running time, then -> Paused
//! - `stop`: any state -> Stopped, everything cleared

use crate::error::ChronoError;
use crate::split::{Dhms, Hms};
use crate::units::{MILLIS_PER_SECOND, SECONDS_PER_MINUTE};
use core::fmt;

/// Chrono run status.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ChronoStatus {
    /// Accumulating time since the anchor
    Running,

    /// Holding the accumulated time
    Paused,

    /// Reset, nothing accumulated
    Stopped,
}

impl ChronoStatus {
    /// Status of a freshly created chrono.
    pub const DEFAULT: ChronoStatus = ChronoStatus::Stopped;

    /// Stable numeric code (Running=0, Paused=1, Stopped=2).
    pub const fn as_u8(self) -> u8 {
        match self {
            ChronoStatus::Running => 0,
            ChronoStatus::Paused => 1,
            ChronoStatus::Stopped => 2,
        }
    }

    /// Lowercase status name.
    pub const fn as_str(self) -> &'static str {
        match self {
            ChronoStatus::Running => "running",
            ChronoStatus::Paused => "paused",
            ChronoStatus::Stopped => "stopped",
        }
    }
}

impl Default for ChronoStatus {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl TryFrom<u8> for ChronoStatus {
    type Error = ChronoError;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(ChronoStatus::Running),
            1 => Ok(ChronoStatus::Paused),
            2 => Ok(ChronoStatus::Stopped),
            other => Err(ChronoError::InvalidStatus(other)),
        }
    }
}

impl From<ChronoStatus> for u8 {
    fn from(status: ChronoStatus) -> Self {
        status.as_u8()
    }
}

impl fmt::Display for ChronoStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Elapsed-time tracker.
///
/// While running, the true elapsed time is `elapsed + (now - anchor)`. While
/// paused or stopped it is `elapsed` alone. A stopped chrono always has both
/// fields at zero.
///
/// Note that [`start_at`](Self::start_at) keeps whatever is already
/// accumulated, including after a pause. Use
/// [`reset_and_start_at`](Self::reset_and_start_at) to begin from zero.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Chrono {
    status: ChronoStatus,
    elapsed: u64,
    anchor: u64,
}

impl Chrono {
    /// Create stopped chrono with nothing accumulated.
    pub const fn new() -> Self {
        Self {
            status: ChronoStatus::DEFAULT,
            elapsed: 0,
            anchor: 0,
        }
    }

    /// Rebuild a chrono from raw fields.
    ///
    /// Rejects a stopped chrono that is not fully reset.
    pub const fn from_parts(
        status: ChronoStatus,
        elapsed: u64,
        anchor: u64,
    ) -> Result<Self, ChronoError> {
        if matches!(status, ChronoStatus::Stopped) && (elapsed != 0 || anchor != 0) {
            return Err(ChronoError::InconsistentStopped { elapsed, anchor });
        }

        Ok(Self {
            status,
            elapsed,
            anchor,
        })
    }

    /// Split into `(status, elapsed, anchor)`.
    pub const fn into_parts(self) -> (ChronoStatus, u64, u64) {
        (self.status, self.elapsed, self.anchor)
    }

    /// Current status.
    pub const fn status(&self) -> ChronoStatus {
        self.status
    }

    /// Running?
    pub const fn is_running(&self) -> bool {
        matches!(self.status, ChronoStatus::Running)
    }

    /// Paused?
    pub const fn is_paused(&self) -> bool {
        matches!(self.status, ChronoStatus::Paused)
    }

    /// Stopped?
    pub const fn is_stopped(&self) -> bool {
        matches!(self.status, ChronoStatus::Stopped)
    }

    /// Milliseconds accumulated up to the last fold (excludes the current run).
    pub const fn accumulated_millis(&self) -> u64 {
        self.elapsed
    }

    /// Clock reading taken at the last start or fold.
    pub const fn anchor(&self) -> u64 {
        self.anchor
    }

    // ========================================================================
    // Transitions
    // ========================================================================

    /// Start or resume at `now`. Accumulated time is kept.
    pub fn start_at(&mut self, now: u64) {
        self.status = ChronoStatus::Running;
        self.anchor = now;
    }

    /// Start from zero at `now`.
    pub fn reset_and_start_at(&mut self, now: u64) {
        self.start_at(now);
        self.elapsed = 0;
    }

    /// Fold running time up to `now`, then pause.
    ///
    /// A no-op on the accumulated time unless running.
    pub fn pause_at(&mut self, now: u64) {
        self.update_at(now);
        self.status = ChronoStatus::Paused;
    }

    /// Stop and clear everything, whatever the prior state.
    pub fn stop(&mut self) {
        *self = Self::new();
    }

    /// Fold the time since the anchor into the accumulated total and move the
    /// anchor to `now`, keeping the status.
    ///
    /// Only running chronos accrue; otherwise a no-op. The total elapsed time
    /// is the same before and after.
    pub fn update_at(&mut self, now: u64) {
        if self.is_running() {
            self.elapsed = self.elapsed.saturating_add(now.saturating_sub(self.anchor));
            self.anchor = now;
        }
    }

    // ========================================================================
    // Queries
    // ========================================================================

    /// Total elapsed milliseconds as of `now`.
    ///
    /// `now` is ignored unless running. The chrono itself is not modified.
    pub fn elapsed_millis_at(&self, now: u64) -> u64 {
        let mut snapshot = *self;
        snapshot.update_at(now);
        snapshot.elapsed
    }

    /// Whole elapsed seconds as of `now`.
    pub fn elapsed_seconds_at(&self, now: u64) -> u64 {
        self.elapsed_millis_at(now) / MILLIS_PER_SECOND
    }

    /// Whole elapsed minutes as of `now`.
    pub fn elapsed_minutes_at(&self, now: u64) -> u64 {
        self.elapsed_seconds_at(now) / SECONDS_PER_MINUTE
    }

    /// Elapsed time as hours, minutes, seconds.
    pub fn split_hms_at(&self, now: u64) -> Hms {
        Hms::from_total_seconds(self.elapsed_seconds_at(now))
    }

    /// Elapsed time as days, hours, minutes, seconds.
    pub fn split_dhms_at(&self, now: u64) -> Dhms {
        Dhms::from_total_seconds(self.elapsed_seconds_at(now))
    }

    /// `true` iff elapsed milliseconds strictly exceed `limit`.
    pub fn has_exceeded_millis_at(&self, now: u64, limit: u64) -> bool {
        self.elapsed_millis_at(now) > limit
    }

    /// `true` iff elapsed whole seconds strictly exceed `limit`.
    pub fn has_exceeded_seconds_at(&self, now: u64, limit: u64) -> bool {
        self.elapsed_seconds_at(now) > limit
    }

    /// `true` iff elapsed whole minutes strictly exceed `limit`.
    pub fn has_exceeded_minutes_at(&self, now: u64, limit: u64) -> bool {
        self.elapsed_minutes_at(now) > limit
    }
}

impl Default for Chrono {
    fn default() -> Self {
        Self::new()
    }
}
