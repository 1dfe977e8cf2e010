//! Clock-bound chrono operations.
//!
//! `Chronometer` owns the clock source and applies it to any number of
//! [`Chrono`] values. Install the clock once at initialization; every
//! operation below reads through it.
//!
//! The clock is read at most once per call, and only when the result depends
//! on it (running chronos, or starting one).

use crate::chrono::Chrono;
use crate::clock::ClockSource;
use crate::fmt::{debug, trace};
use crate::split::{Dhms, Hms};

/// Stopwatch operations bound to a clock source.
///
/// The default clock type is a plain tick function, matching the typical
/// firmware setup:
///
/// ```
/// use nut_chrono::{Chrono, Chronometer};
///
/// fn millis() -> u64 { 0 }
///
/// let chronometer = Chronometer::from_fn(millis);
/// let mut chrono = Chrono::new();
/// chronometer.start(&mut chrono);
/// assert!(chrono.is_running());
/// ```
#[derive(Debug, Clone)]
pub struct Chronometer<C: ClockSource = fn() -> u64> {
    clock: C,
}

impl Chronometer<fn() -> u64> {
    /// Create chronometer reading a tick function.
    pub const fn from_fn(millis: fn() -> u64) -> Self {
        Self { clock: millis }
    }
}

impl<C: ClockSource> Chronometer<C> {
    /// Create chronometer reading `clock`.
    pub const fn new(clock: C) -> Self {
        Self { clock }
    }

    /// Replace the clock source.
    ///
    /// Running chronos keep their anchors, so the new clock must share the
    /// old clock's time base unless they are restarted.
    ///
    /// Needs an owned chronometer. A `static` one cannot be replaced at
    /// runtime; to swap clocks behind a shared chronometer, build it with
    /// `Chronometer::new(&clock)` over a clock with interior mutability, such
    /// as [`ManualClock`](crate::ManualClock) or an [`FnClock`](crate::FnClock)
    /// closure reading a selectable timer.
    pub fn set_clock_source(&mut self, clock: C) {
        debug!("chrono: clock source replaced");
        self.clock = clock;
    }

    /// Installed clock source.
    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// Current clock reading.
    pub fn now(&self) -> u64 {
        self.clock.now_millis()
    }

    /// Reading only when it matters for `chrono`.
    fn reading_for(&self, chrono: &Chrono) -> u64 {
        if chrono.is_running() { self.now() } else { 0 }
    }

    // ========================================================================
    // Transitions
    // ========================================================================

    /// Start or resume. Accumulated time is kept, even from Stopped state.
    pub fn start(&self, chrono: &mut Chrono) {
        let now = self.now();
        chrono.start_at(now);
        trace!(
            "chrono: start at {} ms, {} ms carried",
            now,
            chrono.accumulated_millis()
        );
    }

    /// Alias of [`start`](Self::start).
    pub fn resume(&self, chrono: &mut Chrono) {
        self.start(chrono);
    }

    /// Alias of [`start`](Self::start).
    pub fn play(&self, chrono: &mut Chrono) {
        self.start(chrono);
    }

    /// Start from zero.
    pub fn reset_and_start(&self, chrono: &mut Chrono) {
        let now = self.now();
        chrono.reset_and_start_at(now);
        trace!("chrono: reset and start at {} ms", now);
    }

    /// Fold running time into the accumulated total without changing status.
    ///
    /// Elapsed time is unchanged; only the anchor moves. Idle chronos are left
    /// as they are.
    pub fn update(&self, chrono: &mut Chrono) {
        let now = self.reading_for(chrono);
        chrono.update_at(now);
        trace!("chrono: updated to {} ms", chrono.accumulated_millis());
    }

    /// Fold running time in and pause.
    pub fn pause(&self, chrono: &mut Chrono) {
        let now = self.reading_for(chrono);
        chrono.pause_at(now);
        trace!("chrono: paused with {} ms", chrono.accumulated_millis());
    }

    /// Stop and clear.
    pub fn stop(&self, chrono: &mut Chrono) {
        chrono.stop();
        trace!("chrono: stopped");
    }

    // ========================================================================
    // Queries
    // ========================================================================

    /// Total elapsed milliseconds.
    pub fn elapsed_millis(&self, chrono: &Chrono) -> u64 {
        chrono.elapsed_millis_at(self.reading_for(chrono))
    }

    /// Whole elapsed seconds.
    pub fn elapsed_seconds(&self, chrono: &Chrono) -> u64 {
        chrono.elapsed_seconds_at(self.reading_for(chrono))
    }

    /// Whole elapsed minutes.
    pub fn elapsed_minutes(&self, chrono: &Chrono) -> u64 {
        chrono.elapsed_minutes_at(self.reading_for(chrono))
    }

    /// Elapsed time as hours, minutes, seconds.
    pub fn split_hms(&self, chrono: &Chrono) -> Hms {
        chrono.split_hms_at(self.reading_for(chrono))
    }

    /// Elapsed time as days, hours, minutes, seconds.
    pub fn split_dhms(&self, chrono: &Chrono) -> Dhms {
        chrono.split_dhms_at(self.reading_for(chrono))
    }

    /// `true` iff elapsed milliseconds strictly exceed `limit`.
    pub fn has_exceeded_millis(&self, chrono: &Chrono, limit: u64) -> bool {
        chrono.has_exceeded_millis_at(self.reading_for(chrono), limit)
    }

    /// `true` iff elapsed whole seconds strictly exceed `limit`.
    pub fn has_exceeded_seconds(&self, chrono: &Chrono, limit: u64) -> bool {
        chrono.has_exceeded_seconds_at(self.reading_for(chrono), limit)
    }

    /// `true` iff elapsed whole minutes strictly exceed `limit`.
    pub fn has_exceeded_minutes(&self, chrono: &Chrono, limit: u64) -> bool {
        chrono.has_exceeded_minutes_at(self.reading_for(chrono), limit)
    }
}

impl<C: ClockSource + Default> Default for Chronometer<C> {
    fn default() -> Self {
        Self::new(C::default())
    }
}
