//! Clock source abstraction.
//!
//! A `ClockSource` supplies the current monotonic time in milliseconds. Firmware
//! typically passes its tick function (`fn() -> u64`) directly; host code and
//! tests use [`ManualClock`] or, with the `std` feature, `StdClock`.

use core::cell::Cell;

/// Source of monotonic milliseconds.
///
/// Readings must never decrease between calls. Implementations should be
/// cheap since every running-chrono query reads the clock once.
pub trait ClockSource {
    /// Current time in milliseconds.
    fn now_millis(&self) -> u64;
}

/// Plain function pointer, e.g. a SysTick `millis()` counter.
impl ClockSource for fn() -> u64 {
    fn now_millis(&self) -> u64 {
        self()
    }
}

impl<T: ClockSource + ?Sized> ClockSource for &T {
    fn now_millis(&self) -> u64 {
        (**self).now_millis()
    }
}

/// Adapter turning any `Fn() -> u64` closure into a clock source.
///
/// Useful when the tick counter is narrower than 64 bits:
///
/// ```
/// use nut_chrono::clock::{ClockSource, FnClock};
///
/// fn hal_millis() -> u32 { 42 }
///
/// let clock = FnClock::new(|| u64::from(hal_millis()));
/// assert_eq!(clock.now_millis(), 42);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct FnClock<F>(F);

impl<F: Fn() -> u64> FnClock<F> {
    /// Wrap a closure.
    pub const fn new(f: F) -> Self {
        Self(f)
    }
}

impl<F: Fn() -> u64> ClockSource for FnClock<F> {
    fn now_millis(&self) -> u64 {
        (self.0)()
    }
}

/// Manually driven clock.
///
/// Time only moves when `set()` or `advance()` is called. Interior mutability
/// lets one clock be shared by reference with a chronometer while the caller
/// keeps moving it forward. Not `Sync`.
#[derive(Debug, Default)]
pub struct ManualClock {
    now: Cell<u64>,
}

impl ManualClock {
    /// Create clock reading `start` milliseconds.
    pub const fn new(start: u64) -> Self {
        Self {
            now: Cell::new(start),
        }
    }

    /// Jump to an absolute reading.
    pub fn set(&self, millis: u64) {
        self.now.set(millis);
    }

    /// Move forward by `millis` (saturating).
    pub fn advance(&self, millis: u64) {
        self.now.set(self.now.get().saturating_add(millis));
    }
}

impl ClockSource for ManualClock {
    fn now_millis(&self) -> u64 {
        self.now.get()
    }
}

/// Host clock reporting milliseconds since it was created.
#[cfg(feature = "std")]
#[derive(Debug, Clone, Copy)]
pub struct StdClock {
    origin: std::time::Instant,
}

#[cfg(feature = "std")]
impl StdClock {
    /// Create clock with its zero at the current instant.
    pub fn new() -> Self {
        Self {
            origin: std::time::Instant::now(),
        }
    }
}

#[cfg(feature = "std")]
impl Default for StdClock {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(feature = "std")]
impl ClockSource for StdClock {
    fn now_millis(&self) -> u64 {
        u64::try_from(self.origin.elapsed().as_millis()).unwrap_or(u64::MAX)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixed_tick() -> u64 {
        1234
    }

    #[test]
    fn test_fn_pointer_clock() {
        let clock: fn() -> u64 = fixed_tick;
        assert_eq!(clock.now_millis(), 1234);
    }

    #[test]
    fn test_closure_clock() {
        let base = 10u64;
        let clock = FnClock::new(move || base * 3);
        assert_eq!(clock.now_millis(), 30);
    }

    #[test]
    fn test_manual_clock() {
        let clock = ManualClock::new(100);
        assert_eq!(clock.now_millis(), 100);

        clock.advance(50);
        assert_eq!(clock.now_millis(), 150);

        clock.set(7);
        assert_eq!(clock.now_millis(), 7);

        clock.set(u64::MAX - 1);
        clock.advance(10);
        assert_eq!(clock.now_millis(), u64::MAX);
    }

    #[test]
    fn test_reference_clock() {
        let clock = ManualClock::new(5);
        let shared = &clock;
        clock.advance(5);
        assert_eq!(shared.now_millis(), 10);
    }

    #[test]
    fn test_manual_clock_default() {
        let clock = ManualClock::default();
        assert_eq!(clock.now_millis(), 0);
    }

    #[test]
    #[cfg(feature = "std")]
    fn test_std_clock_monotonic() {
        let clock = StdClock::new();
        let first = clock.now_millis();
        let second = clock.now_millis();
        assert!(second >= first);
    }
}
