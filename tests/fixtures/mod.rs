//! Test fixtures and utilities for nut-chrono testing.
//!
//! Provides:
//! - `ScriptedClock`: Clock replaying a fixed sequence of readings
//! - `StepClock`: Clock advancing a fixed step on every read
//! - Helper functions for common test scenarios

#![allow(dead_code)]

use nut_chrono::{Chrono, ChronoStatus, ClockSource};
use std::cell::{Cell, RefCell};
use std::collections::VecDeque;

// ============================================================================
// ScriptedClock - Replays Readings
// ============================================================================

/// Clock returning pre-loaded readings in order.
///
/// Once the script runs out, the last reading repeats. Counts every read so
/// tests can assert exactly when the clock was consulted.
#[derive(Debug)]
pub struct ScriptedClock {
    /// Remaining readings
    readings: RefCell<VecDeque<u64>>,

    /// Last value handed out
    last: Cell<u64>,

    /// Number of reads so far
    reads: Cell<usize>,
}

impl ScriptedClock {
    /// Create clock with the given reading sequence.
    pub fn new(readings: &[u64]) -> Self {
        Self {
            readings: RefCell::new(readings.iter().copied().collect()),
            last: Cell::new(0),
            reads: Cell::new(0),
        }
    }

    /// Number of times the clock was read.
    pub fn reads(&self) -> usize {
        self.reads.get()
    }

    /// Readings not yet consumed.
    pub fn remaining(&self) -> usize {
        self.readings.borrow().len()
    }
}

impl ClockSource for ScriptedClock {
    fn now_millis(&self) -> u64 {
        self.reads.set(self.reads.get() + 1);
        if let Some(next) = self.readings.borrow_mut().pop_front() {
            self.last.set(next);
        }
        self.last.get()
    }
}

// ============================================================================
// StepClock - Advances On Every Read
// ============================================================================

/// Clock that moves forward `step` milliseconds after each read.
#[derive(Debug)]
pub struct StepClock {
    now: Cell<u64>,
    step: u64,
}

impl StepClock {
    /// Create clock starting at `start`.
    pub fn new(start: u64, step: u64) -> Self {
        Self {
            now: Cell::new(start),
            step,
        }
    }
}

impl ClockSource for StepClock {
    fn now_millis(&self) -> u64 {
        let now = self.now.get();
        self.now.set(now + self.step);
        now
    }
}

// ============================================================================
// Helpers
// ============================================================================

/// Chrono in each of the three states, with accumulated time where allowed.
pub fn chronos_in_every_state() -> [Chrono; 3] {
    [
        Chrono::from_parts(ChronoStatus::Running, 1200, 50).unwrap(),
        Chrono::from_parts(ChronoStatus::Paused, 3400, 80).unwrap(),
        Chrono::new(),
    ]
}
