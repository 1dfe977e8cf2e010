#![no_std]
#![no_main]

use core::sync::atomic::{AtomicU32, Ordering};
use cortex_m::peripheral::syst::SystClkSource;
use cortex_m_rt::exception;
use nut_chrono::{Chrono, Chronometer};
use panic_halt as _;

// Core clock assumed by the SysTick reload value (1 ms tick)
const CORE_HZ: u32 = 8_000_000;

// Incremented only by SysTick; load/store only, no RMW atomics needed on M0
static MILLIS: AtomicU32 = AtomicU32::new(0);

fn millis() -> u64 {
    u64::from(MILLIS.load(Ordering::Relaxed))
}

static CHRONOMETER: Chronometer = Chronometer::from_fn(millis);

#[cortex_m_rt::entry]
fn main() -> ! {
    let mut cp = cortex_m::Peripherals::take().unwrap();
    cp.SYST.set_clock_source(SystClkSource::Core);
    cp.SYST.set_reload(CORE_HZ / 1000 - 1);
    cp.SYST.clear_current();
    cp.SYST.enable_counter();
    cp.SYST.enable_interrupt();

    let mut chrono = Chrono::new();
    CHRONOMETER.reset_and_start(&mut chrono);

    // Exercise every operation so none is optimized out
    loop {
        if CHRONOMETER.has_exceeded_seconds(&chrono, 1) {
            CHRONOMETER.pause(&mut chrono);
            core::hint::black_box(CHRONOMETER.split_dhms(&chrono));
            core::hint::black_box(CHRONOMETER.split_hms(&chrono).to_text());
            CHRONOMETER.stop(&mut chrono);
            CHRONOMETER.start(&mut chrono);
        }
        core::hint::black_box(CHRONOMETER.elapsed_millis(&chrono));
        cortex_m::asm::wfi();
    }
}

#[exception]
fn SysTick() {
    let now = MILLIS.load(Ordering::Relaxed);
    MILLIS.store(now.wrapping_add(1), Ordering::Relaxed);
}

// Required: exception handler
#[exception]
unsafe fn HardFault(_ef: &cortex_m_rt::ExceptionFrame) -> ! {
    loop {
        cortex_m::asm::nop();
    }
}
