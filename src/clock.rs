//! Millisecond clock abstraction for platform-agnostic timekeeping.
//!
//! The `MillisClock` trait provides the elapsed-milliseconds capability that
//! a consuming protocol stack reads, implemented for any platform (free-running
//! hardware counter, RTOS tick, host clock in tests, etc.).
//!
//! Two models are supported: a direct read of a platform clock (implement
//! `MillisClock` over it), or an interrupt-driven tick count ([`TickCounter`])
//! bumped from a timer ISR at a fixed interval.

use core::sync::atomic::{AtomicU32, Ordering};

/// Platform-agnostic millisecond clock trait.
///
/// Implementations wrap whatever free-running time source the platform
/// provides. Reads must be:
/// - **Monotonic** - non-decreasing between calls, modulo u32 wraparound
/// - **Side-effect free** - sampling the clock never changes state
/// - **Infallible** - a clock read cannot fail at this layer
///
/// Atomicity of a multi-byte counter read against interrupt-context writers
/// is the implementation's responsibility, not the consumer's.
pub trait MillisClock {
    /// Current elapsed milliseconds since an arbitrary epoch.
    ///
    /// Wraps around at `u32::MAX` milliseconds (about 49.7 days). Use
    /// [`elapsed_ms`](MillisClock::elapsed_ms) for wrap-safe differences.
    fn now_ms(&self) -> u32;

    /// Milliseconds elapsed since an earlier sample of this clock.
    ///
    /// Wrap-safe: correct for any two samples less than `u32::MAX / 2`
    /// milliseconds apart, even across the counter wrap.
    fn elapsed_ms(&self, since: u32) -> u32 {
        self.now_ms().wrapping_sub(since)
    }
}

impl<C: MillisClock + ?Sized> MillisClock for &C {
    fn now_ms(&self) -> u32 {
        (**self).now_ms()
    }
}

/// Interrupt-driven tick counter implementing [`MillisClock`].
///
/// The platform's periodic timer interrupt calls [`on_tick`](TickCounter::on_tick)
/// once per tick period; `now_ms()` scales the raw count by the tick interval.
/// With a 1 ms interval the count *is* the millisecond clock.
///
/// The counter is an `AtomicU32` with relaxed ordering, safe to bump from
/// interrupt context and read from thread context on targets with atomic
/// 32-bit loads and stores.
#[derive(Debug)]
pub struct TickCounter {
    ticks: AtomicU32,
    interval_ms: u32,
}

impl TickCounter {
    /// Create a counter with the given tick period in milliseconds.
    ///
    /// # Panics
    ///
    /// At const-evaluation (or runtime) if `interval_ms` is zero.
    pub const fn new(interval_ms: u32) -> Self {
        assert!(interval_ms > 0, "tick interval must be > 0");
        Self {
            ticks: AtomicU32::new(0),
            interval_ms,
        }
    }

    /// Record one elapsed tick period. Call from the timer ISR.
    pub fn on_tick(&self) {
        self.ticks.fetch_add(1, Ordering::Relaxed);
    }

    /// Raw tick count, unscaled.
    pub fn ticks(&self) -> u32 {
        self.ticks.load(Ordering::Relaxed)
    }

    /// Tick period in milliseconds.
    pub fn interval_ms(&self) -> u32 {
        self.interval_ms
    }
}

impl MillisClock for TickCounter {
    fn now_ms(&self) -> u32 {
        self.ticks().wrapping_mul(self.interval_ms)
    }
}
