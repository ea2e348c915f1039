//! Timer HAL facade.
//!
//! `HalTimer` ties an injected [`MillisClock`] to a [`TimerConfig`] and is
//! the surface a consuming stack reads time through. Ticks and milliseconds
//! are related by `TICK_INTERVAL_MS`; on the reference configurations the
//! multiplier is 1 and the conversion is a no-op.

use core::marker::PhantomData;

use crate::clock::MillisClock;
use crate::config::TimerConfig;

/// Timer facade over an injected millisecond clock.
///
/// Generic over the clock implementation (hardware counter, interrupt-driven
/// [`TickCounter`](crate::clock::TickCounter), fake in tests) and the
/// compile-time [`TimerConfig`] describing the underlying hardware timer.
///
/// All reads are side-effect free and infallible; see [`MillisClock`] for
/// the monotonicity and wraparound contract.
#[derive(Debug)]
pub struct HalTimer<C: MillisClock, F: TimerConfig> {
    clock: C,
    _config: PhantomData<F>,
}

impl<C: MillisClock, F: TimerConfig> HalTimer<C, F> {
    /// Wrap a clock in the facade.
    pub fn new(clock: C) -> Self {
        info!("timer hal up: top={} prescaler={}", F::TOP, F::PRESCALER);
        Self {
            clock,
            _config: PhantomData,
        }
    }

    /// Current tick count.
    ///
    /// With a 1 ms tick interval this is the millisecond clock itself.
    pub fn ticks(&self) -> u32 {
        self.clock.now_ms() / F::TICK_INTERVAL_MS
    }

    /// Current elapsed milliseconds (`ticks × TICK_INTERVAL_MS`).
    ///
    /// Quantized to tick boundaries for intervals greater than 1 ms.
    pub fn now_ms(&self) -> u32 {
        self.ticks().wrapping_mul(F::TICK_INTERVAL_MS)
    }

    /// Milliseconds elapsed since an earlier [`now_ms`](Self::now_ms) sample.
    ///
    /// Wrap-safe for any two samples less than `u32::MAX / 2` ms apart.
    pub fn elapsed_since(&self, earlier_ms: u32) -> u32 {
        self.now_ms().wrapping_sub(earlier_ms)
    }

    /// A deadline the given number of milliseconds from now.
    pub fn deadline(&self, after_ms: u32) -> Deadline {
        Deadline {
            at_ms: self.now_ms().wrapping_add(after_ms),
        }
    }

    /// Borrow the underlying clock.
    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// Consume the facade, returning the clock.
    pub fn release(self) -> C {
        self.clock
    }
}

/// A point in wrapped millisecond time.
///
/// Comparison uses the half-range rule: a deadline is due once the clock has
/// advanced past it by less than `u32::MAX / 2` ms, which stays correct
/// across counter wrap for deadlines under ~24.8 days out.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Deadline {
    at_ms: u32,
}

impl Deadline {
    /// The absolute (wrapped) millisecond value of the deadline.
    pub fn at_ms(&self) -> u32 {
        self.at_ms
    }

    /// Whether the deadline has passed on the given timer.
    pub fn is_due<C: MillisClock, F: TimerConfig>(&self, timer: &HalTimer<C, F>) -> bool {
        timer.now_ms().wrapping_sub(self.at_ms) < u32::MAX / 2
    }

    /// Milliseconds remaining until due, or 0 if already due.
    pub fn remaining_ms<C: MillisClock, F: TimerConfig>(&self, timer: &HalTimer<C, F>) -> u32 {
        if self.is_due(timer) {
            0
        } else {
            self.at_ms.wrapping_sub(timer.now_ms())
        }
    }
}
