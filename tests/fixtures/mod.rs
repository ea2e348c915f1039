//! Test fixtures and utilities for tick-hal testing.
//!
//! Provides:
//! - `MockClock`: Test implementation of the MillisClock trait
//! - `MockRadioDriver`: Test implementation of the IrqHandler trait
//! - `TestConfig`: Coarse-tick timer configuration for scaling tests

#![allow(dead_code)]

use core::cell::Cell;
use tick_hal::{IrqHandler, MillisClock, TimerConfig};

// ============================================================================
// MockClock - Test Clock Implementation
// ============================================================================

/// Mock millisecond clock for testing.
///
/// Manually advanced, so tests control time exactly instead of sleeping.
/// `Cell`-based interior mutability keeps `now_ms(&self)` side-effect free
/// from the trait's point of view while letting the test move time forward.
#[derive(Debug, Default)]
pub struct MockClock {
    now_ms: Cell<u32>,
}

impl MockClock {
    /// Create a clock starting at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a clock starting at a given millisecond value.
    pub fn at(now_ms: u32) -> Self {
        Self {
            now_ms: Cell::new(now_ms),
        }
    }

    /// Advance the clock by the given number of milliseconds (wrapping).
    pub fn advance(&self, ms: u32) {
        self.now_ms.set(self.now_ms.get().wrapping_add(ms));
    }

    /// Jump the clock to an absolute millisecond value.
    pub fn set(&self, now_ms: u32) {
        self.now_ms.set(now_ms);
    }
}

impl MillisClock for MockClock {
    fn now_ms(&self) -> u32 {
        self.now_ms.get()
    }
}

// ============================================================================
// MockRadioDriver - Test Interrupt Handler
// ============================================================================

/// Mock driver counting how many times its interrupt was serviced.
#[derive(Debug, Default)]
pub struct MockRadioDriver {
    pub serviced: u32,
}

impl MockRadioDriver {
    pub fn new() -> Self {
        Self::default()
    }
}

impl IrqHandler for MockRadioDriver {
    fn on_interrupt(&mut self) {
        self.serviced += 1;
    }
}

// ============================================================================
// TestConfig - Coarse-Tick Configuration
// ============================================================================

/// Configuration with a 10 ms tick, for exercising interval scaling.
///
/// TOP = ((16_000_000 / 1000) / 8) * 10 = 20_000, still within 16 bits.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct TestConfig;

impl TimerConfig for TestConfig {
    const CPU_FREQ_HZ: u32 = 16_000_000;
    const PRESCALER: u32 = 8;
    const TICK_INTERVAL_MS: u32 = 10;
    const COUNTER_BITS: u32 = 16;
}
