//! # tick-hal
//!
//! Lightweight timer hardware-abstraction library for embedded systems.
//!
//! **Key features:**
//! - **Injected clock** - Millisecond time source as a trait, testable with fakes
//! - **Const configuration** - Prescaler/top values derived and checked at compile time
//! - **Explicit interrupt wiring** - Registration contract instead of bare extern symbols
//! - **Zero heap usage** - Fixed-capacity registries, no allocation
//!
//! A higher-level protocol stack (e.g. a LoRa MAC) reads elapsed milliseconds
//! through [`HalTimer`] and programs its hardware timer from the constants a
//! [`TimerConfig`] derives, without touching chip-specific code directly.
//!
//! ## Optional Features
//!
//! - `log` - Route internal trace output through the `log` facade
//! - `defmt` - Route internal trace output through `defmt`
//!
//! This library is `no_std` compatible.

#![no_std]
#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

extern crate heapless;

// Logging shim; must come first so the macros are in scope everywhere.
mod fmt;

// ============================================================================
// Module Declarations
// ============================================================================

pub mod clock;
pub mod config;
pub mod error;
pub mod irq;
pub mod timer;

// ============================================================================
// Re-exports - Public API
// ============================================================================

// Clock capability
pub use clock::{MillisClock, TickCounter};

// Configuration
pub use config::{Avr8MhzConfig, Avr16MhzConfig, TimerConfig, TimerSettings};

// Error types
pub use error::HalError;

// Interrupt wiring
pub use irq::{IrqHandler, IrqSource, IrqVector};

// Timer facade
pub use timer::{Deadline, HalTimer};

// ============================================================================
// Library Metadata
// ============================================================================

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

// ============================================================================
// Tests
// ============================================================================
