//! Error types for HAL configuration and interrupt wiring.
//!
//! The `HalError` enum covers the checks this layer can express as values:
//! timer configuration validation and interrupt-vector capacity. Clock reads
//! themselves are infallible and have no error representation.

use core::fmt;

/// Timer HAL error type.
///
/// Configuration errors mirror the compile-time checks in
/// [`config`](crate::config) so the same rules are testable at runtime
/// through [`TimerSettings`](crate::config::TimerSettings).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum HalError {
    /// Tick interval of zero; the tick-to-millisecond multiplier must be > 0
    ZeroInterval,

    /// Prescaler is zero or does not divide the kHz clock cleanly,
    /// which would skew the tick cadence
    UncleanPrescaler {
        /// CPU clock in kHz
        freq_khz: u32,
        /// Offending prescaler value
        prescaler: u32,
    },

    /// Derived top/compare value does not fit the timer's counter register
    TopOutOfRange {
        /// Derived top value
        top: u64,
        /// Largest value the counter register can hold
        max: u32,
    },

    /// Interrupt vector has no free slot for another source
    VectorFull,
}

impl fmt::Display for HalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HalError::ZeroInterval => write!(f, "Tick interval must be greater than zero"),
            HalError::UncleanPrescaler {
                freq_khz,
                prescaler,
            } => {
                write!(
                    f,
                    "Prescaler {} does not divide {} kHz cleanly",
                    prescaler, freq_khz
                )
            }
            HalError::TopOutOfRange { top, max } => {
                write!(f, "Timer top {} exceeds counter maximum {}", top, max)
            }
            HalError::VectorFull => write!(f, "Interrupt vector full"),
        }
    }
}
