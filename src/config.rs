//! Compile-time timer configuration.
//!
//! The `TimerConfig` trait carries the numbers a platform needs to program a
//! hardware timer for a fixed millisecond cadence: CPU clock, prescaler, tick
//! interval, and counter width. The top/compare value is derived, not written
//! by hand, and an out-of-range result fails const evaluation instead of
//! silently truncating to the counter width.
//!
//! [`TimerSettings`] is the runtime-carried equivalent for code paths that
//! want the same rules as `Result` values (e.g. validating numbers read from
//! a descriptor rather than baked into the build).

use crate::error::HalError;

/// Largest value a counter register of `bits` width can hold.
pub const fn counter_max(bits: u32) -> u32 {
    if bits >= 32 {
        u32::MAX
    } else {
        (1u32 << bits) - 1
    }
}

/// Derive the timer top/compare value for one tick period.
///
/// `((cpu_freq_hz / 1000) / prescaler) * interval_ms`, computed in unsigned
/// integer arithmetic. For 16 MHz, prescaler 8, 1 ms this is 2000.
///
/// # Panics
///
/// At const evaluation (and therefore at build time when used for an
/// associated const) if the interval is zero, the prescaler is zero or does
/// not divide the kHz clock cleanly, or the result does not fit a counter of
/// `counter_bits` width.
pub const fn timer_top(
    cpu_freq_hz: u32,
    prescaler: u32,
    interval_ms: u32,
    counter_bits: u32,
) -> u32 {
    assert!(interval_ms > 0, "tick interval must be > 0");
    assert!(prescaler > 0, "prescaler must be > 0");
    let freq_khz = cpu_freq_hz / 1000;
    assert!(
        freq_khz % prescaler == 0,
        "prescaler must divide the kHz clock cleanly"
    );
    let top = (freq_khz / prescaler) as u64 * interval_ms as u64;
    assert!(
        top <= counter_max(counter_bits) as u64,
        "timer top exceeds counter width"
    );
    top as u32
}

/// Timer configuration trait defining clocking constants for one platform.
///
/// All values are const (zero runtime cost). Implementations name the CPU
/// clock, prescaler, tick interval, and counter width; [`TOP`](Self::TOP) is
/// derived and range-checked at compile time.
pub trait TimerConfig {
    /// CPU clock frequency in Hz
    const CPU_FREQ_HZ: u32;

    /// Hardware timer clock divider; must divide `CPU_FREQ_HZ / 1000` cleanly
    const PRESCALER: u32;

    /// Tick-to-millisecond multiplier; must be > 0
    const TICK_INTERVAL_MS: u32;

    /// Width of the timer's counter register in bits (commonly 8 or 16)
    const COUNTER_BITS: u32;

    /// Compare/reload value for one tick period.
    ///
    /// Derived from the constants above; a configuration whose top does not
    /// fit `COUNTER_BITS` fails to build when this const is used.
    const TOP: u32 = timer_top(
        Self::CPU_FREQ_HZ,
        Self::PRESCALER,
        Self::TICK_INTERVAL_MS,
        Self::COUNTER_BITS,
    );
}

/// Configuration for 16 MHz AVR-class targets.
///
/// The reference configuration of the original Arduino port:
/// - CPU_FREQ_HZ: 16 MHz
/// - PRESCALER: 8
/// - TICK_INTERVAL_MS: 1 ms
/// - COUNTER_BITS: 16 (Timer1-style counter)
/// - derived TOP: 2000
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Avr16MhzConfig;

impl TimerConfig for Avr16MhzConfig {
    const CPU_FREQ_HZ: u32 = 16_000_000;
    const PRESCALER: u32 = 8;
    const TICK_INTERVAL_MS: u32 = 1;
    const COUNTER_BITS: u32 = 16;
}

/// Configuration for 8 MHz (internal oscillator) AVR-class targets.
///
/// Same cadence and prescaler at half the clock:
/// - CPU_FREQ_HZ: 8 MHz
/// - PRESCALER: 8
/// - TICK_INTERVAL_MS: 1 ms
/// - COUNTER_BITS: 16
/// - derived TOP: 1000
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Avr8MhzConfig;

impl TimerConfig for Avr8MhzConfig {
    const CPU_FREQ_HZ: u32 = 8_000_000;
    const PRESCALER: u32 = 8;
    const TICK_INTERVAL_MS: u32 = 1;
    const COUNTER_BITS: u32 = 16;
}

/// Runtime-carried timer settings with fallible validation.
///
/// Same numbers as a [`TimerConfig`], for contexts where they are not known
/// at build time. [`top`](TimerSettings::top) applies the same rules as
/// [`timer_top`] but reports violations as [`HalError`] values.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TimerSettings {
    /// CPU clock frequency in Hz
    pub cpu_freq_hz: u32,
    /// Hardware timer clock divider
    pub prescaler: u32,
    /// Tick-to-millisecond multiplier
    pub tick_interval_ms: u32,
    /// Width of the timer's counter register in bits
    pub counter_bits: u32,
}

impl TimerSettings {
    /// Capture the constants of a [`TimerConfig`] as runtime values.
    pub const fn from_config<F: TimerConfig>() -> Self {
        Self {
            cpu_freq_hz: F::CPU_FREQ_HZ,
            prescaler: F::PRESCALER,
            tick_interval_ms: F::TICK_INTERVAL_MS,
            counter_bits: F::COUNTER_BITS,
        }
    }

    /// Derive and validate the top/compare value.
    ///
    /// # Returns
    ///
    /// - `Ok(top)` - value fits the counter register
    /// - `Err(HalError::ZeroInterval)` - tick interval is zero
    /// - `Err(HalError::UncleanPrescaler)` - prescaler is zero or skews the cadence
    /// - `Err(HalError::TopOutOfRange)` - value does not fit `counter_bits`
    pub fn top(&self) -> Result<u32, HalError> {
        if self.tick_interval_ms == 0 {
            return Err(HalError::ZeroInterval);
        }
        let freq_khz = self.cpu_freq_hz / 1000;
        if self.prescaler == 0 || freq_khz % self.prescaler != 0 {
            return Err(HalError::UncleanPrescaler {
                freq_khz,
                prescaler: self.prescaler,
            });
        }
        let top = (freq_khz / self.prescaler) as u64 * self.tick_interval_ms as u64;
        let max = counter_max(self.counter_bits);
        if top > max as u64 {
            warn!("timer top out of range: {} > {}", top, max);
            return Err(HalError::TopOutOfRange { top, max });
        }
        Ok(top as u32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counter_max() {
        assert_eq!(counter_max(8), 255);
        assert_eq!(counter_max(16), 65_535);
        assert_eq!(counter_max(32), u32::MAX);
    }

    #[test]
    fn test_top_derivation_16mhz() {
        // ((16_000_000 / 1000) / 8) * 1 = 2000
        assert_eq!(Avr16MhzConfig::TOP, 2000);
    }

    #[test]
    fn test_top_derivation_8mhz() {
        assert_eq!(Avr8MhzConfig::TOP, 1000);
    }

    #[test]
    fn test_reference_constants() {
        assert_eq!(Avr16MhzConfig::PRESCALER, 8);
        assert_eq!(Avr16MhzConfig::TICK_INTERVAL_MS, 1);
        assert_eq!(Avr8MhzConfig::PRESCALER, 8);
        assert_eq!(Avr8MhzConfig::TICK_INTERVAL_MS, 1);
    }

    #[test]
    fn test_settings_match_config() {
        let settings = TimerSettings::from_config::<Avr16MhzConfig>();
        assert_eq!(settings.top(), Ok(2000));
        assert_eq!(settings.top().unwrap(), Avr16MhzConfig::TOP);
    }

    #[test]
    fn test_settings_reject_zero_interval() {
        let mut settings = TimerSettings::from_config::<Avr16MhzConfig>();
        settings.tick_interval_ms = 0;
        assert_eq!(settings.top(), Err(HalError::ZeroInterval));
    }

    #[test]
    fn test_settings_reject_unclean_prescaler() {
        let mut settings = TimerSettings::from_config::<Avr16MhzConfig>();
        settings.prescaler = 7;
        assert_eq!(
            settings.top(),
            Err(HalError::UncleanPrescaler {
                freq_khz: 16_000,
                prescaler: 7,
            })
        );

        settings.prescaler = 0;
        assert_eq!(
            settings.top(),
            Err(HalError::UncleanPrescaler {
                freq_khz: 16_000,
                prescaler: 0,
            })
        );
    }

    #[test]
    fn test_settings_reject_top_out_of_range() {
        // An 8-bit counter cannot hold a top of 2000.
        let mut settings = TimerSettings::from_config::<Avr16MhzConfig>();
        settings.counter_bits = 8;
        assert_eq!(
            settings.top(),
            Err(HalError::TopOutOfRange {
                top: 2000,
                max: 255,
            })
        );
    }

    #[test]
    fn test_const_fn_matches_runtime_path() {
        assert_eq!(timer_top(16_000_000, 8, 1, 16), 2000);
        assert_eq!(timer_top(8_000_000, 8, 1, 16), 1000);
        // A coarser tick scales the top linearly.
        assert_eq!(timer_top(16_000_000, 8, 10, 16), 20_000);
    }
}
