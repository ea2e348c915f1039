//! Interrupt wiring contract.
//!
//! Instead of advertising bare `extern` symbols the linker must resolve, the
//! obligation to service an interrupt is expressed in the type system: a
//! driver implements [`IrqHandler`], and the platform wires a `fn()` entry
//! point for each [`IrqSource`] into an [`IrqVector`] before enabling
//! interrupts. The platform's vector table then routes through
//! [`dispatch`](IrqVector::dispatch).
//!
//! Synchronization discipline around handler execution stays with the
//! platform's interrupt model; this module only brokers the wiring.

use crate::error::HalError;
use heapless::LinearMap;

/// Interrupt service contract for a driver.
///
/// The driver-side half of the wiring: whatever owns the peripheral
/// implements this, and the platform glue forwards the matching
/// [`IrqSource`] to it (typically via a `fn()` wrapper around a static
/// instance registered in an [`IrqVector`]).
pub trait IrqHandler {
    /// Service one interrupt. Runs in interrupt context.
    fn on_interrupt(&mut self);
}

/// Interrupt sources brokered by this HAL.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum IrqSource {
    /// SPI transfer-complete interrupt (radio front-end)
    Spi,
    /// Periodic timer compare interrupt
    Timer,
}

/// Fixed-capacity registry from interrupt source to entry point.
///
/// Registration happens during platform bring-up, before interrupts are
/// enabled; re-registering a source replaces the previous entry point.
/// Dispatch is a plain map lookup plus call, cheap enough for interrupt
/// context.
#[derive(Debug)]
pub struct IrqVector<const N: usize> {
    slots: LinearMap<IrqSource, fn(), N>,
}

impl<const N: usize> IrqVector<N> {
    /// Create an empty vector.
    pub fn new() -> Self {
        Self {
            slots: LinearMap::new(),
        }
    }

    /// Wire an entry point to an interrupt source.
    ///
    /// Replaces any previous entry point for the same source.
    ///
    /// # Returns
    ///
    /// - `Ok(())` - entry point wired
    /// - `Err(HalError::VectorFull)` - no free slot for a new source
    pub fn register(&mut self, source: IrqSource, entry: fn()) -> Result<(), HalError> {
        match self.slots.insert(source, entry) {
            Ok(_) => {
                debug!("irq entry wired");
                Ok(())
            }
            Err(_) => {
                error!("irq vector full");
                Err(HalError::VectorFull)
            }
        }
    }

    /// Remove the entry point for a source, if any.
    pub fn unregister(&mut self, source: IrqSource) -> Option<fn()> {
        self.slots.remove(&source)
    }

    /// Whether a source has an entry point wired.
    pub fn is_wired(&self, source: IrqSource) -> bool {
        self.slots.contains_key(&source)
    }

    /// Invoke the entry point for a source.
    ///
    /// Returns `true` if a handler was wired and called, `false` if the
    /// source has no entry point. Called from the platform's vector table
    /// in interrupt context.
    pub fn dispatch(&self, source: IrqSource) -> bool {
        match self.slots.get(&source) {
            Some(entry) => {
                entry();
                true
            }
            None => {
                trace!("unwired irq source");
                false
            }
        }
    }
}

impl<const N: usize> Default for IrqVector<N> {
    fn default() -> Self {
        Self::new()
    }
}
