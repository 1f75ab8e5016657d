//! Hardware and peripheral traits for abstraction and testability
//!
//! These traits are the subsystem's only view of the outside world: the
//! single-pixel LED primitive, the time source, and the domain state the
//! boot sequencer samples (battery, radio, keymap). Each can be swapped
//! with a mock for testing.

use core::future::Future;

use super::Rgb;

/// Errors that can occur while updating the LED
///
/// The engine never reacts to these; they exist so a real driver has
/// somewhere to put a bus error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LedError {
    /// The underlying strip driver rejected the write
    WriteFailed,
}

/// The physical LED boundary: one addressable pixel, set synchronously.
pub trait RgbLed {
    /// Immediately update the pixel to `color`
    fn set_pixel(&mut self, color: Rgb) -> impl Future<Output = Result<(), LedError>>;
}

/// Timed pause abstraction so the engine and sequencer run deterministically
/// under test.
pub trait Delay {
    fn delay_ms(&mut self, ms: u64) -> impl Future<Output = ()>;
}

/// Battery state source.
pub trait BatteryMonitor {
    /// State of charge in percent; 0 can mean "not yet sampled"
    fn state_of_charge(&mut self) -> impl Future<Output = u8>;
}

/// Radio link state as seen by the indicator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfileState {
    /// Paired and connected to a host (or, on a peripheral, to the central)
    Connected,
    /// Advertising on an open, unpaired profile
    Advertising,
    /// Paired but not currently connected
    Disconnected,
}

/// Radio status source.
pub trait RadioStatus {
    /// Zero-based index of the active profile
    fn active_profile_index(&self) -> u8;

    fn profile_state(&self) -> ProfileState;
}

/// Keymap state source.
pub trait LayerState {
    /// Highest currently-active layer number
    fn highest_active_layer(&self) -> u8;
}
