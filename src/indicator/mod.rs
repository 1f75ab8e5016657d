//! Indicator request types and shared subsystem state
//!
//! The value types here are consumed by the execution engine in
//! [`engine`] and produced by the event adapters in [`adapters`].

pub mod adapters;
pub mod engine;
pub mod queue;
pub mod startup;
pub mod traits;

use core::sync::atomic::{AtomicBool, Ordering};

use crate::config::patterns;

/// RGB triple for the single indicator pixel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub const OFF: Rgb = Rgb::new(0, 0, 0);
    pub const RED: Rgb = Rgb::new(255, 0, 0);
    pub const GREEN: Rgb = Rgb::new(0, 255, 0);
    pub const BLUE: Rgb = Rgb::new(0, 0, 255);
    pub const YELLOW: Rgb = Rgb::new(255, 255, 0);
    pub const MAGENTA: Rgb = Rgb::new(255, 0, 255);
    pub const CYAN: Rgb = Rgb::new(0, 255, 255);
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);
}

/// One requested indicator display, consumed exactly once by the engine.
///
/// `sequence` alternates on/off phase durations in ms: even indices are "on"
/// phases rendered in `color`, odd indices are "off" phases. `repeats == 0`
/// or an empty sequence means nothing is shown beyond the engine's implicit
/// initial off pulse.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlinkPattern {
    pub sequence: &'static [u16],
    pub repeats: u8,
    pub color: Rgb,
    /// A persistent item is a steady-state color change, not a blink; its
    /// sequence and repeats carry the conventional stay-on placeholder and
    /// are not used for timing
    pub persistent: bool,
}

impl BlinkPattern {
    /// Transient blink in `color`
    pub const fn blink(sequence: &'static [u16], repeats: u8, color: Rgb) -> Self {
        Self {
            sequence,
            repeats,
            color,
            persistent: false,
        }
    }

    /// Steady-state color change, remembered as the resting color
    pub const fn persistent(color: Rgb) -> Self {
        Self {
            sequence: patterns::STAY_ON,
            repeats: 1,
            color,
            persistent: true,
        }
    }
}

/// Marks completion of the boot indication sequence.
///
/// Single writer (the boot sequencer), read from any producer context. A
/// race between the one-time set and a concurrent read is benign: worst
/// case a handful of early events go unindicated.
pub struct ReadyFlag(AtomicBool);

impl ReadyFlag {
    pub const fn new() -> Self {
        Self(AtomicBool::new(false))
    }

    pub fn set(&self) {
        self.0.store(true, Ordering::Release);
    }

    pub fn is_set(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }
}

impl Default for ReadyFlag {
    fn default() -> Self {
        Self::new()
    }
}

/// Process-wide readiness flag consulted by the live event handlers
pub static BOOT_COMPLETE: ReadyFlag = ReadyFlag::new();
