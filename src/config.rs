//! Compiled-in indicator configuration
//!
//! Blink timing patterns and thresholds are fixed at build time; which
//! indications are shown at all is resolved once at startup into an
//! [`IndicatorConfig`] so the engine and boot sequencer are data-driven
//! rather than feature-gated.

use crate::indicator::Rgb;

/// Blink timing patterns, alternating on/off phase durations in ms
pub mod patterns {
    pub const LAYER: &[u16] = &[80, 120];
    pub const BATTERY_CRITICAL: &[u16] = &[40, 40];
    pub const BATTERY_HIGH: &[u16] = &[800, 200];
    pub const BATTERY_LOW: &[u16] = &[400, 200];
    /// When connected, solid blink
    pub const PROFILE_CONNECTED: &[u16] = &[800, 200];
    /// When open/unpaired, shorter blips
    pub const PROFILE_OPEN: &[u16] = &[400, 200];
    /// When unconnected, quick blinks
    pub const PROFILE_UNCONNECTED: &[u16] = &[300, 200];
    /// Placeholder sequence for persistent (non-blinking) items
    pub const STAY_ON: &[u16] = &[10];
}

/// Fixed engine and boot-sequence timing
pub mod timing {
    /// Settle pause after the initial off write, so a transition edge is
    /// visible even when consecutive items share a color
    pub const SETTLE_MS: u64 = 100;

    /// Off gap between blink repetitions
    pub const REPEAT_GAP_MS: u64 = 200;

    /// Idle pause between queue items
    pub const INTERVAL_MS: u64 = 500;

    /// Upper bound on each boot-sequence completion wait
    pub const BOOT_WAIT_MS: u64 = 5000;

    /// Retry budget for a battery source that still reports 0 at boot
    pub const BATTERY_RETRIES: u8 = 10;
    pub const BATTERY_RETRY_INTERVAL_MS: u64 = 100;
}

/// Layer color table; index = active layer number. Layers beyond the table
/// fall back to white.
pub const LAYER_COLORS: &[Rgb] = &[
    Rgb::OFF,     // Layer 0: off (default)
    Rgb::RED,     // Layer 1
    Rgb::GREEN,   // Layer 2
    Rgb::BLUE,    // Layer 3
    Rgb::YELLOW,  // Layer 4
    Rgb::MAGENTA, // Layer 5
    Rgb::CYAN,    // Layer 6
    Rgb::WHITE,   // Layer 7
];

/// Which half of the split keyboard this firmware runs on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    /// Owns the keymap and the radio profiles
    Central,
    /// No local layer concept; only reports its link state
    Peripheral,
}

/// Feature selection and thresholds, resolved once at startup
#[derive(Debug, Clone)]
pub struct IndicatorConfig {
    pub role: Role,
    /// Show the battery level indication during the boot sequence
    pub show_battery_on_boot: bool,
    /// Blink red when a battery event drops into the critical range
    pub show_critical_battery: bool,
    /// Indicate the radio link / active profile state
    pub show_radio_status: bool,
    /// Display the active layer as a persistent color (central only)
    pub show_layer_colors: bool,

    /// Battery thresholds in percent
    pub battery_high: u8,
    pub battery_low: u8,
    pub battery_critical: u8,

    /// Blink repetitions for the startup battery indication per level
    pub battery_high_repeats: u8,
    pub battery_low_repeats: u8,
    pub battery_critical_repeats: u8,

    /// Idle pause between processed queue items
    pub interval_ms: u64,

    /// Layer number to resting color mapping
    pub layer_colors: &'static [Rgb],
}

impl Default for IndicatorConfig {
    fn default() -> Self {
        Self {
            role: Role::Central,
            show_battery_on_boot: true,
            show_critical_battery: true,
            show_radio_status: true,
            show_layer_colors: true,
            battery_high: 80,
            battery_low: 30,
            battery_critical: 10,
            battery_high_repeats: 1,
            battery_low_repeats: 2,
            battery_critical_repeats: 3,
            interval_ms: timing::INTERVAL_MS,
            layer_colors: LAYER_COLORS,
        }
    }
}
