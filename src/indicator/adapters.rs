//! Event adapters
//!
//! Pure mappings from domain state (battery charge, radio profile state,
//! active layer) to [`BlinkPattern`] requests, plus the thin live-event
//! handlers whose only side effect is the enqueue. Handlers consult the
//! readiness flag and silently drop events that fire before the boot
//! indication sequence has finished.

use log::info;

use crate::config::{patterns, IndicatorConfig, Role};

use super::queue::{enqueue, PatternSender};
use super::traits::{ProfileState, RadioStatus};
use super::{BlinkPattern, ReadyFlag, Rgb};

/// Startup battery mapping: green for high, yellow for low, red for
/// critical, nothing for the middle range.
///
/// A reading of 0 means the fuel gauge never produced a sample despite the
/// boot retries; indicate a default green blink rather than staying dark.
pub fn startup_battery_indication(level: u8, config: &IndicatorConfig) -> BlinkPattern {
    if level == 0 {
        info!("battery level undetermined, using default green blink");
        BlinkPattern::blink(patterns::BATTERY_HIGH, 1, Rgb::GREEN)
    } else if level >= config.battery_high {
        BlinkPattern::blink(patterns::BATTERY_HIGH, config.battery_high_repeats, Rgb::GREEN)
    } else if level <= config.battery_critical {
        BlinkPattern::blink(
            patterns::BATTERY_CRITICAL,
            config.battery_critical_repeats,
            Rgb::RED,
        )
    } else if level <= config.battery_low {
        BlinkPattern::blink(patterns::BATTERY_LOW, config.battery_low_repeats, Rgb::YELLOW)
    } else {
        info!("battery level {} in middle range, no blink", level);
        BlinkPattern::blink(&[], 0, Rgb::OFF)
    }
}

/// Live battery events only indicate the drop into the critical range.
pub fn critical_battery_indication(level: u8, config: &IndicatorConfig) -> Option<BlinkPattern> {
    if level > 0 && level <= config.battery_critical {
        Some(BlinkPattern::blink(patterns::BATTERY_CRITICAL, 1, Rgb::RED))
    } else {
        None
    }
}

/// Central-side radio mapping: the blink count names the active profile
/// (profile 0 blinks once), the color names its state.
pub fn profile_indication(state: ProfileState, profile_index: u8) -> BlinkPattern {
    let repeats = profile_index.saturating_add(1);
    match state {
        ProfileState::Connected => {
            BlinkPattern::blink(patterns::PROFILE_CONNECTED, repeats, Rgb::BLUE)
        }
        ProfileState::Advertising => {
            BlinkPattern::blink(patterns::PROFILE_OPEN, repeats, Rgb::YELLOW)
        }
        ProfileState::Disconnected => {
            BlinkPattern::blink(patterns::PROFILE_UNCONNECTED, repeats, Rgb::RED)
        }
    }
}

/// Peripheral-side radio mapping: one blue blink when linked to the
/// central, an insistent red blink when not.
pub fn peripheral_indication(state: ProfileState) -> BlinkPattern {
    match state {
        ProfileState::Connected => BlinkPattern::blink(patterns::PROFILE_CONNECTED, 1, Rgb::BLUE),
        _ => BlinkPattern::blink(patterns::PROFILE_UNCONNECTED, 10, Rgb::RED),
    }
}

/// Persistent resting color for the active layer; out-of-range layers fall
/// back to white instead of indexing past the table.
pub fn layer_indication(layer: u8, config: &IndicatorConfig) -> BlinkPattern {
    let color = config
        .layer_colors
        .get(usize::from(layer))
        .copied()
        .unwrap_or(Rgb::WHITE);
    BlinkPattern::persistent(color)
}

/// Battery state change handler. Returns whether an indication was queued.
pub fn handle_battery_event(
    level: u8,
    config: &IndicatorConfig,
    sender: &PatternSender<'_>,
    ready: &ReadyFlag,
) -> bool {
    if !ready.is_set() || !config.show_critical_battery {
        return false;
    }
    match critical_battery_indication(level, config) {
        Some(pattern) => {
            info!("battery level {} critical, blinking red", level);
            enqueue(sender, pattern)
        }
        None => false,
    }
}

/// Radio status change handler.
pub fn handle_radio_event<R: RadioStatus>(
    radio: &R,
    config: &IndicatorConfig,
    sender: &PatternSender<'_>,
    ready: &ReadyFlag,
) -> bool {
    if !ready.is_set() || !config.show_radio_status {
        return false;
    }
    let pattern = match config.role {
        Role::Central => {
            profile_indication(radio.profile_state(), radio.active_profile_index())
        }
        Role::Peripheral => peripheral_indication(radio.profile_state()),
    };
    enqueue(sender, pattern)
}

/// Layer state change handler; only the central half has a keymap.
pub fn handle_layer_event(
    layer: u8,
    config: &IndicatorConfig,
    sender: &PatternSender<'_>,
    ready: &ReadyFlag,
) -> bool {
    if !ready.is_set() || !config.show_layer_colors || config.role != Role::Central {
        return false;
    }
    info!("changed to layer {}, setting color", layer);
    enqueue(sender, layer_indication(layer, config))
}
