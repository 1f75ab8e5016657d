//! Boot indication sequencer
//!
//! One-shot, strictly ordered: battery level first, radio link second, so
//! the two indications never visually interleave; then the resting layer
//! color, then the readiness flag that un-gates the live event handlers.
//! Each wait is bounded and a timeout only logs; boot never hangs on the
//! LED.

use log::{debug, info, warn};

use crate::config::{timing, IndicatorConfig, Role};

use super::adapters;
use super::queue::{enqueue, wait_for_completion, CompletionSignal, PatternSender};
use super::traits::{BatteryMonitor, Delay, LayerState, RadioStatus};
use super::{BlinkPattern, ReadyFlag, Rgb};

/// Run the fixed boot indication sequence, then mark the subsystem ready.
#[allow(clippy::too_many_arguments)]
pub async fn run_boot_sequence<B, R, K, D>(
    sender: &PatternSender<'_>,
    complete: &CompletionSignal,
    delay: &mut D,
    battery: &mut B,
    radio: &R,
    layers: &K,
    ready: &ReadyFlag,
    config: &IndicatorConfig,
) where
    B: BatteryMonitor,
    R: RadioStatus,
    K: LayerState,
    D: Delay,
{
    info!("starting boot indication sequence");

    if config.show_battery_on_boot {
        let level = sample_battery(battery, delay).await;
        enqueue(sender, adapters::startup_battery_indication(level, config));
        if !wait_for_completion(complete, delay, timing::BOOT_WAIT_MS).await {
            warn!("battery indication timeout");
        }
    }

    if config.show_radio_status {
        let pattern = match config.role {
            Role::Central => {
                adapters::profile_indication(radio.profile_state(), radio.active_profile_index())
            }
            Role::Peripheral => adapters::peripheral_indication(radio.profile_state()),
        };
        enqueue(sender, pattern);
        if !wait_for_completion(complete, delay, timing::BOOT_WAIT_MS).await {
            warn!("radio indication timeout");
        }
    }

    // Resting state: the active layer's color on the central, dark on the
    // peripheral. Not waited on.
    let resting = match config.role {
        Role::Central if config.show_layer_colors => {
            adapters::layer_indication(layers.highest_active_layer(), config)
        }
        _ => BlinkPattern::persistent(Rgb::OFF),
    };
    enqueue(sender, resting);

    ready.set();
    info!("boot indication sequence complete");
}

/// Sample the battery, retrying while the fuel gauge still reports 0.
async fn sample_battery<B: BatteryMonitor, D: Delay>(battery: &mut B, delay: &mut D) -> u8 {
    let mut level = battery.state_of_charge().await;
    let mut retry = 0;
    while level == 0 && retry < timing::BATTERY_RETRIES {
        retry += 1;
        debug!("battery level is 0, retrying {}/{}", retry, timing::BATTERY_RETRIES);
        delay.delay_ms(timing::BATTERY_RETRY_INTERVAL_MS).await;
        level = battery.state_of_charge().await;
    }
    level
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::patterns;
    use crate::indicator::queue::PatternChannel;
    use crate::indicator::traits::mock::{MockBattery, MockDelay, MockLayers, MockRadio, TraceLog};
    use crate::indicator::traits::ProfileState;
    use futures::executor::block_on;

    struct Fixture {
        channel: PatternChannel,
        signal: CompletionSignal,
        log: TraceLog,
        ready: ReadyFlag,
    }

    impl Fixture {
        fn new() -> Self {
            Self {
                channel: PatternChannel::new(),
                signal: CompletionSignal::new(),
                log: TraceLog::new(),
                ready: ReadyFlag::new(),
            }
        }

        fn run(&self, battery: &mut MockBattery, radio: &MockRadio, config: &IndicatorConfig) {
            let layers = MockLayers { layer: 2 };
            let mut delay = MockDelay::new(&self.log);
            block_on(run_boot_sequence(
                &self.channel.sender(),
                &self.signal,
                &mut delay,
                battery,
                radio,
                &layers,
                &self.ready,
                config,
            ));
        }
    }

    #[test]
    fn test_timeouts_do_not_block_later_steps() {
        let fx = Fixture::new();
        let config = IndicatorConfig::default();
        let mut battery = MockBattery::new(&[90]);
        let radio = MockRadio {
            state: ProfileState::Connected,
            profile: 0,
        };

        // nothing drains the queue and nothing raises the signal, so both
        // waits time out; the sequence must still run to the end
        fx.run(&mut battery, &radio, &config);

        assert_eq!(fx.log.sleep_count(timing::BOOT_WAIT_MS), 2);

        let battery_item = fx.channel.try_receive().unwrap();
        assert_eq!(battery_item.color, Rgb::GREEN);

        let radio_item = fx.channel.try_receive().unwrap();
        assert_eq!(radio_item.color, Rgb::BLUE);

        // layer 2 maps to green in the default table
        let resting = fx.channel.try_receive().unwrap();
        assert!(resting.persistent);
        assert_eq!(resting.color, Rgb::GREEN);

        assert!(fx.ready.is_set());
    }

    #[test]
    fn test_battery_stuck_at_zero_enqueues_fallback() {
        let fx = Fixture::new();
        let config = IndicatorConfig::default();
        let mut battery = MockBattery::new(&[0]);
        let radio = MockRadio {
            state: ProfileState::Disconnected,
            profile: 1,
        };

        fx.run(&mut battery, &radio, &config);

        // full retry budget spent at 100 ms apart
        assert_eq!(fx.log.sleep_count(timing::BATTERY_RETRY_INTERVAL_MS), 10);

        // the fallback is a real indication, not a suppressed one
        let battery_item = fx.channel.try_receive().unwrap();
        assert_eq!(battery_item.color, Rgb::GREEN);
        assert_eq!(battery_item.sequence, patterns::BATTERY_HIGH);
        assert_eq!(battery_item.repeats, 1);
    }

    #[test]
    fn test_battery_recovers_during_retries() {
        let fx = Fixture::new();
        let config = IndicatorConfig::default();
        let mut battery = MockBattery::new(&[0, 0, 85]);
        let radio = MockRadio {
            state: ProfileState::Connected,
            profile: 0,
        };

        fx.run(&mut battery, &radio, &config);

        assert_eq!(fx.log.sleep_count(timing::BATTERY_RETRY_INTERVAL_MS), 2);
        let battery_item = fx.channel.try_receive().unwrap();
        assert_eq!(battery_item.color, Rgb::GREEN);
        assert_eq!(battery_item.repeats, config.battery_high_repeats);
    }

    #[test]
    fn test_peripheral_boot_sequence() {
        let fx = Fixture::new();
        let config = IndicatorConfig {
            role: Role::Peripheral,
            ..IndicatorConfig::default()
        };
        let mut battery = MockBattery::new(&[50]);
        let radio = MockRadio {
            state: ProfileState::Disconnected,
            profile: 0,
        };

        fx.run(&mut battery, &radio, &config);

        // middle-range battery: empty pattern, still enqueued
        let battery_item = fx.channel.try_receive().unwrap();
        assert_eq!(battery_item.repeats, 0);

        let radio_item = fx.channel.try_receive().unwrap();
        assert_eq!(radio_item.color, Rgb::RED);
        assert_eq!(radio_item.repeats, 10);

        // peripherals rest dark, not on a layer color
        let resting = fx.channel.try_receive().unwrap();
        assert!(resting.persistent);
        assert_eq!(resting.color, Rgb::OFF);
        assert!(fx.ready.is_set());
    }

    #[test]
    fn test_steps_gated_by_config() {
        let fx = Fixture::new();
        let config = IndicatorConfig {
            show_battery_on_boot: false,
            show_radio_status: false,
            ..IndicatorConfig::default()
        };
        let mut battery = MockBattery::new(&[90]);
        let radio = MockRadio {
            state: ProfileState::Connected,
            profile: 0,
        };

        fx.run(&mut battery, &radio, &config);

        // only the resting layer color is issued
        let resting = fx.channel.try_receive().unwrap();
        assert!(resting.persistent);
        assert!(fx.channel.try_receive().is_err());
        assert!(fx.ready.is_set());
        // and no bounded waits happened
        assert_eq!(fx.log.sleep_count(timing::BOOT_WAIT_MS), 0);
    }

    #[test]
    fn test_completed_indication_consumes_signal() {
        let fx = Fixture::new();
        let config = IndicatorConfig {
            show_radio_status: false,
            ..IndicatorConfig::default()
        };
        let mut battery = MockBattery::new(&[90]);
        let radio = MockRadio {
            state: ProfileState::Connected,
            profile: 0,
        };

        // pretend the engine already finished the battery item
        fx.signal.signal(());
        fx.run(&mut battery, &radio, &config);

        // the wait consumed the raise instead of timing out
        assert_eq!(fx.log.sleep_count(timing::BOOT_WAIT_MS), 0);
        assert!(!fx.signal.signaled());
    }
}
