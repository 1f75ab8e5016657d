//! One-shot boot indication task

use crate::config::IndicatorConfig;
use crate::indicator::queue::{BLINK_COMPLETE, INDICATOR_QUEUE};
use crate::indicator::startup::run_boot_sequence;
use crate::indicator::traits::{BatteryMonitor, LayerState, RadioStatus};
use crate::indicator::BOOT_COMPLETE;

use super::EmbassyDelay;

/// Run the boot indication sequence against the process-wide queue and
/// readiness flag, then return.
pub async fn init_task<B, R, K>(mut battery: B, radio: R, layers: K, config: &IndicatorConfig)
where
    B: BatteryMonitor,
    R: RadioStatus,
    K: LayerState,
{
    let mut delay = EmbassyDelay;
    run_boot_sequence(
        &INDICATOR_QUEUE.sender(),
        &BLINK_COMPLETE,
        &mut delay,
        &mut battery,
        &radio,
        &layers,
        &BOOT_COMPLETE,
        config,
    )
    .await;
}
