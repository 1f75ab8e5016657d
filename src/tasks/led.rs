//! Indicator engine task
//!
//! Single consumer of the request queue; the only context that ever
//! touches the LED.

use crate::config::IndicatorConfig;
use crate::indicator::engine::IndicatorEngine;
use crate::indicator::queue::{BLINK_COMPLETE, INDICATOR_QUEUE};
use crate::indicator::traits::RgbLed;

use super::EmbassyDelay;

/// Drain the process-wide indicator queue forever.
pub async fn indicator_task<L: RgbLed>(led: L, config: &IndicatorConfig) {
    IndicatorEngine::new(
        INDICATOR_QUEUE.receiver(),
        &BLINK_COMPLETE,
        led,
        EmbassyDelay,
        config.interval_ms,
    )
    .run()
    .await;
}
