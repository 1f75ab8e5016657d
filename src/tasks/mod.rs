//! Embassy tasks module
//!
//! Thin wrappers binding the indicator core to real hardware: the engine
//! task that owns the LED and the one-shot boot indication task.

pub mod init;
pub mod led;

pub use init::init_task;
pub use led::indicator_task;

use embassy_time::{Duration, Timer};

use crate::indicator::traits::Delay;

/// Delay backed by the embassy time driver
pub struct EmbassyDelay;

impl Delay for EmbassyDelay {
    async fn delay_ms(&mut self, ms: u64) {
        Timer::after(Duration::from_millis(ms)).await;
    }
}
