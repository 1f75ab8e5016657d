//! Blink execution engine
//!
//! A single worker owns the LED outright, so no lock guards the pixel
//! writes. Each queue item is rendered as a timed sequence of on/off
//! writes; persistent items instead overwrite the resting color that
//! transient blinks revert to when they finish.

use log::{debug, info};

use crate::config::timing;

use super::queue::{CompletionSignal, PatternReceiver};
use super::traits::{Delay, RgbLed};
use super::{BlinkPattern, Rgb};

/// Single-consumer state machine draining the request queue.
pub struct IndicatorEngine<'a, L, D> {
    queue: PatternReceiver<'a>,
    complete: &'a CompletionSignal,
    led: L,
    delay: D,
    /// The color the LED rests at between transient blinks; written only
    /// when a persistent item is processed
    resting: Rgb,
    interval_ms: u64,
}

impl<'a, L: RgbLed, D: Delay> IndicatorEngine<'a, L, D> {
    pub fn new(
        queue: PatternReceiver<'a>,
        complete: &'a CompletionSignal,
        led: L,
        delay: D,
        interval_ms: u64,
    ) -> Self {
        Self {
            queue,
            complete,
            led,
            delay,
            resting: Rgb::OFF,
            interval_ms,
        }
    }

    /// Current resting color
    pub fn resting_color(&self) -> Rgb {
        self.resting
    }

    /// Drain the queue forever.
    pub async fn run(mut self) {
        info!("indicator engine started");
        loop {
            self.process_next().await;
        }
    }

    /// Process exactly one queue item: render it, raise the completion
    /// signal, then idle for the inter-item interval.
    pub async fn process_next(&mut self) {
        let item = self.queue.receive().await;
        debug!("rendering indicator request: {:?}", item);

        self.render(item).await;
        self.complete.signal(());

        self.delay.delay_ms(self.interval_ms).await;
    }

    async fn render(&mut self, item: BlinkPattern) {
        // Initial off pulse for every item, so a transition edge is visible
        // even when consecutive items share a color. LED write failures are
        // never surfaced; the pattern timing proceeds regardless.
        let _ = self.led.set_pixel(Rgb::OFF).await;
        self.delay.delay_ms(timing::SETTLE_MS).await;

        if item.persistent {
            self.resting = item.color;
            let _ = self.led.set_pixel(item.color).await;
            return;
        }

        if item.repeats == 0 || item.sequence.is_empty() {
            // nothing to show beyond the off pulse
            return;
        }

        for rep in 0..item.repeats {
            for (i, &phase_ms) in item.sequence.iter().enumerate() {
                // on for evens (0 == start), off for odds
                let color = if i % 2 == 0 { item.color } else { Rgb::OFF };
                let _ = self.led.set_pixel(color).await;
                self.delay.delay_ms(u64::from(phase_ms)).await;
            }
            if rep + 1 < item.repeats {
                let _ = self.led.set_pixel(Rgb::OFF).await;
                self.delay.delay_ms(timing::REPEAT_GAP_MS).await;
            }
        }

        // Revert to whatever the resting color is now, not what it was when
        // this item was enqueued; a persistent item earlier in the queue may
        // have changed it.
        let _ = self.led.set_pixel(self.resting).await;
    }
}
