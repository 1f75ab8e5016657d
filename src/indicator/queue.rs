//! Request queue and completion signal
//!
//! A bounded mailbox of [`BlinkPattern`] requests feeds the single engine
//! task. Producers run in event-dispatch contexts and must never stall on
//! LED hardware, so `enqueue` is non-blocking and drops on overflow: under
//! an event flood the latest indications are lost rather than anyone
//! waiting. The completion signal is a single-slot presence flag the engine
//! raises once per processed item.

use embassy_futures::select::{select, Either};
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::channel::{Channel, Receiver, Sender};
use embassy_sync::signal::Signal;
use log::warn;

use super::traits::Delay;
use super::BlinkPattern;

/// Max pending requests; more are dropped
pub const QUEUE_DEPTH: usize = 6;

pub type PatternChannel = Channel<CriticalSectionRawMutex, BlinkPattern, QUEUE_DEPTH>;
pub type PatternSender<'a> = Sender<'a, CriticalSectionRawMutex, BlinkPattern, QUEUE_DEPTH>;
pub type PatternReceiver<'a> = Receiver<'a, CriticalSectionRawMutex, BlinkPattern, QUEUE_DEPTH>;
pub type CompletionSignal = Signal<CriticalSectionRawMutex, ()>;

/// Process-wide request queue, drained only by the engine task
pub static INDICATOR_QUEUE: PatternChannel = Channel::new();

/// Raised by the engine after each fully processed pattern
pub static BLINK_COMPLETE: CompletionSignal = Signal::new();

/// Queue a pattern without blocking.
///
/// Returns false when the queue is full and the request was dropped.
pub fn enqueue(sender: &PatternSender<'_>, pattern: BlinkPattern) -> bool {
    match sender.try_send(pattern) {
        Ok(()) => true,
        Err(_) => {
            warn!("indicator queue full, dropping request");
            false
        }
    }
}

/// Suspend until the engine signals completion or `timeout_ms` elapses.
///
/// Returns whether the signal was raised. Only the boot sequencer calls
/// this; live event producers stay non-blocking.
pub async fn wait_for_completion<D: Delay>(
    signal: &CompletionSignal,
    delay: &mut D,
    timeout_ms: u64,
) -> bool {
    match select(signal.wait(), delay.delay_ms(timeout_ms)).await {
        Either::First(()) => true,
        Either::Second(()) => false,
    }
}
