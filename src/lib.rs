#![cfg_attr(not(test), no_std)]

//! Indicator LED subsystem for a split keyboard firmware.
//!
//! Turns discrete application events (radio-link status, battery level,
//! active keymap layer) into timed light patterns on a single addressable
//! LED. Producers enqueue pattern requests into a bounded queue and never
//! block; a dedicated engine task drains the queue and drives the LED.

pub mod config;
pub mod indicator;

// Task wrappers depend on the embassy time driver, only available with the
// embedded feature
#[cfg(feature = "embedded")]
pub mod tasks;
