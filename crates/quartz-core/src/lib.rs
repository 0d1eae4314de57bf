#![cfg_attr(not(test), no_std)]

//! Hardware-independent core of a four-button clock / stopwatch / alarm watch.
//!
//! [`watch::Watch`] owns all timekeeping state and is driven by two callback
//! families: button presses and periodic ticks. It pushes state into a
//! [`display::DisplayAdapter`] and starts/stops its own tick sources through a
//! [`tick::TickScheduler`].

pub mod alarm;
pub mod display;
pub mod input;
pub mod stopwatch;
pub mod tick;
pub mod time_value;
pub mod watch;
