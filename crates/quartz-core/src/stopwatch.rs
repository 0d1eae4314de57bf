//! Elapsed-time accumulator driven by caller-supplied millisecond timestamps.

use core::{fmt::Write as _, time::Duration};

use heapless::String;

/// `"MM:SS.mmm"`.
pub const STOPWATCH_TEXT_BYTES: usize = 9;

pub type StopwatchText = String<STOPWATCH_TEXT_BYTES>;

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct StopwatchCounter {
    accumulated_ms: u64,
    started_at_ms: Option<u64>,
}

impl StopwatchCounter {
    pub const fn new() -> Self {
        Self {
            accumulated_ms: 0,
            started_at_ms: None,
        }
    }

    pub const fn is_running(&self) -> bool {
        self.started_at_ms.is_some()
    }

    pub fn start(&mut self, now_ms: u64) {
        if self.started_at_ms.is_none() {
            self.started_at_ms = Some(now_ms);
        }
    }

    pub fn stop(&mut self, now_ms: u64) {
        if let Some(started_at) = self.started_at_ms.take() {
            self.accumulated_ms = self
                .accumulated_ms
                .saturating_add(now_ms.saturating_sub(started_at));
        }
    }

    pub fn reset(&mut self) {
        self.started_at_ms = None;
        self.accumulated_ms = 0;
    }

    pub fn elapsed(&self, now_ms: u64) -> Duration {
        Duration::from_millis(self.elapsed_ms(now_ms))
    }

    /// Lap hook. Laps are not retained yet; the call exists so the button table can bind it.
    pub fn record_lap(&mut self, _now_ms: u64) {}

    /// Minutes component (hours are dropped), seconds and milliseconds.
    pub fn format(&self, now_ms: u64) -> StopwatchText {
        let total_ms = self.elapsed_ms(now_ms);
        let minutes = (total_ms / 60_000) % 60;
        let seconds = (total_ms / 1_000) % 60;
        let millis = total_ms % 1_000;

        let mut text = StopwatchText::new();
        let _ = write!(text, "{:02}:{:02}.{:03}", minutes, seconds, millis);
        text
    }

    fn elapsed_ms(&self, now_ms: u64) -> u64 {
        match self.started_at_ms {
            Some(started_at) => self
                .accumulated_ms
                .saturating_add(now_ms.saturating_sub(started_at)),
            None => self.accumulated_ms,
        }
    }
}
