//! Watch state machine: clock, stopwatch and alarm behind four buttons.

mod table;


pub use table::{Mode, ModeClass, Operation, TRANSITIONS, Transition, transition};

use log::{debug, info, trace};

use crate::{
    alarm::AlarmUnit,
    display::{Background, DisplayAdapter},
    input::{Button, InputProvider},
    stopwatch::StopwatchCounter,
    tick::{TickKind, TickScheduler},
    time_value::{TimeValue, WrapEvent},
};

const LIGHT_TIMEOUT_MS: u64 = 3_000;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct WatchConfig {
    pub clock_seed: TimeValue,
    pub alarm_seed: TimeValue,
    pub military: bool,
    pub light_timeout_ms: u64,
}

impl Default for WatchConfig {
    fn default() -> Self {
        Self {
            clock_seed: TimeValue::from_hms(12, 59, 58),
            alarm_seed: TimeValue::from_hms(7, 30, 0),
            military: false,
            light_timeout_ms: LIGHT_TIMEOUT_MS,
        }
    }
}

impl WatchConfig {
    pub const fn with_clock_seed(mut self, clock_seed: TimeValue) -> Self {
        self.clock_seed = clock_seed;
        self
    }

    pub const fn with_alarm_seed(mut self, alarm_seed: TimeValue) -> Self {
        self.alarm_seed = alarm_seed;
        self
    }

    pub const fn with_military(mut self, military: bool) -> Self {
        self.military = military;
        self
    }
}

pub struct Watch<D, S>
where
    D: DisplayAdapter,
    S: TickScheduler,
{
    display: D,
    scheduler: S,
    config: WatchConfig,
    mode: Mode,
    clock: TimeValue,
    alarm: AlarmUnit,
    stopwatch: StopwatchCounter,
    is_military: bool,
    is_lit: bool,
    light_started_at_ms: u64,
    clock_refresh: bool,
    alert_on: bool,
}

impl<D, S> Watch<D, S>
where
    D: DisplayAdapter,
    S: TickScheduler,
{
    pub fn new(display: D, scheduler: S, config: WatchConfig) -> Self {
        Self {
            display,
            scheduler,
            config,
            mode: Mode::ClockDisplay,
            clock: config.clock_seed,
            alarm: AlarmUnit::new(config.alarm_seed),
            stopwatch: StopwatchCounter::new(),
            is_military: config.military,
            is_lit: false,
            light_started_at_ms: 0,
            clock_refresh: true,
            alert_on: false,
        }
    }

    /// Starts the always-on tick sources and draws the first frame.
    pub fn power_on(&mut self, now_ms: u64) {
        info!(
            "watch: power on at {} (military={})",
            self.clock.format(self.is_military).as_str(),
            self.is_military
        );
        self.scheduler.start(TickKind::Second, now_ms);
        self.scheduler.start(TickKind::LightTimeout, now_ms);
        self.display.set_background(Background::Normal);
        self.enter_mode(self.mode);
        self.render_current(now_ms);
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn clock(&self) -> TimeValue {
        self.clock
    }

    pub fn alarm(&self) -> &AlarmUnit {
        &self.alarm
    }

    pub fn stopwatch(&self) -> &StopwatchCounter {
        &self.stopwatch
    }

    pub fn is_military(&self) -> bool {
        self.is_military
    }

    pub fn is_lit(&self) -> bool {
        self.is_lit
    }

    pub fn config(&self) -> WatchConfig {
        self.config
    }

    pub fn display(&self) -> &D {
        &self.display
    }

    pub fn display_mut(&mut self) -> &mut D {
        &mut self.display
    }

    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    pub fn scheduler_mut(&mut self) -> &mut S {
        &mut self.scheduler
    }
}

include!("buttons.rs");
include!("ticks.rs");
include!("entry.rs");
