//! Static `(mode, button) -> (operation, next mode)` table.

use crate::input::Button;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Mode {
    ClockDisplay,
    HourSet,
    MinSet,
    SecSet,
    StopwatchStopped,
    StopwatchRunning,
    AlarmDisplay,
    AlarmHourSet,
    AlarmMinSet,
    AlarmSecSet,
}

/// Groups of modes that share a mode-entry routine.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ModeClass {
    ClockDisplay,
    ClockSet,
    Stopwatch,
    Alarm,
}

impl Mode {
    pub const COUNT: usize = 10;
    pub const ALL: [Self; Self::COUNT] = [
        Self::ClockDisplay,
        Self::HourSet,
        Self::MinSet,
        Self::SecSet,
        Self::StopwatchStopped,
        Self::StopwatchRunning,
        Self::AlarmDisplay,
        Self::AlarmHourSet,
        Self::AlarmMinSet,
        Self::AlarmSecSet,
    ];

    pub const fn index(self) -> usize {
        self as usize
    }

    pub const fn class(self) -> ModeClass {
        match self {
            Self::ClockDisplay => ModeClass::ClockDisplay,
            Self::HourSet | Self::MinSet | Self::SecSet => ModeClass::ClockSet,
            Self::StopwatchStopped | Self::StopwatchRunning => ModeClass::Stopwatch,
            Self::AlarmDisplay | Self::AlarmHourSet | Self::AlarmMinSet | Self::AlarmSecSet => {
                ModeClass::Alarm
            }
        }
    }

    /// Clock display and the three clock edit modes.
    pub const fn shows_clock(self) -> bool {
        self.index() < Self::StopwatchStopped.index()
    }
}

/// Side effect bound to a table cell.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Operation {
    Noop,
    Light,
    ToggleMilitary,
    IncHour,
    DecHour,
    IncMinute,
    DecMinute,
    IncSecond,
    DecSecond,
    StartStopwatch,
    StopStopwatch,
    ResetStopwatch,
    RecordLap,
    ToggleAlarm,
    IncAlarmHour,
    DecAlarmHour,
    IncAlarmMinute,
    DecAlarmMinute,
    IncAlarmSecond,
    DecAlarmSecond,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Transition {
    pub operation: Operation,
    pub next: Mode,
}

const fn t(operation: Operation, next: Mode) -> Transition {
    Transition { operation, next }
}

use Mode as M;
use Operation as Op;

/// Rows follow [`Mode::ALL`], columns follow [`Button::ALL`].
pub const TRANSITIONS: [[Transition; Button::COUNT]; Mode::COUNT] = [
    [
        t(Op::Light, M::ClockDisplay),
        t(Op::ToggleMilitary, M::ClockDisplay),
        t(Op::Noop, M::HourSet),
        t(Op::Noop, M::StopwatchStopped),
    ],
    [
        t(Op::Light, M::HourSet),
        t(Op::IncHour, M::HourSet),
        t(Op::DecHour, M::HourSet),
        t(Op::Noop, M::MinSet),
    ],
    [
        t(Op::Light, M::MinSet),
        t(Op::IncMinute, M::MinSet),
        t(Op::DecMinute, M::MinSet),
        t(Op::Noop, M::SecSet),
    ],
    [
        t(Op::Light, M::SecSet),
        t(Op::IncSecond, M::SecSet),
        t(Op::DecSecond, M::SecSet),
        t(Op::Noop, M::ClockDisplay),
    ],
    [
        t(Op::Light, M::StopwatchStopped),
        t(Op::StartStopwatch, M::StopwatchRunning),
        t(Op::ResetStopwatch, M::StopwatchStopped),
        t(Op::Noop, M::AlarmDisplay),
    ],
    [
        t(Op::Light, M::StopwatchRunning),
        t(Op::StopStopwatch, M::StopwatchStopped),
        t(Op::RecordLap, M::StopwatchRunning),
        t(Op::Noop, M::StopwatchRunning),
    ],
    [
        t(Op::Light, M::AlarmDisplay),
        t(Op::ToggleAlarm, M::AlarmDisplay),
        t(Op::Noop, M::AlarmHourSet),
        t(Op::Noop, M::ClockDisplay),
    ],
    [
        t(Op::Light, M::AlarmHourSet),
        t(Op::IncAlarmHour, M::AlarmHourSet),
        t(Op::DecAlarmHour, M::AlarmHourSet),
        t(Op::Noop, M::AlarmMinSet),
    ],
    [
        t(Op::Light, M::AlarmMinSet),
        t(Op::IncAlarmMinute, M::AlarmMinSet),
        t(Op::DecAlarmMinute, M::AlarmMinSet),
        t(Op::Noop, M::AlarmSecSet),
    ],
    [
        t(Op::Light, M::AlarmSecSet),
        t(Op::IncAlarmSecond, M::AlarmSecSet),
        t(Op::DecAlarmSecond, M::AlarmSecSet),
        t(Op::Noop, M::AlarmDisplay),
    ],
];

pub const fn transition(mode: Mode, button: Button) -> Transition {
    TRANSITIONS[mode.index()][button.index()]
}
