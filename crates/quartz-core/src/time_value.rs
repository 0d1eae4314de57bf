//! Wrapping hours/minutes/seconds counter shared by the clock and the alarm target.

use core::fmt::{self, Write as _};

use heapless::String;

/// `"HH:MM:SS"`.
pub const TIME_TEXT_BYTES: usize = 8;

pub type TimeText = String<TIME_TEXT_BYTES>;

/// How far a carry (or borrow) travelled through the cascade.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum WrapEvent {
    /// Only the seconds field changed.
    None,
    /// Seconds wrapped into minutes.
    Minute,
    /// Minutes wrapped into hours.
    Hour,
    /// Hours wrapped across midnight.
    Day,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum TimeValueError {
    Hour(u8),
    Minute(u8),
    Second(u8),
}

impl fmt::Display for TimeValueError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Hour(value) => write!(f, "hour {value} outside 0..=23"),
            Self::Minute(value) => write!(f, "minute {value} outside 0..=59"),
            Self::Second(value) => write!(f, "second {value} outside 0..=59"),
        }
    }
}

impl core::error::Error for TimeValueError {}

/// A time of day kept in both 12- and 24-hour form.
///
/// `hour12` and `hour24` always name the same moment; every mutator moves them together.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct TimeValue {
    hour12: u8,
    hour24: u8,
    minute: u8,
    second: u8,
}

impl TimeValue {
    pub const MIDNIGHT: Self = Self::from_hms(0, 0, 0);

    /// Builds a value from a 24-hour triple. Panics on out-of-range fields, so it is
    /// meant for constant seeds; use [`TimeValue::try_from_hms`] for runtime input.
    pub const fn from_hms(hour24: u8, minute: u8, second: u8) -> Self {
        assert!(hour24 < 24 && minute < 60 && second < 60);
        Self {
            hour12: hour12_for(hour24),
            hour24,
            minute,
            second,
        }
    }

    pub fn try_from_hms(hour24: u8, minute: u8, second: u8) -> Result<Self, TimeValueError> {
        if hour24 > 23 {
            return Err(TimeValueError::Hour(hour24));
        }
        if minute > 59 {
            return Err(TimeValueError::Minute(minute));
        }
        if second > 59 {
            return Err(TimeValueError::Second(second));
        }
        Ok(Self::from_hms(hour24, minute, second))
    }

    pub const fn hour12(self) -> u8 {
        self.hour12
    }

    pub const fn hour24(self) -> u8 {
        self.hour24
    }

    pub const fn minute(self) -> u8 {
        self.minute
    }

    pub const fn second(self) -> u8 {
        self.second
    }

    pub const fn is_pm(self) -> bool {
        self.hour24 > 11
    }

    pub fn increment_hour(&mut self) {
        self.hour24 = if self.hour24 >= 23 { 0 } else { self.hour24 + 1 };
        self.hour12 = if self.hour12 >= 12 { 1 } else { self.hour12 + 1 };
        self.debug_check_hours();
    }

    pub fn decrement_hour(&mut self) {
        self.hour24 = if self.hour24 == 0 { 23 } else { self.hour24 - 1 };
        self.hour12 = if self.hour12 <= 1 { 12 } else { self.hour12 - 1 };
        self.debug_check_hours();
    }

    pub fn increment_minute(&mut self) {
        self.minute = if self.minute >= 59 { 0 } else { self.minute + 1 };
    }

    pub fn decrement_minute(&mut self) {
        self.minute = if self.minute == 0 { 59 } else { self.minute - 1 };
    }

    pub fn increment_second(&mut self) {
        self.second = if self.second >= 59 { 0 } else { self.second + 1 };
    }

    pub fn decrement_second(&mut self) {
        self.second = if self.second == 0 { 59 } else { self.second - 1 };
    }

    /// One seconds tick, carrying into minutes and hours.
    pub fn advance_second(&mut self) -> WrapEvent {
        self.increment_second();
        if self.second != 0 {
            return WrapEvent::None;
        }

        self.increment_minute();
        if self.minute != 0 {
            return WrapEvent::Minute;
        }

        self.increment_hour();
        if self.hour24 == 0 {
            WrapEvent::Day
        } else {
            WrapEvent::Hour
        }
    }

    /// Inverse of [`TimeValue::advance_second`], borrowing from minutes and hours.
    ///
    /// The seconds edit in set mode does not go through here: set-mode edits wrap one
    /// field and never borrow, so `00:00:00` minus a second reads `00:00:59`.
    pub fn retreat_second(&mut self) -> WrapEvent {
        self.decrement_second();
        if self.second != 59 {
            return WrapEvent::None;
        }

        self.decrement_minute();
        if self.minute != 59 {
            return WrapEvent::Minute;
        }

        self.decrement_hour();
        if self.hour24 == 23 {
            WrapEvent::Day
        } else {
            WrapEvent::Hour
        }
    }

    pub fn format(self, military: bool) -> TimeText {
        let hour = if military { self.hour24 } else { self.hour12 };
        let mut text = TimeText::new();
        let _ = write!(text, "{:02}:{:02}:{:02}", hour, self.minute, self.second);
        text
    }

    /// Compares hours in the selected convention plus minutes and seconds.
    pub const fn same_reading(self, other: Self, military: bool) -> bool {
        let hours_match = if military {
            self.hour24 == other.hour24
        } else {
            self.hour12 == other.hour12
        };
        hours_match && self.minute == other.minute && self.second == other.second
    }

    fn debug_check_hours(&self) {
        debug_assert_eq!(
            self.hour12,
            hour12_for(self.hour24),
            "12h/24h fields drifted apart"
        );
    }
}

impl Default for TimeValue {
    fn default() -> Self {
        Self::MIDNIGHT
    }
}

const fn hour12_for(hour24: u8) -> u8 {
    (hour24 + 11) % 12 + 1
}
