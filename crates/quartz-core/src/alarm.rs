//! Single alarm: target time, armed flag and ringing latch.

use log::info;

use crate::time_value::TimeValue;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct AlarmUnit {
    target: TimeValue,
    armed: bool,
    ringing: bool,
}

impl AlarmUnit {
    pub const fn new(target: TimeValue) -> Self {
        Self {
            target,
            armed: false,
            ringing: false,
        }
    }

    pub const fn target(&self) -> TimeValue {
        self.target
    }

    pub const fn is_armed(&self) -> bool {
        self.armed
    }

    pub const fn is_ringing(&self) -> bool {
        self.ringing
    }

    /// Flips the armed flag. Does not touch `ringing`: a ringing alarm keeps ringing
    /// until [`AlarmUnit::silence`].
    pub fn toggle_armed(&mut self) {
        self.armed = !self.armed;
    }

    pub fn increment_hour(&mut self) {
        self.target.increment_hour();
    }

    pub fn decrement_hour(&mut self) {
        self.target.decrement_hour();
    }

    pub fn increment_minute(&mut self) {
        self.target.increment_minute();
    }

    pub fn decrement_minute(&mut self) {
        self.target.decrement_minute();
    }

    pub fn increment_second(&mut self) {
        self.target.increment_second();
    }

    pub fn decrement_second(&mut self) {
        self.target.decrement_second();
    }

    /// Returns whether `current` reads the same as the target. Latches `ringing`
    /// when it does and the alarm is armed.
    pub fn check_match(&mut self, current: TimeValue, military: bool) -> bool {
        let matched = current.same_reading(self.target, military);
        if matched && self.armed {
            if !self.ringing {
                info!("alarm: ringing at {}", current.format(military).as_str());
            }
            self.ringing = true;
        }
        matched
    }

    pub fn silence(&mut self) {
        if self.ringing {
            info!("alarm: silenced");
        }
        self.ringing = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn armed_at_seven_thirty() -> AlarmUnit {
        let mut alarm = AlarmUnit::new(TimeValue::from_hms(7, 30, 0));
        alarm.toggle_armed();
        alarm
    }

    #[test]
    fn matching_clock_rings_when_armed() {
        let mut alarm = armed_at_seven_thirty();
        assert!(alarm.check_match(TimeValue::from_hms(7, 30, 0), false));
        assert!(alarm.is_ringing());
    }

    #[test]
    fn disarmed_match_does_not_ring() {
        let mut alarm = AlarmUnit::new(TimeValue::from_hms(7, 30, 0));
        assert!(alarm.check_match(TimeValue::from_hms(7, 30, 0), false));
        assert!(!alarm.is_ringing());
    }

    #[test]
    fn disarming_mid_ring_keeps_ringing_until_silenced() {
        let mut alarm = armed_at_seven_thirty();
        alarm.check_match(TimeValue::from_hms(7, 30, 0), false);

        alarm.toggle_armed();
        assert!(!alarm.is_armed());
        assert!(alarm.is_ringing());

        alarm.silence();
        assert!(!alarm.is_ringing());
        alarm.silence();
        assert!(!alarm.is_ringing());
    }

    #[test]
    fn twelve_hour_match_ignores_meridiem() {
        let mut alarm = armed_at_seven_thirty();
        assert!(alarm.check_match(TimeValue::from_hms(19, 30, 0), false));

        let mut alarm = armed_at_seven_thirty();
        assert!(!alarm.check_match(TimeValue::from_hms(19, 30, 0), true));
        assert!(!alarm.is_ringing());
    }

    #[test]
    fn minutes_and_seconds_must_match() {
        let mut alarm = armed_at_seven_thirty();
        assert!(!alarm.check_match(TimeValue::from_hms(7, 30, 1), true));
        assert!(!alarm.check_match(TimeValue::from_hms(7, 31, 0), true));
        assert!(!alarm.is_ringing());
    }

    #[test]
    fn target_edits_wrap() {
        let mut alarm = AlarmUnit::new(TimeValue::from_hms(0, 0, 0));
        alarm.decrement_hour();
        alarm.decrement_minute();
        alarm.decrement_second();
        assert_eq!(alarm.target(), TimeValue::from_hms(23, 59, 59));

        alarm.increment_hour();
        alarm.increment_minute();
        alarm.increment_second();
        assert_eq!(alarm.target(), TimeValue::from_hms(0, 0, 0));
    }
}
