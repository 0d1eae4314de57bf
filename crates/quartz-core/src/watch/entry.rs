impl<D, S> Watch<D, S>
where
    D: DisplayAdapter,
    S: TickScheduler,
{
    /// Indicator layout and refresh policy for the mode being entered.
    fn enter_mode(&mut self, mode: Mode) {
        match mode.class() {
            ModeClass::ClockDisplay => {
                self.clock_refresh = true;
                self.show_indicators();
            }
            ModeClass::ClockSet => {
                self.clock_refresh = false;
            }
            ModeClass::Stopwatch => {
                self.display.set_pm_indicator_visible(false);
                self.display.set_alarm_indicator_visible(false);
            }
            ModeClass::Alarm => self.show_indicators(),
        }
    }

    fn show_indicators(&mut self) {
        self.display.set_pm_indicator_visible(!self.is_military);
        self.display.set_alarm_indicator_visible(true);
        self.display.set_alarm_armed_checked(self.alarm.is_armed());
    }

    /// Emits the single render for the current mode's text source.
    fn render_current(&mut self, now_ms: u64) {
        match self.mode.class() {
            ModeClass::ClockDisplay | ModeClass::ClockSet => {
                let clock = self.clock;
                self.display.set_pm_indicator_checked(!self.is_military && clock.is_pm());
                self.display.render(clock.format(self.is_military).as_str());
            }
            ModeClass::Stopwatch => {
                self.display.render(self.stopwatch.format(now_ms).as_str());
            }
            ModeClass::Alarm => {
                let target = self.alarm.target();
                self.display.set_pm_indicator_checked(!self.is_military && target.is_pm());
                self.display.render(target.format(self.is_military).as_str());
            }
        }
    }

    fn resting_background(&self) -> Background {
        if self.is_lit {
            Background::Lit
        } else {
            Background::Normal
        }
    }
}
