impl<D, S> Watch<D, S>
where
    D: DisplayAdapter,
    S: TickScheduler,
{
    pub fn on_tick(&mut self, kind: TickKind, now_ms: u64) {
        match kind {
            TickKind::Second => self.on_second_tick(now_ms),
            TickKind::LightTimeout => self.on_light_timeout_tick(now_ms),
            TickKind::Stopwatch => self.on_stopwatch_tick(now_ms),
            TickKind::AlarmBlink => self.on_alarm_blink_tick(),
        }
    }

    /// Advances the clock in every mode; redraws only on the clock display.
    pub fn on_second_tick(&mut self, now_ms: u64) {
        let wrap = self.clock.advance_second();
        if wrap != WrapEvent::None {
            trace!("watch: clock carry {:?}", wrap);
        }

        if self.alarm.is_armed() && self.alarm.check_match(self.clock, self.is_military) {
            self.scheduler.start(TickKind::AlarmBlink, now_ms);
        }

        if self.mode.shows_clock() && self.clock_refresh {
            self.render_current(now_ms);
        }
    }

    pub fn on_light_timeout_tick(&mut self, now_ms: u64) {
        if !self.is_lit {
            return;
        }
        if now_ms.saturating_sub(self.light_started_at_ms) < self.config.light_timeout_ms {
            return;
        }

        self.is_lit = false;
        if !self.alarm.is_ringing() {
            self.display.set_background(Background::Normal);
        }
    }

    pub fn on_stopwatch_tick(&mut self, now_ms: u64) {
        if self.stopwatch.is_running() {
            self.display.render(self.stopwatch.format(now_ms).as_str());
        }
    }

    pub fn on_alarm_blink_tick(&mut self) {
        if !self.alarm.is_ringing() {
            return;
        }

        self.alert_on = !self.alert_on;
        self.display.set_background(if self.alert_on {
            Background::AlertOn
        } else {
            Background::AlertOff
        });
    }
}
