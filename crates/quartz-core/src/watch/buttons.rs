impl<D, S> Watch<D, S>
where
    D: DisplayAdapter,
    S: TickScheduler,
{
    /// Handles one press. While the alarm rings a press only silences it.
    pub fn on_button(&mut self, button: Button, now_ms: u64) {
        if self.alarm.is_ringing() {
            debug!("watch: {:?} pressed while ringing; silencing", button);
            self.silence_alarm();
            self.render_current(now_ms);
            return;
        }

        let Transition { operation, next } = transition(self.mode, button);
        debug!("watch: {:?} + {:?} -> {:?} via {:?}", self.mode, button, next, operation);

        self.apply(operation, now_ms);
        self.mode = next;
        self.enter_mode(next);
        self.render_current(now_ms);
    }

    /// Raw-id entry point for hosts that number their keys. Panics outside `0..=3`.
    pub fn on_button_index(&mut self, id: u8, now_ms: u64) {
        self.on_button(Button::from_index(id), now_ms);
    }

    /// Drains `input`, dispatching every pending press. Returns how many were handled.
    pub fn process_inputs<IN>(&mut self, input: &mut IN, now_ms: u64) -> Result<usize, IN::Error>
    where
        IN: InputProvider,
    {
        let mut handled = 0usize;
        while let Some(button) = input.poll_event()? {
            self.on_button(button, now_ms);
            handled = handled.saturating_add(1);
        }
        Ok(handled)
    }

    fn apply(&mut self, operation: Operation, now_ms: u64) {
        match operation {
            Operation::Noop => {}
            Operation::Light => {
                self.is_lit = true;
                self.light_started_at_ms = now_ms;
                self.display.set_background(Background::Lit);
            }
            Operation::ToggleMilitary => self.is_military = !self.is_military,
            Operation::IncHour => self.clock.increment_hour(),
            Operation::DecHour => self.clock.decrement_hour(),
            Operation::IncMinute => self.clock.increment_minute(),
            Operation::DecMinute => self.clock.decrement_minute(),
            Operation::IncSecond => self.clock.increment_second(),
            Operation::DecSecond => self.clock.decrement_second(),
            Operation::StartStopwatch => {
                self.stopwatch.start(now_ms);
                self.scheduler.start(TickKind::Stopwatch, now_ms);
            }
            Operation::StopStopwatch => {
                self.stopwatch.stop(now_ms);
                self.scheduler.stop(TickKind::Stopwatch);
            }
            Operation::ResetStopwatch => {
                self.stopwatch.reset();
                self.scheduler.stop(TickKind::Stopwatch);
            }
            Operation::RecordLap => self.stopwatch.record_lap(now_ms),
            Operation::ToggleAlarm => {
                self.alarm.toggle_armed();
                info!("alarm: armed={}", self.alarm.is_armed());
            }
            Operation::IncAlarmHour => self.alarm.increment_hour(),
            Operation::DecAlarmHour => self.alarm.decrement_hour(),
            Operation::IncAlarmMinute => self.alarm.increment_minute(),
            Operation::DecAlarmMinute => self.alarm.decrement_minute(),
            Operation::IncAlarmSecond => self.alarm.increment_second(),
            Operation::DecAlarmSecond => self.alarm.decrement_second(),
        }
    }

    fn silence_alarm(&mut self) {
        self.alarm.silence();
        self.scheduler.stop(TickKind::AlarmBlink);
        self.alert_on = false;
        let background = self.resting_background();
        self.display.set_background(background);
    }
}
