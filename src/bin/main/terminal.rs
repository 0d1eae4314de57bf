use std::io::{self, Write};

use log::{info, trace};
use quartz_core::display::{Background, DisplayAdapter, DisplayText};

/// Single-line face redrawn in place on stdout. Logs stay on stderr.
pub struct TerminalDisplay<W: Write> {
    out: W,
    text: DisplayText,
    pm_visible: bool,
    pm_checked: bool,
    alarm_visible: bool,
    alarm_checked: bool,
    background: Background,
    fault_logged: bool,
}

impl TerminalDisplay<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> TerminalDisplay<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            text: DisplayText::new(),
            pm_visible: false,
            pm_checked: false,
            alarm_visible: false,
            alarm_checked: false,
            background: Background::Normal,
            fault_logged: false,
        }
    }

    fn draw(&mut self) {
        let pm = match (self.pm_visible, self.pm_checked) {
            (false, _) => "  ",
            (true, true) => "PM",
            (true, false) => "AM",
        };
        let alarm = match (self.alarm_visible, self.alarm_checked) {
            (false, _) => "      ",
            (true, true) => "ALM on",
            (true, false) => "ALM --",
        };
        let light = match self.background {
            Background::Normal => "",
            Background::Lit => " *light*",
            Background::AlertOn => " !!ALARM!!",
            Background::AlertOff => " ..alarm..",
        };

        // Carriage return plus erase-to-end-of-line overwrites the previous frame.
        let result = write!(
            self.out,
            "\r[{pm}] {:<9} [{alarm}]{light}\x1b[K",
            self.text.as_str()
        )
        .and_then(|()| self.out.flush());
        if let Err(err) = result {
            if !self.fault_logged {
                info!("terminal: write failed: {:?}", err);
                self.fault_logged = true;
            }
        }
    }
}

impl<W: Write> DisplayAdapter for TerminalDisplay<W> {
    fn render(&mut self, text: &str) {
        self.text.clear();
        for ch in text.chars() {
            if self.text.push(ch).is_err() {
                break;
            }
        }
        trace!("terminal: render {}", self.text.as_str());
        self.draw();
    }

    fn set_pm_indicator_visible(&mut self, visible: bool) {
        self.pm_visible = visible;
    }

    fn set_pm_indicator_checked(&mut self, checked: bool) {
        self.pm_checked = checked;
    }

    fn set_alarm_indicator_visible(&mut self, visible: bool) {
        self.alarm_visible = visible;
    }

    fn set_alarm_armed_checked(&mut self, checked: bool) {
        self.alarm_checked = checked;
    }

    fn set_background(&mut self, background: Background) {
        if self.background != background {
            self.background = background;
            self.draw();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn output(display: &TerminalDisplay<Vec<u8>>) -> &str {
        core::str::from_utf8(&display.out).unwrap()
    }

    #[test]
    fn frames_overwrite_one_line() {
        let mut display = TerminalDisplay::new(Vec::new());
        display.set_pm_indicator_visible(true);
        display.set_pm_indicator_checked(true);
        display.render("12:59:58");
        for ms in 0..1_000 {
            let text = format!("00:00.{ms:03}");
            display.render(&text);
        }

        let out = output(&display);
        assert!(!out.contains('\n'));
        assert_eq!(out.matches('\r').count(), 1_001);
        assert!(out.starts_with("\r[PM] 12:59:58 "));
        assert!(out.ends_with("00:00.999 [      ]\x1b[K"));
    }

    #[test]
    fn background_change_redraws_once() {
        let mut display = TerminalDisplay::new(Vec::new());
        display.render("07:30:00");
        display.set_background(Background::AlertOn);
        display.set_background(Background::AlertOn);

        let out = output(&display);
        assert_eq!(out.matches('\r').count(), 2);
        assert!(out.contains("!!ALARM!!"));
    }
}
