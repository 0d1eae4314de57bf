use heapless::Deque;

use super::{Background, DisplayAdapter, DisplayText};

const HISTORY_LEN: usize = 64;

/// One call made on a [`DisplayAdapter`].
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum DisplayEvent {
    Render(DisplayText),
    PmVisible(bool),
    PmChecked(bool),
    AlarmVisible(bool),
    AlarmChecked(bool),
    Background(Background),
}

/// Latest value pushed for every display element.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct DisplaySnapshot {
    pub text: DisplayText,
    pub pm_visible: bool,
    pub pm_checked: bool,
    pub alarm_visible: bool,
    pub alarm_checked: bool,
    pub background: Background,
}

/// Display that keeps the current state plus a bounded call history.
///
/// Oldest history entries are dropped once the buffer is full; the snapshot and the
/// render counter are never truncated.
#[derive(Debug, Default)]
pub struct DisplayRecorder {
    snapshot: DisplaySnapshot,
    history: Deque<DisplayEvent, HISTORY_LEN>,
    renders: u32,
}

impl DisplayRecorder {
    pub const fn new() -> Self {
        Self {
            snapshot: DisplaySnapshot {
                text: DisplayText::new(),
                pm_visible: false,
                pm_checked: false,
                alarm_visible: false,
                alarm_checked: false,
                background: Background::Normal,
            },
            history: Deque::new(),
            renders: 0,
        }
    }

    pub fn snapshot(&self) -> &DisplaySnapshot {
        &self.snapshot
    }

    pub fn text(&self) -> &str {
        self.snapshot.text.as_str()
    }

    pub fn render_count(&self) -> u32 {
        self.renders
    }

    pub fn events(&self) -> impl Iterator<Item = &DisplayEvent> {
        self.history.iter()
    }

    pub fn clear_history(&mut self) {
        self.history.clear();
        self.renders = 0;
    }

    fn record(&mut self, event: DisplayEvent) {
        if self.history.is_full() {
            let _ = self.history.pop_front();
        }
        let _ = self.history.push_back(event);
    }
}

impl DisplayAdapter for DisplayRecorder {
    fn render(&mut self, text: &str) {
        let mut stored = DisplayText::new();
        for ch in text.chars() {
            if stored.push(ch).is_err() {
                break;
            }
        }
        self.snapshot.text = stored.clone();
        self.renders = self.renders.saturating_add(1);
        self.record(DisplayEvent::Render(stored));
    }

    fn set_pm_indicator_visible(&mut self, visible: bool) {
        self.snapshot.pm_visible = visible;
        self.record(DisplayEvent::PmVisible(visible));
    }

    fn set_pm_indicator_checked(&mut self, checked: bool) {
        self.snapshot.pm_checked = checked;
        self.record(DisplayEvent::PmChecked(checked));
    }

    fn set_alarm_indicator_visible(&mut self, visible: bool) {
        self.snapshot.alarm_visible = visible;
        self.record(DisplayEvent::AlarmVisible(visible));
    }

    fn set_alarm_armed_checked(&mut self, checked: bool) {
        self.snapshot.alarm_checked = checked;
        self.record(DisplayEvent::AlarmChecked(checked));
    }

    fn set_background(&mut self, background: Background) {
        self.snapshot.background = background;
        self.record(DisplayEvent::Background(background));
    }
}
