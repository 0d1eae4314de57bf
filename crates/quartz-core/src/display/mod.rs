//! Display contract consumed by the watch controller.

mod recorder;

pub use recorder::{DisplayEvent, DisplayRecorder, DisplaySnapshot};

use heapless::String;

/// Fits both `"HH:MM:SS"` and `"MM:SS.mmm"`.
pub const DISPLAY_TEXT_BYTES: usize = 9;

pub type DisplayText = String<DISPLAY_TEXT_BYTES>;

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum Background {
    #[default]
    Normal,
    Lit,
    AlertOn,
    AlertOff,
}

/// Board/host renderer. The controller only ever pushes state into it.
pub trait DisplayAdapter {
    fn render(&mut self, text: &str);
    fn set_pm_indicator_visible(&mut self, visible: bool);
    fn set_pm_indicator_checked(&mut self, checked: bool);
    fn set_alarm_indicator_visible(&mut self, visible: bool);
    fn set_alarm_armed_checked(&mut self, checked: bool);
    fn set_background(&mut self, background: Background);
}

impl<D: DisplayAdapter + ?Sized> DisplayAdapter for &mut D {
    fn render(&mut self, text: &str) {
        (**self).render(text);
    }

    fn set_pm_indicator_visible(&mut self, visible: bool) {
        (**self).set_pm_indicator_visible(visible);
    }

    fn set_pm_indicator_checked(&mut self, checked: bool) {
        (**self).set_pm_indicator_checked(checked);
    }

    fn set_alarm_indicator_visible(&mut self, visible: bool) {
        (**self).set_alarm_indicator_visible(visible);
    }

    fn set_alarm_armed_checked(&mut self, checked: bool) {
        (**self).set_alarm_armed_checked(checked);
    }

    fn set_background(&mut self, background: Background) {
        (**self).set_background(background);
    }
}
