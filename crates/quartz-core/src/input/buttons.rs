use embedded_hal::digital::InputPin;
use heapless::Deque;

use super::{Button, InputProvider};

#[derive(Debug, Clone, Copy)]
pub struct ButtonBankConfig {
    active_low: bool,
    debounce_polls: u8,
}

impl Default for ButtonBankConfig {
    fn default() -> Self {
        Self {
            active_low: true,
            debounce_polls: 3,
        }
    }
}

impl ButtonBankConfig {
    pub const fn with_active_low(mut self, active_low: bool) -> Self {
        self.active_low = active_low;
        self
    }

    pub const fn with_debounce_polls(mut self, debounce_polls: u8) -> Self {
        self.debounce_polls = debounce_polls;
        self
    }
}

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum ButtonBankError<E> {
    Pin { button: Button, error: E },
}

#[derive(Debug, Clone, Copy, Default)]
struct Debounce {
    raw: bool,
    stable: bool,
    stable_count: u8,
}

/// Four GPIO buttons with per-pin debouncing. Emits one event per press edge.
///
/// Board adapter for firmware hosts with real keys; the `quartz` simulator reads the
/// keyboard instead.
#[derive(Debug)]
pub struct ButtonBank<P> {
    pins: [P; Button::COUNT],
    config: ButtonBankConfig,
    state: [Debounce; Button::COUNT],
    pending: Deque<Button, { Button::COUNT }>,
}

impl<P> ButtonBank<P>
where
    P: InputPin,
{
    pub fn new(
        mut pins: [P; Button::COUNT],
        config: ButtonBankConfig,
    ) -> Result<Self, ButtonBankError<P::Error>> {
        let mut state = [Debounce::default(); Button::COUNT];
        for (button, (pin, slot)) in Button::ALL.into_iter().zip(pins.iter_mut().zip(&mut state)) {
            let high = pin
                .is_high()
                .map_err(|error| ButtonBankError::Pin { button, error })?;
            let pressed = pressed_from_level(high, config.active_low);
            // A key held at boot must be released before it can fire.
            *slot = Debounce {
                raw: pressed,
                stable: pressed,
                stable_count: 0,
            };
        }

        Ok(Self {
            pins,
            config,
            state,
            pending: Deque::new(),
        })
    }

    pub fn release(self) -> [P; Button::COUNT] {
        self.pins
    }

    fn poll_button(&mut self, button: Button) -> Result<bool, ButtonBankError<P::Error>> {
        let index = button.index();
        let high = self.pins[index]
            .is_high()
            .map_err(|error| ButtonBankError::Pin { button, error })?;
        let pressed = pressed_from_level(high, self.config.active_low);
        let slot = &mut self.state[index];

        if pressed == slot.raw {
            slot.stable_count = slot.stable_count.saturating_add(1);
        } else {
            slot.raw = pressed;
            slot.stable_count = 0;
        }

        let threshold = self.config.debounce_polls.max(1);
        if slot.stable_count >= threshold && slot.stable != slot.raw {
            slot.stable = slot.raw;
            return Ok(slot.stable);
        }

        Ok(false)
    }
}

impl<P> InputProvider for ButtonBank<P>
where
    P: InputPin,
{
    type Error = ButtonBankError<P::Error>;

    fn poll_event(&mut self) -> Result<Option<Button>, Self::Error> {
        if let Some(button) = self.pending.pop_front() {
            return Ok(Some(button));
        }

        for button in Button::ALL {
            if self.poll_button(button)? {
                // Capacity equals the button count and the queue is empty here.
                let _ = self.pending.push_back(button);
            }
        }

        Ok(self.pending.pop_front())
    }
}

#[inline]
fn pressed_from_level(high: bool, active_low: bool) -> bool {
    if active_low { !high } else { high }
}

#[cfg(test)]
mod tests {
    use core::cell::Cell;

    use embedded_hal::digital::{Error, ErrorKind, ErrorType};

    use super::*;

    #[derive(Debug, Clone, Copy, Eq, PartialEq)]
    struct PinFault;

    impl Error for PinFault {
        fn kind(&self) -> ErrorKind {
            ErrorKind::Other
        }
    }

    /// Level is `None` when the pin should report a fault.
    struct FakePin<'a>(&'a Cell<Option<bool>>);

    impl ErrorType for FakePin<'_> {
        type Error = PinFault;
    }

    impl InputPin for FakePin<'_> {
        fn is_high(&mut self) -> Result<bool, Self::Error> {
            self.0.get().ok_or(PinFault)
        }

        fn is_low(&mut self) -> Result<bool, Self::Error> {
            self.is_high().map(|high| !high)
        }
    }

    fn released() -> [Cell<Option<bool>>; 4] {
        core::array::from_fn(|_| Cell::new(Some(true)))
    }

    fn bank<'a>(
        levels: &'a [Cell<Option<bool>>; 4],
        debounce_polls: u8,
    ) -> ButtonBank<FakePin<'a>> {
        let pins = core::array::from_fn(|i| FakePin(&levels[i]));
        let config = ButtonBankConfig::default().with_debounce_polls(debounce_polls);
        ButtonBank::new(pins, config).unwrap()
    }

    #[test]
    fn press_fires_once_after_debounce() {
        let levels = released();
        let mut input = bank(&levels, 2);

        levels[2].set(Some(false));
        assert_eq!(input.poll_event().unwrap(), None);
        assert_eq!(input.poll_event().unwrap(), None);
        assert_eq!(input.poll_event().unwrap(), Some(Button::B2));
        assert_eq!(input.poll_event().unwrap(), None);
        assert_eq!(input.poll_event().unwrap(), None);

        levels[2].set(Some(true));
        for _ in 0..4 {
            assert_eq!(input.poll_event().unwrap(), None);
        }
    }

    #[test]
    fn bounce_restarts_the_debounce_window() {
        let levels = released();
        let mut input = bank(&levels, 2);

        levels[0].set(Some(false));
        assert_eq!(input.poll_event().unwrap(), None);
        levels[0].set(Some(true));
        assert_eq!(input.poll_event().unwrap(), None);
        levels[0].set(Some(false));
        assert_eq!(input.poll_event().unwrap(), None);
        assert_eq!(input.poll_event().unwrap(), None);
        assert_eq!(input.poll_event().unwrap(), Some(Button::B0));
    }

    #[test]
    fn simultaneous_presses_queue_in_button_order() {
        let levels = released();
        let mut input = bank(&levels, 1);

        levels[3].set(Some(false));
        levels[1].set(Some(false));
        assert_eq!(input.poll_event().unwrap(), None);
        assert_eq!(input.poll_event().unwrap(), Some(Button::B1));
        assert_eq!(input.poll_event().unwrap(), Some(Button::B3));
        assert_eq!(input.poll_event().unwrap(), None);
    }

    #[test]
    fn held_at_boot_needs_release_first() {
        let levels = released();
        levels[1].set(Some(false));
        let mut input = bank(&levels, 1);

        for _ in 0..3 {
            assert_eq!(input.poll_event().unwrap(), None);
        }
    }

    #[test]
    fn pin_fault_names_the_button() {
        let levels = released();
        let mut input = bank(&levels, 1);

        levels[2].set(None);
        assert_eq!(
            input.poll_event(),
            Err(ButtonBankError::Pin {
                button: Button::B2,
                error: PinFault,
            })
        );
    }
}
