//! Input abstraction layer.

mod buttons;
mod mock;

pub use buttons::{ButtonBank, ButtonBankConfig, ButtonBankError};
pub use mock::ScriptedInput;

/// The four physical buttons, by position.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Button {
    /// Light; also the leftmost key.
    B0,
    B1,
    B2,
    /// Advance to the next major mode.
    B3,
}

impl Button {
    pub const COUNT: usize = 4;
    pub const ALL: [Self; Self::COUNT] = [Self::B0, Self::B1, Self::B2, Self::B3];

    /// Maps a raw button id. Ids outside `0..=3` are a wiring bug and panic.
    pub fn from_index(index: u8) -> Self {
        assert!((index as usize) < Self::COUNT, "button id {index} outside 0..=3");
        Self::ALL[index as usize]
    }

    pub const fn index(self) -> usize {
        self as usize
    }
}

/// Polled input provider.
pub trait InputProvider {
    type Error;

    fn poll_event(&mut self) -> Result<Option<Button>, Self::Error>;
}
