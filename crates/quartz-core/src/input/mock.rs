use super::{Button, InputProvider};

/// Replays a fixed button sequence, one press per poll.
#[derive(Debug, Clone, Copy)]
pub struct ScriptedInput<'a> {
    events: &'a [Button],
    cursor: usize,
}

impl<'a> ScriptedInput<'a> {
    pub const fn new(events: &'a [Button]) -> Self {
        Self { events, cursor: 0 }
    }

    pub const fn remaining(&self) -> usize {
        self.events.len().saturating_sub(self.cursor)
    }
}

impl InputProvider for ScriptedInput<'_> {
    type Error = core::convert::Infallible;

    fn poll_event(&mut self) -> Result<Option<Button>, Self::Error> {
        let Some(event) = self.events.get(self.cursor).copied() else {
            return Ok(None);
        };
        self.cursor = self.cursor.saturating_add(1);
        Ok(Some(event))
    }
}
