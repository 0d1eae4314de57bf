//! Periodic tick sources and a polled deadline table implementing them.

/// The four periodic sources the watch listens to.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum TickKind {
    /// Clock seconds; always running.
    Second,
    /// Backlight timeout check; always running.
    LightTimeout,
    /// Stopwatch redraw; runs only while the stopwatch runs.
    Stopwatch,
    /// Alert blink; runs only while the alarm rings.
    AlarmBlink,
}

impl TickKind {
    pub const COUNT: usize = 4;
    pub const ALL: [Self; Self::COUNT] = [
        Self::Second,
        Self::LightTimeout,
        Self::Stopwatch,
        Self::AlarmBlink,
    ];

    pub const fn interval_ms(self) -> u64 {
        match self {
            Self::Second => 1_000,
            Self::LightTimeout => 100,
            Self::Stopwatch => 1,
            Self::AlarmBlink => 500,
        }
    }

    /// Missed seconds are replayed so the clock keeps time; the other sources only
    /// refresh visuals and skip ahead instead.
    pub const fn replays_missed(self) -> bool {
        matches!(self, Self::Second)
    }

    const fn index(self) -> usize {
        self as usize
    }
}

/// Start/stop control over the periodic sources.
pub trait TickScheduler {
    fn start(&mut self, kind: TickKind, now_ms: u64);
    fn stop(&mut self, kind: TickKind);
    fn is_running(&self, kind: TickKind) -> bool;
}

/// Next-deadline table for every [`TickKind`]. The host polls [`TickTable::take_due`].
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct TickTable {
    deadlines: [Option<u64>; TickKind::COUNT],
}

impl TickTable {
    pub const fn new() -> Self {
        Self {
            deadlines: [None; TickKind::COUNT],
        }
    }

    /// Pops the earliest source whose deadline is at or before `now_ms` and schedules
    /// its next firing.
    pub fn take_due(&mut self, now_ms: u64) -> Option<TickKind> {
        let mut due: Option<(TickKind, u64)> = None;
        for kind in TickKind::ALL {
            let Some(deadline) = self.deadlines[kind.index()] else {
                continue;
            };
            if deadline > now_ms {
                continue;
            }
            if due.is_none_or(|(_, earliest)| deadline < earliest) {
                due = Some((kind, deadline));
            }
        }

        let (kind, deadline) = due?;
        let mut next = deadline.saturating_add(kind.interval_ms());
        if next <= now_ms && !kind.replays_missed() {
            next = now_ms.saturating_add(kind.interval_ms());
        }
        self.deadlines[kind.index()] = Some(next);
        Some(kind)
    }

    /// Earliest pending deadline, for hosts that sleep between polls.
    pub fn next_deadline(&self) -> Option<u64> {
        self.deadlines.iter().flatten().copied().min()
    }
}

impl TickScheduler for TickTable {
    fn start(&mut self, kind: TickKind, now_ms: u64) {
        let slot = &mut self.deadlines[kind.index()];
        if slot.is_none() {
            *slot = Some(now_ms.saturating_add(kind.interval_ms()));
        }
    }

    fn stop(&mut self, kind: TickKind) {
        self.deadlines[kind.index()] = None;
    }

    fn is_running(&self, kind: TickKind) -> bool {
        self.deadlines[kind.index()].is_some()
    }
}
