//! Player input for one frame
//!
//! Two facets: movement keys are level-triggered (sampled as "held" every
//! tick), while fire and the debug toggle are edge-triggered events that are
//! queued by the host and consumed exactly once by the next tick.

/// Level-triggered movement keys
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Up,
    Down,
}

/// Edge-triggered actions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    Fire,
    ToggleDebug,
}

/// Input collected by the host between ticks
#[derive(Debug, Clone, Default)]
pub struct InputState {
    up: bool,
    down: bool,
    pending: Vec<InputEvent>,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Key went down (repeats are harmless)
    pub fn press(&mut self, key: Key) {
        match key {
            Key::Up => self.up = true,
            Key::Down => self.down = true,
        }
    }

    /// Key went up
    pub fn release(&mut self, key: Key) {
        match key {
            Key::Up => self.up = false,
            Key::Down => self.down = false,
        }
    }

    pub fn is_held(&self, key: Key) -> bool {
        match key {
            Key::Up => self.up,
            Key::Down => self.down,
        }
    }

    /// Queue a one-shot action for the next tick
    pub fn push(&mut self, event: InputEvent) {
        self.pending.push(event);
    }

    /// Take all queued actions in arrival order
    pub fn drain_events(&mut self) -> Vec<InputEvent> {
        std::mem::take(&mut self.pending)
    }

    /// Vertical direction: -1 up, +1 down, 0 idle. Up wins when both are held.
    pub fn vertical(&self) -> f32 {
        if self.up {
            -1.0
        } else if self.down {
            1.0
        } else {
            0.0
        }
    }
}
