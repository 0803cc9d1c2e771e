use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub enum Direction {
    #[default]
    Clockwise,
    AntiClockwise,
}

impl Direction {
    pub fn reversed(self) -> Self {
        match self {
            Self::Clockwise => Self::AntiClockwise,
            Self::AntiClockwise => Self::Clockwise,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Clockwise => "Clockwise",
            Self::AntiClockwise => "Anti-clockwise",
        }
    }

    /// Seat that acts after `index` at a table of `players`.
    pub fn next_index(self, index: usize, players: usize) -> usize {
        match self {
            Self::Clockwise => (index + 1) % players,
            Self::AntiClockwise => (index + players - 1) % players,
        }
    }
}

/// Rule consequences queued for the next turn.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct PendingEffects {
    pub skip: bool,
    pub draw_two: bool,
    pub draw_four: bool,
}

impl PendingEffects {
    pub fn any(&self) -> bool {
        self.skip || self.draw_two || self.draw_four
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum TurnOutcome {
    Won(usize),
    Continue,
}
