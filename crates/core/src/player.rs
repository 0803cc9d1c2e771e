use crate::{Card, Strategy};
use serde::{Deserialize, Serialize};

/// Seat description collected during setup.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PlayerSetup {
    pub strategy: Strategy,
    pub name: String,
}

impl PlayerSetup {
    pub fn new(strategy: Strategy, name: impl Into<String>) -> Self {
        Self {
            strategy,
            name: name.into(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub name: String,
    pub hand: Vec<Card>,
    pub strategy: Strategy,
}

impl Player {
    pub fn new(strategy: Strategy, name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            hand: Vec::new(),
            strategy,
        }
    }

    pub fn with_hand(mut self, hand: Vec<Card>) -> Self {
        self.hand = hand;
        self
    }

    pub fn is_ai(&self) -> bool {
        self.strategy.is_ai()
    }
}

impl From<PlayerSetup> for Player {
    fn from(setup: PlayerSetup) -> Self {
        Self::new(setup.strategy, setup.name)
    }
}

/// What a deciding player may see about another seat.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Opponent {
    pub index: usize,
    pub name: String,
    pub hand_size: usize,
}
