use serde::{Deserialize, Serialize};

pub const HAND_SIZE: usize = 7;
pub const MIN_PLAYERS: usize = 2;
pub const MAX_PLAYERS: usize = 4;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct RoundConfig {
    pub hand_size: usize,
    pub min_players: usize,
    pub max_players: usize,
}

impl Default for RoundConfig {
    fn default() -> Self {
        Self {
            hand_size: HAND_SIZE,
            min_players: MIN_PLAYERS,
            max_players: MAX_PLAYERS,
        }
    }
}
