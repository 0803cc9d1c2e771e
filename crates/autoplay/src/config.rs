use serde::{Deserialize, Serialize};
use switch_core::{RoundConfig, Strategy};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AutoplayConfig {
    pub seed: u64,
    pub rounds: u32,
    pub strategies: Vec<Strategy>,
    pub max_turns: u32,
    /// Keep every engine notice in the round records.
    pub record_events: bool,
    pub round: RoundConfig,
}

impl Default for AutoplayConfig {
    fn default() -> Self {
        Self {
            seed: 0xC0FFEE,
            rounds: 100,
            strategies: vec![
                Strategy::Heuristic,
                Strategy::Random,
                Strategy::Heuristic,
                Strategy::Random,
            ],
            max_turns: 5_000,
            record_events: false,
            round: RoundConfig::default(),
        }
    }
}
