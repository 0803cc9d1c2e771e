use switch_core::RoundError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AutoplayError {
    #[error("round error: {0}")]
    Round(#[from] RoundError),
    #[error("seat {0} is human; autoplay only drives computer players")]
    HumanSeat(usize),
    #[error("card count drifted: expected {expected}, found {found}")]
    Conservation { expected: usize, found: usize },
    #[error("io error: {0}")]
    Io(String),
    #[error("serialize error: {0}")]
    Serialize(String),
}

impl From<std::io::Error> for AutoplayError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value.to_string())
    }
}

impl From<serde_json::Error> for AutoplayError {
    fn from(value: serde_json::Error) -> Self {
        Self::Serialize(value.to_string())
    }
}
