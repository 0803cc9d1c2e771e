use crate::{Card, Direction};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Notices emitted by the round engine as rules resolve.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum Event {
    RoundStarted { players: usize, top: Card },
    Skipped { player: String },
    DrewPenalty { player: String, count: usize },
    DiscardsReshuffled { count: usize },
    StockExhausted,
    Discarded { player: String, card: Card },
    DirectionReversed { direction: Direction },
    HandsSwapped { player: String, other: String },
    DrawingAfterDecline { player: String },
    DrawingNoMatch { player: String },
    KeptDrawnCard { player: String },
    CannotDiscard { player: String, card: Card },
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RoundStarted { players, top } => {
                write!(f, "New round with {players} players. Top card: {top}")
            }
            Self::Skipped { player } => write!(f, "{player} is skipped."),
            Self::DrewPenalty { player, count } => write!(f, "{player} draws {count} cards."),
            Self::DiscardsReshuffled { .. } => write!(f, "Discards are shuffled back."),
            Self::StockExhausted => write!(f, "All cards distributed"),
            Self::Discarded { card, .. } => write!(f, "Discarded: {card}"),
            Self::DirectionReversed { .. } => write!(f, "Game direction reversed."),
            Self::HandsSwapped { player, other } => {
                write!(f, "{player} swaps hands with {other}.")
            }
            Self::DrawingAfterDecline { player } => {
                write!(f, "{player} has chosen not to discard. Drawing ...")
            }
            Self::DrawingNoMatch { .. } => write!(f, "No matching card. Drawing ..."),
            Self::KeptDrawnCard { player } => {
                write!(f, "{player} has chosen to add the card to their hand.")
            }
            Self::CannotDiscard { card, .. } => write!(f, "Unable to discard card: {card}"),
        }
    }
}

#[derive(Debug, Default)]
pub struct EventBus {
    queue: Vec<Event>,
}

impl EventBus {
    pub fn push(&mut self, event: Event) {
        self.queue.push(event);
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    pub fn drain(&mut self) -> impl Iterator<Item = Event> + '_ {
        self.queue.drain(..)
    }
}
