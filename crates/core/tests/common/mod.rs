#![allow(dead_code)]

use std::collections::VecDeque;
use switch_core::{
    Card, Event, Frontend, Opponent, Player, Rank, RngState, Round, RoundConfig, Strategy, Suit,
    TurnView,
};

/// Frontend that answers from queued replies and records everything shown.
#[derive(Debug, Default)]
pub struct ScriptedFrontend {
    pub ints: VecDeque<i64>,
    pub lines: VecDeque<String>,
    /// Slot into the offered candidates, `None` declines.
    pub card_picks: VecDeque<Option<usize>>,
    pub player_picks: VecDeque<usize>,
    pub discard_drawn: VecDeque<bool>,
    /// Once the queues run dry, play the first legal card instead of declining.
    pub greedy: bool,
    pub messages: Vec<String>,
    pub events: Vec<Event>,
    pub turns: Vec<(String, Option<Vec<Card>>)>,
    pub winners: Vec<String>,
}

impl ScriptedFrontend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn greedy(mut self) -> Self {
        self.greedy = true;
        self
    }

    pub fn pick_cards(mut self, picks: &[Option<usize>]) -> Self {
        self.card_picks.extend(picks.iter().copied());
        self
    }

    pub fn discard_drawn(mut self, answers: &[bool]) -> Self {
        self.discard_drawn.extend(answers.iter().copied());
        self
    }

    pub fn ints(mut self, values: &[i64]) -> Self {
        self.ints.extend(values.iter().copied());
        self
    }

    pub fn lines(mut self, values: &[&str]) -> Self {
        self.lines.extend(values.iter().map(|v| v.to_string()));
        self
    }

    pub fn has_event(&self, wanted: &Event) -> bool {
        self.events.iter().any(|event| event == wanted)
    }
}

impl Frontend for ScriptedFrontend {
    fn message(&mut self, text: &str) {
        self.messages.push(text.to_string());
    }

    fn notify(&mut self, event: &Event) {
        self.events.push(event.clone());
    }

    fn show_turn(&mut self, view: &TurnView<'_>) {
        self.turns
            .push((view.name.to_string(), view.hand.map(|hand| hand.to_vec())));
    }

    fn announce_winner(&mut self, name: &str) {
        self.winners.push(name.to_string());
    }

    fn prompt_int(&mut self, min: i64, _max: i64) -> i64 {
        self.ints.pop_front().unwrap_or(min)
    }

    fn prompt_line(&mut self) -> String {
        self.lines.pop_front().unwrap_or_default()
    }

    fn select_card(&mut self, _hand: &[Card], candidates: &[usize]) -> Option<usize> {
        let slot = match self.card_picks.pop_front() {
            Some(slot) => slot,
            None if self.greedy => Some(0),
            None => None,
        };
        slot.and_then(|slot| candidates.get(slot).copied())
    }

    fn select_player(&mut self, opponents: &[Opponent]) -> usize {
        self.player_picks
            .pop_front()
            .unwrap_or(opponents[0].index)
    }

    fn select_keep_or_discard(&mut self, _card: Card) -> bool {
        self.discard_drawn.pop_front().unwrap_or(self.greedy)
    }
}

pub fn card(rank: Rank, suit: Suit) -> Card {
    Card::new(suit, rank)
}

/// Hand of `size` cards that never match a clubs/three top card.
pub fn filler(size: usize) -> Vec<Card> {
    let pool = [
        card(Rank::Four, Suit::Hearts),
        card(Rank::Five, Suit::Diamonds),
        card(Rank::Six, Suit::Spades),
        card(Rank::Seven, Suit::Hearts),
        card(Rank::Nine, Suit::Diamonds),
        card(Rank::Ten, Suit::Spades),
    ];
    (0..size).map(|i| pool[i % pool.len()]).collect()
}

pub fn top() -> Card {
    card(Rank::Three, Suit::Clubs)
}

pub fn round_with(
    seats: Vec<(Strategy, Vec<Card>)>,
    stock: Vec<Card>,
    discards: Vec<Card>,
) -> Round {
    let players = seats
        .into_iter()
        .enumerate()
        .map(|(seat, (strategy, hand))| {
            Player::new(strategy, format!("P{seat}")).with_hand(hand)
        })
        .collect();
    Round::from_parts(
        players,
        stock,
        discards,
        RoundConfig::default(),
        RngState::from_seed(1),
    )
    .expect("valid table")
}
