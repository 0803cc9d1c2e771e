use crate::{Card, Direction, Event, Opponent};

/// Public state shown at the start of a player's turn.
#[derive(Debug, Clone, Copy)]
pub struct TurnView<'a> {
    /// 1-based seat number.
    pub seat: usize,
    pub name: &'a str,
    /// Only present for human players.
    pub hand: Option<&'a [Card]>,
    pub hand_size: usize,
    pub top: Card,
    pub direction: Direction,
    pub hand_sizes: &'a [usize],
}

/// Presentation and input port. Implementations block until a decision is
/// available and re-prompt on invalid input themselves; nothing here fails.
pub trait Frontend {
    fn message(&mut self, text: &str);

    fn notify(&mut self, event: &Event) {
        self.message(&event.to_string());
    }

    fn show_turn(&mut self, view: &TurnView<'_>);

    fn announce_winner(&mut self, name: &str);

    /// Reads an integer in `min..=max`.
    fn prompt_int(&mut self, min: i64, max: i64) -> i64;

    fn prompt_line(&mut self) -> String;

    /// Picks one of `candidates` (positions in `hand`), or `None` to decline.
    fn select_card(&mut self, hand: &[Card], candidates: &[usize]) -> Option<usize>;

    /// Returns the seat index of the chosen opponent. `opponents` is never empty.
    fn select_player(&mut self, opponents: &[Opponent]) -> usize;

    /// `true` discards the freshly drawn card, `false` keeps it.
    fn select_keep_or_discard(&mut self, card: Card) -> bool;
}
