use switch_core::{Card, Event, EventBus, Frontend, Opponent, TurnView};
use tracing::{trace, warn};

/// Frontend for unattended rounds: collects notices and counts turn views.
/// Decision requests only reach it from human seats, which autoplay rejects,
/// so they get the most passive answer.
#[derive(Debug, Default)]
pub struct RecordingFrontend {
    pub events: EventBus,
    pub turns_shown: u32,
    pub winner: Option<String>,
}

impl Frontend for RecordingFrontend {
    fn message(&mut self, text: &str) {
        trace!(text, "autoplay message");
    }

    fn notify(&mut self, event: &Event) {
        self.events.push(event.clone());
    }

    fn show_turn(&mut self, _view: &TurnView<'_>) {
        self.turns_shown += 1;
    }

    fn announce_winner(&mut self, name: &str) {
        self.winner = Some(name.to_string());
    }

    fn prompt_int(&mut self, min: i64, _max: i64) -> i64 {
        min
    }

    fn prompt_line(&mut self) -> String {
        String::new()
    }

    fn select_card(&mut self, _hand: &[Card], _candidates: &[usize]) -> Option<usize> {
        warn!("card choice requested from unattended frontend");
        None
    }

    fn select_player(&mut self, opponents: &[Opponent]) -> usize {
        warn!("player choice requested from unattended frontend");
        opponents.first().map_or(0, |opponent| opponent.index)
    }

    fn select_keep_or_discard(&mut self, _card: Card) -> bool {
        warn!("keep-or-discard requested from unattended frontend");
        false
    }
}
