use std::io::{BufRead, Write};
use switch_core::{Card, Event, Frontend, Opponent, TurnView};
use tracing::{info, warn};

/// Line-oriented frontend over any reader/writer pair, normally stdin/stdout.
pub struct TerminalFrontend<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> TerminalFrontend<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    #[cfg(test)]
    pub fn into_output(self) -> W {
        self.output
    }

    fn say(&mut self, text: &str) {
        if let Err(err) = writeln!(self.output, "{text}") {
            warn!(%err, "failed to write to terminal");
        }
    }

    /// Reads one line. Closed input ends the program: every prompt blocks on
    /// the user and there is nobody left to answer.
    fn read_line(&mut self) -> String {
        if let Err(err) = write!(self.output, "> ").and_then(|_| self.output.flush()) {
            warn!(%err, "failed to write prompt");
        }
        let mut line = String::new();
        match self.input.read_line(&mut line) {
            Ok(0) => {
                info!("input closed");
                self.say("");
                self.say("Goodbye!");
                std::process::exit(0);
            }
            Ok(_) => line.trim_end_matches(['\r', '\n']).to_string(),
            Err(err) => {
                warn!(%err, "failed to read input");
                String::new()
            }
        }
    }
}

pub fn parse_in_range(text: &str, min: i64, max: i64) -> Option<i64> {
    text.trim()
        .parse::<i64>()
        .ok()
        .filter(|value| (min..=max).contains(value))
}

pub fn format_hand(cards: &[Card]) -> String {
    cards
        .iter()
        .map(Card::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

impl<R: BufRead, W: Write> Frontend for TerminalFrontend<R, W> {
    fn message(&mut self, text: &str) {
        self.say(text);
    }

    fn notify(&mut self, event: &Event) {
        let text = event.to_string();
        self.say(&text);
        if matches!(event, Event::Discarded { .. }) {
            self.say("");
        }
    }

    fn show_turn(&mut self, view: &TurnView<'_>) {
        self.say("");
        self.say(&format!("HANDS: {:?}", view.hand_sizes));
        self.say(&format!("PLAYER: {} (seat {})", view.name, view.seat));
        if let Some(hand) = view.hand {
            self.say(&format!("HAND: {}", format_hand(hand)));
        }
        self.say(&format!("HAND SIZE: {}", view.hand_size));
        self.say(&format!("TOP CARD: {}", view.top));
        self.say(&format!("DIRECTION: {}", view.direction.label()));
    }

    fn announce_winner(&mut self, name: &str) {
        let rule = "-".repeat(80);
        self.say("");
        self.say(&rule);
        self.say(&format!("Woohoo!!! Winner of the game is: {name}"));
        self.say(&rule);
    }

    fn prompt_int(&mut self, min: i64, max: i64) -> i64 {
        loop {
            let line = self.read_line();
            if let Some(value) = parse_in_range(&line, min, max) {
                return value;
            }
            self.say(&format!(
                "Try again: Input should be an integer between [{min}-{max}]"
            ));
        }
    }

    fn prompt_line(&mut self) -> String {
        self.read_line()
    }

    fn select_card(&mut self, hand: &[Card], candidates: &[usize]) -> Option<usize> {
        self.say(&format!(
            "Please select from one of the following cards: [0-{}]",
            candidates.len()
        ));
        self.say("0 - No discard");
        for (slot, position) in candidates.iter().enumerate() {
            if let Some(card) = hand.get(*position) {
                self.say(&format!("{} - {card}", slot + 1));
            }
        }
        let choice = self.prompt_int(0, candidates.len() as i64) as usize;
        choice
            .checked_sub(1)
            .and_then(|slot| candidates.get(slot).copied())
    }

    fn select_player(&mut self, opponents: &[Opponent]) -> usize {
        self.say(&format!(
            "Please select from one of the following players: [1-{}]",
            opponents.len()
        ));
        for (slot, opponent) in opponents.iter().enumerate() {
            self.say(&format!(
                "{} - {} = {}",
                slot + 1,
                opponent.name,
                opponent.hand_size
            ));
        }
        let choice = self.prompt_int(1, opponents.len() as i64) as usize;
        opponents
            .get(choice - 1)
            .map_or(0, |opponent| opponent.index)
    }

    fn select_keep_or_discard(&mut self, card: Card) -> bool {
        self.say(&format!("You drew {card}, which can be discarded."));
        self.say("1 - Discard it");
        self.say("2 - Keep it");
        self.prompt_int(1, 2) == 1
    }
}
