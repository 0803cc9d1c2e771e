use super::*;
use crate::{TurnOutcome, TurnView};
use tracing::info;

impl Round {
    /// Sets the round up and plays it to a win. Returns the winner's seat.
    pub fn run_round(&mut self, frontend: &mut dyn Frontend) -> usize {
        self.setup_round(frontend);
        self.play_out(frontend)
    }

    /// Plays turns from the current seat until someone empties their hand.
    pub fn play_out(&mut self, frontend: &mut dyn Frontend) -> usize {
        loop {
            if let TurnOutcome::Won(winner) = self.play_turn(frontend) {
                return winner;
            }
        }
    }

    /// Runs the current player's turn, then passes play on unless they won.
    pub fn play_turn(&mut self, frontend: &mut dyn Frontend) -> TurnOutcome {
        let index = self.current;
        if self.run_player(index, frontend) {
            let name = &self.players[index].name;
            info!(winner = %name, seat = index, "round won");
            frontend.announce_winner(name);
            return TurnOutcome::Won(index);
        }
        self.current = self.direction.next_index(index, self.players.len());
        TurnOutcome::Continue
    }

    /// One turn for the player at `index`. Returns `true` when the player
    /// emptied their hand by discarding.
    pub fn run_player(&mut self, index: usize, frontend: &mut dyn Frontend) -> bool {
        if self.pending.skip {
            self.pending.skip = false;
            let player = self.players[index].name.clone();
            self.emit(frontend, Event::Skipped { player });
            return false;
        }
        if self.pending.draw_two {
            self.pending.draw_two = false;
            self.draw_penalty(index, 2, frontend);
        }
        if self.pending.draw_four {
            self.pending.draw_four = false;
            self.draw_penalty(index, 4, frontend);
        }

        let hand_sizes = self.normalized_hand_sizes(index);
        self.show_turn(index, &hand_sizes, frontend);

        let candidates = self.discardable(index);
        let strategy = self.players[index].strategy;
        let choice = strategy
            .select_card(
                &self.players[index].hand,
                &candidates,
                &hand_sizes,
                &mut self.rng,
                frontend,
            )
            .filter(|position| candidates.contains(position));

        if let Some(position) = choice {
            self.discard_card(index, position, frontend);
            return self.players[index].hand.is_empty();
        }
        self.draw_and_resolve(index, !candidates.is_empty(), frontend);
        false
    }

    fn draw_penalty(&mut self, index: usize, amount: usize, frontend: &mut dyn Frontend) {
        let count = self.pick_up_card(index, amount, frontend);
        let player = self.players[index].name.clone();
        self.emit(frontend, Event::DrewPenalty { player, count });
    }

    fn show_turn(&self, index: usize, hand_sizes: &[usize], frontend: &mut dyn Frontend) {
        let Some(top) = self.top_card().copied() else {
            return;
        };
        let player = &self.players[index];
        let view = TurnView {
            seat: index + 1,
            name: &player.name,
            hand: (!player.is_ai()).then_some(player.hand.as_slice()),
            hand_size: player.hand.len(),
            top,
            direction: self.direction,
            hand_sizes,
        };
        frontend.show_turn(&view);
    }
}
