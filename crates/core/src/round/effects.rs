use super::*;
use crate::Rank;
use tracing::warn;

impl Round {
    pub fn can_discard(&self, card: &Card) -> bool {
        match self.top_card() {
            Some(top) => card.matches(top),
            None => card.rank.is_wild(),
        }
    }

    /// Hand positions of `index` that may go on the discard pile right now.
    pub fn discardable(&self, index: usize) -> Vec<usize> {
        self.players[index]
            .hand
            .iter()
            .enumerate()
            .filter(|(_, card)| self.can_discard(card))
            .map(|(position, _)| position)
            .collect()
    }

    /// Moves `hand[position]` of player `index` onto the discards and queues
    /// or applies its effect. Nothing further happens once the hand is empty.
    pub fn discard_card(&mut self, index: usize, position: usize, frontend: &mut dyn Frontend) {
        if position >= self.players[index].hand.len() {
            warn!(seat = index, position, "discard position out of range");
            return;
        }
        let card = self.players[index].hand.remove(position);
        self.deck.discard(card);
        let player = self.players[index].name.clone();
        self.emit(frontend, Event::Discarded { player, card });
        if self.players[index].hand.is_empty() {
            return;
        }

        match card.rank {
            Rank::Eight => self.pending.skip = true,
            Rank::Two => self.pending.draw_two = true,
            Rank::Queen => self.pending.draw_four = true,
            Rank::King => {
                self.direction = self.direction.reversed();
                let direction = self.direction;
                self.emit(frontend, Event::DirectionReversed { direction });
            }
            Rank::Jack => {
                let opponents = self.opponents(index);
                let strategy = self.players[index].strategy;
                if let Some(target) =
                    strategy.select_swap_target(&opponents, &mut self.rng, frontend)
                {
                    self.swap_hands(index, target, frontend);
                }
            }
            _ => {}
        }
    }
}
