use super::*;

impl Round {
    /// Draws up to `amount` cards from the stock into `index`'s hand, recycling
    /// the discards whenever the stock runs dry. Returns how many were drawn,
    /// which is short only when no reserve is left.
    pub fn pick_up_card(
        &mut self,
        index: usize,
        amount: usize,
        frontend: &mut dyn Frontend,
    ) -> usize {
        let mut picked = 0;
        while picked < amount {
            let Some(card) = self.deck.draw() else {
                let moved = self.deck.recycle_discards(&mut self.rng);
                if moved == 0 {
                    self.emit(frontend, Event::StockExhausted);
                    break;
                }
                self.emit(frontend, Event::DiscardsReshuffled { count: moved });
                continue;
            };
            self.players[index].hand.push(card);
            picked += 1;
        }
        picked
    }

    /// Fallback when no card was discarded: draw one card and, if it is legal,
    /// let the player decide whether to play it straight away.
    pub fn draw_and_resolve(&mut self, index: usize, declined: bool, frontend: &mut dyn Frontend) {
        let player = self.players[index].name.clone();
        let notice = if declined {
            Event::DrawingAfterDecline {
                player: player.clone(),
            }
        } else {
            Event::DrawingNoMatch {
                player: player.clone(),
            }
        };
        self.emit(frontend, notice);

        if self.pick_up_card(index, 1, frontend) == 0 {
            return;
        }
        let drawn = self.players[index].hand.len() - 1;
        let card = self.players[index].hand[drawn];
        if !self.can_discard(&card) {
            self.emit(frontend, Event::CannotDiscard { player, card });
            return;
        }

        let opponents = self.opponents(index);
        let strategy = self.players[index].strategy;
        let discard = strategy.discard_drawn(
            &self.players[index].hand,
            drawn,
            &opponents,
            &mut self.rng,
            frontend,
        );
        if discard {
            self.discard_card(index, drawn, frontend);
        } else {
            self.emit(frontend, Event::KeptDrawnCard { player });
        }
    }
}
