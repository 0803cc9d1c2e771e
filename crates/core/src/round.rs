use crate::{
    Card, Deck, Direction, Event, Frontend, Opponent, PendingEffects, Player, RngState,
    RoundConfig,
};
use thiserror::Error;
use tracing::debug;

mod draw;
mod effects;
mod turn;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RoundError {
    #[error("need between {min} and {max} players, got {count}")]
    PlayerCount { count: usize, min: usize, max: usize },
    #[error("a deck of {available} cards cannot deal {needed}")]
    DeckTooSmall { needed: usize, available: usize },
}

/// One round of Switch. Owns every card in play: the stock, the discards and
/// all hands, plus the turn pointer, direction and pending effects.
#[derive(Debug)]
pub struct Round {
    config: RoundConfig,
    players: Vec<Player>,
    deck: Deck,
    direction: Direction,
    pending: PendingEffects,
    current: usize,
    rng: RngState,
}

impl Round {
    pub fn new(
        players: Vec<Player>,
        config: RoundConfig,
        rng: RngState,
    ) -> Result<Self, RoundError> {
        check_player_count(players.len(), &config)?;
        let needed = players.len() * config.hand_size + 1;
        if needed > Deck::SIZE {
            return Err(RoundError::DeckTooSmall {
                needed,
                available: Deck::SIZE,
            });
        }
        Ok(Self {
            config,
            players,
            deck: Deck::default(),
            direction: Direction::Clockwise,
            pending: PendingEffects::default(),
            current: 0,
            rng,
        })
    }

    /// Builds a round mid-play from explicit piles and hands, without dealing.
    pub fn from_parts(
        players: Vec<Player>,
        stock: Vec<Card>,
        discards: Vec<Card>,
        config: RoundConfig,
        rng: RngState,
    ) -> Result<Self, RoundError> {
        check_player_count(players.len(), &config)?;
        Ok(Self {
            config,
            players,
            deck: Deck { stock, discards },
            direction: Direction::Clockwise,
            pending: PendingEffects::default(),
            current: 0,
            rng,
        })
    }

    /// Shuffles a full deck, turns the first discard and deals every hand.
    pub fn setup_round(&mut self, frontend: &mut dyn Frontend) {
        for player in &mut self.players {
            player.hand.clear();
        }
        self.deck = Deck::standard52();
        self.deck.shuffle(&mut self.rng);
        if let Some(first) = self.deck.draw() {
            self.deck.discard(first);
        }
        debug!(seed = self.rng.seed(), players = self.players.len(), "round setup");
        for index in 0..self.players.len() {
            self.pick_up_card(index, self.config.hand_size, frontend);
        }
        self.direction = Direction::Clockwise;
        self.pending = PendingEffects::default();
        self.current = 0;
        if let Some(top) = self.top_card().copied() {
            self.emit(
                frontend,
                Event::RoundStarted {
                    players: self.players.len(),
                    top,
                },
            );
        }
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn stock(&self) -> &[Card] {
        &self.deck.stock
    }

    pub fn discards(&self) -> &[Card] {
        &self.deck.discards
    }

    pub fn top_card(&self) -> Option<&Card> {
        self.deck.top()
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn set_direction(&mut self, direction: Direction) {
        self.direction = direction;
    }

    pub fn pending(&self) -> PendingEffects {
        self.pending
    }

    pub fn set_pending(&mut self, pending: PendingEffects) {
        self.pending = pending;
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn set_current(&mut self, index: usize) {
        if index < self.players.len() {
            self.current = index;
        }
    }

    /// Cards across stock, discards and hands.
    pub fn card_count(&self) -> usize {
        self.deck.len() + self.players.iter().map(|p| p.hand.len()).sum::<usize>()
    }

    /// Hand sizes seen from `index`: its own first, then the seat that acts
    /// next under the current direction, and so on in play order.
    pub fn normalized_hand_sizes(&self, index: usize) -> Vec<usize> {
        let mut sizes: Vec<usize> = self.players.iter().map(|p| p.hand.len()).collect();
        if sizes.is_empty() {
            return sizes;
        }
        let len = sizes.len();
        sizes.rotate_left(index % len);
        if self.direction == Direction::AntiClockwise {
            sizes.reverse();
            sizes.rotate_right(1);
        }
        sizes
    }

    pub fn opponents(&self, index: usize) -> Vec<Opponent> {
        self.players
            .iter()
            .enumerate()
            .filter(|(seat, _)| *seat != index)
            .map(|(seat, player)| Opponent {
                index: seat,
                name: player.name.clone(),
                hand_size: player.hand.len(),
            })
            .collect()
    }

    /// Exchanges two players' hands wholesale.
    pub fn swap_hands(&mut self, first: usize, second: usize, frontend: &mut dyn Frontend) {
        if first == second || first >= self.players.len() || second >= self.players.len() {
            return;
        }
        let taken = std::mem::take(&mut self.players[first].hand);
        let returned = std::mem::replace(&mut self.players[second].hand, taken);
        self.players[first].hand = returned;
        let event = Event::HandsSwapped {
            player: self.players[first].name.clone(),
            other: self.players[second].name.clone(),
        };
        self.emit(frontend, event);
    }

    fn emit(&self, frontend: &mut dyn Frontend, event: Event) {
        debug!(?event, "round event");
        frontend.notify(&event);
    }
}

fn check_player_count(count: usize, config: &RoundConfig) -> Result<(), RoundError> {
    if count < config.min_players || count > config.max_players {
        return Err(RoundError::PlayerCount {
            count,
            min: config.min_players,
            max: config.max_players,
        });
    }
    Ok(())
}
