use crate::{Card, Rank, RngState, Suit};

/// Stock and discard piles of a round. The stock is drawn from its tail and the
/// top of the discard pile is its last card.
#[derive(Debug, Default, Clone)]
pub struct Deck {
    pub stock: Vec<Card>,
    pub discards: Vec<Card>,
}

impl Deck {
    pub const SIZE: usize = 52;

    pub fn standard52() -> Self {
        let mut stock = Vec::with_capacity(Self::SIZE);
        for suit in Suit::ALL {
            for rank in Rank::ALL {
                stock.push(Card::new(suit, rank));
            }
        }
        Self {
            stock,
            discards: Vec::new(),
        }
    }

    pub fn shuffle(&mut self, rng: &mut RngState) {
        rng.shuffle(&mut self.stock);
    }

    pub fn draw(&mut self) -> Option<Card> {
        self.stock.pop()
    }

    pub fn top(&self) -> Option<&Card> {
        self.discards.last()
    }

    pub fn discard(&mut self, card: Card) {
        self.discards.push(card);
    }

    /// Moves every discard except the top back into the stock and shuffles it.
    /// Returns how many cards were moved; zero when there is no reserve.
    pub fn recycle_discards(&mut self, rng: &mut RngState) -> usize {
        if self.discards.len() <= 1 {
            return 0;
        }
        let keep_from = self.discards.len() - 1;
        let mut reserve: Vec<Card> = self.discards.drain(..keep_from).collect();
        let moved = reserve.len();
        self.stock.append(&mut reserve);
        rng.shuffle(&mut self.stock);
        moved
    }

    pub fn len(&self) -> usize {
        self.stock.len() + self.discards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stock.is_empty() && self.discards.is_empty()
    }
}
