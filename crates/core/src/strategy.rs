use crate::{Card, Frontend, Opponent, Rank, RngState, Suit};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use tracing::trace;

/// Best scores at or below this make the heuristic player hold its cards.
pub const DECLINE_THRESHOLD: i64 = -2;

/// How a seat makes its decisions. Human seats defer to the frontend; the two
/// computer strategies decide from the state handed to them.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Strategy {
    Human,
    Random,
    Heuristic,
}

impl Strategy {
    pub fn is_ai(self) -> bool {
        !matches!(self, Self::Human)
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Human => "human",
            Self::Random => "random",
            Self::Heuristic => "heuristic",
        }
    }

    pub fn from_label(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "human" => Some(Self::Human),
            "random" | "simple" => Some(Self::Random),
            "heuristic" | "smart" => Some(Self::Heuristic),
            _ => None,
        }
    }

    /// Chooses one of `candidates` (positions in `hand`) to discard, or `None`
    /// to decline. `hand_sizes` is the normalized view, own hand first.
    pub fn select_card(
        self,
        hand: &[Card],
        candidates: &[usize],
        hand_sizes: &[usize],
        rng: &mut RngState,
        frontend: &mut dyn Frontend,
    ) -> Option<usize> {
        if candidates.is_empty() {
            return None;
        }
        match self {
            Self::Human => frontend.select_card(hand, candidates),
            Self::Random => {
                // one extra slot stands for "no discard"
                let pick = rng.index(candidates.len() + 1);
                candidates.get(pick).copied()
            }
            Self::Heuristic => best_candidate(hand, candidates, hand_sizes),
        }
    }

    /// Seat index of the player to swap hands with.
    pub fn select_swap_target(
        self,
        opponents: &[Opponent],
        rng: &mut RngState,
        frontend: &mut dyn Frontend,
    ) -> Option<usize> {
        if opponents.is_empty() {
            return None;
        }
        match self {
            Self::Human => Some(frontend.select_player(opponents)),
            Self::Random => rng.choose(opponents).map(|opponent| opponent.index),
            Self::Heuristic => {
                let smallest = opponents.iter().map(|o| o.hand_size).min()?;
                let weakest: Vec<usize> = opponents
                    .iter()
                    .filter(|o| o.hand_size == smallest)
                    .map(|o| o.index)
                    .collect();
                rng.choose(&weakest).copied()
            }
        }
    }

    /// Whether to discard the card just drawn into `hand[drawn]`.
    pub fn discard_drawn(
        self,
        hand: &[Card],
        drawn: usize,
        opponents: &[Opponent],
        rng: &mut RngState,
        frontend: &mut dyn Frontend,
    ) -> bool {
        let Some(card) = hand.get(drawn).copied() else {
            return false;
        };
        match self {
            Self::Human => frontend.select_keep_or_discard(card),
            Self::Random => rng.coin_flip(),
            Self::Heuristic => heuristic_discard_drawn(hand, drawn, opponents),
        }
    }
}

/// Heuristic value of discarding `hand[position]`.
pub fn score_candidate(hand: &[Card], position: usize, hand_sizes: &[usize]) -> i64 {
    let card = hand[position];
    let in_suit = same_suit_count(hand, position, card.suit) as i64;
    let own = hand_sizes.first().copied().unwrap_or(hand.len()) as i64;
    let next = hand_sizes.get(1).copied().unwrap_or(0) as i64;
    let previous = hand_sizes.last().copied().unwrap_or(0) as i64;
    match card.rank {
        Rank::Jack => {
            let fewest_other = hand_sizes.iter().skip(1).min().copied().unwrap_or(0) as i64;
            3 * (own - 1 - fewest_other)
        }
        Rank::Queen => 6 + in_suit,
        Rank::Two => 4 + in_suit,
        Rank::Eight => 2 + in_suit,
        Rank::King => (if previous > next { 3 } else { -1 }) + in_suit,
        Rank::Ace => -2 + in_suit,
        _ => in_suit,
    }
}

fn best_candidate(hand: &[Card], candidates: &[usize], hand_sizes: &[usize]) -> Option<usize> {
    let mut best: Option<(usize, i64)> = None;
    for &position in candidates {
        let score = score_candidate(hand, position, hand_sizes);
        trace!(card = %hand[position], score, "scored discard candidate");
        if best.map_or(true, |(_, top)| score > top) {
            best = Some((position, score));
        }
    }
    let (position, score) = best?;
    (score > DECLINE_THRESHOLD).then_some(position)
}

fn held_except(hand: &[Card], position: usize) -> impl Iterator<Item = &Card> + '_ {
    hand.iter()
        .enumerate()
        .filter(move |(idx, _)| *idx != position)
        .map(|(_, card)| card)
}

fn same_suit_count(hand: &[Card], position: usize, suit: Suit) -> usize {
    held_except(hand, position)
        .filter(|card| card.suit == suit)
        .count()
}

fn heuristic_discard_drawn(hand: &[Card], drawn: usize, opponents: &[Opponent]) -> bool {
    let card = hand[drawn];
    let same_suit = same_suit_count(hand, drawn, card.suit);
    let suits_held: HashSet<Suit> = held_except(hand, drawn).map(|held| held.suit).collect();
    let wild_held = held_except(hand, drawn)
        .filter(|held| held.rank.is_wild())
        .count();
    let smallest = opponents
        .iter()
        .map(|o| o.hand_size)
        .min()
        .unwrap_or(usize::MAX);
    let keep_jack = card.rank == Rank::Jack && hand.len() < smallest;

    if hand.len() >= 2 && suits_held.len() < 4 {
        if card.rank.is_wild() && wild_held == 0 {
            return false;
        }
        return same_suit != 0;
    }
    !keep_jack
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Event;

    struct Silent;

    impl Frontend for Silent {
        fn message(&mut self, _text: &str) {}
        fn notify(&mut self, _event: &Event) {}
        fn show_turn(&mut self, _view: &crate::TurnView<'_>) {}
        fn announce_winner(&mut self, _name: &str) {}
        fn prompt_int(&mut self, min: i64, _max: i64) -> i64 {
            min
        }
        fn prompt_line(&mut self) -> String {
            String::new()
        }
        fn select_card(&mut self, _hand: &[Card], candidates: &[usize]) -> Option<usize> {
            candidates.first().copied()
        }
        fn select_player(&mut self, opponents: &[Opponent]) -> usize {
            opponents[0].index
        }
        fn select_keep_or_discard(&mut self, _card: Card) -> bool {
            true
        }
    }

    fn card(suit: Suit, rank: Rank) -> Card {
        Card::new(suit, rank)
    }

    fn opponent(index: usize, hand_size: usize) -> Opponent {
        Opponent {
            index,
            name: format!("P{index}"),
            hand_size,
        }
    }

    #[test]
    fn queen_outranks_plain_match() {
        let hand = vec![card(Suit::Hearts, Rank::Queen), card(Suit::Clubs, Rank::Five)];
        let sizes = [2, 5, 5];
        assert!(score_candidate(&hand, 0, &sizes) >= 6);
        assert_eq!(score_candidate(&hand, 1, &sizes), 0);
        let pick = best_candidate(&hand, &[1, 0], &sizes);
        assert_eq!(pick, Some(0));
    }

    #[test]
    fn suit_pressure_excludes_the_candidate_itself() {
        let hand = vec![
            card(Suit::Spades, Rank::Four),
            card(Suit::Spades, Rank::Four),
            card(Suit::Spades, Rank::Nine),
        ];
        assert_eq!(score_candidate(&hand, 0, &[3, 4]), 2);
    }

    #[test]
    fn jack_scores_from_own_size_and_smallest_opponent() {
        let hand = vec![card(Suit::Clubs, Rank::Jack), card(Suit::Clubs, Rank::Two)];
        assert_eq!(score_candidate(&hand, 0, &[6, 4, 2]), 9);
        assert_eq!(score_candidate(&hand, 0, &[2, 4, 2]), -3);
    }

    #[test]
    fn king_prefers_reversing_towards_smaller_hand() {
        let hand = vec![card(Suit::Clubs, Rank::King)];
        assert_eq!(score_candidate(&hand, 0, &[1, 2, 6]), 3);
        assert_eq!(score_candidate(&hand, 0, &[1, 6, 2]), -1);
    }

    #[test]
    fn lone_ace_is_declined() {
        let hand = vec![card(Suit::Clubs, Rank::Ace), card(Suit::Hearts, Rank::Six)];
        assert_eq!(best_candidate(&hand, &[0], &[2, 3]), None);
    }

    #[test]
    fn ace_with_suit_support_is_played() {
        let hand = vec![card(Suit::Clubs, Rank::Ace), card(Suit::Clubs, Rank::Six)];
        assert_eq!(best_candidate(&hand, &[0], &[2, 3]), Some(0));
    }

    #[test]
    fn ties_keep_hand_order() {
        let hand = vec![card(Suit::Clubs, Rank::Five), card(Suit::Hearts, Rank::Five)];
        assert_eq!(best_candidate(&hand, &[0, 1], &[2, 3]), Some(0));
    }

    #[test]
    fn heuristic_swaps_with_a_smallest_hand() {
        let mut rng = RngState::from_seed(3);
        let opponents = [opponent(1, 4), opponent(2, 1), opponent(3, 1)];
        for _ in 0..20 {
            let target = Strategy::Heuristic
                .select_swap_target(&opponents, &mut rng, &mut Silent)
                .unwrap();
            assert!(target == 2 || target == 3);
        }
    }

    #[test]
    fn random_declines_sometimes_and_stays_legal() {
        let mut rng = RngState::from_seed(11);
        let hand = vec![card(Suit::Clubs, Rank::Five), card(Suit::Hearts, Rank::Five)];
        let mut declined = false;
        for _ in 0..100 {
            match Strategy::Random.select_card(&hand, &[1], &[2, 2], &mut rng, &mut Silent) {
                Some(position) => assert_eq!(position, 1),
                None => declined = true,
            }
        }
        assert!(declined);
    }

    #[test]
    fn human_defers_to_frontend() {
        let mut rng = RngState::from_seed(0);
        let hand = vec![card(Suit::Clubs, Rank::Five), card(Suit::Hearts, Rank::Five)];
        let pick = Strategy::Human.select_card(&hand, &[1, 0], &[2, 2], &mut rng, &mut Silent);
        assert_eq!(pick, Some(1));
    }

    #[test]
    fn drawn_wild_is_kept_when_none_held() {
        let hand = vec![
            card(Suit::Clubs, Rank::Five),
            card(Suit::Clubs, Rank::Six),
            card(Suit::Hearts, Rank::Queen),
        ];
        assert!(!heuristic_discard_drawn(&hand, 2, &[opponent(1, 5)]));
    }

    #[test]
    fn drawn_card_of_new_suit_is_kept() {
        let hand = vec![card(Suit::Clubs, Rank::Five), card(Suit::Hearts, Rank::Nine)];
        assert!(!heuristic_discard_drawn(&hand, 1, &[opponent(1, 5)]));
    }

    #[test]
    fn drawn_card_of_held_suit_is_discarded() {
        let hand = vec![card(Suit::Clubs, Rank::Five), card(Suit::Clubs, Rank::Nine)];
        assert!(heuristic_discard_drawn(&hand, 1, &[opponent(1, 5)]));
    }

    #[test]
    fn full_suit_coverage_keeps_jack_only_when_smallest() {
        let mut hand = vec![
            card(Suit::Clubs, Rank::Five),
            card(Suit::Diamonds, Rank::Five),
            card(Suit::Hearts, Rank::Five),
            card(Suit::Spades, Rank::Five),
            card(Suit::Spades, Rank::Jack),
        ];
        assert!(!heuristic_discard_drawn(&hand, 4, &[opponent(1, 7)]));
        assert!(heuristic_discard_drawn(&hand, 4, &[opponent(1, 3)]));
        hand[4] = card(Suit::Spades, Rank::Nine);
        assert!(heuristic_discard_drawn(&hand, 4, &[opponent(1, 7)]));
    }

    #[test]
    fn single_card_hand_discards_unless_jack_keeps_lead() {
        let jack = vec![card(Suit::Clubs, Rank::Jack)];
        assert!(!heuristic_discard_drawn(&jack, 0, &[opponent(1, 4)]));
        assert!(heuristic_discard_drawn(&jack, 0, &[opponent(1, 1)]));
        let queen = vec![card(Suit::Clubs, Rank::Queen)];
        assert!(heuristic_discard_drawn(&queen, 0, &[opponent(1, 4)]));
    }

    #[test]
    fn labels_round_trip() {
        for strategy in [Strategy::Human, Strategy::Random, Strategy::Heuristic] {
            assert_eq!(Strategy::from_label(strategy.label()), Some(strategy));
        }
        assert_eq!(Strategy::from_label("Smart"), Some(Strategy::Heuristic));
        assert_eq!(Strategy::from_label("nope"), None);
    }
}
