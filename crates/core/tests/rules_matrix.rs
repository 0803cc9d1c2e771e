mod common;

use common::{card, filler, round_with, top, ScriptedFrontend};
use switch_core::{Direction, PendingEffects, Rank, Strategy, Suit};

macro_rules! legality_case {
    ($name:ident, $rank:expr, $suit:expr, $expected:expr) => {
        #[test]
        fn $name() {
            let round = round_with(
                vec![(Strategy::Human, vec![]), (Strategy::Human, vec![])],
                vec![],
                vec![top()],
            );
            assert_eq!(round.can_discard(&card($rank, $suit)), $expected);
        }
    };
}

legality_case!(same_suit_matches, Rank::Nine, Suit::Clubs, true);
legality_case!(same_rank_matches, Rank::Three, Suit::Hearts, true);
legality_case!(queen_is_wild, Rank::Queen, Suit::Diamonds, true);
legality_case!(ace_is_wild, Rank::Ace, Suit::Spades, true);
legality_case!(king_off_suit_is_illegal, Rank::King, Suit::Hearts, false);
legality_case!(jack_off_suit_is_illegal, Rank::Jack, Suit::Spades, false);
legality_case!(two_off_suit_is_illegal, Rank::Two, Suit::Diamonds, false);
legality_case!(eight_on_suit_is_legal, Rank::Eight, Suit::Clubs, true);

macro_rules! effect_case {
    ($name:ident, $rank:expr, $pending:expr, $direction:expr) => {
        #[test]
        fn $name() {
            let mut hand = vec![card($rank, Suit::Clubs)];
            hand.extend(filler(2));
            let mut round = round_with(
                vec![
                    (Strategy::Human, hand),
                    (Strategy::Human, filler(3)),
                    (Strategy::Human, filler(3)),
                ],
                vec![],
                vec![top()],
            );
            let mut frontend = ScriptedFrontend::new();
            round.discard_card(0, 0, &mut frontend);
            assert_eq!(round.pending(), $pending);
            assert_eq!(round.direction(), $direction);
            assert_eq!(round.top_card(), Some(&card($rank, Suit::Clubs)));
        }
    };
}

const NONE: PendingEffects = PendingEffects {
    skip: false,
    draw_two: false,
    draw_four: false,
};

effect_case!(
    eight_queues_skip,
    Rank::Eight,
    PendingEffects {
        skip: true,
        ..NONE
    },
    Direction::Clockwise
);
effect_case!(
    two_queues_draw_two,
    Rank::Two,
    PendingEffects {
        draw_two: true,
        ..NONE
    },
    Direction::Clockwise
);
effect_case!(
    queen_queues_draw_four,
    Rank::Queen,
    PendingEffects {
        draw_four: true,
        ..NONE
    },
    Direction::Clockwise
);
effect_case!(king_reverses, Rank::King, NONE, Direction::AntiClockwise);
effect_case!(ace_has_no_effect, Rank::Ace, NONE, Direction::Clockwise);
effect_case!(seven_has_no_effect, Rank::Seven, NONE, Direction::Clockwise);
