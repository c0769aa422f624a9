use blackjoker_core::{blackjack_score, Card, Deck, Hand, Rank, RngState, SortMethod, Suit};
use proptest::prelude::*;
use std::cmp::Ordering;

#[derive(Debug, Clone)]
enum DeckOp {
    Draw,
    Return(usize),
    Add,
    Remove(usize),
}

fn deck_op() -> impl Strategy<Value = DeckOp> {
    prop_oneof![
        3 => Just(DeckOp::Draw),
        2 => any::<usize>().prop_map(DeckOp::Return),
        1 => Just(DeckOp::Add),
        1 => any::<usize>().prop_map(DeckOp::Remove),
    ]
}

fn standard_card() -> impl Strategy<Value = (Suit, Rank)> {
    (
        prop::sample::select(Suit::STANDARD.to_vec()),
        prop::sample::select(Rank::STANDARD.to_vec()),
    )
}

fn sort_method() -> impl Strategy<Value = SortMethod> {
    prop_oneof![Just(SortMethod::Suit), Just(SortMethod::Value)]
}

proptest! {
    #[test]
    fn deck_pools_always_cover_every_card(
        seed in any::<u64>(),
        ops in prop::collection::vec(deck_op(), 0..200),
    ) {
        let mut rng = RngState::from_seed(seed);
        let mut deck = Deck::standard52(1);
        deck.reset(&mut rng);
        let mut next_id = 100;
        for op in ops {
            match op {
                DeckOp::Draw => {
                    let before = deck.available_len();
                    let drawn = deck.draw_card();
                    prop_assert_eq!(drawn.is_some(), before > 0);
                }
                DeckOp::Return(pick) => {
                    if deck.used_len() > 0 {
                        let id = deck.used()[pick % deck.used_len()];
                        prop_assert!(deck.return_card(id));
                    }
                }
                DeckOp::Add => {
                    prop_assert!(deck.add_card(Card::standard(next_id, Suit::Hearts, Rank::Ace)));
                    next_id += 1;
                }
                DeckOp::Remove(pick) => {
                    if !deck.is_empty() {
                        let id = deck.all()[pick % deck.len()].id;
                        prop_assert!(deck.remove_card(id));
                        prop_assert!(!deck.remove_card(id));
                    }
                }
            }
            prop_assert_eq!(deck.len(), deck.available_len() + deck.used_len());
            prop_assert!(deck.is_consistent());
        }
    }

    #[test]
    fn sorted_hands_stay_sorted(
        initial in prop::collection::vec(standard_card(), 0..12),
        added in prop::collection::vec(standard_card(), 0..8),
        method in sort_method(),
    ) {
        let mut hand = Hand::new();
        let mut id = 0;
        for (suit, rank) in initial {
            hand.add_card(Card::standard(id, suit, rank), None);
            id += 1;
        }
        hand.sort_with(method);
        for (suit, rank) in added {
            hand.add_card(Card::standard(id, suit, rank), None);
            id += 1;
        }
        prop_assert_eq!(hand.sort_method(), Some(method));
        for pair in hand.cards().windows(2) {
            prop_assert_ne!(method.compare(&pair[0], &pair[1]), Ordering::Greater);
        }
    }

    #[test]
    fn blackjack_score_never_busts_on_soft_aces(
        cards in prop::collection::vec(standard_card(), 0..8),
    ) {
        let cards: Vec<Card> = cards
            .into_iter()
            .enumerate()
            .map(|(id, (suit, rank))| Card::standard(id as u32, suit, rank))
            .collect();
        let hard: u32 = cards
            .iter()
            .map(|card| if card.rank == Rank::Ace { 1 } else { card.base_value() })
            .sum();
        let score = blackjack_score(&cards, 21);
        prop_assert!(score >= hard);
        if hard <= 21 {
            prop_assert!(score <= 21);
        } else {
            prop_assert_eq!(score, hard);
        }
    }
}
