use crate::{Card, Rank, Suit};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Poker-style label for a played hand. Display only; it does not change the score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HandKind {
    HighCard,
    Pair,
    TwoPair,
    ThreeOfAKind,
    Flush,
    FullHouse,
    FourOfAKind,
}

impl HandKind {
    pub fn name(self) -> &'static str {
        match self {
            HandKind::HighCard => "High Card",
            HandKind::Pair => "Pair",
            HandKind::TwoPair => "Two Pair",
            HandKind::ThreeOfAKind => "Three of a Kind",
            HandKind::Flush => "Flush",
            HandKind::FullHouse => "Full House",
            HandKind::FourOfAKind => "Four of a Kind",
        }
    }
}

impl fmt::Display for HandKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

pub fn evaluate_hand(cards: &[Card]) -> HandKind {
    let mut rank_counts: HashMap<Rank, usize> = HashMap::new();
    let mut suit_counts: HashMap<Suit, usize> = HashMap::new();
    for card in cards.iter().filter(|card| card.is_standard()) {
        *rank_counts.entry(card.rank).or_insert(0) += 1;
        *suit_counts.entry(card.suit).or_insert(0) += 1;
    }

    let pairs = rank_counts.values().filter(|&&count| count == 2).count();
    let has_trips = rank_counts.values().any(|&count| count == 3);

    if rank_counts.values().any(|&count| count >= 4) {
        return HandKind::FourOfAKind;
    }
    if has_trips && pairs > 0 {
        return HandKind::FullHouse;
    }
    if suit_counts.values().any(|&count| count >= 5) {
        return HandKind::Flush;
    }
    if has_trips {
        return HandKind::ThreeOfAKind;
    }
    match pairs {
        0 => HandKind::HighCard,
        1 => HandKind::Pair,
        _ => HandKind::TwoPair,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Joker;

    fn cards(specs: &[(Suit, Rank)]) -> Vec<Card> {
        specs
            .iter()
            .enumerate()
            .map(|(id, (suit, rank))| Card::standard(id as u32, *suit, *rank))
            .collect()
    }

    #[test]
    fn classifies_rank_groups() {
        use Rank::*;
        use Suit::*;
        assert_eq!(evaluate_hand(&cards(&[(Hearts, Two)])), HandKind::HighCard);
        assert_eq!(
            evaluate_hand(&cards(&[(Hearts, Two), (Clubs, Two)])),
            HandKind::Pair
        );
        assert_eq!(
            evaluate_hand(&cards(&[(Hearts, Two), (Clubs, Two), (Hearts, Three), (Spades, Three)])),
            HandKind::TwoPair
        );
        assert_eq!(
            evaluate_hand(&cards(&[(Hearts, Two), (Clubs, Two), (Spades, Two)])),
            HandKind::ThreeOfAKind
        );
        assert_eq!(
            evaluate_hand(&cards(&[
                (Hearts, Two),
                (Clubs, Two),
                (Spades, Two),
                (Hearts, Three),
                (Clubs, Three)
            ])),
            HandKind::FullHouse
        );
        assert_eq!(
            evaluate_hand(&cards(&[(Hearts, Two), (Clubs, Two), (Spades, Two), (Diamonds, Two)])),
            HandKind::FourOfAKind
        );
    }

    #[test]
    fn flush_needs_five_of_a_suit_anywhere() {
        use Rank::*;
        use Suit::*;
        let hand = cards(&[
            (Hearts, Two),
            (Clubs, Nine),
            (Hearts, Three),
            (Hearts, Four),
            (Hearts, Five),
            (Hearts, Seven),
        ]);
        assert_eq!(evaluate_hand(&hand), HandKind::Flush);
    }

    #[test]
    fn special_cards_are_ignored() {
        let mut hand = cards(&[(Suit::Hearts, Rank::Two)]);
        hand.push(Card::joker(10, Joker::new("plain")));
        hand.push(Card::joker(11, Joker::new("plain")));
        assert_eq!(evaluate_hand(&hand), HandKind::HighCard);
    }
}
