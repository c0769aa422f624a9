use crate::Joker;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::BTreeSet;

pub type CardId = u32;

/// Property tag that makes a card arrive face-down whenever it is dealt.
pub const ALWAYS_FLIPPED: &str = "alwaysFlipped";
pub const HOLO: &str = "holo";

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Suit {
    Hearts,
    Diamonds,
    Clubs,
    Spades,
    Joker,
    Consumable,
}

impl Suit {
    pub const STANDARD: [Suit; 4] = [Suit::Hearts, Suit::Diamonds, Suit::Clubs, Suit::Spades];

    pub fn order(self) -> u8 {
        match self {
            Suit::Hearts => 0,
            Suit::Diamonds => 1,
            Suit::Clubs => 2,
            Suit::Spades => 3,
            Suit::Joker => 4,
            Suit::Consumable => 5,
        }
    }

    pub fn is_standard(self) -> bool {
        !matches!(self, Suit::Joker | Suit::Consumable)
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Rank {
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King,
    Ace,
    /// Jokers and consumables; their subtype lives on the card itself.
    Special,
}

impl Rank {
    pub const STANDARD: [Rank; 13] = [
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
        Rank::Ace,
    ];

    pub fn order(self) -> u8 {
        match self {
            Rank::Two => 2,
            Rank::Three => 3,
            Rank::Four => 4,
            Rank::Five => 5,
            Rank::Six => 6,
            Rank::Seven => 7,
            Rank::Eight => 8,
            Rank::Nine => 9,
            Rank::Ten => 10,
            Rank::Jack => 11,
            Rank::Queen => 12,
            Rank::King => 13,
            Rank::Ace => 14,
            Rank::Special => 15,
        }
    }

    /// Blackjack value with the ace counted high.
    pub fn value(self) -> u32 {
        match self {
            Rank::Ace => 11,
            Rank::Jack | Rank::Queen | Rank::King => 10,
            Rank::Special => 0,
            other => u32::from(other.order()),
        }
    }

    pub fn is_face(self) -> bool {
        matches!(self, Rank::Jack | Rank::Queen | Rank::King)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Card {
    pub id: CardId,
    pub suit: Suit,
    pub rank: Rank,
    #[serde(default)]
    pub flipped: bool,
    #[serde(default)]
    pub selected: bool,
    #[serde(default)]
    pub properties: BTreeSet<String>,
    #[serde(default)]
    pub joker: Option<Joker>,
    #[serde(default)]
    pub consumable: Option<String>,
}

impl Card {
    pub fn standard(id: CardId, suit: Suit, rank: Rank) -> Self {
        Self {
            id,
            suit,
            rank,
            flipped: false,
            selected: false,
            properties: BTreeSet::new(),
            joker: None,
            consumable: None,
        }
    }

    pub fn joker(id: CardId, joker: Joker) -> Self {
        Self {
            joker: Some(joker),
            ..Self::standard(id, Suit::Joker, Rank::Special)
        }
    }

    pub fn consumable(id: CardId, tag: impl Into<String>) -> Self {
        Self {
            consumable: Some(tag.into()),
            ..Self::standard(id, Suit::Consumable, Rank::Special)
        }
    }

    pub fn with_property(mut self, tag: impl Into<String>) -> Self {
        self.properties.insert(tag.into());
        self
    }

    pub fn is_standard(&self) -> bool {
        self.suit.is_standard()
    }

    pub fn base_value(&self) -> u32 {
        if self.is_standard() {
            self.rank.value()
        } else {
            0
        }
    }

    pub fn has_property(&self, tag: &str) -> bool {
        self.properties.contains(tag)
    }

    /// Joker type name or consumable tag for special cards.
    pub fn subtype(&self) -> Option<&str> {
        match (&self.joker, &self.consumable) {
            (Some(joker), _) => Some(joker.kind.as_str()),
            (None, Some(tag)) => Some(tag.as_str()),
            (None, None) => None,
        }
    }
}

pub fn compare_by_suit(left: &Card, right: &Card) -> Ordering {
    (left.suit.order(), left.rank.order()).cmp(&(right.suit.order(), right.rank.order()))
}

pub fn compare_by_value(left: &Card, right: &Card) -> Ordering {
    (left.rank.order(), left.suit.order()).cmp(&(right.rank.order(), right.suit.order()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_values_follow_blackjack_rules() {
        assert_eq!(Card::standard(1, Suit::Hearts, Rank::Ace).base_value(), 11);
        assert_eq!(Card::standard(2, Suit::Clubs, Rank::Queen).base_value(), 10);
        assert_eq!(Card::standard(3, Suit::Spades, Rank::Seven).base_value(), 7);
        assert_eq!(Card::consumable(4, "tarot").base_value(), 0);
    }

    #[test]
    fn suit_comparator_breaks_ties_by_rank() {
        let low = Card::standard(1, Suit::Hearts, Rank::King);
        let high = Card::standard(2, Suit::Diamonds, Rank::Two);
        assert_eq!(compare_by_suit(&low, &high), Ordering::Less);
        assert_eq!(compare_by_value(&low, &high), Ordering::Greater);
    }
}
