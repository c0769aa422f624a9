use crate::{Card, CardId, Rank, RngState, Suit};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// Draw pile over a canonical card pool.
///
/// `all` owns every card of the deck. `available` and `used` hold ids into
/// `all`; together they always cover `all` exactly once. The top of the
/// available pile is the end of the vector.
#[derive(Debug, Default, Clone, Serialize, Deserialize, PartialEq)]
pub struct Deck {
    all: Vec<Card>,
    available: Vec<CardId>,
    used: Vec<CardId>,
}

impl Deck {
    pub fn from_cards(cards: Vec<Card>) -> Self {
        let available = cards.iter().map(|card| card.id).collect();
        Self {
            all: cards,
            available,
            used: Vec::new(),
        }
    }

    /// Standard 52 cards with ids `first_id..first_id + 52`, unshuffled.
    pub fn standard52(first_id: CardId) -> Self {
        let mut cards = Vec::with_capacity(52);
        let mut id = first_id;
        for suit in Suit::STANDARD {
            for rank in Rank::STANDARD {
                cards.push(Card::standard(id, suit, rank));
                id = id.saturating_add(1);
            }
        }
        Self::from_cards(cards)
    }

    pub fn shuffle(&mut self, rng: &mut RngState) {
        rng.shuffle(&mut self.available);
    }

    /// Moves the top available card to the used pile and hands out a copy.
    pub fn draw_card(&mut self) -> Option<Card> {
        let Some(id) = self.available.pop() else {
            info!("draw from an empty deck");
            return None;
        };
        self.used.push(id);
        let card = self.card(id).cloned();
        debug!(card = id, left = self.available.len(), "card drawn");
        card
    }

    /// Puts a used card back on top of the available pile. Absent ids are ignored.
    pub fn return_card(&mut self, id: CardId) -> bool {
        let Some(pos) = self.used.iter().position(|used| *used == id) else {
            return false;
        };
        self.used.remove(pos);
        self.available.push(id);
        true
    }

    pub fn reset(&mut self, rng: &mut RngState) {
        self.used.clear();
        self.available = self.all.iter().map(|card| card.id).collect();
        self.shuffle(rng);
    }

    pub fn add_card(&mut self, card: Card) -> bool {
        if self.contains(card.id) {
            info!(card = card.id, "card already in deck");
            return false;
        }
        self.available.push(card.id);
        self.all.push(card);
        true
    }

    pub fn remove_card(&mut self, id: CardId) -> bool {
        let Some(pos) = self.all.iter().position(|card| card.id == id) else {
            info!(card = id, "card not in deck");
            return false;
        };
        self.all.remove(pos);
        self.available.retain(|other| *other != id);
        self.used.retain(|other| *other != id);
        true
    }

    pub fn contains(&self, id: CardId) -> bool {
        self.all.iter().any(|card| card.id == id)
    }

    pub fn card(&self, id: CardId) -> Option<&Card> {
        self.all.iter().find(|card| card.id == id)
    }

    pub fn all(&self) -> &[Card] {
        &self.all
    }

    pub fn available(&self) -> &[CardId] {
        &self.available
    }

    pub fn used(&self) -> &[CardId] {
        &self.used
    }

    pub fn len(&self) -> usize {
        self.all.len()
    }

    pub fn is_empty(&self) -> bool {
        self.all.is_empty()
    }

    pub fn available_len(&self) -> usize {
        self.available.len()
    }

    pub fn used_len(&self) -> usize {
        self.used.len()
    }

    /// `available ⊎ used == all`, compared by id.
    pub fn is_consistent(&self) -> bool {
        let mut pools: Vec<CardId> = self
            .available
            .iter()
            .chain(self.used.iter())
            .copied()
            .collect();
        let mut all: Vec<CardId> = self.all.iter().map(|card| card.id).collect();
        pools.sort_unstable();
        all.sort_unstable();
        pools == all
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn draw_moves_top_card_to_used() {
        let mut deck = Deck::standard52(1);
        let top = *deck.available().last().unwrap();
        let card = deck.draw_card().unwrap();
        assert_eq!(card.id, top);
        assert_eq!(deck.available_len(), 51);
        assert_eq!(deck.used(), &[top]);
        assert!(deck.is_consistent());
    }

    #[test]
    fn draw_from_empty_reports_none() {
        let mut deck = Deck::from_cards(vec![Card::standard(1, Suit::Hearts, Rank::Two)]);
        assert!(deck.draw_card().is_some());
        assert!(deck.draw_card().is_none());
        assert_eq!(deck.used_len(), 1);
    }

    #[test]
    fn return_card_ignores_unknown_ids() {
        let mut deck = Deck::standard52(1);
        let card = deck.draw_card().unwrap();
        assert!(!deck.return_card(999));
        assert!(deck.return_card(card.id));
        assert!(!deck.return_card(card.id));
        assert_eq!(deck.available_len(), 52);
        assert_eq!(deck.used_len(), 0);
    }

    #[test]
    fn add_and_remove_report_membership() {
        let mut deck = Deck::standard52(1);
        assert!(!deck.add_card(Card::standard(1, Suit::Hearts, Rank::Two)));
        assert!(deck.add_card(Card::standard(100, Suit::Hearts, Rank::Two)));
        assert_eq!(deck.len(), 53);
        deck.draw_card();
        let drawn = deck.used()[0];
        assert!(deck.remove_card(drawn));
        assert!(!deck.remove_card(drawn));
        assert_eq!(deck.len(), 52);
        assert!(deck.is_consistent());
    }

    #[test]
    fn reset_restores_full_pool() {
        let mut rng = RngState::from_seed(3);
        let mut deck = Deck::standard52(1);
        for _ in 0..10 {
            deck.draw_card();
        }
        deck.reset(&mut rng);
        assert_eq!(deck.available_len(), 52);
        assert_eq!(deck.used_len(), 0);
        assert!(deck.is_consistent());
    }
}
