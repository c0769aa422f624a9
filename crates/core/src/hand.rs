use crate::{compare_by_suit, compare_by_value, Card, CardId};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use tracing::warn;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum SortMethod {
    Suit,
    Value,
}

impl SortMethod {
    pub fn compare(self, left: &Card, right: &Card) -> Ordering {
        match self {
            SortMethod::Suit => compare_by_suit(left, right),
            SortMethod::Value => compare_by_value(left, right),
        }
    }
}

/// Where `Hand::add_card` put a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertOutcome {
    Placed(usize),
    /// The requested index was past the end; the card went to the end instead.
    Clamped(usize),
}

impl InsertOutcome {
    pub fn index(self) -> usize {
        match self {
            InsertOutcome::Placed(index) | InsertOutcome::Clamped(index) => index,
        }
    }
}

/// Ordered cards with an optional auto-sort.
///
/// While a sort method is set the cards stay ordered under it; any explicit
/// placement (indexed insert, move) drops the sort method.
#[derive(Debug, Default, Clone, Serialize, Deserialize, PartialEq)]
pub struct Hand {
    cards: Vec<Card>,
    #[serde(default)]
    sort_method: Option<SortMethod>,
}

impl Hand {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn sort_method(&self) -> Option<SortMethod> {
        self.sort_method
    }

    pub fn sort_by_suit(&mut self) {
        self.sort_with(SortMethod::Suit);
    }

    pub fn sort_by_value(&mut self) {
        self.sort_with(SortMethod::Value);
    }

    pub fn sort_with(&mut self, method: SortMethod) {
        self.cards.sort_by(|left, right| method.compare(left, right));
        self.sort_method = Some(method);
    }

    /// Lower-bound position under the active sort, or the end when unsorted.
    pub fn insert_index(&self, card: &Card) -> usize {
        match self.sort_method {
            Some(method) => self
                .cards
                .partition_point(|existing| method.compare(existing, card) == Ordering::Less),
            None => self.cards.len(),
        }
    }

    pub fn add_card(&mut self, card: Card, index: Option<usize>) -> InsertOutcome {
        let Some(index) = index else {
            let at = self.insert_index(&card);
            self.cards.insert(at, card);
            return InsertOutcome::Placed(at);
        };
        self.sort_method = None;
        if index > self.cards.len() {
            let at = self.cards.len();
            warn!(index, len = at, "insert index out of range, appending");
            self.cards.push(card);
            return InsertOutcome::Clamped(at);
        }
        self.cards.insert(index, card);
        InsertOutcome::Placed(index)
    }

    pub fn move_card(&mut self, from: usize, to: usize) -> bool {
        let len = self.cards.len();
        if from >= len || to >= len {
            return false;
        }
        if from == to {
            return true;
        }
        let card = self.cards.remove(from);
        self.cards.insert(to, card);
        self.sort_method = None;
        true
    }

    pub fn remove_at(&mut self, index: usize) -> Option<Card> {
        if index < self.cards.len() {
            Some(self.cards.remove(index))
        } else {
            None
        }
    }

    pub fn remove_card(&mut self, id: CardId) -> Option<Card> {
        let index = self.position(id)?;
        self.remove_at(index)
    }

    pub fn position(&self, id: CardId) -> Option<usize> {
        self.cards.iter().position(|card| card.id == id)
    }

    pub fn get(&self, index: usize) -> Option<&Card> {
        self.cards.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut Card> {
        self.cards.get_mut(index)
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub(crate) fn cards_mut(&mut self) -> &mut [Card] {
        &mut self.cards
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Card> {
        self.cards.iter()
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn selected_count(&self) -> usize {
        self.cards.iter().filter(|card| card.selected).count()
    }

    /// Removes every selected card, clearing the flag, in hand order.
    pub fn take_selected(&mut self) -> Vec<Card> {
        let (mut taken, kept): (Vec<Card>, Vec<Card>) =
            std::mem::take(&mut self.cards).into_iter().partition(|card| card.selected);
        self.cards = kept;
        for card in &mut taken {
            card.selected = false;
        }
        taken
    }

    pub fn clear(&mut self) -> Vec<Card> {
        std::mem::take(&mut self.cards)
    }
}
