use crate::{Card, Rank};

/// Blackjack total of `cards` with flexible aces.
///
/// Jokers and consumables are skipped. Aces start at 11 and drop to 1 one at a
/// time while the total is above `limit`.
pub fn blackjack_score<'a>(cards: impl IntoIterator<Item = &'a Card>, limit: u32) -> u32 {
    let mut total = 0;
    let mut soft_aces = 0;
    for card in cards.into_iter().filter(|card| card.is_standard()) {
        if card.rank == Rank::Ace {
            soft_aces += 1;
        }
        total += card.base_value();
    }
    while total > limit && soft_aces > 0 {
        total -= 10;
        soft_aces -= 1;
    }
    total
}
