use super::*;
use crate::{HandReport, Hook, ScoringState, SortMethod, Stat, UiNotifier, ALWAYS_FLIPPED};
use tracing::{debug, info};

/// Outcome of a deal: ids of the cards that reached the main hand, and whether
/// the deck ran dry before the hand was full.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Deal {
    pub drawn: Vec<CardId>,
    pub exhausted: bool,
}

impl Game {
    /// Draws into the main hand until it holds `hand_size` cards.
    pub fn deal_cards(&mut self, ui: &mut dyn UiNotifier) -> Result<Deal, RunError> {
        self.require_phase(Phase::Play)?;
        let mut deal = Deal::default();
        let mut dealt = Vec::new();
        while self.main.len() < self.state.hand_size {
            let Some(mut card) = self.deck.draw_card() else {
                info!(main = self.main.len(), "deck exhausted while dealing");
                deal.exhausted = true;
                break;
            };
            card.flipped = card.has_property(ALWAYS_FLIPPED);
            card.selected = false;
            let index = self.main.add_card(card.clone(), None).index();
            ui.create_card_visual(&card);
            deal.drawn.push(card.id);
            dealt.push(card.clone());
            self.fire_hook(Hook::Draw, Some((index, card)), ScoringState::Idle, ui);
        }
        if !dealt.is_empty() {
            ui.move_cards(&dealt, HandTag::Deck, HandTag::Main);
        }
        debug!(
            drawn = deal.drawn.len(),
            left = self.deck.available_len(),
            "dealt"
        );
        Ok(deal)
    }

    /// Toggles selection of one card. Returns the new selected flag.
    pub fn select_card(&mut self, tag: HandTag, index: usize) -> Result<bool, RunError> {
        self.require_phase(Phase::Play)?;
        let card = self
            .hand_mut(tag)
            .and_then(|hand| hand.get_mut(index))
            .ok_or(RunError::InvalidIndex(index))?;
        card.selected = !card.selected;
        Ok(card.selected)
    }

    /// Throws away every selected main-hand card. One discard is spent per
    /// call no matter how many cards go. Returns how many were discarded.
    pub fn discard_cards(&mut self, ui: &mut dyn UiNotifier) -> Result<usize, RunError> {
        self.require_phase(Phase::Play)?;
        if self.state.discards_remaining() == 0 {
            info!(used = self.state.discards_used, "no discards left");
            return Err(RunError::NoDiscardsLeft);
        }
        if self.main.selected_count() == 0 {
            info!("discard with nothing selected");
            return Err(RunError::NoSelection);
        }
        let discarded = self.main.take_selected();
        for card in &discarded {
            ui.remove_card_visual(card);
        }
        self.state.discards_used += 1;
        ui.update_scoreboard(&[Stat::DiscardsRemaining(self.state.discards_remaining())]);
        debug!(
            cards = discarded.len(),
            remaining = self.state.discards_remaining(),
            "discarded"
        );
        Ok(discarded.len())
    }

    /// Moves the selection into the played hand and scores it. `Ok(None)` when
    /// nothing was selected; nothing changes in that case.
    pub fn play_cards(&mut self, ui: &mut dyn UiNotifier) -> Result<Option<HandReport>, RunError> {
        self.require_phase(Phase::Play)?;
        if self.state.hands_remaining() == 0 {
            return Err(RunError::NoHandsLeft);
        }
        if self.main.selected_count() == 0 {
            info!("play with nothing selected");
            return Ok(None);
        }
        let cards = self.main.take_selected();
        ui.move_cards(&cards, HandTag::Main, HandTag::Played);
        for card in cards {
            self.played.add_card(card, None);
        }
        let report = self.score_played_hand(ui);
        self.resolve_blind(ui);
        Ok(Some(report))
    }

    pub fn sort_main(&mut self, method: SortMethod) {
        self.main.sort_with(method);
    }

    /// Manual rearrangement of the main hand. Drops the auto-sort.
    pub fn move_card(&mut self, from: usize, to: usize) -> Result<(), RunError> {
        if self.main.move_card(from, to) {
            return Ok(());
        }
        let bad = if from >= self.main.len() { from } else { to };
        Err(RunError::InvalidIndex(bad))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Card, EventBus, Rank, Suit};

    fn game() -> Game {
        Game::with_builtin_jokers(GameConfig::default(), 7).unwrap()
    }

    #[test]
    fn deal_fills_to_hand_size() {
        let mut game = game();
        let mut ui = EventBus::default();
        let deal = game.deal_cards(&mut ui).unwrap();
        assert_eq!(deal.drawn.len(), 5);
        assert!(!deal.exhausted);
        assert_eq!(game.main.len(), 5);
        assert_eq!(game.deck.available_len(), 47);

        let again = game.deal_cards(&mut ui).unwrap();
        assert!(again.drawn.is_empty());
        assert_eq!(game.main.len(), 5);
    }

    #[test]
    fn deal_stops_when_deck_runs_dry() {
        let mut game = game();
        game.deck = Deck::from_cards(vec![
            Card::standard(900, Suit::Hearts, Rank::Two),
            Card::standard(901, Suit::Spades, Rank::Ace),
        ]);
        let deal = game.deal_cards(&mut EventBus::default()).unwrap();
        assert!(deal.exhausted);
        assert_eq!(deal.drawn, vec![901, 900]);
        assert_eq!(game.main.len(), 2);
    }

    #[test]
    fn always_flipped_cards_arrive_face_down() {
        let mut game = game();
        game.deck = Deck::from_cards(vec![
            Card::standard(900, Suit::Hearts, Rank::Two).with_property(ALWAYS_FLIPPED),
            Card::standard(901, Suit::Spades, Rank::Ace),
        ]);
        game.deal_cards(&mut EventBus::default()).unwrap();
        let flipped: Vec<_> = game.main.iter().map(|card| (card.id, card.flipped)).collect();
        assert!(flipped.contains(&(900, true)));
        assert!(flipped.contains(&(901, false)));
    }

    #[test]
    fn select_out_of_range_changes_nothing() {
        let mut game = game();
        game.deal_cards(&mut EventBus::default()).unwrap();
        assert!(matches!(
            game.select_card(HandTag::Main, 5),
            Err(RunError::InvalidIndex(5))
        ));
        assert_eq!(game.main.selected_count(), 0);
        assert!(game.select_card(HandTag::Main, 0).unwrap());
        assert!(!game.select_card(HandTag::Main, 0).unwrap());
        assert!(game.select_card(HandTag::Deck, 0).is_err());
    }

    #[test]
    fn discard_needs_a_selection() {
        let mut game = game();
        game.deal_cards(&mut EventBus::default()).unwrap();
        assert!(matches!(
            game.discard_cards(&mut EventBus::default()),
            Err(RunError::NoSelection)
        ));
        assert_eq!(game.state.discards_used, 0);
    }

    #[test]
    fn discard_spends_one_per_action() {
        let mut game = game();
        let mut ui = EventBus::default();
        game.deal_cards(&mut ui).unwrap();
        game.select_card(HandTag::Main, 0).unwrap();
        game.select_card(HandTag::Main, 1).unwrap();
        game.select_card(HandTag::Main, 2).unwrap();
        assert_eq!(game.discard_cards(&mut ui).unwrap(), 3);
        assert_eq!(game.state.discards_used, 1);
        assert_eq!(game.main.len(), 2);
        assert_eq!(game.main.selected_count(), 0);
    }

    #[test]
    fn play_without_selection_is_a_no_op() {
        let mut game = game();
        game.deal_cards(&mut EventBus::default()).unwrap();
        let before = game.state.clone();
        assert!(game.play_cards(&mut EventBus::default()).unwrap().is_none());
        assert_eq!(game.state, before);
        assert_eq!(game.main.len(), 5);
    }

    #[test]
    fn move_card_reports_bad_index() {
        let mut game = game();
        game.deal_cards(&mut EventBus::default()).unwrap();
        game.sort_main(SortMethod::Value);
        assert!(matches!(game.move_card(0, 9), Err(RunError::InvalidIndex(9))));
        assert_eq!(game.main.sort_method(), Some(SortMethod::Value));
        game.move_card(0, 4).unwrap();
        assert_eq!(game.main.sort_method(), None);
    }
}
