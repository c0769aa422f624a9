use super::*;
use crate::{dispatch_hook, Card, Hook, HookContext, ScoringState, UiNotifier};
use tracing::debug;

impl Game {
    /// Fires `hook` on every joker, with `event` as the card the hook is about.
    pub(super) fn fire_hook(
        &mut self,
        hook: Hook,
        event: Option<(usize, Card)>,
        scoring: ScoringState,
        ui: &mut dyn UiNotifier,
    ) {
        let Game {
            config,
            registry,
            jokers,
            state,
            main,
            played,
            last_score_trace,
            ..
        } = self;
        if jokers.is_empty() {
            return;
        }
        let (card_index, card) = match event {
            Some((index, card)) => (Some(index), Some(card)),
            None => (None, None),
        };
        let mut ctx = HookContext {
            hook,
            card,
            card_index,
            joker_index: None,
            joker_count: jokers.len(),
            scoring,
            bust_limit: config.bust_limit,
            state,
            main: &*main,
            played: &*played,
            trace: last_score_trace,
            ui,
        };
        dispatch_hook(&**registry, jokers.cards_mut(), hook, &mut ctx);
    }

    /// Builds a joker by type name and puts it in the joker hand. Returns its index.
    pub fn add_joker(
        &mut self,
        kind: &str,
        index: Option<usize>,
        ui: &mut dyn UiNotifier,
    ) -> Result<usize, RunError> {
        if self.jokers.len() >= self.config.joker_slots {
            return Err(RunError::NoJokerSlots);
        }
        let joker = self.registry.create(kind)?;
        let card = Card::joker(self.alloc_card_id(), joker);
        let index = self.jokers.add_card(card.clone(), index).index();
        ui.create_card_visual(&card);
        debug!(kind, index, "joker added");
        self.fire_hook(Hook::JokerEnter, Some((index, card)), ScoringState::Idle, ui);
        Ok(index)
    }

    pub fn remove_joker(
        &mut self,
        index: usize,
        ui: &mut dyn UiNotifier,
    ) -> Result<Card, RunError> {
        let card = self
            .jokers
            .get(index)
            .cloned()
            .ok_or(RunError::InvalidJokerIndex(index))?;
        self.fire_hook(Hook::JokerLeave, Some((index, card)), ScoringState::Idle, ui);
        let removed = self
            .jokers
            .remove_at(index)
            .ok_or(RunError::InvalidJokerIndex(index))?;
        ui.remove_card_visual(&removed);
        debug!(kind = removed.subtype(), index, "joker removed");
        Ok(removed)
    }

    pub fn move_joker(&mut self, from: usize, to: usize) -> Result<(), RunError> {
        if self.jokers.move_card(from, to) {
            return Ok(());
        }
        let bad = if from >= self.jokers.len() { from } else { to };
        Err(RunError::InvalidJokerIndex(bad))
    }

    pub fn add_consumable(
        &mut self,
        tag: &str,
        ui: &mut dyn UiNotifier,
    ) -> Result<usize, RunError> {
        if self.consumables.len() >= self.config.consumable_slots {
            return Err(RunError::NoConsumableSlots);
        }
        let card = Card::consumable(self.alloc_card_id(), tag);
        let index = self.consumables.add_card(card.clone(), None).index();
        ui.create_card_visual(&card);
        Ok(index)
    }

    pub fn remove_consumable(
        &mut self,
        index: usize,
        ui: &mut dyn UiNotifier,
    ) -> Result<Card, RunError> {
        let card = self
            .consumables
            .remove_at(index)
            .ok_or(RunError::InvalidIndex(index))?;
        ui.remove_card_visual(&card);
        Ok(card)
    }
}
