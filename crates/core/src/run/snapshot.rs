use super::state::validate_config;
use super::*;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

pub const SNAPSHOT_VERSION: u32 = 1;

/// Plain serializable copy of a game between operations.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GameSnapshot {
    pub version: u32,
    pub main: Hand,
    pub played: Hand,
    pub jokers: Hand,
    pub consumables: Hand,
    pub deck: Deck,
    pub state: GameState,
    pub next_card_id: CardId,
}

impl Game {
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            version: SNAPSHOT_VERSION,
            main: self.main.clone(),
            played: self.played.clone(),
            jokers: self.jokers.clone(),
            consumables: self.consumables.clone(),
            deck: self.deck.clone(),
            state: self.state.clone(),
            next_card_id: self.next_card_id,
        }
    }

    /// Rebuilds a game from `snapshot`. The RNG restarts from `seed`; the
    /// deck order is taken from the snapshot as is.
    pub fn restore(
        config: GameConfig,
        registry: Arc<JokerRegistry>,
        seed: u64,
        snapshot: GameSnapshot,
    ) -> Result<Self, RunError> {
        validate_config(&config)?;
        if snapshot.version != SNAPSHOT_VERSION {
            return Err(RunError::Snapshot(format!(
                "unsupported version {} (expected {SNAPSHOT_VERSION})",
                snapshot.version
            )));
        }
        if !snapshot.deck.is_consistent() {
            return Err(RunError::Snapshot(
                "deck pools do not match its cards".to_string(),
            ));
        }
        let held = [&snapshot.main, &snapshot.played];
        if let Some(card) = held
            .iter()
            .flat_map(|hand| hand.iter())
            .find(|card| !snapshot.deck.used().contains(&card.id))
        {
            return Err(RunError::Snapshot(format!(
                "card {} is held but was never drawn",
                card.id
            )));
        }
        if let Some(kind) = snapshot
            .jokers
            .iter()
            .filter_map(|card| card.joker.as_ref())
            .map(|joker| joker.kind.as_str())
            .find(|kind| !registry.contains(kind))
        {
            return Err(JokerError::UnknownType(kind.to_string()).into());
        }

        let mut held_ids = HashSet::new();
        if let Some(card) = held
            .iter()
            .flat_map(|hand| hand.iter())
            .find(|card| !held_ids.insert(card.id))
        {
            return Err(RunError::Snapshot(format!(
                "card {} is held twice",
                card.id
            )));
        }

        let mut seen = HashSet::new();
        let mut max_id = 0;
        let all_ids = snapshot
            .deck
            .all()
            .iter()
            .chain(snapshot.jokers.iter())
            .chain(snapshot.consumables.iter())
            .map(|card| card.id);
        for id in all_ids {
            if !seen.insert(id) {
                return Err(RunError::Snapshot(format!("card id {id} used twice")));
            }
            max_id = max_id.max(id);
        }
        if snapshot.next_card_id <= max_id {
            return Err(RunError::Snapshot(format!(
                "next card id {} is already taken",
                snapshot.next_card_id
            )));
        }

        Ok(Self {
            config,
            registry,
            rng: RngState::from_seed(seed),
            deck: snapshot.deck,
            main: snapshot.main,
            played: snapshot.played,
            jokers: snapshot.jokers,
            consumables: snapshot.consumables,
            state: snapshot.state,
            last_score_trace: Vec::new(),
            next_card_id: snapshot.next_card_id,
        })
    }
}
