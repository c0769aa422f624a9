use crate::{
    BlindKind, CardId, Deck, GameConfig, GameState, Hand, HandTag, JokerError, JokerRegistry,
    Phase, RngState, ScoreTraceStep,
};
use std::sync::Arc;
use thiserror::Error;

mod actions;
mod blind;
mod jokers;
mod scoring;
mod snapshot;
mod state;

pub use actions::Deal;
pub use snapshot::{GameSnapshot, SNAPSHOT_VERSION};

#[derive(Debug, Error)]
pub enum RunError {
    #[error("missing config for blind {0:?}")]
    MissingBlindRule(BlindKind),
    #[error("missing config for ante {0}")]
    MissingAnteRule(u32),
    #[error("invalid phase: {0:?}")]
    InvalidPhase(Phase),
    #[error("no hands left")]
    NoHandsLeft,
    #[error("no discards left")]
    NoDiscardsLeft,
    #[error("no cards selected")]
    NoSelection,
    #[error("invalid card index {0}")]
    InvalidIndex(usize),
    #[error("invalid joker index {0}")]
    InvalidJokerIndex(usize),
    #[error("no joker slots")]
    NoJokerSlots,
    #[error("no consumable slots")]
    NoConsumableSlots,
    #[error("invalid snapshot: {0}")]
    Snapshot(String),
    #[error(transparent)]
    Joker(#[from] JokerError),
}

/// One game session: the deck, the four hands and every counter.
///
/// All operations run to completion synchronously. An operation that returns
/// an error has not changed anything.
#[derive(Debug)]
pub struct Game {
    config: GameConfig,
    registry: Arc<JokerRegistry>,
    pub rng: RngState,
    pub deck: Deck,
    pub main: Hand,
    pub played: Hand,
    pub jokers: Hand,
    pub consumables: Hand,
    pub state: GameState,
    pub last_score_trace: Vec<ScoreTraceStep>,
    next_card_id: CardId,
}

impl Game {
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn registry(&self) -> &JokerRegistry {
        &self.registry
    }

    pub fn hand(&self, tag: HandTag) -> Option<&Hand> {
        match tag {
            HandTag::Main => Some(&self.main),
            HandTag::Played => Some(&self.played),
            HandTag::Jokers => Some(&self.jokers),
            HandTag::Consumables => Some(&self.consumables),
            HandTag::Deck => None,
        }
    }

    pub fn hand_mut(&mut self, tag: HandTag) -> Option<&mut Hand> {
        match tag {
            HandTag::Main => Some(&mut self.main),
            HandTag::Played => Some(&mut self.played),
            HandTag::Jokers => Some(&mut self.jokers),
            HandTag::Consumables => Some(&mut self.consumables),
            HandTag::Deck => None,
        }
    }

    fn alloc_card_id(&mut self) -> CardId {
        let id = self.next_card_id;
        self.next_card_id = self.next_card_id.saturating_add(1);
        id
    }

    fn require_phase(&self, phase: Phase) -> Result<(), RunError> {
        if self.state.phase == phase {
            Ok(())
        } else {
            Err(RunError::InvalidPhase(self.state.phase))
        }
    }
}
