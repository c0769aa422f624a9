use crate::HandKind;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Where a scoring pass is. `Bust` and `Committed` end the pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScoringState {
    #[default]
    Idle,
    Accumulating,
    Bust,
    Committed,
}

impl ScoringState {
    pub fn can_advance_to(self, next: ScoringState) -> bool {
        matches!(
            (self, next),
            (ScoringState::Idle, ScoringState::Accumulating)
                | (ScoringState::Accumulating, ScoringState::Bust)
                | (ScoringState::Accumulating, ScoringState::Committed)
        )
    }

    pub fn is_terminal(self) -> bool {
        matches!(self, ScoringState::Bust | ScoringState::Committed)
    }
}

/// State machine for one scoring pass. Built fresh for every play.
#[derive(Debug, Default)]
pub struct ScoringPass {
    state: ScoringState,
}

impl ScoringPass {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> ScoringState {
        self.state
    }

    pub fn advance(&mut self, next: ScoringState) -> bool {
        if !self.state.can_advance_to(next) {
            warn!(from = ?self.state, to = ?next, "illegal scoring transition");
            return false;
        }
        debug!(from = ?self.state, to = ?next, "scoring transition");
        self.state = next;
        true
    }
}

/// Result of scoring one played hand.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HandReport {
    pub outcome: ScoringState,
    pub kind: HandKind,
    pub blackjack_total: u32,
    /// Chips and mult as accumulated, before the bust reset.
    pub hand_score: i64,
    pub hand_mult: f64,
    pub added: i64,
}

impl HandReport {
    pub fn is_bust(&self) -> bool {
        self.outcome == ScoringState::Bust
    }
}
