use crate::{GameConfig, HandKind, Score};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Phase {
    Play,
    Cleared,
    Won,
    Lost,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum BlindKind {
    Small,
    Big,
    Boss,
}

impl BlindKind {
    /// Next blind, and whether it starts a new ante.
    pub fn next(self) -> (BlindKind, bool) {
        match self {
            BlindKind::Small => (BlindKind::Big, false),
            BlindKind::Big => (BlindKind::Boss, false),
            BlindKind::Boss => (BlindKind::Small, true),
        }
    }
}

/// Counters and round accumulators of one game session.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GameState {
    pub ante: u32,
    pub blind: BlindKind,
    pub phase: Phase,
    pub target: i64,
    pub money: i64,
    pub hand_size: usize,
    pub hands_per_blind: u32,
    pub hands_played: u32,
    pub discard_budget: u32,
    pub discards_used: u32,
    pub round_score: i64,
    pub hand: Score,
    #[serde(default)]
    pub last_hand: Option<HandKind>,
    #[serde(default)]
    pub endless: bool,
    #[serde(default)]
    pub blinds_cleared: u32,
}

impl GameState {
    pub fn new(config: &GameConfig) -> Self {
        Self {
            ante: 1,
            blind: BlindKind::Small,
            phase: Phase::Play,
            target: 0,
            money: config.starting_money,
            hand_size: config.hand_size,
            hands_per_blind: config.hands_per_blind,
            hands_played: 0,
            discard_budget: config.discards_per_blind,
            discards_used: 0,
            round_score: 0,
            hand: Score::default(),
            last_hand: None,
            endless: false,
            blinds_cleared: 0,
        }
    }

    pub fn hands_remaining(&self) -> u32 {
        self.hands_per_blind.saturating_sub(self.hands_played)
    }

    pub fn discards_remaining(&self) -> u32 {
        self.discard_budget.saturating_sub(self.discards_used)
    }

    /// Clears the per-blind counters and accumulators.
    pub fn reset_round(&mut self, config: &GameConfig) {
        self.hands_per_blind = config.hands_per_blind;
        self.hands_played = 0;
        self.discard_budget = config.discards_per_blind;
        self.discards_used = 0;
        self.round_score = 0;
        self.hand.reset();
        self.last_hand = None;
    }
}
