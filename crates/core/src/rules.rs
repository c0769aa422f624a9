use serde::{Deserialize, Serialize};

/// Running chips and multiplier of the hand being scored.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Score {
    pub chips: i64,
    pub mult: f64,
}

impl Default for Score {
    fn default() -> Self {
        Self {
            chips: 0,
            mult: 1.0,
        }
    }
}

impl Score {
    pub fn total_raw(&self) -> f64 {
        self.chips as f64 * self.mult
    }

    pub fn total(&self) -> i64 {
        self.total_raw().floor() as i64
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn apply(&mut self, effect: &RuleEffect) {
        match effect {
            RuleEffect::AddChips(value) => self.chips += value,
            RuleEffect::AddMult(value) => self.mult += value,
            RuleEffect::MultiplyMult(value) => self.mult *= value,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum RuleEffect {
    AddChips(i64),
    AddMult(f64),
    MultiplyMult(f64),
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ScoreTraceStep {
    pub source: String,
    pub effect: RuleEffect,
    pub before: Score,
    pub after: Score,
}
