use crate::BlindKind;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BlindRule {
    pub kind: BlindKind,
    pub name: String,
    pub target_mult: f32,
    pub reward: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AnteRule {
    pub ante: u32,
    pub base_target: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EconomyRule {
    pub per_hand_reward: i64,
    pub interest_step: i64,
    pub interest_per: i64,
    pub interest_cap: i64,
}

impl EconomyRule {
    pub fn interest(&self, money: i64) -> i64 {
        if self.interest_step <= 0 || money <= 0 {
            return 0;
        }
        (money / self.interest_step * self.interest_per).min(self.interest_cap)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GameConfig {
    pub hand_size: usize,
    pub hands_per_blind: u32,
    pub discards_per_blind: u32,
    pub starting_money: i64,
    pub joker_slots: usize,
    pub consumable_slots: usize,
    pub bust_limit: u32,
    pub win_ante: u32,
    pub blinds: Vec<BlindRule>,
    pub antes: Vec<AnteRule>,
    pub economy: EconomyRule,
}

impl Default for GameConfig {
    fn default() -> Self {
        let blinds = vec![
            BlindRule {
                kind: BlindKind::Small,
                name: "Small Blind".to_string(),
                target_mult: 1.0,
                reward: 3,
            },
            BlindRule {
                kind: BlindKind::Big,
                name: "Big Blind".to_string(),
                target_mult: 1.5,
                reward: 4,
            },
            BlindRule {
                kind: BlindKind::Boss,
                name: "The Dealer".to_string(),
                target_mult: 2.0,
                reward: 5,
            },
        ];
        let antes = [40, 60, 90, 130, 180, 240, 310, 400]
            .into_iter()
            .zip(1..)
            .map(|(base_target, ante)| AnteRule { ante, base_target })
            .collect();
        Self {
            hand_size: 5,
            hands_per_blind: 4,
            discards_per_blind: 4,
            starting_money: 4,
            joker_slots: 5,
            consumable_slots: 2,
            bust_limit: 21,
            win_ante: 8,
            blinds,
            antes,
            economy: EconomyRule {
                per_hand_reward: 1,
                interest_step: 5,
                interest_per: 1,
                interest_cap: 5,
            },
        }
    }
}

impl GameConfig {
    pub fn blind_rule(&self, kind: BlindKind) -> Option<&BlindRule> {
        self.blinds.iter().find(|rule| rule.kind == kind)
    }

    pub fn ante_rule(&self, ante: u32) -> Option<&AnteRule> {
        self.antes.iter().find(|rule| rule.ante == ante)
    }

    pub fn max_ante(&self) -> Option<u32> {
        self.antes.iter().map(|rule| rule.ante).max()
    }

    /// Base target for `ante`; antes past the table double the last entry.
    pub fn base_target(&self, ante: u32) -> Option<i64> {
        if let Some(rule) = self.ante_rule(ante) {
            return Some(rule.base_target);
        }
        let max = self.max_ante()?;
        if ante < max {
            return None;
        }
        let last = self.ante_rule(max)?.base_target;
        let extra = (ante - max).min(62);
        Some(last.saturating_mul(1i64 << extra))
    }

    pub fn target_for(&self, ante: u32, kind: BlindKind) -> Option<i64> {
        let base = self.base_target(ante)?;
        let mult = self.blind_rule(kind)?.target_mult;
        Some((base as f32 * mult).round() as i64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn targets_scale_with_blind() {
        let config = GameConfig::default();
        assert_eq!(config.target_for(1, BlindKind::Small), Some(40));
        assert_eq!(config.target_for(1, BlindKind::Big), Some(60));
        assert_eq!(config.target_for(1, BlindKind::Boss), Some(80));
    }

    #[test]
    fn endless_antes_double() {
        let config = GameConfig::default();
        assert_eq!(config.base_target(9), Some(800));
        assert_eq!(config.base_target(10), Some(1600));
        assert_eq!(config.base_target(0), None);
    }

    #[test]
    fn interest_is_capped() {
        let economy = GameConfig::default().economy;
        assert_eq!(economy.interest(4), 0);
        assert_eq!(economy.interest(12), 2);
        assert_eq!(economy.interest(100), 5);
    }
}
