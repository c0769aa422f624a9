use blackjoker_core::{AnteRule, BlindRule, EconomyRule, GameConfig};
use serde::{Deserialize, Serialize};

/// Scalar table rules, stored as `rules.json`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TableRules {
    pub hand_size: usize,
    pub hands_per_blind: u32,
    pub discards_per_blind: u32,
    pub starting_money: i64,
    pub joker_slots: usize,
    pub consumable_slots: usize,
    pub bust_limit: u32,
    pub win_ante: u32,
}

impl TableRules {
    pub fn into_config(
        self,
        blinds: Vec<BlindRule>,
        antes: Vec<AnteRule>,
        economy: EconomyRule,
    ) -> GameConfig {
        GameConfig {
            hand_size: self.hand_size,
            hands_per_blind: self.hands_per_blind,
            discards_per_blind: self.discards_per_blind,
            starting_money: self.starting_money,
            joker_slots: self.joker_slots,
            consumable_slots: self.consumable_slots,
            bust_limit: self.bust_limit,
            win_ante: self.win_ante,
            blinds,
            antes,
            economy,
        }
    }
}

impl From<&GameConfig> for TableRules {
    fn from(config: &GameConfig) -> Self {
        Self {
            hand_size: config.hand_size,
            hands_per_blind: config.hands_per_blind,
            discards_per_blind: config.discards_per_blind,
            starting_money: config.starting_money,
            joker_slots: config.joker_slots,
            consumable_slots: config.consumable_slots,
            bust_limit: config.bust_limit,
            win_ante: config.win_ante,
        }
    }
}
