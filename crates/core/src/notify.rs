//! Outbound notifications for the presentation layer.
//!
//! The core calls these and never looks at what the implementation does with
//! them. Every method defaults to a no-op so a frontend only overrides what it
//! renders.

use crate::{Card, HandKind};
use serde::{Deserialize, Serialize};

/// Which of the four card collections a card is in.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum HandTag {
    Main,
    Played,
    Jokers,
    Consumables,
    Deck,
}

/// One scoreboard field update.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum Stat {
    MinScore(i64),
    RoundScore(i64),
    HandScore(i64),
    HandMult(f64),
    Money(i64),
    DiscardsRemaining(u32),
    HandsRemaining(u32),
    Ante(u32),
    BlindName(String),
    HandType(HandKind),
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum PopupColor {
    Chips,
    Mult,
    Money,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PopupLine {
    pub text: String,
    pub color: PopupColor,
}

impl PopupLine {
    pub fn new(text: impl Into<String>, color: PopupColor) -> Self {
        Self {
            text: text.into(),
            color,
        }
    }
}

pub trait UiNotifier {
    fn create_card_visual(&mut self, _card: &Card) {}
    fn remove_card_visual(&mut self, _card: &Card) {}
    fn move_cards(&mut self, _cards: &[Card], _from: HandTag, _to: HandTag) {}
    fn show_score_popup(&mut self, _card: &Card, _lines: &[PopupLine]) {}
    fn update_scoreboard(&mut self, _stats: &[Stat]) {}
    fn show_bust(&mut self) {}
    fn show_hand_scored(&mut self, _hand_score: i64, _hand_mult: f64, _total_added: i64) {}
    fn show_loss(&mut self, _message: &str) {}
    fn show_win(&mut self) {}
    fn show_money_won(&mut self, _base: i64, _reasons: &[(String, i64)]) {}
    fn prompt_endless_mode(&mut self) -> bool {
        false
    }
    fn enable_play(&mut self) {}
    fn disable_play(&mut self) {}
}

/// Discards every notification and declines endless mode.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullNotifier;

impl UiNotifier for NullNotifier {}
