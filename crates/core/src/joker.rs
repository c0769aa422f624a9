//! Joker effects.
//!
//! A joker card stores only its type name and per-instance variables. The
//! behavior lives in the [`JokerRegistry`], which maps each type name to a
//! [`JokerEffect`] and, optionally, a [`HookLayer`] that intercepts hook calls
//! before the effect sees them (this is how `mirror` and `blueprint` reach
//! their neighbors).
//!
//! Hooks fire once per joker in joker-hand order. Every hook receives the
//! joker's own state and a [`HookContext`] built for that one event.

use crate::{Card, GameState, Hand, RuleEffect, ScoreTraceStep, ScoringState, Stat, UiNotifier};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

mod builtin;
mod dispatch;
mod layer;
mod registry;

pub use builtin::*;
pub use dispatch::*;
pub use layer::*;
pub use registry::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Hook {
    RoundStart,
    BlindStart,
    Draw,
    JokerEnter,
    JokerLeave,
    ScoringStart,
    ScoringEnd,
    CardScore,
}

impl Hook {
    pub const ALL: [Hook; 8] = [
        Hook::RoundStart,
        Hook::BlindStart,
        Hook::Draw,
        Hook::JokerEnter,
        Hook::JokerLeave,
        Hook::ScoringStart,
        Hook::ScoringEnd,
        Hook::CardScore,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Hook::RoundStart => "onRoundStart",
            Hook::BlindStart => "onBlindStart",
            Hook::Draw => "onDraw",
            Hook::JokerEnter => "onJokerEnter",
            Hook::JokerLeave => "onJokerLeave",
            Hook::ScoringStart => "onScoringStart",
            Hook::ScoringEnd => "onScoringEnd",
            Hook::CardScore => "onCardScore",
        }
    }

    const fn bit(self) -> u8 {
        1 << self as u8
    }
}

/// Small bitset over [`Hook`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HookSet(u8);

impl HookSet {
    pub const EMPTY: HookSet = HookSet(0);
    pub const ALL: HookSet = HookSet::of(&Hook::ALL);

    pub const fn of(hooks: &[Hook]) -> Self {
        let mut bits = 0;
        let mut i = 0;
        while i < hooks.len() {
            bits |= hooks[i].bit();
            i += 1;
        }
        HookSet(bits)
    }

    pub const fn contains(self, hook: Hook) -> bool {
        self.0 & hook.bit() != 0
    }

    pub const fn with(self, hook: Hook) -> Self {
        HookSet(self.0 | hook.bit())
    }
}

pub type JokerVars = BTreeMap<String, f64>;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Joker {
    pub kind: String,
    #[serde(default)]
    pub vars: JokerVars,
}

impl Joker {
    pub fn new(kind: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            vars: JokerVars::new(),
        }
    }

    pub fn var(&self, key: &str) -> f64 {
        self.vars.get(key).copied().unwrap_or(0.0)
    }

    pub fn set_var(&mut self, key: &str, value: f64) {
        self.vars.insert(key.to_string(), value);
    }

    pub fn add_var(&mut self, key: &str, delta: f64) -> f64 {
        let entry = self.vars.entry(key.to_string()).or_insert(0.0);
        *entry += delta;
        *entry
    }
}

/// Behavior of one joker type. Every hook defaults to a no-op; `hooks`
/// must list the ones an implementation overrides.
pub trait JokerEffect: Send + Sync {
    fn hooks(&self) -> HookSet {
        HookSet::EMPTY
    }

    fn initial_vars(&self) -> JokerVars {
        JokerVars::new()
    }

    fn on_round_start(&self, _joker: &mut Joker, _ctx: &mut HookContext<'_>) {}
    fn on_blind_start(&self, _joker: &mut Joker, _ctx: &mut HookContext<'_>) {}
    fn on_draw(&self, _joker: &mut Joker, _ctx: &mut HookContext<'_>) {}
    fn on_joker_enter(&self, _joker: &mut Joker, _ctx: &mut HookContext<'_>) {}
    fn on_joker_leave(&self, _joker: &mut Joker, _ctx: &mut HookContext<'_>) {}
    fn on_scoring_start(&self, _joker: &mut Joker, _ctx: &mut HookContext<'_>) {}
    fn on_scoring_end(&self, _joker: &mut Joker, _ctx: &mut HookContext<'_>) {}
    fn on_card_score(&self, _joker: &mut Joker, _ctx: &mut HookContext<'_>) {}

    fn call(&self, hook: Hook, joker: &mut Joker, ctx: &mut HookContext<'_>) {
        match hook {
            Hook::RoundStart => self.on_round_start(joker, ctx),
            Hook::BlindStart => self.on_blind_start(joker, ctx),
            Hook::Draw => self.on_draw(joker, ctx),
            Hook::JokerEnter => self.on_joker_enter(joker, ctx),
            Hook::JokerLeave => self.on_joker_leave(joker, ctx),
            Hook::ScoringStart => self.on_scoring_start(joker, ctx),
            Hook::ScoringEnd => self.on_scoring_end(joker, ctx),
            Hook::CardScore => self.on_card_score(joker, ctx),
        }
    }
}

/// Everything a hook may read or change during one event.
pub struct HookContext<'a> {
    pub hook: Hook,
    /// Card the event is about: the scored, drawn, entering or leaving card.
    pub card: Option<Card>,
    pub card_index: Option<usize>,
    /// Index of the joker whose logic and state are running.
    pub joker_index: Option<usize>,
    pub joker_count: usize,
    pub scoring: ScoringState,
    pub bust_limit: u32,
    pub state: &'a mut GameState,
    pub main: &'a Hand,
    pub played: &'a Hand,
    pub trace: &'a mut Vec<ScoreTraceStep>,
    pub ui: &'a mut dyn UiNotifier,
}

impl HookContext<'_> {
    pub fn apply(&mut self, effect: RuleEffect, source: &str) {
        let before = self.state.hand.clone();
        self.state.hand.apply(&effect);
        self.trace.push(ScoreTraceStep {
            source: source.to_string(),
            effect,
            before,
            after: self.state.hand.clone(),
        });
    }

    pub fn add_chips(&mut self, chips: i64, source: &str) {
        self.apply(RuleEffect::AddChips(chips), source);
    }

    pub fn add_mult(&mut self, mult: f64, source: &str) {
        self.apply(RuleEffect::AddMult(mult), source);
    }

    pub fn multiply_mult(&mut self, factor: f64, source: &str) {
        self.apply(RuleEffect::MultiplyMult(factor), source);
    }

    pub fn add_money(&mut self, amount: i64) {
        self.state.money += amount;
        self.ui.update_scoreboard(&[Stat::Money(self.state.money)]);
    }

    pub fn add_discards(&mut self, count: u32) {
        self.state.discard_budget = self.state.discard_budget.saturating_add(count);
        self.ui
            .update_scoreboard(&[Stat::DiscardsRemaining(self.state.discards_remaining())]);
    }

    /// Whether the event is about the joker currently running.
    pub fn is_self_event(&self) -> bool {
        self.card_index.is_some() && self.card_index == self.joker_index
    }
}
