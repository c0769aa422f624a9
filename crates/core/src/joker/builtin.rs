use super::{Blueprint, Hook, HookContext, HookSet, Joker, JokerEffect, JokerRegistry, Mirror};
use crate::{blackjack_score, PopupColor, PopupLine, HOLO};

pub fn register_builtin(registry: &mut JokerRegistry) {
    registry.register("plain", Plain);
    registry.register("high_roller", HighRoller);
    registry.register("natural", Natural);
    registry.register("court", Court);
    registry.register("prism", Prism);
    registry.register("piggy_bank", PiggyBank);
    registry.register("second_wind", SecondWind);
    registry.register("card_counter", CardCounter);
    registry.register("collector", Collector);
    registry.register_layered("mirror", Plain, Mirror::new());
    registry.register_layered("blueprint", Plain, Blueprint::new());
}

/// No hooks at all.
#[derive(Debug, Default, Clone, Copy)]
pub struct Plain;

impl JokerEffect for Plain {}

/// +4 mult when scoring starts.
#[derive(Debug, Default, Clone, Copy)]
pub struct HighRoller;

impl JokerEffect for HighRoller {
    fn hooks(&self) -> HookSet {
        HookSet::of(&[Hook::ScoringStart])
    }

    fn on_scoring_start(&self, _joker: &mut Joker, ctx: &mut HookContext<'_>) {
        ctx.add_mult(4.0, "joker:high_roller");
    }
}

/// Doubles mult when the played hand lands exactly on the bust limit.
#[derive(Debug, Default, Clone, Copy)]
pub struct Natural;

impl JokerEffect for Natural {
    fn hooks(&self) -> HookSet {
        HookSet::of(&[Hook::ScoringEnd])
    }

    fn on_scoring_end(&self, _joker: &mut Joker, ctx: &mut HookContext<'_>) {
        if blackjack_score(ctx.played.cards(), ctx.bust_limit) == ctx.bust_limit {
            ctx.multiply_mult(2.0, "joker:natural");
        }
    }
}

/// +5 chips for every face card scored.
#[derive(Debug, Default, Clone, Copy)]
pub struct Court;

impl JokerEffect for Court {
    fn hooks(&self) -> HookSet {
        HookSet::of(&[Hook::CardScore])
    }

    fn on_card_score(&self, _joker: &mut Joker, ctx: &mut HookContext<'_>) {
        let Some(card) = ctx.card.clone() else {
            return;
        };
        if card.rank.is_face() {
            ctx.add_chips(5, "joker:court");
            ctx.ui
                .show_score_popup(&card, &[PopupLine::new("+5", PopupColor::Chips)]);
        }
    }
}

/// x1.5 mult for every scored card tagged holo.
#[derive(Debug, Default, Clone, Copy)]
pub struct Prism;

impl JokerEffect for Prism {
    fn hooks(&self) -> HookSet {
        HookSet::of(&[Hook::CardScore])
    }

    fn on_card_score(&self, _joker: &mut Joker, ctx: &mut HookContext<'_>) {
        let Some(card) = ctx.card.clone() else {
            return;
        };
        if card.has_property(HOLO) {
            ctx.multiply_mult(1.5, "joker:prism");
            ctx.ui
                .show_score_popup(&card, &[PopupLine::new("x1.5", PopupColor::Mult)]);
        }
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct PiggyBank;

impl JokerEffect for PiggyBank {
    fn hooks(&self) -> HookSet {
        HookSet::of(&[Hook::RoundStart])
    }

    fn on_round_start(&self, joker: &mut Joker, ctx: &mut HookContext<'_>) {
        joker.add_var("deposits", 1.0);
        ctx.add_money(1);
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct SecondWind;

impl JokerEffect for SecondWind {
    fn hooks(&self) -> HookSet {
        HookSet::of(&[Hook::BlindStart])
    }

    fn on_blind_start(&self, _joker: &mut Joker, ctx: &mut HookContext<'_>) {
        ctx.add_discards(1);
    }
}

/// Counts tens, faces and aces drawn; scores that many extra chips.
#[derive(Debug, Default, Clone, Copy)]
pub struct CardCounter;

impl JokerEffect for CardCounter {
    fn hooks(&self) -> HookSet {
        HookSet::of(&[Hook::Draw, Hook::ScoringStart])
    }

    fn initial_vars(&self) -> super::JokerVars {
        [("count".to_string(), 0.0)].into_iter().collect()
    }

    fn on_draw(&self, joker: &mut Joker, ctx: &mut HookContext<'_>) {
        if ctx.card.as_ref().is_some_and(|card| card.base_value() >= 10) {
            joker.add_var("count", 1.0);
        }
    }

    fn on_scoring_start(&self, joker: &mut Joker, ctx: &mut HookContext<'_>) {
        let count = joker.var("count").floor() as i64;
        if count > 0 {
            ctx.add_chips(count, "joker:card_counter");
        }
    }
}

/// +1 mult for every other joker held.
#[derive(Debug, Default, Clone, Copy)]
pub struct Collector;

impl JokerEffect for Collector {
    fn hooks(&self) -> HookSet {
        HookSet::of(&[Hook::JokerEnter, Hook::JokerLeave, Hook::ScoringStart])
    }

    fn on_joker_enter(&self, joker: &mut Joker, ctx: &mut HookContext<'_>) {
        if ctx.is_self_event() {
            joker.set_var("jokers", ctx.joker_count.saturating_sub(1) as f64);
        } else {
            joker.add_var("jokers", 1.0);
        }
    }

    fn on_joker_leave(&self, joker: &mut Joker, ctx: &mut HookContext<'_>) {
        if !ctx.is_self_event() && joker.var("jokers") > 0.0 {
            joker.add_var("jokers", -1.0);
        }
    }

    fn on_scoring_start(&self, joker: &mut Joker, ctx: &mut HookContext<'_>) {
        let others = joker.var("jokers");
        if others > 0.0 {
            ctx.add_mult(others, "joker:collector");
        }
    }
}
