use super::*;
use crate::{
    blackjack_score, evaluate_hand, HandReport, Hook, PopupColor, PopupLine, RuleEffect,
    ScoringPass, ScoringState, Stat, UiNotifier,
};
use tracing::debug;

impl Game {
    /// Scores the played hand and empties it.
    ///
    /// Chips accumulate card by card with the jokers' hooks in between. The
    /// blackjack total is checked only once every hook has run: above the
    /// bust limit the hand is worth nothing, otherwise `chips * mult` is added
    /// to the round score.
    pub(super) fn score_played_hand(&mut self, ui: &mut dyn UiNotifier) -> HandReport {
        let mut pass = ScoringPass::new();
        pass.advance(ScoringState::Accumulating);
        self.state.hand.reset();
        self.last_score_trace.clear();

        let kind = evaluate_hand(self.played.cards());
        self.state.last_hand = Some(kind);
        ui.update_scoreboard(&[
            Stat::HandType(kind),
            Stat::HandScore(self.state.hand.chips),
            Stat::HandMult(self.state.hand.mult),
        ]);

        self.fire_hook(Hook::ScoringStart, None, pass.state(), ui);
        for index in 0..self.played.len() {
            let Some(card) = self.played.get(index).cloned() else {
                continue;
            };
            let chips = i64::from(card.base_value());
            self.apply_score(RuleEffect::AddChips(chips), "card");
            ui.show_score_popup(&card, &[PopupLine::new(format!("+{chips}"), PopupColor::Chips)]);
            self.fire_hook(Hook::CardScore, Some((index, card)), pass.state(), ui);
            ui.update_scoreboard(&[
                Stat::HandScore(self.state.hand.chips),
                Stat::HandMult(self.state.hand.mult),
            ]);
        }
        self.fire_hook(Hook::ScoringEnd, None, pass.state(), ui);

        let blackjack_total = blackjack_score(self.played.cards(), self.config.bust_limit);
        let hand_score = self.state.hand.chips;
        let hand_mult = self.state.hand.mult;
        let added = if blackjack_total > self.config.bust_limit {
            pass.advance(ScoringState::Bust);
            ui.show_bust();
            0
        } else {
            pass.advance(ScoringState::Committed);
            let added = self.state.hand.total();
            self.state.round_score += added;
            ui.show_hand_scored(hand_score, hand_mult, added);
            added
        };
        self.state.hand.reset();

        for card in self.played.clear() {
            ui.remove_card_visual(&card);
        }
        self.state.hands_played += 1;
        ui.update_scoreboard(&[
            Stat::HandScore(self.state.hand.chips),
            Stat::HandMult(self.state.hand.mult),
            Stat::RoundScore(self.state.round_score),
            Stat::HandsRemaining(self.state.hands_remaining()),
        ]);
        debug!(
            outcome = ?pass.state(),
            total = blackjack_total,
            added,
            round = self.state.round_score,
            "hand scored"
        );

        HandReport {
            outcome: pass.state(),
            kind,
            blackjack_total,
            hand_score,
            hand_mult,
            added,
        }
    }

    fn apply_score(&mut self, effect: RuleEffect, source: &str) {
        let before = self.state.hand.clone();
        self.state.hand.apply(&effect);
        self.last_score_trace.push(ScoreTraceStep {
            source: source.to_string(),
            effect,
            before,
            after: self.state.hand.clone(),
        });
    }
}
