use super::*;
use crate::{Hook, ScoringState, UiNotifier};
use tracing::info;

impl Game {
    /// Starts the current blind: fresh round counters, a reshuffled deck, the
    /// blind and round hooks, then a deal.
    pub fn start_blind(&mut self, ui: &mut dyn UiNotifier) -> Result<Deal, RunError> {
        if !matches!(self.state.phase, Phase::Play | Phase::Cleared) {
            return Err(RunError::InvalidPhase(self.state.phase));
        }
        let mut cleared = self.main.clear();
        cleared.extend(self.played.clear());
        for card in &cleared {
            ui.remove_card_visual(card);
        }
        self.deck.reset(&mut self.rng);
        self.state.reset_round(&self.config);
        self.state.target = self.blind_target();
        self.state.phase = Phase::Play;
        self.last_score_trace.clear();
        info!(
            ante = self.state.ante,
            blind = ?self.state.blind,
            target = self.state.target,
            "blind started"
        );

        self.fire_hook(Hook::BlindStart, None, ScoringState::Idle, ui);
        self.fire_hook(Hook::RoundStart, None, ScoringState::Idle, ui);
        self.publish_scoreboard(ui);
        ui.enable_play();
        self.deal_cards(ui)
    }

    /// Settles the blind after a scored hand: cleared, lost, or still going.
    pub(super) fn resolve_blind(&mut self, ui: &mut dyn UiNotifier) {
        if self.state.round_score >= self.state.target {
            self.clear_blind(ui);
        } else if self.state.hands_remaining() == 0 {
            self.lose(ui);
        }
    }

    fn clear_blind(&mut self, ui: &mut dyn UiNotifier) {
        let reward = self
            .config
            .blind_rule(self.state.blind)
            .map(|rule| rule.reward)
            .unwrap_or_default();
        let economy = &self.config.economy;
        let hands_bonus = i64::from(self.state.hands_remaining()) * economy.per_hand_reward;
        let interest = economy.interest(self.state.money);
        let reasons: Vec<(String, i64)> = [("Remaining hands", hands_bonus), ("Interest", interest)]
            .into_iter()
            .filter(|(_, value)| *value != 0)
            .map(|(reason, value)| (reason.to_string(), value))
            .collect();
        self.state.money += reward + hands_bonus + interest;
        ui.show_money_won(reward, &reasons);
        self.state.blinds_cleared += 1;
        info!(
            ante = self.state.ante,
            blind = ?self.state.blind,
            money = self.state.money,
            "blind cleared"
        );

        let final_boss = self.state.blind == BlindKind::Boss
            && self.state.ante >= self.config.win_ante
            && !self.state.endless;
        let (next, new_ante) = self.state.blind.next();
        self.state.blind = next;
        if new_ante {
            self.state.ante += 1;
        }
        self.state.target = self.blind_target();
        self.state.phase = Phase::Cleared;

        if final_boss {
            ui.show_win();
            if ui.prompt_endless_mode() {
                info!("endless mode");
                self.state.endless = true;
            } else {
                self.state.phase = Phase::Won;
                ui.disable_play();
            }
        }
        self.publish_scoreboard(ui);
    }

    fn lose(&mut self, ui: &mut dyn UiNotifier) {
        self.state.phase = Phase::Lost;
        let message = format!(
            "Out of hands on ante {} ({}): {} of {}",
            self.state.ante,
            self.blind_name(),
            self.state.round_score,
            self.state.target
        );
        info!(%message, "game lost");
        ui.show_loss(&message);
        ui.disable_play();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Event, EventBus, Stat};

    fn game() -> Game {
        Game::with_builtin_jokers(GameConfig::default(), 11).unwrap()
    }

    #[test]
    fn clearing_pays_reward_leftover_hands_and_interest() {
        let mut game = game();
        let mut ui = EventBus::default();
        game.state.money = 10;
        game.state.hands_played = 1;
        game.state.round_score = game.state.target;
        game.resolve_blind(&mut ui);

        assert_eq!(game.state.phase, Phase::Cleared);
        assert_eq!(game.state.blind, BlindKind::Big);
        assert_eq!(game.state.target, 60);
        // $3 reward + 3 hands left + $2 interest on $10.
        assert_eq!(game.state.money, 18);
        assert!(ui.events().contains(&Event::MoneyWon {
            base: 3,
            reasons: vec![
                ("Remaining hands".to_string(), 3),
                ("Interest".to_string(), 2),
            ],
        }));
    }

    #[test]
    fn boss_clear_moves_to_next_ante() {
        let mut game = game();
        game.state.blind = BlindKind::Boss;
        game.state.target = 80;
        game.state.round_score = 80;
        game.resolve_blind(&mut EventBus::default());
        assert_eq!(game.state.ante, 2);
        assert_eq!(game.state.blind, BlindKind::Small);
        assert_eq!(game.state.target, 60);
    }

    #[test]
    fn last_hand_short_of_target_loses() {
        let mut game = game();
        let mut ui = EventBus::default();
        game.state.hands_played = game.state.hands_per_blind;
        game.state.round_score = 1;
        game.resolve_blind(&mut ui);
        assert_eq!(game.state.phase, Phase::Lost);
        assert!(ui
            .events()
            .iter()
            .any(|event| matches!(event, Event::Loss { .. })));
        assert_eq!(ui.events().last(), Some(&Event::PlayDisabled));
        assert!(matches!(
            game.deal_cards(&mut ui),
            Err(RunError::InvalidPhase(Phase::Lost))
        ));
    }

    #[test]
    fn final_boss_wins_unless_endless_is_taken() {
        let mut game = game();
        game.state.ante = 8;
        game.state.blind = BlindKind::Boss;
        game.state.target = 800;
        game.state.round_score = 800;
        let mut ui = EventBus::default();
        game.resolve_blind(&mut ui);
        assert_eq!(game.state.phase, Phase::Won);
        assert!(ui.events().contains(&Event::Win));
        assert!(ui.events().contains(&Event::EndlessPrompt { accepted: false }));

        let mut game = self::game();
        game.state.ante = 8;
        game.state.blind = BlindKind::Boss;
        game.state.target = 800;
        game.state.round_score = 800;
        let mut ui = EventBus::accepting_endless();
        game.resolve_blind(&mut ui);
        assert!(game.state.endless);
        assert_eq!(game.state.phase, Phase::Cleared);
        assert_eq!(game.state.ante, 9);
        assert_eq!(game.state.target, 800);
    }

    #[test]
    fn start_blind_resets_round_and_deals() {
        let mut game = game();
        let mut ui = EventBus::default();
        game.state.round_score = 33;
        game.state.discards_used = 2;
        game.state.phase = Phase::Cleared;
        let deal = game.start_blind(&mut ui).unwrap();
        assert_eq!(deal.drawn.len(), 5);
        assert_eq!(game.state.phase, Phase::Play);
        assert_eq!(game.state.round_score, 0);
        assert_eq!(game.state.discards_used, 0);
        assert_eq!(game.deck.available_len(), 47);
        assert_eq!(
            ui.last_stat(|stat| matches!(stat, Stat::MinScore(_))),
            Some(&Stat::MinScore(40))
        );
        assert!(ui.events().contains(&Event::PlayEnabled));
    }
}
