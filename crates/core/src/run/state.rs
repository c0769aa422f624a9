use super::*;
use crate::{BlindKind, Stat, UiNotifier};

impl Game {
    /// Builds a game in its reset state. Fails when `config` cannot drive a run.
    pub fn new(
        config: GameConfig,
        registry: Arc<JokerRegistry>,
        seed: u64,
    ) -> Result<Self, RunError> {
        validate_config(&config)?;
        let state = GameState::new(&config);
        let mut game = Self {
            config,
            registry,
            rng: RngState::from_seed(seed),
            deck: Deck::default(),
            main: Hand::new(),
            played: Hand::new(),
            jokers: Hand::new(),
            consumables: Hand::new(),
            state,
            last_score_trace: Vec::new(),
            next_card_id: 1,
        };
        game.reset_game();
        Ok(game)
    }

    pub fn with_builtin_jokers(config: GameConfig, seed: u64) -> Result<Self, RunError> {
        Self::new(config, Arc::new(JokerRegistry::with_builtin()), seed)
    }

    /// Fresh counters, a freshly shuffled 52-card deck and four empty hands.
    /// Leaves the game on ante 1's small blind, ready to deal.
    pub fn reset_game(&mut self) {
        self.deck = Deck::standard52(1);
        self.next_card_id = 53;
        self.deck.reset(&mut self.rng);
        self.main = Hand::new();
        self.played = Hand::new();
        self.jokers = Hand::new();
        self.consumables = Hand::new();
        self.state = GameState::new(&self.config);
        self.state.target = self.blind_target();
        self.last_score_trace.clear();
    }

    pub(super) fn blind_target(&self) -> i64 {
        self.config
            .target_for(self.state.ante, self.state.blind)
            .unwrap_or_default()
    }

    pub(super) fn blind_name(&self) -> String {
        self.config
            .blind_rule(self.state.blind)
            .map(|rule| rule.name.clone())
            .unwrap_or_default()
    }

    pub fn publish_scoreboard(&self, ui: &mut dyn UiNotifier) {
        ui.update_scoreboard(&[
            Stat::MinScore(self.state.target),
            Stat::RoundScore(self.state.round_score),
            Stat::HandScore(self.state.hand.chips),
            Stat::HandMult(self.state.hand.mult),
            Stat::Money(self.state.money),
            Stat::DiscardsRemaining(self.state.discards_remaining()),
            Stat::HandsRemaining(self.state.hands_remaining()),
            Stat::Ante(self.state.ante),
            Stat::BlindName(self.blind_name()),
        ]);
    }
}

pub(super) fn validate_config(config: &GameConfig) -> Result<(), RunError> {
    for kind in [BlindKind::Small, BlindKind::Big, BlindKind::Boss] {
        if config.blind_rule(kind).is_none() {
            return Err(RunError::MissingBlindRule(kind));
        }
    }
    let max = config.max_ante().ok_or(RunError::MissingAnteRule(1))?;
    for ante in 1..=max {
        if config.ante_rule(ante).is_none() {
            return Err(RunError::MissingAnteRule(ante));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reset_builds_full_deck_and_empty_hands() {
        let game = Game::with_builtin_jokers(GameConfig::default(), 1).unwrap();
        assert_eq!(game.deck.len(), 52);
        assert_eq!(game.deck.available_len(), 52);
        assert_eq!(game.deck.used_len(), 0);
        assert!(game.main.is_empty() && game.played.is_empty());
        assert!(game.jokers.is_empty() && game.consumables.is_empty());
        assert_eq!(game.state.ante, 1);
        assert_eq!(game.state.target, 40);
        assert_eq!(game.state.phase, Phase::Play);
    }

    #[test]
    fn gaps_in_ante_table_are_rejected() {
        let mut config = GameConfig::default();
        config.antes.retain(|rule| rule.ante != 3);
        assert!(matches!(
            Game::with_builtin_jokers(config, 1),
            Err(RunError::MissingAnteRule(3))
        ));
        let mut config = GameConfig::default();
        config.blinds.retain(|rule| rule.kind != BlindKind::Boss);
        assert!(matches!(
            Game::with_builtin_jokers(config, 1),
            Err(RunError::MissingBlindRule(BlindKind::Boss))
        ));
    }
}
