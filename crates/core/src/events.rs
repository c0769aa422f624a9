use crate::{Card, CardId, HandTag, PopupLine, Stat, UiNotifier};
use serde::{Deserialize, Serialize};

/// A recorded UI notification.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum Event {
    CardCreated { card: CardId },
    CardRemoved { card: CardId },
    CardsMoved {
        cards: Vec<CardId>,
        from: HandTag,
        to: HandTag,
    },
    ScorePopup { card: CardId, lines: Vec<PopupLine> },
    Scoreboard(Vec<Stat>),
    Bust,
    HandScored {
        hand_score: i64,
        hand_mult: f64,
        total_added: i64,
    },
    Loss { message: String },
    Win,
    MoneyWon {
        base: i64,
        reasons: Vec<(String, i64)>,
    },
    EndlessPrompt { accepted: bool },
    PlayEnabled,
    PlayDisabled,
}

/// Queues notifications for a frontend that polls instead of rendering inline.
#[derive(Debug, Default)]
pub struct EventBus {
    queue: Vec<Event>,
    /// Answer given to `prompt_endless_mode`.
    pub accept_endless: bool,
}

impl EventBus {
    pub fn accepting_endless() -> Self {
        Self {
            queue: Vec::new(),
            accept_endless: true,
        }
    }

    pub fn push(&mut self, event: Event) {
        self.queue.push(event);
    }

    pub fn events(&self) -> &[Event] {
        &self.queue
    }

    pub fn drain(&mut self) -> impl Iterator<Item = Event> + '_ {
        self.queue.drain(..)
    }

    /// Latest value pushed for a scoreboard field, matched by variant.
    pub fn last_stat(&self, probe: impl Fn(&Stat) -> bool) -> Option<&Stat> {
        self.queue
            .iter()
            .rev()
            .filter_map(|event| match event {
                Event::Scoreboard(stats) => stats.iter().rev().find(|stat| probe(stat)),
                _ => None,
            })
            .next()
    }
}

impl UiNotifier for EventBus {
    fn create_card_visual(&mut self, card: &Card) {
        self.push(Event::CardCreated { card: card.id });
    }

    fn remove_card_visual(&mut self, card: &Card) {
        self.push(Event::CardRemoved { card: card.id });
    }

    fn move_cards(&mut self, cards: &[Card], from: HandTag, to: HandTag) {
        self.push(Event::CardsMoved {
            cards: cards.iter().map(|card| card.id).collect(),
            from,
            to,
        });
    }

    fn show_score_popup(&mut self, card: &Card, lines: &[PopupLine]) {
        self.push(Event::ScorePopup {
            card: card.id,
            lines: lines.to_vec(),
        });
    }

    fn update_scoreboard(&mut self, stats: &[Stat]) {
        self.push(Event::Scoreboard(stats.to_vec()));
    }

    fn show_bust(&mut self) {
        self.push(Event::Bust);
    }

    fn show_hand_scored(&mut self, hand_score: i64, hand_mult: f64, total_added: i64) {
        self.push(Event::HandScored {
            hand_score,
            hand_mult,
            total_added,
        });
    }

    fn show_loss(&mut self, message: &str) {
        self.push(Event::Loss {
            message: message.to_string(),
        });
    }

    fn show_win(&mut self) {
        self.push(Event::Win);
    }

    fn show_money_won(&mut self, base: i64, reasons: &[(String, i64)]) {
        self.push(Event::MoneyWon {
            base,
            reasons: reasons.to_vec(),
        });
    }

    fn prompt_endless_mode(&mut self) -> bool {
        let accepted = self.accept_endless;
        self.push(Event::EndlessPrompt { accepted });
        accepted
    }

    fn enable_play(&mut self) {
        self.push(Event::PlayEnabled);
    }

    fn disable_play(&mut self) {
        self.push(Event::PlayDisabled);
    }
}
