//! Core game logic. Keep this crate free of IO and platform concerns.

pub mod blackjack;
pub mod cards;
pub mod config;
pub mod deck;
pub mod events;
pub mod hand;
pub mod hand_kind;
pub mod joker;
pub mod notify;
pub mod pacing;
pub mod rng;
pub mod rules;
pub mod run;
pub mod scoring;
pub mod state;

pub use blackjack::*;
pub use cards::*;
pub use config::*;
pub use deck::*;
pub use events::*;
pub use hand::*;
pub use hand_kind::*;
pub use joker::*;
pub use notify::*;
pub use rng::*;
pub use rules::*;
pub use run::*;
pub use scoring::*;
pub use state::*;
