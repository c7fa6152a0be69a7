//! Core types: players, state, intents, RNG, configuration.

pub mod config;
pub mod intent;
pub mod player;
pub mod rng;
pub mod state;

pub use config::GameConfig;
pub use intent::Intent;
pub use player::{Player, PlayerId};
pub use rng::GameRng;
pub use state::{GameState, MatchedPair, Phase};
