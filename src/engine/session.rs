//! Owned state cell for a running game.
//!
//! A `GameSession` is what a host (UI adapter, test harness) holds: the
//! injected catalog, the config, the RNG, and the current state. All
//! mutation goes through `dispatch`; observers read the returned snapshot
//! and render it.

use crate::cards::CardCatalog;
use crate::core::{GameConfig, GameRng, GameState, Intent};

use super::reducer::reduce;

/// A running game: catalog + config + RNG + current state.
#[derive(Clone, Debug)]
pub struct GameSession {
    catalog: CardCatalog,
    config: GameConfig,
    rng: GameRng,
    state: GameState,
}

impl GameSession {
    /// Create a session with default config and an entropy-seeded RNG.
    #[must_use]
    pub fn new(catalog: CardCatalog) -> Self {
        Self::with_rng(catalog, GameConfig::default(), GameRng::from_entropy())
    }

    /// Create a session with a fixed seed (deterministic deals).
    #[must_use]
    pub fn with_seed(catalog: CardCatalog, seed: u64) -> Self {
        Self::with_rng(catalog, GameConfig::default(), GameRng::new(seed))
    }

    /// Create a session with explicit config and RNG.
    #[must_use]
    pub fn with_rng(catalog: CardCatalog, config: GameConfig, rng: GameRng) -> Self {
        Self {
            catalog,
            config,
            rng,
            state: GameState::initial(),
        }
    }

    /// Apply an intent and return the new current state.
    ///
    /// Invalid intents leave the state unchanged (same silent-no-op
    /// policy as `reduce`).
    pub fn dispatch(&mut self, intent: &Intent) -> &GameState {
        self.state = reduce(&self.catalog, &self.config, &mut self.rng, &self.state, intent);
        &self.state
    }

    /// The current state snapshot.
    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// The injected card catalog.
    #[must_use]
    pub fn catalog(&self) -> &CardCatalog {
        &self.catalog
    }

    /// The session's config.
    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }
}
