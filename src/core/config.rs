//! Game configuration.
//!
//! The defaults match the printed game: 5-card hands, 2-4 players.
//! Tests override them to run tiny synthetic decks.

use serde::{Deserialize, Serialize};

/// Tunable game parameters.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Cards in each player's hand after a completed transition.
    pub hand_size: usize,

    /// Minimum seats required to start a game.
    pub min_players: usize,

    /// Maximum seats allowed.
    pub max_players: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            hand_size: 5,
            min_players: 2,
            max_players: 4,
        }
    }
}

impl GameConfig {
    /// Is `count` a startable player count?
    #[must_use]
    pub fn allows_player_count(&self, count: usize) -> bool {
        (self.min_players..=self.max_players).contains(&count)
    }
}
