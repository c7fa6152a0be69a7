//! Player identification and per-player hand state.

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::cards::CapabilityCard;

/// Player seat identifier, 0-based.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw seat index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Iterate over all seats for a game with `player_count` players.
    pub fn all(player_count: usize) -> impl Iterator<Item = PlayerId> {
        (0..player_count as u8).map(PlayerId)
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0)
    }
}

/// A seated player and their hand of capability cards.
///
/// Hand order is meaningful (it is the order cards were dealt/drawn in and
/// the order a UI renders them).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub seat: PlayerId,
    pub hand: Vector<CapabilityCard>,
}

impl Player {
    /// Create a player with an empty hand.
    #[must_use]
    pub fn new(seat: PlayerId) -> Self {
        Self {
            seat,
            hand: Vector::new(),
        }
    }

    /// Current hand size.
    #[must_use]
    pub fn hand_size(&self) -> usize {
        self.hand.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_id_basics() {
        let p0 = PlayerId::new(0);
        let p2 = PlayerId::new(2);

        assert_eq!(p0.index(), 0);
        assert_eq!(p2.index(), 2);
        assert_eq!(format!("{}", p2), "Player 2");
    }

    #[test]
    fn test_player_id_all() {
        let seats: Vec<_> = PlayerId::all(4).collect();
        assert_eq!(seats.len(), 4);
        assert_eq!(seats[0], PlayerId::new(0));
        assert_eq!(seats[3], PlayerId::new(3));
    }

    #[test]
    fn test_new_player_has_empty_hand() {
        let player = Player::new(PlayerId::new(1));
        assert_eq!(player.seat, PlayerId::new(1));
        assert_eq!(player.hand_size(), 0);
    }
}
