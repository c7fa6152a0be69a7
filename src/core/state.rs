//! Game state: the single source of truth.
//!
//! `GameState` is replaced wholesale on every transition; nothing mutates
//! a snapshot a caller already holds. All collections are `im` persistent
//! structures, so the wholesale replacement is cheap structural sharing
//! rather than a deep copy.

use im::{HashSet as ImHashSet, Vector};
use serde::{Deserialize, Serialize};

use super::player::Player;
use crate::cards::{CapabilityCard, CardId, CentralCard, PromptCard};

/// Game phase.
///
/// Serde names match the original wire form (kebab-case strings), so a
/// host persisting sessions stays compatible with existing data.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Phase {
    /// Initial/idle, no game in progress.
    Welcome,
    /// Curating favorited cards; game fields untouched.
    FacilitatorSetup,
    /// Player count chosen, awaiting start.
    Setup,
    /// Normal turn-taking, nothing being resolved.
    Playing,
    /// A drawn action card awaits acknowledgement.
    ActionPrompt,
    /// A drawn prompt card awaits a match attempt.
    EmpathyDrawn,
    /// The last attempt against the drawn prompt failed; it is still live.
    MatchFail,
    /// A match just succeeded; awaiting acknowledgement.
    MatchSuccess,
    /// Terminal: all prompts matched, or deadlocked remainder.
    GameWon,
}

/// A resolved (prompt, capability) pair, recorded permanently.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MatchedPair {
    #[serde(rename = "feelingsCard")]
    pub prompt_card: PromptCard,
    #[serde(rename = "powerCard")]
    pub capability_card: CapabilityCard,
}

/// Complete game state.
///
/// Fields are public: the reducer builds new values, hosts and tests read
/// (and construct) them freely. Treat any snapshot you hold as immutable
/// and discard it after dispatching.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    pub phase: Phase,

    /// Chosen seat count; 0 until `SetPlayerCount`.
    pub player_count: usize,

    pub players: Vector<Player>,

    /// Turn owner, 0-based, wraps modulo `player_count`.
    pub active_player_index: usize,

    /// Shared draw pile; the front is the next draw.
    pub central_pile: Vector<CentralCard>,

    /// Undealt capability cards, used to refill hands after matches.
    pub power_deck: Vector<CapabilityCard>,

    /// Prompt cards parked for later resolution by any player.
    pub active_empathy: Vector<PromptCard>,

    /// Resolved pairs in completion order; never removed.
    pub completed_pairs: Vector<MatchedPair>,

    /// The card currently being resolved; cleared on phase exit.
    pub current_drawn_card: Option<CentralCard>,

    /// Prompt-card count snapshotted at deal time; win denominator.
    pub total_empathy_cards: usize,

    /// Facilitator-curated ids biased toward the top of the capability deck.
    pub favorited_power_card_ids: ImHashSet<CardId>,

    /// Facilitator-curated ids biased toward the top of the prompt deck.
    pub favorited_feelings_card_ids: ImHashSet<CardId>,
}

impl GameState {
    /// The fresh initial state: `Welcome` phase, everything empty.
    #[must_use]
    pub fn initial() -> Self {
        Self {
            phase: Phase::Welcome,
            player_count: 0,
            players: Vector::new(),
            active_player_index: 0,
            central_pile: Vector::new(),
            power_deck: Vector::new(),
            active_empathy: Vector::new(),
            completed_pairs: Vector::new(),
            current_drawn_card: None,
            total_empathy_cards: 0,
            favorited_power_card_ids: ImHashSet::new(),
            favorited_feelings_card_ids: ImHashSet::new(),
        }
    }

    /// The player whose turn it is, if a game is dealt.
    #[must_use]
    pub fn active_player(&self) -> Option<&Player> {
        self.players.get(self.active_player_index)
    }

    /// Has the game reached its terminal phase?
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        self.phase == Phase::GameWon
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::initial()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::PlayerId;

    #[test]
    fn test_initial_state() {
        let state = GameState::initial();

        assert_eq!(state.phase, Phase::Welcome);
        assert_eq!(state.player_count, 0);
        assert!(state.players.is_empty());
        assert!(state.central_pile.is_empty());
        assert!(state.completed_pairs.is_empty());
        assert!(state.current_drawn_card.is_none());
        assert!(state.favorited_power_card_ids.is_empty());
        assert!(!state.is_terminal());
        assert!(state.active_player().is_none());
    }

    #[test]
    fn test_active_player_lookup() {
        let mut state = GameState::initial();
        state.players.push_back(Player::new(PlayerId::new(0)));
        state.players.push_back(Player::new(PlayerId::new(1)));
        state.active_player_index = 1;

        assert_eq!(state.active_player().unwrap().seat, PlayerId::new(1));
    }

    #[test]
    fn test_phase_wire_names() {
        let json = serde_json::to_string(&Phase::EmpathyDrawn).unwrap();
        assert_eq!(json, "\"empathy-drawn\"");

        let back: Phase = serde_json::from_str("\"facilitator-setup\"").unwrap();
        assert_eq!(back, Phase::FacilitatorSetup);
    }

    #[test]
    fn test_snapshot_clone_is_independent() {
        let mut state = GameState::initial();
        state.players.push_back(Player::new(PlayerId::new(0)));

        let snapshot = state.clone();
        state.players.push_back(Player::new(PlayerId::new(1)));

        assert_eq!(snapshot.players.len(), 1);
        assert_eq!(state.players.len(), 2);
    }
}
