//! The dispatch surface: a closed set of intents, one per transition.
//!
//! Each intent carries only the minimal payload its transition needs.
//! A host dispatches intents into the reducer and renders the returned
//! state; there are no partial/delta updates.
//!
//! Intents serialize (tag + camelCase payload fields) so a host can log
//! or replay a session.

use serde::{Deserialize, Serialize};

use crate::cards::CardId;

/// A player or facilitator intent.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Intent {
    /// Choose the number of seats. Bounds are validated at `StartGame`,
    /// not here.
    SetPlayerCount { count: usize },

    /// Shuffle, deal, and enter play.
    StartGame,

    /// Pop the front of the central pile for the active player.
    DrawCard,

    /// Acknowledge a drawn action card and end the turn.
    DismissAction,

    /// Try to resolve the currently drawn prompt card with a hand card.
    AttemptMatch {
        #[serde(rename = "powerCardId")]
        power_card_id: CardId,
    },

    /// Try to resolve a parked prompt card with a hand card.
    AttemptMatchActive {
        #[serde(rename = "feelingsCardId")]
        feelings_card_id: CardId,
        #[serde(rename = "powerCardId")]
        power_card_id: CardId,
    },

    /// Park the currently drawn prompt card for later resolution.
    SendToActive,

    /// Acknowledge a successful match and end the turn (or the game).
    AcknowledgeMatch,

    /// Unconditional turn advance.
    NextTurn,

    /// Reset to the fresh initial state.
    NewGame,

    /// Enter favorited-card curation.
    EnterFacilitatorSetup,

    /// Leave favorited-card curation.
    ExitFacilitatorSetup,

    /// Toggle a capability card in the favorited set.
    ToggleFavoritePower {
        #[serde(rename = "cardId")]
        card_id: CardId,
    },

    /// Toggle a prompt card in the favorited set.
    ToggleFavoriteFeelings {
        #[serde(rename = "cardId")]
        card_id: CardId,
    },
}
