//! Card kinds for the kaijutsu matching game.
//!
//! Three kinds of cards exist:
//!
//! - `CapabilityCard` ("power card"): held in a player's hand, carries the
//!   trait tags it can resolve.
//! - `PromptCard` ("feelings card"): sits in the central pile, carries
//!   exactly one required trait.
//! - `ActionCard`: central-pile card with a one-off instruction and no
//!   matching mechanic.
//!
//! All cards are immutable once created. They circulate between zones by
//! value; the engine never mutates a card in place.
//!
//! Field names follow the catalog document's camelCase via serde renames,
//! so a catalog round-trips byte-compatible with the original asset.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Opaque card identifier (e.g. `"PWR-001"`, `"FLG-041"`).
///
/// Ids are unique within a card kind, not across kinds.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CardId(pub String);

impl CardId {
    /// Create a new card ID.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the raw id string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for CardId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

/// Opaque trait tag (e.g. `"sad"`, `"happy"`).
///
/// The engine never interprets tags; matching is pure set membership.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TraitTag(pub String);

impl TraitTag {
    /// Create a new trait tag.
    #[must_use]
    pub fn new(tag: impl Into<String>) -> Self {
        Self(tag.into())
    }

    /// Get the raw tag string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for TraitTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for TraitTag {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

/// Anything addressable by a `CardId`.
///
/// The weighted shuffle is generic over this so capability and prompt
/// decks share one implementation.
pub trait HasId {
    /// The card's identifier.
    fn id(&self) -> &CardId;
}

/// A power card: resolves prompt cards sharing one of its trait tags.
///
/// `traits` is non-empty for any catalog-validated card.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CapabilityCard {
    pub id: CardId,

    /// Owning character/faction tag (display grouping only).
    pub character: String,

    /// Display label from the printed deck (e.g. `"01/24"`).
    #[serde(rename = "cardNumber")]
    pub card_number: String,

    #[serde(rename = "techniqueName")]
    pub name: String,

    #[serde(rename = "techniqueDescription")]
    pub description: String,

    /// Trait tags this card can resolve. SmallVec: printed decks carry
    /// 2-4 tags per card.
    #[serde(rename = "emotionTypes")]
    pub traits: SmallVec<[TraitTag; 4]>,
}

impl HasId for CapabilityCard {
    fn id(&self) -> &CardId {
        &self.id
    }
}

/// A feelings/empathy card: a scenario requiring exactly one trait.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PromptCard {
    pub id: CardId,

    /// The single trait a capability card must carry to resolve this.
    #[serde(rename = "emotion")]
    pub trait_tag: TraitTag,

    /// Descriptive event text.
    pub event: String,
}

impl HasId for PromptCard {
    fn id(&self) -> &CardId {
        &self.id
    }
}

/// An action card: an instruction to read aloud, no matching mechanic.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionCard {
    pub id: CardId,

    #[serde(rename = "promptText")]
    pub prompt_text: String,

    /// Marks a group activity. Display-only; the engine ignores it.
    #[serde(rename = "isGroupActivity", default)]
    pub group_activity: bool,
}

impl HasId for ActionCard {
    fn id(&self) -> &CardId {
        &self.id
    }
}

/// A card in the shared central draw pile: prompt or action.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CentralCard {
    Prompt(PromptCard),
    Action(ActionCard),
}

impl CentralCard {
    /// The underlying card's id.
    #[must_use]
    pub fn id(&self) -> &CardId {
        match self {
            CentralCard::Prompt(c) => &c.id,
            CentralCard::Action(c) => &c.id,
        }
    }

    /// Is this an action card?
    #[must_use]
    pub fn is_action(&self) -> bool {
        matches!(self, CentralCard::Action(_))
    }

    /// View as a prompt card, if it is one.
    #[must_use]
    pub fn as_prompt(&self) -> Option<&PromptCard> {
        match self {
            CentralCard::Prompt(c) => Some(c),
            CentralCard::Action(_) => None,
        }
    }
}

impl HasId for CentralCard {
    fn id(&self) -> &CardId {
        self.id()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use smallvec::smallvec;

    fn sample_capability() -> CapabilityCard {
        CapabilityCard {
            id: CardId::new("PWR-001"),
            character: "Rocky".to_string(),
            card_number: "01/24".to_string(),
            name: "Canyon Calm".to_string(),
            description: "test".to_string(),
            traits: smallvec![TraitTag::new("confused"), TraitTag::new("sad")],
        }
    }

    #[test]
    fn test_card_id_display_and_from() {
        let id = CardId::new("PWR-001");
        assert_eq!(id.as_str(), "PWR-001");
        assert_eq!(format!("{}", id), "PWR-001");
        assert_eq!(CardId::from("PWR-001"), id);
    }

    #[test]
    fn test_central_card_accessors() {
        let prompt = PromptCard {
            id: CardId::new("FLG-001"),
            trait_tag: TraitTag::new("sad"),
            event: "A friend moved away.".to_string(),
        };
        let action = ActionCard {
            id: CardId::new("ACT-001"),
            prompt_text: "Everyone stands up.".to_string(),
            group_activity: true,
        };

        let central_prompt = CentralCard::Prompt(prompt.clone());
        let central_action = CentralCard::Action(action);

        assert!(!central_prompt.is_action());
        assert_eq!(central_prompt.as_prompt(), Some(&prompt));
        assert_eq!(central_prompt.id(), &CardId::new("FLG-001"));

        assert!(central_action.is_action());
        assert_eq!(central_action.as_prompt(), None);
        assert_eq!(central_action.id(), &CardId::new("ACT-001"));
    }

    #[test]
    fn test_capability_card_catalog_field_names() {
        let card = sample_capability();
        let json = serde_json::to_string(&card).unwrap();

        assert!(json.contains("\"cardNumber\""));
        assert!(json.contains("\"techniqueName\""));
        assert!(json.contains("\"emotionTypes\""));

        let back: CapabilityCard = serde_json::from_str(&json).unwrap();
        assert_eq!(card, back);
    }

    #[test]
    fn test_action_card_group_flag_defaults_false() {
        let json = r#"{"id":"ACT-002","promptText":"Take a deep breath."}"#;
        let card: ActionCard = serde_json::from_str(json).unwrap();
        assert!(!card.group_activity);
    }

    #[test]
    fn test_prompt_card_emotion_field_name() {
        let json = r#"{"id":"FLG-041","emotion":"happy","event":"An extra recess day!"}"#;
        let card: PromptCard = serde_json::from_str(json).unwrap();
        assert_eq!(card.trait_tag, TraitTag::new("happy"));
    }
}
