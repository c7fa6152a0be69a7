//! Card catalog: the read-only seed data for a game.
//!
//! A catalog holds the three fixed card collections the engine deals from.
//! It is injected into the engine explicitly (never a module-level global)
//! so tests can run synthetic decks and hosts can swap card sets without
//! touching engine logic.
//!
//! Construction validates the seed once; after that the reducer trusts it
//! completely and stays infallible.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::card::{ActionCard, CapabilityCard, CardId, PromptCard};

/// Catalog construction/load errors.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to parse catalog document: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("duplicate {kind} card id: {id}")]
    DuplicateId { kind: &'static str, id: CardId },

    #[error("capability card {0} has an empty trait set")]
    EmptyTraits(CardId),

    #[error("catalog has no {0} cards")]
    EmptyCollection(&'static str),
}

/// The on-disk catalog document shape (camelCase arrays).
#[derive(Debug, Serialize, Deserialize)]
struct CatalogDocument {
    #[serde(rename = "powerCards")]
    power_cards: Vec<CapabilityCard>,
    #[serde(rename = "feelingsCards")]
    feelings_cards: Vec<PromptCard>,
    #[serde(rename = "actionCards")]
    action_cards: Vec<ActionCard>,
}

/// Validated, read-only card catalog.
///
/// ## Example
///
/// ```
/// use kaijutsu_engine::cards::CardCatalog;
///
/// let json = r#"{
///     "powerCards": [
///         {"id": "PWR-001", "character": "Rocky", "cardNumber": "01/24",
///          "techniqueName": "Canyon Calm", "techniqueDescription": "Breathe.",
///          "emotionTypes": ["sad", "angry"]}
///     ],
///     "feelingsCards": [
///         {"id": "FLG-001", "emotion": "sad", "event": "A friend moved away."}
///     ],
///     "actionCards": []
/// }"#;
///
/// let catalog = CardCatalog::from_json_str(json).unwrap();
/// assert_eq!(catalog.capability_count(), 1);
/// assert_eq!(catalog.prompt_count(), 1);
/// ```
#[derive(Clone, Debug)]
pub struct CardCatalog {
    capability_cards: Vec<CapabilityCard>,
    prompt_cards: Vec<PromptCard>,
    action_cards: Vec<ActionCard>,
    capability_index: FxHashMap<CardId, usize>,
    prompt_index: FxHashMap<CardId, usize>,
}

impl CardCatalog {
    /// Build a catalog from the three card collections.
    ///
    /// Validates that ids are unique within each kind, every capability
    /// card has at least one trait, and the capability and prompt
    /// collections are non-empty (a game cannot be dealt without them;
    /// action cards are optional).
    pub fn new(
        capability_cards: Vec<CapabilityCard>,
        prompt_cards: Vec<PromptCard>,
        action_cards: Vec<ActionCard>,
    ) -> Result<Self, CatalogError> {
        if capability_cards.is_empty() {
            return Err(CatalogError::EmptyCollection("capability"));
        }
        if prompt_cards.is_empty() {
            return Err(CatalogError::EmptyCollection("prompt"));
        }

        for card in &capability_cards {
            if card.traits.is_empty() {
                return Err(CatalogError::EmptyTraits(card.id.clone()));
            }
        }

        let capability_index = build_index("capability", &capability_cards, |c| &c.id)?;
        let prompt_index = build_index("prompt", &prompt_cards, |c| &c.id)?;
        // Action cards are never looked up by id, but duplicates still
        // indicate a broken document.
        build_index("action", &action_cards, |c| &c.id)?;

        Ok(Self {
            capability_cards,
            prompt_cards,
            action_cards,
            capability_index,
            prompt_index,
        })
    }

    /// Parse and validate a catalog from its JSON document form.
    pub fn from_json_str(json: &str) -> Result<Self, CatalogError> {
        let doc: CatalogDocument = serde_json::from_str(json)?;
        Self::new(doc.power_cards, doc.feelings_cards, doc.action_cards)
    }

    /// All capability cards, in document order.
    #[must_use]
    pub fn capability_cards(&self) -> &[CapabilityCard] {
        &self.capability_cards
    }

    /// All prompt cards, in document order.
    #[must_use]
    pub fn prompt_cards(&self) -> &[PromptCard] {
        &self.prompt_cards
    }

    /// All action cards, in document order.
    #[must_use]
    pub fn action_cards(&self) -> &[ActionCard] {
        &self.action_cards
    }

    /// Look up a capability card by id.
    #[must_use]
    pub fn capability(&self, id: &CardId) -> Option<&CapabilityCard> {
        self.capability_index
            .get(id)
            .map(|&i| &self.capability_cards[i])
    }

    /// Look up a prompt card by id.
    #[must_use]
    pub fn prompt(&self, id: &CardId) -> Option<&PromptCard> {
        self.prompt_index.get(id).map(|&i| &self.prompt_cards[i])
    }

    /// Number of capability cards.
    #[must_use]
    pub fn capability_count(&self) -> usize {
        self.capability_cards.len()
    }

    /// Number of prompt cards. The win-condition denominator at deal time.
    #[must_use]
    pub fn prompt_count(&self) -> usize {
        self.prompt_cards.len()
    }

    /// Number of action cards.
    #[must_use]
    pub fn action_count(&self) -> usize {
        self.action_cards.len()
    }
}

fn build_index<T>(
    kind: &'static str,
    cards: &[T],
    id_of: impl Fn(&T) -> &CardId,
) -> Result<FxHashMap<CardId, usize>, CatalogError> {
    let mut index = FxHashMap::default();
    for (i, card) in cards.iter().enumerate() {
        let id = id_of(card);
        if index.insert(id.clone(), i).is_some() {
            return Err(CatalogError::DuplicateId {
                kind,
                id: id.clone(),
            });
        }
    }
    Ok(index)
}
