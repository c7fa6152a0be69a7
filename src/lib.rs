//! # kaijutsu-engine
//!
//! Pure reducer-based engine for the kaijutsu card-matching tabletop
//! game: a local, pass-the-device simulator where players resolve drawn
//! feelings prompts with the capability cards in their hands.
//!
//! ## Design Principles
//!
//! 1. **State is a value**: every transition builds a brand-new
//!    `GameState`; callers never observe in-place mutation. `im`
//!    persistent collections make the wholesale replacement cheap.
//!
//! 2. **The reducer never fails**: invalid intents are silent no-ops, and
//!    a failed match attempt is the player-visible `MatchFail` phase, not
//!    an error. The only fallible surface is catalog construction.
//!
//! 3. **Everything injected**: the card catalog, config, and RNG are
//!    explicit parameters, so tests run synthetic decks and a fixed seed
//!    replays a whole game deterministically.
//!
//! ## Modules
//!
//! - `cards`: card kinds, ids, and the validated `CardCatalog`
//! - `core`: players, `GameState`, `Intent`, `GameRng`, `GameConfig`
//! - `engine`: the match predicate, weighted shuffle, `reduce`, and the
//!   `GameSession` state cell hosts dispatch into
//!
//! ## Quick start
//!
//! ```
//! use kaijutsu_engine::{CardCatalog, GameSession, Intent, Phase};
//!
//! let json = r#"{
//!     "powerCards": [
//!         {"id": "PWR-001", "character": "Rocky", "cardNumber": "01/24",
//!          "techniqueName": "Canyon Calm", "techniqueDescription": "Breathe.",
//!          "emotionTypes": ["sad"]},
//!         {"id": "PWR-002", "character": "Tatami", "cardNumber": "02/24",
//!          "techniqueName": "Bubble Buddies", "techniqueDescription": "Play.",
//!          "emotionTypes": ["happy"]}
//!     ],
//!     "feelingsCards": [
//!         {"id": "FLG-001", "emotion": "sad", "event": "A friend moved away."}
//!     ],
//!     "actionCards": []
//! }"#;
//!
//! let catalog = CardCatalog::from_json_str(json).unwrap();
//! let mut session = GameSession::with_seed(catalog, 42);
//!
//! session.dispatch(&Intent::SetPlayerCount { count: 2 });
//! let state = session.dispatch(&Intent::StartGame);
//! assert_eq!(state.phase, Phase::Playing);
//! ```

pub mod cards;
pub mod core;
pub mod engine;

// Re-export commonly used types
pub use crate::cards::{
    ActionCard, CapabilityCard, CardCatalog, CardId, CatalogError, CentralCard, HasId, PromptCard,
    TraitTag,
};

pub use crate::core::{GameConfig, GameRng, GameState, Intent, MatchedPair, Phase, Player, PlayerId};

pub use crate::engine::{can_match, matchable_power_cards, reduce, weighted_shuffle, GameSession};
