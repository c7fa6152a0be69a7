//! Card data model and catalog.
//!
//! ## Key Types
//!
//! - `CardId` / `TraitTag`: opaque string newtypes
//! - `CapabilityCard`, `PromptCard`, `ActionCard`: the three card kinds
//! - `CentralCard`: prompt-or-action union for the shared draw pile
//! - `CardCatalog`: validated read-only seed data, injected into the engine

pub mod card;
pub mod catalog;

pub use card::{ActionCard, CapabilityCard, CardId, CentralCard, HasId, PromptCard, TraitTag};
pub use catalog::{CardCatalog, CatalogError};
