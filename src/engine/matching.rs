//! Match predicate: does a capability card satisfy a prompt card?

use crate::cards::{CapabilityCard, PromptCard};

/// True iff the prompt's required trait is among the capability's traits.
///
/// Pure and total; no error cases.
#[must_use]
pub fn can_match(capability: &CapabilityCard, prompt: &PromptCard) -> bool {
    capability.traits.contains(&prompt.trait_tag)
}

/// The subset of `hand` that can resolve `prompt`, preserving hand order.
///
/// Used by the deadlock check and exposed for UI affordance.
#[must_use]
pub fn matchable_power_cards<'a>(
    hand: impl IntoIterator<Item = &'a CapabilityCard>,
    prompt: &PromptCard,
) -> Vec<&'a CapabilityCard> {
    hand.into_iter().filter(|c| can_match(c, prompt)).collect()
}
