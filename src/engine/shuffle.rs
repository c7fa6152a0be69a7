//! Weighted deck shuffle.
//!
//! A facilitator can "favorite" cards to weight a session toward certain
//! content without making outcomes deterministic: favorited cards are
//! clustered into the top third of the deck, both groups internally
//! shuffled uniformly.

use im::HashSet as ImHashSet;

use crate::cards::{CardId, HasId};
use crate::core::GameRng;

/// Shuffle `cards`, biasing members of `favorited` into the first
/// `ceil(n/3)` positions.
///
/// Both the favorited and non-favorited partitions are shuffled uniformly
/// on their own; positions are then filled preferring favorited cards
/// while inside the top third, non-favorited after that, and leftover
/// favorited cards once the non-favorited run out. An empty favorite set
/// degenerates to a plain uniform shuffle. The input is never mutated.
#[must_use]
pub fn weighted_shuffle<T: HasId + Clone>(
    rng: &mut GameRng,
    cards: &[T],
    favorited: &ImHashSet<CardId>,
) -> Vec<T> {
    if favorited.is_empty() {
        return rng.shuffled(cards);
    }

    let (favored, rest): (Vec<T>, Vec<T>) = cards
        .iter()
        .cloned()
        .partition(|c| favorited.contains(c.id()));

    let favored = rng.shuffled(&favored);
    let rest = rng.shuffled(&rest);

    let top_third = (cards.len() + 2) / 3;
    let mut out = Vec::with_capacity(cards.len());
    let mut favored = favored.into_iter();
    let mut rest = rest.into_iter();

    for i in 0..cards.len() {
        let card = if i < top_third {
            favored.next().or_else(|| rest.next())
        } else {
            rest.next().or_else(|| favored.next())
        };
        // One of the partitions always has a card left.
        if let Some(card) = card {
            out.push(card);
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::PromptCard;
    use crate::cards::TraitTag;

    fn prompts(n: usize) -> Vec<PromptCard> {
        (0..n)
            .map(|i| PromptCard {
                id: CardId::new(format!("FLG-{i:03}")),
                trait_tag: TraitTag::new("sad"),
                event: "test".to_string(),
            })
            .collect()
    }

    fn favorites(ids: &[&str]) -> ImHashSet<CardId> {
        ids.iter().map(|id| CardId::new(*id)).collect()
    }

    #[test]
    fn test_same_multiset_and_length() {
        let mut rng = GameRng::new(42);
        let cards = prompts(12);
        let favorited = favorites(&["FLG-002", "FLG-007"]);

        let out = weighted_shuffle(&mut rng, &cards, &favorited);

        assert_eq!(out.len(), cards.len());
        let mut in_ids: Vec<_> = cards.iter().map(|c| c.id.clone()).collect();
        let mut out_ids: Vec<_> = out.iter().map(|c| c.id.clone()).collect();
        in_ids.sort_by(|a, b| a.0.cmp(&b.0));
        out_ids.sort_by(|a, b| a.0.cmp(&b.0));
        assert_eq!(in_ids, out_ids);
    }

    #[test]
    fn test_favorited_cards_land_in_top_third() {
        // 4 favorites out of 12 fit exactly in ceil(12/3) = 4 slots, so
        // every favorited card must be in the top third, every time.
        let cards = prompts(12);
        let favorited = favorites(&["FLG-001", "FLG-004", "FLG-008", "FLG-011"]);

        for seed in 0..20 {
            let mut rng = GameRng::new(seed);
            let out = weighted_shuffle(&mut rng, &cards, &favorited);
            let top: Vec<_> = out[..4].iter().map(|c| &c.id).collect();
            for id in favorited.iter() {
                assert!(top.contains(&id), "seed {seed}: {id} not in top third");
            }
        }
    }

    #[test]
    fn test_overflow_favorites_fall_back_after_rest() {
        // 10 favorites, 2 plain, top third = 4. Positions 4..6 take the
        // plain cards, then leftover favorites fill the tail.
        let cards = prompts(12);
        let ids: Vec<String> = (0..10).map(|i| format!("FLG-{i:03}")).collect();
        let favorited: ImHashSet<CardId> = ids.iter().map(|s| CardId::new(s.clone())).collect();

        let mut rng = GameRng::new(7);
        let out = weighted_shuffle(&mut rng, &cards, &favorited);

        assert_eq!(out.len(), 12);
        // The first four are favorited.
        for card in &out[..4] {
            assert!(favorited.contains(&card.id));
        }
        // Both plain cards appear right after the top third.
        assert!(!favorited.contains(&out[4].id));
        assert!(!favorited.contains(&out[5].id));
        for card in &out[6..] {
            assert!(favorited.contains(&card.id));
        }
    }

    #[test]
    fn test_empty_favorites_is_plain_shuffle() {
        let cards = prompts(10);
        let mut rng1 = GameRng::new(42);
        let mut rng2 = GameRng::new(42);

        let weighted = weighted_shuffle(&mut rng1, &cards, &ImHashSet::new());
        let plain = rng2.shuffled(&cards);

        assert_eq!(weighted, plain);
    }

    #[test]
    fn test_empty_input() {
        let mut rng = GameRng::new(42);
        let out = weighted_shuffle(&mut rng, &Vec::<PromptCard>::new(), &favorites(&["x"]));
        assert!(out.is_empty());
    }

    #[test]
    fn test_input_not_mutated() {
        let cards = prompts(6);
        let before = cards.clone();
        let mut rng = GameRng::new(42);

        let _ = weighted_shuffle(&mut rng, &cards, &favorites(&["FLG-001"]));

        assert_eq!(cards, before);
    }
}
