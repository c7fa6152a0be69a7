//! The state machine: every transition of the matching game.
//!
//! `reduce` is a total function from (state, intent) to a new state. It
//! never fails and never panics: any intent whose preconditions don't
//! hold returns a value-equal copy of the input state. Failed match
//! attempts against the drawn card are not errors either; they surface as
//! the player-visible `MatchFail` phase.
//!
//! Randomness (the deal) comes from the injected `GameRng`, so a fixed
//! seed replays an entire game exactly.

use im::{HashSet as ImHashSet, Vector};

use super::matching::can_match;
use super::shuffle::weighted_shuffle;
use crate::cards::{CapabilityCard, CardCatalog, CardId, CentralCard, PromptCard};
use crate::core::{GameConfig, GameRng, GameState, Intent, MatchedPair, Phase, Player, PlayerId};

/// Apply one intent to the state, producing the next state.
#[must_use]
pub fn reduce(
    catalog: &CardCatalog,
    config: &GameConfig,
    rng: &mut GameRng,
    state: &GameState,
    intent: &Intent,
) -> GameState {
    match intent {
        Intent::SetPlayerCount { count } => {
            let mut next = state.clone();
            next.phase = Phase::Setup;
            next.player_count = *count;
            next
        }

        Intent::StartGame => {
            if !config.allows_player_count(state.player_count) {
                return state.clone();
            }
            setup_game(catalog, config, rng, state)
        }

        Intent::DrawCard => {
            if state.phase != Phase::Playing {
                return state.clone();
            }
            let mut next = state.clone();
            let Some(drawn) = next.central_pile.pop_front() else {
                return state.clone();
            };
            next.phase = if drawn.is_action() {
                Phase::ActionPrompt
            } else {
                Phase::EmpathyDrawn
            };
            next.current_drawn_card = Some(drawn);
            next
        }

        Intent::DismissAction => {
            if state.phase != Phase::ActionPrompt {
                return state.clone();
            }
            check_win(next_turn(state.clone()))
        }

        Intent::AttemptMatch { power_card_id } => {
            if state.phase != Phase::EmpathyDrawn {
                return state.clone();
            }
            let Some(CentralCard::Prompt(prompt)) = state.current_drawn_card.clone() else {
                return state.clone();
            };
            let Some(player) = state.players.get(state.active_player_index) else {
                return state.clone();
            };

            let matched = player
                .hand
                .iter()
                .position(|c| &c.id == power_card_id)
                .filter(|&i| can_match(&player.hand[i], &prompt));

            match matched {
                // Unknown id and non-matching card take the same fail
                // path; the drawn card stays live for a retry.
                None => {
                    let mut next = state.clone();
                    next.phase = Phase::MatchFail;
                    next
                }
                Some(hand_index) => check_win(complete_match(state.clone(), hand_index, prompt)),
            }
        }

        Intent::AttemptMatchActive {
            feelings_card_id,
            power_card_id,
        } => {
            // Unlike AttemptMatch, every failure here is a silent no-op:
            // there is no visible fail phase for the parked-card path.
            if state.phase != Phase::Playing {
                return state.clone();
            }
            let Some(parked_index) = state
                .active_empathy
                .iter()
                .position(|fc| &fc.id == feelings_card_id)
            else {
                return state.clone();
            };
            let prompt = state.active_empathy[parked_index].clone();

            let Some(player) = state.players.get(state.active_player_index) else {
                return state.clone();
            };
            let Some(hand_index) = player.hand.iter().position(|c| &c.id == power_card_id) else {
                return state.clone();
            };
            if !can_match(&player.hand[hand_index], &prompt) {
                return state.clone();
            }

            let mut next = state.clone();
            next.active_empathy.remove(parked_index);
            let mut next = complete_match(next, hand_index, prompt.clone());
            // The success screen shows the resolved prompt as the current
            // card, same as a match from the draw.
            next.current_drawn_card = Some(CentralCard::Prompt(prompt));
            check_win(next)
        }

        Intent::SendToActive => {
            if state.phase != Phase::EmpathyDrawn && state.phase != Phase::MatchFail {
                return state.clone();
            }
            let Some(CentralCard::Prompt(prompt)) = state.current_drawn_card.clone() else {
                return state.clone();
            };
            let mut next = state.clone();
            next.active_empathy.push_back(prompt);
            check_win(next_turn(next))
        }

        Intent::AcknowledgeMatch => {
            if state.phase != Phase::MatchSuccess {
                return state.clone();
            }
            if state.completed_pairs.len() >= state.total_empathy_cards {
                let mut next = state.clone();
                next.phase = Phase::GameWon;
                return next;
            }
            next_turn(state.clone())
        }

        Intent::NextTurn => next_turn(state.clone()),

        Intent::NewGame => GameState::initial(),

        Intent::EnterFacilitatorSetup => {
            let mut next = state.clone();
            next.phase = Phase::FacilitatorSetup;
            next
        }

        Intent::ExitFacilitatorSetup => {
            let mut next = state.clone();
            next.phase = Phase::Welcome;
            next
        }

        Intent::ToggleFavoritePower { card_id } => {
            let mut next = state.clone();
            next.favorited_power_card_ids = toggle(&state.favorited_power_card_ids, card_id);
            next
        }

        Intent::ToggleFavoriteFeelings { card_id } => {
            let mut next = state.clone();
            next.favorited_feelings_card_ids = toggle(&state.favorited_feelings_card_ids, card_id);
            next
        }
    }
}

/// Full deal: weighted-shuffle both decks, combine the central pile, deal
/// hands, snapshot the win denominator.
fn setup_game(
    catalog: &CardCatalog,
    config: &GameConfig,
    rng: &mut GameRng,
    state: &GameState,
) -> GameState {
    let power_cards = weighted_shuffle(
        rng,
        catalog.capability_cards(),
        &state.favorited_power_card_ids,
    );
    let weighted_prompts = weighted_shuffle(
        rng,
        catalog.prompt_cards(),
        &state.favorited_feelings_card_ids,
    );

    let mut pile: Vec<CentralCard> = weighted_prompts
        .into_iter()
        .map(CentralCard::Prompt)
        .collect();
    pile.extend(
        rng.shuffled(catalog.action_cards())
            .into_iter()
            .map(CentralCard::Action),
    );
    rng.shuffle(&mut pile);

    let mut power_iter = power_cards.into_iter();
    let mut players = Vector::new();
    for seat in 0..state.player_count {
        let hand: Vector<CapabilityCard> = power_iter.by_ref().take(config.hand_size).collect();
        players.push_back(Player {
            seat: PlayerId::new(seat as u8),
            hand,
        });
    }
    let power_deck: Vector<CapabilityCard> = power_iter.collect();

    let mut next = state.clone();
    next.phase = Phase::Playing;
    next.players = players;
    next.active_player_index = 0;
    next.central_pile = pile.into_iter().collect();
    next.power_deck = power_deck;
    next.active_empathy = Vector::new();
    next.completed_pairs = Vector::new();
    next.current_drawn_card = None;
    next.total_empathy_cards = catalog.prompt_count();
    next
}

/// Advance to the next seat, clearing the drawn card.
fn next_turn(mut state: GameState) -> GameState {
    if state.player_count == 0 {
        return state;
    }
    state.phase = Phase::Playing;
    state.active_player_index = (state.active_player_index + 1) % state.player_count;
    state.current_drawn_card = None;
    state
}

/// Remove the matched card from the active hand, refill from the power
/// deck if possible, and record the pair.
fn complete_match(mut state: GameState, hand_index: usize, prompt: PromptCard) -> GameState {
    let idx = state.active_player_index;
    let Some(player) = state.players.get(idx) else {
        return state;
    };

    let mut player = player.clone();
    let capability = player.hand.remove(hand_index);
    if let Some(replacement) = state.power_deck.pop_front() {
        player.hand.push_back(replacement);
    }
    state.players.set(idx, player);

    state.completed_pairs.push_back(MatchedPair {
        prompt_card: prompt,
        capability_card: capability,
    });
    state.phase = Phase::MatchSuccess;
    state
}

/// Win check, run after every turn-ending transition.
///
/// Won when all prompts are matched, or when the pile is empty, prompts
/// remain parked, and no hand can resolve any of them (deadlock). An
/// empty pile with an empty parked zone does NOT end the game; play
/// stalls in `Playing` (reference behavior, kept deliberately).
fn check_win(mut state: GameState) -> GameState {
    if state.completed_pairs.len() >= state.total_empathy_cards {
        state.phase = Phase::GameWon;
        return state;
    }

    if state.central_pile.is_empty() && !state.active_empathy.is_empty() {
        let any_match_possible = state.players.iter().any(|player| {
            state
                .active_empathy
                .iter()
                .any(|prompt| player.hand.iter().any(|card| can_match(card, prompt)))
        });
        if !any_match_possible {
            state.phase = Phase::GameWon;
        }
    }

    state
}

/// Symmetric-difference toggle of an id in a favorite set.
fn toggle(set: &ImHashSet<CardId>, id: &CardId) -> ImHashSet<CardId> {
    if set.contains(id) {
        set.without(id)
    } else {
        set.update(id.clone())
    }
}
