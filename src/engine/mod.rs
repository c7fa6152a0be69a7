//! The game engine: matching, deck shuffling, the reducer, and sessions.

pub mod matching;
pub mod reducer;
pub mod session;
pub mod shuffle;

pub use matching::{can_match, matchable_power_cards};
pub use reducer::reduce;
pub use session::GameSession;
pub use shuffle::weighted_shuffle;
