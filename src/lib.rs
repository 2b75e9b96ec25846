//! voidfleet: a deterministic card-battle resolution engine.
//!
//! Two ships face off across a shared 2x6-per-side board. Each end turn
//! draws cards, auto-plays the opponent's hand, resolves queued immediate
//! effects, then commits attack damage column pair by column pair under an
//! animation sequencer, so a frontend can reveal the exchange over time.
//!
//! All randomness flows through a seedable per-battle RNG, so a battle
//! driven with the same decks, seed and tick times is fully reproducible.

pub mod catalog;
pub mod core;
pub mod error;
pub mod game;

pub use error::{EngineError, Result};
pub use game::state::BattleState;
pub use game::Outcome;
