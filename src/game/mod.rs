//! Battle engine: state, commands, turn scheduling and resolution

pub mod actions;
pub(crate) mod effects;
pub mod log;
pub mod outcome;
pub(crate) mod resolver;
pub mod rewards;
pub(crate) mod scheduler;
pub mod sequencer;
pub mod state;

pub use log::ActionLog;
pub use outcome::Outcome;
pub use sequencer::{Sequencer, SequencerState};
pub use state::{BattleState, RewardState, OPENING_HAND_SIZE, TURN_DRAW_COUNT};
