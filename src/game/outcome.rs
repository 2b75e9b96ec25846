//! Terminal state classification

use crate::core::SideState;
use serde::{Deserialize, Serialize};

/// Match outcome, evaluated against the current state on every tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    InProgress,
    Victory,
    Defeat,
    /// Neither side has any hand, deck, or live board cards left.
    /// Ends the match with no winner regardless of ship hp.
    Stalemate,
}

impl Outcome {
    pub fn is_terminal(self) -> bool {
        self != Outcome::InProgress
    }
}

/// Classify the match. Checked in priority order Defeat, Victory, Stalemate,
/// so mutual destruction in one resolution step counts as a Defeat.
pub fn evaluate(player: &SideState, opponent: &SideState) -> Outcome {
    if player.hp <= 0 {
        Outcome::Defeat
    } else if opponent.hp <= 0 {
        Outcome::Victory
    } else if !player.has_play_resources() && !opponent.has_play_resources() {
        Outcome::Stalemate
    } else {
        Outcome::InProgress
    }
}
