//! Animation sequencer
//!
//! A small timer state machine that gates when attack damage is committed so
//! a renderer can reveal it phase by phase. Purely time-driven: the owner
//! calls `tick(now)` with a monotonic clock sample each frame and applies the
//! returned phase's damage. Each phase's damage is applied exactly once.

use serde::{Deserialize, Serialize};

/// Delay between arming and the first attack phase, in seconds.
pub const INITIAL_WAIT_SECS: f64 = 1.0;
/// How long bolts are shown before a phase's damage is committed.
pub const BOLT_SECS: f64 = 0.35;
/// Pause after damage before the next phase starts.
pub const POST_WAIT_SECS: f64 = 1.0;
/// Total duration of one phase.
pub const PHASE_SECS: f64 = BOLT_SECS + POST_WAIT_SECS;

/// Column pairs resolved per phase: outer columns first, center last.
pub const PHASE_COLUMNS: [[usize; 2]; 3] = [[0, 5], [1, 4], [2, 3]];

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub enum SequencerState {
    /// Not animating; input is allowed.
    #[default]
    Idle,
    /// Armed, waiting out the initial delay.
    InitialWait { since: f64 },
    /// Resolving attack phase `index` (0..=2).
    Phase {
        index: usize,
        since: f64,
        damage_applied: bool,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct Sequencer {
    state: SequencerState,
}

impl Sequencer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Begin the attack animation. Called after end-turn processing.
    pub fn arm(&mut self, now: f64) {
        self.state = SequencerState::InitialWait { since: now };
    }

    pub fn is_animating(&self) -> bool {
        self.state != SequencerState::Idle
    }

    pub fn state(&self) -> SequencerState {
        self.state
    }

    /// The phase currently being shown, if any.
    pub fn current_phase(&self) -> Option<usize> {
        match self.state {
            SequencerState::Phase { index, .. } => Some(index),
            _ => None,
        }
    }

    /// Advance the machine to `now`. Returns the index of a phase whose
    /// damage must be committed by the caller, at most once per phase.
    ///
    /// Idempotent per instant: calling again with the same `now` returns
    /// `None` and leaves the state unchanged.
    pub fn tick(&mut self, now: f64) -> Option<usize> {
        match self.state {
            SequencerState::Idle => None,
            SequencerState::InitialWait { since } => {
                if now - since >= INITIAL_WAIT_SECS {
                    self.state = SequencerState::Phase {
                        index: 0,
                        since: now,
                        damage_applied: false,
                    };
                }
                None
            }
            SequencerState::Phase {
                index,
                since,
                damage_applied,
            } => {
                let elapsed = now - since;
                let mut fired = None;
                let mut applied = damage_applied;
                if !applied && elapsed >= BOLT_SECS {
                    fired = Some(index);
                    applied = true;
                }
                if elapsed >= PHASE_SECS {
                    self.state = if index + 1 >= PHASE_COLUMNS.len() {
                        SequencerState::Idle
                    } else {
                        SequencerState::Phase {
                            index: index + 1,
                            since: now,
                            damage_applied: false,
                        }
                    };
                } else {
                    self.state = SequencerState::Phase {
                        index,
                        since,
                        damage_applied: applied,
                    };
                }
                fired
            }
        }
    }
}
