//! Battle state
//!
//! Central structure holding everything about one match. Built at battle
//! start from the player's deck plus a generated opponent deck, mutated by
//! commands and ticks, and discarded when the match ends.

use crate::catalog;
use crate::core::{Card, Side, SideState};
use crate::game::log::ActionLog;
use crate::game::outcome::{self, Outcome};
use crate::game::sequencer::Sequencer;
use crate::game::{resolver, rewards, scheduler};
use rand::SeedableRng;
use rand_chacha::ChaCha12Rng;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::cell::RefCell;

/// Opening hand size dealt at battle start.
pub const OPENING_HAND_SIZE: usize = 5;
/// Cards drawn per side at each end-turn.
pub const TURN_DRAW_COUNT: usize = 2;

/// Post-victory reward bookkeeping.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RewardState {
    /// Cards offered to the player. Empty until victory is first detected.
    pub options: SmallVec<[Card; 3]>,
    /// Set once a reward has been recorded (or none were available);
    /// further reward operations are no-ops.
    pub added: bool,
    /// The reward the player picked, if any.
    pub chosen: Option<Card>,
}

/// Complete state of one battle.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BattleState {
    pub player: SideState,
    pub opponent: SideState,

    pub is_player_turn: bool,

    /// Owned by the caller; stored for opponent deck generation and reward
    /// eligibility.
    pub difficulty: i32,

    /// One-shot flag consumed at the next attack phase.
    pub skip_attack_phase: bool,

    /// Hand card currently selected in the UI, if any.
    pub selected_hand_index: Option<usize>,

    /// Gates when attack damage is committed.
    pub sequencer: Sequencer,

    pub log: ActionLog,

    pub rewards: RewardState,

    /// Random number generator for all gameplay randomness (shuffles,
    /// immediate-queue interleave, reward sampling, random-target effects).
    /// Seeded for deterministic tests and replays.
    ///
    /// Wrapped in RefCell so random choices can be made while the rest of
    /// the state is borrowed immutably.
    pub rng: RefCell<ChaCha12Rng>,
}

impl BattleState {
    /// Start a battle: the player brings their own deck, the opponent's is
    /// generated from the catalog within a cost budget scaled by difficulty.
    pub fn new(player_deck: &[Card], difficulty: i32, seed: u64) -> Self {
        let mut state = Self::blank(difficulty, seed);
        let cost_limit = difficulty.max(1);
        let opponent_deck = {
            let mut rng = state.rng.borrow_mut();
            catalog::generate_deck_with_cost(cost_limit, &mut *rng)
        };
        state.setup(player_deck, opponent_deck);
        state
    }

    /// Start a battle with both decks supplied (used by tests).
    pub fn with_decks(player_deck: &[Card], opponent_deck: &[Card], difficulty: i32, seed: u64) -> Self {
        let mut state = Self::blank(difficulty, seed);
        let opponent_deck = opponent_deck.iter().map(Card::fresh).collect();
        state.setup(player_deck, opponent_deck);
        state
    }

    fn blank(difficulty: i32, seed: u64) -> Self {
        BattleState {
            player: SideState::new(),
            opponent: SideState::new(),
            is_player_turn: true,
            difficulty,
            skip_attack_phase: false,
            selected_hand_index: None,
            sequencer: Sequencer::new(),
            log: ActionLog::new(),
            rewards: RewardState::default(),
            rng: RefCell::new(ChaCha12Rng::seed_from_u64(seed)),
        }
    }

    fn setup(&mut self, player_deck: &[Card], opponent_deck: Vec<Card>) {
        self.log.push("Battle started");

        self.player.deck = player_deck.iter().map(Card::fresh).collect();
        self.opponent.deck = opponent_deck;

        // Field-effect cards fire once during priming and never re-enter
        // the deck; the remainder is then shuffled.
        scheduler::prime_field_effects(self, Side::Player);
        scheduler::prime_field_effects(self, Side::Opponent);
        self.shuffle_deck(Side::Player);
        self.shuffle_deck(Side::Opponent);

        self.player.draw_cards(OPENING_HAND_SIZE);
        self.opponent.draw_cards(OPENING_HAND_SIZE);

        // The AI auto-activates Immediate cards as soon as it holds them.
        self.opponent.queue_hand_immediates();

        self.reset_damage_tracking();
    }

    /// Reseed the gameplay RNG (for deterministic replays).
    pub fn seed_rng(&mut self, seed: u64) {
        *self.rng.borrow_mut() = ChaCha12Rng::seed_from_u64(seed);
    }

    pub fn side(&self, side: Side) -> &SideState {
        match side {
            Side::Player => &self.player,
            Side::Opponent => &self.opponent,
        }
    }

    pub fn side_mut(&mut self, side: Side) -> &mut SideState {
        match side {
            Side::Player => &mut self.player,
            Side::Opponent => &mut self.opponent,
        }
    }

    /// Shuffle a side's deck using the battle RNG.
    pub fn shuffle_deck(&mut self, side: Side) {
        use rand::seq::SliceRandom;
        let mut rng = self.rng.borrow_mut();
        match side {
            Side::Player => self.player.deck.shuffle(&mut *rng),
            Side::Opponent => self.opponent.deck.shuffle(&mut *rng),
        }
    }

    /// While animating, collaborators must reject further input.
    pub fn is_animating(&self) -> bool {
        self.sequencer.is_animating()
    }

    /// Current match outcome.
    pub fn outcome(&self) -> Outcome {
        outcome::evaluate(&self.player, &self.opponent)
    }

    /// Handle the end-turn command: draws, opponent auto-play, immediate
    /// resolution, then arm the attack animation. Rejected while animating
    /// or after the match has ended. Returns whether the animation was armed.
    pub fn end_turn(&mut self, now: f64) -> bool {
        if self.is_animating() || self.outcome().is_terminal() {
            return false;
        }
        scheduler::end_turn(self, now)
    }

    /// Advance the battle to time `now`: drives the animation sequencer,
    /// committing at most one attack phase's damage, and refreshes the
    /// reward offer once victory is detected.
    pub fn tick(&mut self, now: f64) {
        if let Some(phase) = self.sequencer.tick(now) {
            resolver::apply_attacks_for_phase(self, phase);
        }
        if !self.is_animating() {
            // Input is handed back once the exchange has fully played out.
            self.is_player_turn = true;
        }
        if self.outcome() == Outcome::Victory {
            rewards::refresh_reward_offer(self);
        }
    }

    /// Zero both sides' ephemeral feedback counters.
    pub fn reset_damage_tracking(&mut self) {
        self.player.reset_feedback();
        self.opponent.reset_feedback();
    }

    /// Serialize the whole battle, RNG included, to JSON. A dumped state can
    /// be restored and replayed deterministically.
    pub fn to_json(&self) -> crate::Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Restore a battle from a JSON dump.
    pub fn from_json(json: &str) -> crate::Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
