//! Per-side battle state: ship, deck, hand, board grid and feedback counters

use crate::core::{Card, CardKind};
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::fmt;

/// Board rows per side.
pub const ROWS: usize = 2;
/// Board columns per side.
pub const COLS: usize = 6;
/// Ship health baseline at battle start. Heals may push hp above this.
pub const SHIP_BASE_HP: i32 = 10_000;

/// The fixed 2x6 board grid of one side. Empty slots hold `Card::empty()`.
pub type Field = [[Card; COLS]; ROWS];

/// Which side of the battle a state or action belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    Player,
    Opponent,
}

impl Side {
    pub fn opposite(self) -> Side {
        match self {
            Side::Player => Side::Opponent,
            Side::Opponent => Side::Player,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Player => write!(f, "Player"),
            Side::Opponent => write!(f, "Opponent"),
        }
    }
}

/// Mutable per-match state of one side.
///
/// The `*_last_damage` / `*_last_heal` counters are ephemeral UI feedback,
/// reset at the start of every turn, but they are externally observable and
/// kept exact.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SideState {
    /// Ship health. Can exceed the starting baseline via heals.
    pub hp: i32,
    /// Persistent outgoing-damage scalar. Combined multiplicatively by
    /// effects, never reset during a match.
    pub damage_multiplier: f64,
    /// Ordered stack; cards are drawn from the end.
    pub deck: Vec<Card>,
    pub hand: Vec<Card>,
    pub field: Field,
    /// FIFO of Immediate-kind cards awaiting activation.
    pub immediate_queue: SmallVec<[Card; 4]>,
    pub ship_last_damage: i32,
    pub ship_last_heal: i32,
    pub slot_last_damage: [[i32; COLS]; ROWS],
    pub slot_last_heal: [[i32; COLS]; ROWS],
}

impl SideState {
    pub fn new() -> Self {
        SideState {
            hp: SHIP_BASE_HP,
            damage_multiplier: 1.0,
            deck: Vec::new(),
            hand: Vec::new(),
            field: std::array::from_fn(|_| std::array::from_fn(|_| Card::empty())),
            immediate_queue: SmallVec::new(),
            ship_last_damage: 0,
            ship_last_heal: 0,
            slot_last_damage: [[0; COLS]; ROWS],
            slot_last_heal: [[0; COLS]; ROWS],
        }
    }

    /// Does any row of `col` hold a live card?
    pub fn column_has_live_card(&self, col: usize) -> bool {
        self.field.iter().any(|row| row[col].is_live())
    }

    /// Count live, named cards on the board.
    pub fn live_card_count(&self) -> usize {
        self.field
            .iter()
            .flatten()
            .filter(|card| card.is_live() && !card.name.is_empty())
            .count()
    }

    /// A side can still act while it has hand cards, deck cards, or any live
    /// board card. Both sides running out ends the match in stalemate.
    pub fn has_play_resources(&self) -> bool {
        !self.hand.is_empty()
            || !self.deck.is_empty()
            || self.field.iter().flatten().any(|card| card.is_live())
    }

    /// Draw up to `count` cards from the top of the deck into the hand.
    /// Drawing from an empty deck silently draws fewer.
    pub fn draw_cards(&mut self, count: usize) -> usize {
        let mut drawn = 0;
        for _ in 0..count {
            match self.deck.pop() {
                Some(card) => {
                    self.hand.push(card);
                    drawn += 1;
                }
                None => break,
            }
        }
        drawn
    }

    /// Move all Immediate-kind hand cards into the immediate queue,
    /// preserving hand order. AI auto-activation policy.
    pub fn queue_hand_immediates(&mut self) {
        let hand = std::mem::take(&mut self.hand);
        for card in hand {
            if card.kind == CardKind::Immediate {
                self.immediate_queue.push(card);
            } else {
                self.hand.push(card);
            }
        }
    }

    /// First empty board slot in row-major order, if any.
    pub fn first_empty_slot(&self) -> Option<(usize, usize)> {
        for r in 0..ROWS {
            for c in 0..COLS {
                if !self.field[r][c].is_live() {
                    return Some((r, c));
                }
            }
        }
        None
    }

    /// Zero all ephemeral last-damage/last-heal counters.
    pub fn reset_feedback(&mut self) {
        self.ship_last_damage = 0;
        self.ship_last_heal = 0;
        self.slot_last_damage = [[0; COLS]; ROWS];
        self.slot_last_heal = [[0; COLS]; ROWS];
    }
}

impl Default for SideState {
    fn default() -> Self {
        Self::new()
    }
}
