//! Card value type and definitions
//!
//! Cards are always value-copied between the catalog, decks, hands and the
//! board; a card is owned by exactly one container at a time and there is no
//! aliasing. Empty board slots hold a sentinel card (empty name, zero hp)
//! rather than an `Option`.

use crate::core::Effect;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Cosmetic card category (display only, no rules weight).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CardType {
    Shield,
    Turret,
    Drone,
    Utility,
}

/// Rules category of a card. Constrains placement:
/// Immediate cards never occupy a board slot, FieldEffect cards fire once
/// during deck priming and never enter a deck afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CardKind {
    Normal,
    Special,
    Immediate,
    FieldEffect,
}

impl fmt::Display for CardKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            CardKind::Normal => "Normal",
            CardKind::Special => "Special",
            CardKind::Immediate => "Immediate",
            CardKind::FieldEffect => "Field",
        };
        write!(f, "{label}")
    }
}

/// Reaction fired whenever a card takes slot damage, from any source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DamageTrigger {
    /// Heal the owner's ship.
    HealOwnShip { amount: i32 },
}

/// Per-instance mutable state, reset whenever a card is instantiated
/// from the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RuntimeState {
    pub times_used: u32,
    pub skip_this_turn: bool,
}

/// A card instance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Card {
    pub name: String,
    pub hp: i32,
    pub max_hp: i32,
    pub dmg: i32,
    pub base_dmg: i32,
    pub cost: i32,
    pub card_type: CardType,
    pub kind: CardKind,
    pub effect: Option<Effect>,
    pub description: Option<String>,
    pub on_damaged: Option<DamageTrigger>,
    pub state: RuntimeState,
}

impl Card {
    pub fn new(name: impl Into<String>, hp: i32, dmg: i32, cost: i32, card_type: CardType) -> Self {
        Card {
            name: name.into(),
            hp,
            max_hp: hp,
            dmg,
            base_dmg: dmg,
            cost,
            card_type,
            kind: CardKind::Normal,
            effect: None,
            description: None,
            on_damaged: None,
            state: RuntimeState::default(),
        }
    }

    /// The sentinel card placed in empty board slots.
    pub fn empty() -> Self {
        Card::new("", 0, 0, 0, CardType::Utility)
    }

    /// A slot holding this card counts as occupied only while it is live.
    pub fn is_live(&self) -> bool {
        self.hp > 0
    }

    /// Instantiate a playable copy with runtime state reset to defaults.
    pub fn fresh(&self) -> Card {
        Card {
            state: RuntimeState::default(),
            ..self.clone()
        }
    }
}
