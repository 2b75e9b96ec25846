//! Core battle data model

pub mod card;
pub mod effect;
pub mod side;

pub use card::{Card, CardKind, CardType, DamageTrigger, RuntimeState};
pub use effect::Effect;
pub use side::{Field, Side, SideState, COLS, ROWS, SHIP_BASE_HP};
