//! Player commands: card placement, immediate queueing, hand selection
//!
//! Commands validate and silently reject. Callers observe the bool result
//! and the unchanged state; nothing here panics or errors on bad input.

use crate::core::{CardKind, Side, COLS, ROWS};
use crate::game::state::BattleState;

/// Place the player's hand card `hand_index` onto the board at (row, col).
/// Rejected while animating, for out-of-range slots, occupied slots, and
/// cards that never sit on the board (Immediate and FieldEffect kinds).
pub fn place_card(state: &mut BattleState, hand_index: usize, row: usize, col: usize) -> bool {
    if !state.is_player_turn || state.is_animating() || row >= ROWS || col >= COLS {
        return false;
    }
    if state.player.field[row][col].is_live() {
        return false;
    }
    let Some(card) = state.player.hand.get(hand_index) else {
        return false;
    };
    if matches!(card.kind, CardKind::Immediate | CardKind::FieldEffect) {
        return false;
    }

    let card = state.player.hand.remove(hand_index);
    let name = card.name.clone();
    state.player.field[row][col] = card;
    state.selected_hand_index = None;
    state
        .log
        .push(format!("Card {name} from {} placed at row {row} col {col}", Side::Player));
    true
}

/// Move the player's hand card `hand_index` into the immediate queue.
/// Only Immediate-kind cards qualify; it activates at the next end turn.
pub fn queue_immediate(state: &mut BattleState, hand_index: usize) -> bool {
    if !state.is_player_turn || state.is_animating() {
        return false;
    }
    match state.player.hand.get(hand_index) {
        Some(card) if card.kind == CardKind::Immediate => {}
        _ => return false,
    }

    let card = state.player.hand.remove(hand_index);
    state.log.push(format!("Card {} queued for activation", card.name));
    state.player.immediate_queue.push(card);
    state.selected_hand_index = None;
    true
}

/// Select (or deselect, with None) a hand card for a follow-up placement.
/// Out-of-range indices clear the selection.
pub fn select_hand_card(state: &mut BattleState, hand_index: Option<usize>) {
    state.selected_hand_index = hand_index.filter(|&i| i < state.player.hand.len());
}
