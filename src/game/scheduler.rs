//! Turn lifecycle: end-turn sequencing, immediate queues, field-effect priming

use crate::core::{CardKind, Side};
use crate::game::effects;
use crate::game::resolver;
use crate::game::state::{BattleState, TURN_DRAW_COUNT};
use rand::Rng;

/// Run one end-turn sequence: draws, opponent auto-play, immediate-queue
/// resolution, destruction sweep, then arm the attack animation. Returns
/// true when the animation was armed (both ships still afloat).
pub(crate) fn end_turn(state: &mut BattleState, now: f64) -> bool {
    state.skip_attack_phase = false;
    state.log.push("Turn ended".to_string());

    state.player.draw_cards(TURN_DRAW_COUNT);
    state.opponent.draw_cards(TURN_DRAW_COUNT);

    state.opponent.queue_hand_immediates();
    auto_place_hand(state, Side::Opponent);

    state.reset_damage_tracking();

    resolve_immediate_queues(state);
    resolver::sweep_destroyed(state);

    if state.player.hp > 0 && state.opponent.hp > 0 {
        state.sequencer.arm(now);
        state.is_player_turn = false;
        true
    } else {
        false
    }
}

/// Place every non-immediate card in `side`'s hand into the first empty slot,
/// scanning top-to-bottom then left-to-right. Cards with no free slot stay
/// in hand.
fn auto_place_hand(state: &mut BattleState, side: Side) {
    let side_state = state.side_mut(side);
    let hand = std::mem::take(&mut side_state.hand);
    let mut placed_names = Vec::new();
    for card in hand {
        if card.kind == CardKind::Immediate {
            side_state.immediate_queue.push(card);
            continue;
        }
        match side_state.first_empty_slot() {
            Some((row, col)) => {
                placed_names.push((card.name.clone(), row, col));
                side_state.field[row][col] = card;
            }
            None => side_state.hand.push(card),
        }
    }
    for (name, row, col) in placed_names {
        state
            .log
            .push(format!("Card {name} from {side} placed at row {row} col {col}"));
    }
}

/// Drain both immediate queues, picking the acting side uniformly at random
/// whenever both have cards pending. Stops as soon as either ship is dead.
pub(crate) fn resolve_immediate_queues(state: &mut BattleState) {
    loop {
        if state.player.hp <= 0 || state.opponent.hp <= 0 {
            break;
        }
        let player_pending = !state.player.immediate_queue.is_empty();
        let opponent_pending = !state.opponent.immediate_queue.is_empty();
        let side = match (player_pending, opponent_pending) {
            (false, false) => break,
            (true, false) => Side::Player,
            (false, true) => Side::Opponent,
            (true, true) => {
                if state.rng.borrow_mut().gen_bool(0.5) {
                    Side::Player
                } else {
                    Side::Opponent
                }
            }
        };
        let card = state.side_mut(side).immediate_queue.remove(0);
        effects::activate_detached(state, side, &card);
    }
}

/// Pull every field-effect card out of `side`'s deck, activate it once, and
/// discard it. Runs once at battle setup, before the deck is shuffled.
pub(crate) fn prime_field_effects(state: &mut BattleState, side: Side) {
    let deck = std::mem::take(&mut state.side_mut(side).deck);
    let mut kept = Vec::with_capacity(deck.len());
    let mut primed = Vec::new();
    for card in deck {
        if card.kind == CardKind::FieldEffect && card.effect.is_some() {
            primed.push(card);
        } else {
            kept.push(card);
        }
    }
    state.side_mut(side).deck = kept;
    for card in primed {
        effects::activate_detached(state, side, &card);
    }
}
