//! Effect activation and damage/heal helpers
//!
//! All slot damage, from any source, routes through `deal_damage_to_slot` so
//! the took-damage trigger and feedback counters fire uniformly. Effects may
//! touch either side's slots, ships and multipliers, the invoking card's own
//! stats, or the attack-phase skip flag.

use crate::core::{Card, DamageTrigger, Effect, Side, COLS, ROWS};
use crate::game::resolver;
use crate::game::state::BattleState;
use rand::Rng;

/// Damage one board slot: clamp to current hp, record feedback, fire the
/// card's took-damage trigger. No-op against empty or destroyed slots.
pub(crate) fn deal_damage_to_slot(state: &mut BattleState, side: Side, row: usize, col: usize, dmg: i32) {
    if dmg <= 0 {
        return;
    }
    let trigger = {
        let side_state = state.side_mut(side);
        let target = &mut side_state.field[row][col];
        if target.hp <= 0 {
            return;
        }
        let applied = dmg.min(target.hp);
        target.hp -= applied;
        let trigger = target.on_damaged;
        side_state.slot_last_damage[row][col] += applied;
        trigger
    };
    match trigger {
        Some(DamageTrigger::HealOwnShip { amount }) => heal_ship(state, side, amount),
        None => {}
    }
}

/// Damage a ship directly, clamped to its remaining hp.
pub(crate) fn deal_damage_to_ship(state: &mut BattleState, side: Side, dmg: i32) {
    if dmg <= 0 {
        return;
    }
    let applied = {
        let side_state = state.side_mut(side);
        let applied = dmg.min(side_state.hp);
        side_state.hp -= applied;
        side_state.ship_last_damage += applied;
        applied
    };
    state.log.push(format!("Ship of {side} took {applied} damage"));
}

/// Heal a ship. No cap: heals can push hp past the starting baseline.
pub(crate) fn heal_ship(state: &mut BattleState, side: Side, amount: i32) {
    if amount <= 0 {
        return;
    }
    {
        let side_state = state.side_mut(side);
        side_state.hp += amount;
        side_state.ship_last_heal += amount;
    }
    state.log.push(format!("Ship of {side} healed {amount}"));
}

/// Heal one live slot, capped at the card's max hp.
pub(crate) fn heal_slot(state: &mut BattleState, side: Side, row: usize, col: usize, amount: i32) {
    let healed = {
        let side_state = state.side_mut(side);
        let target = &mut side_state.field[row][col];
        if target.hp <= 0 || amount <= 0 {
            return;
        }
        let before = target.hp;
        target.hp = target.max_hp.min(target.hp + amount);
        let healed = target.hp - before;
        if healed > 0 {
            side_state.slot_last_heal[row][col] += healed;
        }
        healed
    };
    if healed > 0 {
        let name = state.side(side).field[row][col].name.clone();
        state
            .log
            .push(format!("Card {name} from {side} at row {row} col {col} healed {healed}"));
    }
}

pub(crate) fn deal_damage_to_all_slots(state: &mut BattleState, side: Side, amount: i32) {
    for row in 0..ROWS {
        for col in 0..COLS {
            deal_damage_to_slot(state, side, row, col, amount);
        }
    }
}

pub(crate) fn heal_all_slots(state: &mut BattleState, side: Side, amount: i32) {
    for row in 0..ROWS {
        for col in 0..COLS {
            heal_slot(state, side, row, col, amount);
        }
    }
}

/// Pick a uniformly random live slot on `side`, if any.
pub(crate) fn random_live_slot(state: &BattleState, side: Side) -> Option<(usize, usize)> {
    let field = &state.side(side).field;
    let mut slots = Vec::new();
    for (r, row) in field.iter().enumerate() {
        for (c, card) in row.iter().enumerate() {
            if card.is_live() {
                slots.push((r, c));
            }
        }
    }
    if slots.is_empty() {
        return None;
    }
    let mut rng = state.rng.borrow_mut();
    Some(slots[rng.gen_range(0..slots.len())])
}

/// Apply one effect. `slot` carries the invoking card's board position for
/// board-bound activations; immediate and field-effect activations pass None.
pub(crate) fn apply(state: &mut BattleState, side: Side, effect: Effect, slot: Option<(usize, usize)>) {
    let enemy = side.opposite();
    match effect {
        Effect::HealAllAllies { amount } => heal_all_slots(state, side, amount),
        Effect::DamageAllEnemies { amount } => deal_damage_to_all_slots(state, enemy, amount),
        Effect::AlternatingFire => {
            if let Some((row, col)) = slot {
                let card = &mut state.side_mut(side).field[row][col];
                if card.state.times_used % 2 == 0 {
                    card.state.skip_this_turn = true;
                }
            }
        }
        Effect::SelfDestructAfter { uses } => {
            if let Some((row, col)) = slot {
                let card = &mut state.side_mut(side).field[row][col];
                if card.state.times_used >= uses {
                    card.hp = 0;
                }
            }
        }
        Effect::BlastRandomEnemyAfter { uses, damage } => {
            if let Some((row, col)) = slot {
                if state.side(side).field[row][col].state.times_used >= uses {
                    if let Some((tr, tc)) = random_live_slot(state, enemy) {
                        deal_damage_to_slot(state, enemy, tr, tc, damage);
                    }
                    state.side_mut(side).field[row][col].hp = 0;
                }
            }
        }
        Effect::BlastAllEnemiesAfter { uses, damage } => {
            if let Some((row, col)) = slot {
                if state.side(side).field[row][col].state.times_used >= uses {
                    deal_damage_to_all_slots(state, enemy, damage);
                    state.side_mut(side).field[row][col].hp = 0;
                }
            }
        }
        Effect::DrawCards { count } => {
            state.side_mut(side).draw_cards(count);
        }
        Effect::Bombardment {
            unit_damage,
            ship_damage,
        } => {
            deal_damage_to_all_slots(state, enemy, unit_damage);
            deal_damage_to_ship(state, enemy, ship_damage);
        }
        Effect::Shockwave {
            enemy_damage,
            friendly_damage,
        } => {
            deal_damage_to_all_slots(state, enemy, enemy_damage);
            deal_damage_to_all_slots(state, side, friendly_damage);
        }
        Effect::Ceasefire => {
            state.skip_attack_phase = true;
        }
        Effect::ScaleOwnMultiplier { factor } => {
            state.side_mut(side).damage_multiplier *= factor;
        }
        Effect::ScaleEnemyMultiplier { factor } => {
            state.side_mut(enemy).damage_multiplier *= factor;
        }
        Effect::ScaleBothMultipliers { factor } => {
            state.side_mut(side).damage_multiplier *= factor;
            state.side_mut(enemy).damage_multiplier *= factor;
        }
        Effect::HealOwnShip { amount } => heal_ship(state, side, amount),
        Effect::FieldRepair {
            ship_amount,
            unit_amount,
        } => {
            heal_ship(state, side, ship_amount);
            heal_all_slots(state, side, unit_amount);
        }
        Effect::StrikeEnemyShip { amount } => deal_damage_to_ship(state, enemy, amount),
        Effect::HealRandomAlly { amount } => {
            if let Some((row, col)) = random_live_slot(state, side) {
                heal_slot(state, side, row, col, amount);
            }
        }
        Effect::Overdrive { factor, backlash } => {
            state.side_mut(side).damage_multiplier *= factor;
            deal_damage_to_ship(state, side, backlash);
        }
        Effect::LoneHunter => {
            if let Some((row, col)) = slot {
                let others = state.side(side).live_card_count().saturating_sub(1) as i32;
                let card = &mut state.side_mut(side).field[row][col];
                let new_dmg = (6000 - 2000 * others).max(1);
                card.dmg = new_dmg;
                card.base_dmg = new_dmg;
                let hp_cap = (1000 - 333 * others).max(1);
                card.max_hp = hp_cap;
                if card.hp > hp_cap {
                    card.hp = hp_cap;
                }
            }
        }
    }
}

/// Activate a board card's effect at (row, col): log the activation, bump
/// `times_used`, run the effect, then sweep if it destroyed itself.
pub(crate) fn activate_slot(state: &mut BattleState, side: Side, row: usize, col: usize) {
    let (effect, name, kind, description) = {
        let card = &state.side(side).field[row][col];
        (card.effect, card.name.clone(), card.kind, card.description.clone())
    };
    let Some(effect) = effect else { return };

    let desc = description.map(|d| format!(": {d}")).unwrap_or_default();
    state
        .log
        .push(format!("Card {name} ({kind}) from {side} activated at row {row} col {col}{desc}"));
    state.side_mut(side).field[row][col].state.times_used += 1;

    apply(state, side, effect, Some((row, col)));

    let destroyed = {
        let card = &state.side(side).field[row][col];
        card.hp <= 0 && !card.name.is_empty()
    };
    if destroyed {
        state
            .log
            .push(format!("Card {name} from {side} was destroyed after activation"));
    }
    resolver::sweep_destroyed(state);
}

/// Activate a card that is not on the board (immediate-queue or field-effect
/// priming). The card has already left its container.
pub(crate) fn activate_detached(state: &mut BattleState, side: Side, card: &Card) {
    let Some(effect) = card.effect else { return };

    let desc = card
        .description
        .as_ref()
        .map(|d| format!(": {d}"))
        .unwrap_or_default();
    state
        .log
        .push(format!("Card {} ({}) from {side} activated{desc}", card.name, card.kind));

    apply(state, side, effect, None);
    resolver::sweep_destroyed(state);
}
