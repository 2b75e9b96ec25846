//! Per-column attack resolution
//!
//! Each attacking side resolves one column at a time. Attacks stay on the
//! attacker's half of the board: columns 0-2 engage defender columns 0-2,
//! columns 3-5 engage 3-5, and the two center columns only fire straight
//! ahead. Ship hits require the defender's near-center column on that half
//! to be completely clear.

use crate::core::{Card, Side, COLS, ROWS};
use crate::game::effects;
use crate::game::sequencer::PHASE_COLUMNS;
use crate::game::state::BattleState;

/// Row consumption order when distributing damage into a column.
/// The player chews through the opponent's bottom row first; the opponent
/// through the player's top row first.
fn defender_row_order(attacker: Side) -> [usize; 2] {
    match attacker {
        Side::Player => [1, 0],
        Side::Opponent => [0, 1],
    }
}

/// Attacker row iteration order. The player resolves bottom-to-top.
fn attacker_row_order(attacker: Side) -> [usize; 2] {
    match attacker {
        Side::Player => [1, 0],
        Side::Opponent => [0, 1],
    }
}

/// Pick the defending column for an attack out of column `col`, or None when
/// no live unit is reachable. Center columns (2 and 3) never fan out; edge
/// and mid columns scan from `col` toward the board center.
pub(crate) fn find_target_column(col: usize, attacker: Side, state: &BattleState) -> Option<usize> {
    let defender = state.side(attacker.opposite());
    if defender.column_has_live_card(col) {
        return Some(col);
    }
    let scan: &[usize] = match col {
        0 => &[1, 2],
        1 => &[2],
        2 | 3 => &[],
        4 => &[3],
        5 => &[4, 3],
        _ => unreachable!("column out of range"),
    };
    scan.iter().copied().find(|&c| defender.column_has_live_card(c))
}

/// Near-center column of the half that `col` belongs to: 2 on the left, 3 on
/// the right. A ship is only exposed when this column is completely clear.
fn near_center_column(col: usize) -> usize {
    if col < COLS / 2 {
        2
    } else {
        3
    }
}

fn effective_damage(card: &Card, multiplier: f64) -> i32 {
    (card.dmg as f64 * multiplier).round() as i32
}

/// Resolve one attacker's strike out of (row, col): activate its effect,
/// honor skip flags, then land damage on the chosen column or the ship.
fn resolve_attack(state: &mut BattleState, attacker: Side, row: usize, col: usize) {
    if !state.side(attacker).field[row][col].is_live() {
        return;
    }

    // Field effects fire on every attack, not just at placement. The effect
    // may destroy the attacker or set its skip flag.
    effects::activate_slot(state, attacker, row, col);

    {
        let card = &mut state.side_mut(attacker).field[row][col];
        if card.state.skip_this_turn {
            card.state.skip_this_turn = false;
            return;
        }
    }

    let multiplier = state.side(attacker).damage_multiplier;
    let (dmg, name) = {
        let card = &state.side(attacker).field[row][col];
        (effective_damage(card, multiplier), card.name.clone())
    };
    if dmg <= 0 {
        return;
    }

    let defender = attacker.opposite();
    let special = state.side(attacker).field[row][col]
        .description
        .as_ref()
        .map(|d| format!(" (special effect: {d})"))
        .unwrap_or_default();

    if let Some(target_col) = find_target_column(col, attacker, state) {
        let mut remaining = dmg;
        for target_row in defender_row_order(attacker) {
            if remaining <= 0 {
                break;
            }
            let target_hp = state.side(defender).field[target_row][target_col].hp;
            if target_hp <= 0 {
                continue;
            }
            let applied = remaining.min(target_hp);
            let target_name = state.side(defender).field[target_row][target_col].name.clone();
            effects::deal_damage_to_slot(state, defender, target_row, target_col, applied);
            state.log.push(format!(
                "Card {name} from {attacker} hit {target_name} at column {target_col} for {applied}{special}"
            ));
            remaining -= applied;
        }
    } else if !state.side(defender).column_has_live_card(near_center_column(col)) {
        effects::deal_damage_to_ship(state, defender, dmg);
        state
            .log
            .push(format!("Card {name} from {attacker} struck the enemy ship for {dmg}{special}"));
    }
    // Otherwise the attack is wasted: a live card on the near-center column
    // shields the ship even when it is out of targeting range.
}

/// Resolve all of one side's attacks out of column `col`.
pub(crate) fn apply_attacks_for_side(state: &mut BattleState, attacker: Side, col: usize) {
    for row in attacker_row_order(attacker) {
        if state.skip_attack_phase {
            return;
        }
        resolve_attack(state, attacker, row, col);
    }
}

/// Resolve the column pair of animation phase `phase`: both columns for the
/// player, then both for the opponent, then a destruction sweep.
pub(crate) fn apply_attacks_for_phase(state: &mut BattleState, phase: usize) {
    for &col in &PHASE_COLUMNS[phase] {
        apply_attacks_for_side(state, Side::Player, col);
        apply_attacks_for_side(state, Side::Opponent, col);
    }
    sweep_destroyed(state);
}

/// Replace every destroyed card (hp <= 0, non-empty name) with the empty
/// sentinel and log the loss.
pub(crate) fn sweep_destroyed(state: &mut BattleState) {
    for side in [Side::Player, Side::Opponent] {
        for row in 0..ROWS {
            for col in 0..COLS {
                let card = &state.side(side).field[row][col];
                if card.hp <= 0 && !card.name.is_empty() {
                    let name = card.name.clone();
                    state.side_mut(side).field[row][col] = Card::empty();
                    state.log.push(format!("Card {name} from {side} was destroyed"));
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::CardType;

    fn battle() -> BattleState {
        BattleState::with_decks(&[], &[], 500, 99)
    }

    fn unit(name: &str, hp: i32, dmg: i32) -> Card {
        Card::new(name, hp, dmg, 100, CardType::Turret)
    }

    #[test]
    fn test_same_column_preferred() {
        let mut state = battle();
        state.opponent.field[0][1] = unit("A", 300, 0);
        state.opponent.field[0][2] = unit("B", 300, 0);
        assert_eq!(find_target_column(1, Side::Player, &state), Some(1));
    }

    #[test]
    fn test_scan_runs_toward_center_only() {
        let mut state = battle();
        state.opponent.field[0][0] = unit("A", 300, 0);
        // Column 1 never scans outward to column 0.
        assert_eq!(find_target_column(1, Side::Player, &state), None);
        assert_eq!(find_target_column(0, Side::Player, &state), Some(0));
    }

    #[test]
    fn test_center_columns_never_fan_out() {
        let mut state = battle();
        state.opponent.field[0][1] = unit("A", 300, 0);
        assert_eq!(find_target_column(2, Side::Player, &state), None);
        state.opponent.field[0][4] = unit("B", 300, 0);
        assert_eq!(find_target_column(3, Side::Player, &state), None);
    }

    #[test]
    fn test_right_half_scans_toward_center() {
        let mut state = battle();
        state.opponent.field[1][3] = unit("A", 300, 0);
        assert_eq!(find_target_column(5, Side::Player, &state), Some(3));
        assert_eq!(find_target_column(4, Side::Player, &state), Some(3));
    }

    #[test]
    fn test_damage_overflows_bottom_to_top_for_player() {
        let mut state = battle();
        state.player.field[0][0] = unit("Striker", 300, 500);
        state.opponent.field[1][0] = unit("Bottom", 200, 0);
        state.opponent.field[0][0] = unit("Top", 400, 0);

        apply_attacks_for_side(&mut state, Side::Player, 0);
        assert_eq!(state.opponent.field[1][0].hp, 0);
        assert_eq!(state.opponent.field[0][0].hp, 100);
    }

    #[test]
    fn test_opponent_consumes_top_row_first() {
        let mut state = battle();
        state.opponent.field[0][0] = unit("Striker", 300, 150);
        state.player.field[0][0] = unit("Top", 200, 0);
        state.player.field[1][0] = unit("Bottom", 200, 0);

        apply_attacks_for_side(&mut state, Side::Opponent, 0);
        assert_eq!(state.player.field[0][0].hp, 50);
        assert_eq!(state.player.field[1][0].hp, 200);
    }

    #[test]
    fn test_ship_hit_requires_clear_near_center_column() {
        let mut state = battle();
        state.player.field[0][0] = unit("Striker", 300, 500);
        state.opponent.field[0][2] = unit("Blocker", 100, 0);

        // Column 2 is occupied: the attack from column 0 finds a unit target
        // by scanning toward center, so no ship hit either way.
        apply_attacks_for_side(&mut state, Side::Player, 0);
        assert_eq!(state.opponent.hp, crate::core::SHIP_BASE_HP);
        assert_eq!(state.opponent.field[0][2].hp, 0);
    }

    #[test]
    fn test_ship_hit_when_half_is_clear() {
        let mut state = battle();
        state.player.field[0][0] = unit("Striker", 300, 500);
        // A unit on the far half does not shield the ship from left-half fire.
        state.opponent.field[0][4] = unit("FarSide", 100, 0);

        apply_attacks_for_side(&mut state, Side::Player, 0);
        assert_eq!(state.opponent.hp, crate::core::SHIP_BASE_HP - 500);
        assert_eq!(state.opponent.field[0][4].hp, 100);
    }

    #[test]
    fn test_center_blocker_wastes_out_of_range_attack() {
        let mut state = battle();
        state.player.field[0][1] = unit("Striker", 300, 500);
        state.opponent.field[0][0] = unit("Corner", 100, 0);
        state.opponent.field[1][2] = unit("Center", 100, 0);
        state.opponent.field[1][2].hp = 0; // destroyed, does not shield
        state.opponent.field[1][2].name.clear();
        state.opponent.field[0][2] = unit("Shield", 1, 0);

        // Column 1 cannot reach column 0, and column 2 holds a live card, so
        // the attack lands on column 2 via the scan.
        apply_attacks_for_side(&mut state, Side::Player, 1);
        assert_eq!(state.opponent.hp, crate::core::SHIP_BASE_HP);
        assert_eq!(state.opponent.field[0][2].hp, 0);
    }

    #[test]
    fn test_multiplier_rounds_to_nearest() {
        let card = unit("X", 100, 25);
        assert_eq!(effective_damage(&card, 1.5), 38);
        assert_eq!(effective_damage(&card, 0.5), 13);
    }

    #[test]
    fn test_alternator_attacks_every_other_turn() {
        let mut state = battle();
        state.player.field[1][0] = crate::catalog::find("Alternator").unwrap().fresh();
        state.opponent.field[0][0] = unit("Dummy", 5000, 0);

        apply_attacks_for_side(&mut state, Side::Player, 0);
        assert_eq!(state.opponent.field[0][0].hp, 4600);

        // Second activation sets the skip flag: no damage.
        apply_attacks_for_side(&mut state, Side::Player, 0);
        assert_eq!(state.opponent.field[0][0].hp, 4600);

        apply_attacks_for_side(&mut state, Side::Player, 0);
        assert_eq!(state.opponent.field[0][0].hp, 4200);
    }

    #[test]
    fn test_skip_attack_phase_suppresses_all_attacks() {
        let mut state = battle();
        state.player.field[0][0] = unit("Striker", 300, 500);
        state.skip_attack_phase = true;

        apply_attacks_for_phase(&mut state, 0);
        assert_eq!(state.opponent.hp, crate::core::SHIP_BASE_HP);
    }

    #[test]
    fn test_self_destructing_attacker_deals_no_damage() {
        let mut state = battle();
        let mut overheat = crate::catalog::find("Overheat").unwrap().fresh();
        overheat.state.times_used = 2;
        state.player.field[1][0] = overheat;
        state.opponent.field[0][0] = unit("Dummy", 5000, 0);

        apply_attacks_for_side(&mut state, Side::Player, 0);
        assert_eq!(state.opponent.field[0][0].hp, 5000);
        assert!(state.player.field[1][0].name.is_empty());
    }

    #[test]
    fn test_sweep_replaces_destroyed_with_sentinel() {
        let mut state = battle();
        state.opponent.field[0][3] = unit("Goner", 100, 0);
        state.opponent.field[0][3].hp = 0;

        sweep_destroyed(&mut state);
        let slot = &state.opponent.field[0][3];
        assert!(slot.name.is_empty());
        assert_eq!(slot.hp, 0);
        assert!(state.log.iter().any(|l| l.contains("Goner") && l.contains("destroyed")));
    }

    #[test]
    fn test_phase_resolves_both_columns_and_sweeps() {
        let mut state = battle();
        state.player.field[0][0] = unit("Left", 300, 200);
        state.player.field[0][5] = unit("Right", 300, 200);
        state.opponent.field[0][0] = unit("VictimL", 150, 0);
        state.opponent.field[0][5] = unit("VictimR", 150, 0);

        apply_attacks_for_phase(&mut state, 0);
        assert!(state.opponent.field[0][0].name.is_empty());
        assert!(state.opponent.field[0][5].name.is_empty());
    }
}
