//! End-to-end battle flows through the public API

use voidfleet::catalog;
use voidfleet::core::{Card, CardType, Side, SHIP_BASE_HP};
use voidfleet::game::actions;
use voidfleet::game::rewards;
use voidfleet::{BattleState, Outcome};

/// Run the animation out, stepping a synthetic clock like a frontend would.
fn drive(state: &mut BattleState, now: &mut f64) {
    while state.is_animating() {
        *now += 0.05;
        state.tick(*now);
        assert!(*now < 10_000.0, "animation never settled");
    }
    state.tick(*now);
}

fn unit(name: &str, hp: i32, dmg: i32) -> Card {
    Card::new(name, hp, dmg, 100, CardType::Turret)
}

#[test]
fn test_exposed_ship_takes_column_damage() {
    let mut state = BattleState::with_decks(&[], &[], 500, 1);
    state.player.field[0][0] = unit("Striker", 300, 200);

    let mut now = 0.0;
    assert!(state.end_turn(now));
    drive(&mut state, &mut now);

    assert_eq!(state.opponent.hp, SHIP_BASE_HP - 200);
    assert_eq!(state.outcome(), Outcome::InProgress);
}

#[test]
fn test_battle_to_victory_and_reward_flow() {
    // Six heavy turrets against an empty opponent: the player grinds the
    // enemy ship down over several turns.
    let deck: Vec<Card> = (0..6).map(|_| catalog::find("Turret Mk3").unwrap().fresh()).collect();
    let mut state = BattleState::with_decks(&deck, &[], 500, 5);

    let mut now = 0.0;
    let mut turns = 0;
    while state.outcome() == Outcome::InProgress {
        while !state.player.hand.is_empty() {
            let Some((row, col)) = state.player.first_empty_slot() else {
                break;
            };
            assert!(actions::place_card(&mut state, 0, row, col));
        }
        state.end_turn(now);
        drive(&mut state, &mut now);
        turns += 1;
        assert!(turns < 50, "battle never resolved");
    }

    assert_eq!(state.outcome(), Outcome::Victory);
    assert_eq!(state.rewards.options.len(), 3);
    for offer in &state.rewards.options {
        assert!(offer.cost < 500);
    }

    let mut persistent = deck.clone();
    assert!(rewards::choose_reward(&mut state, 0, &mut persistent));
    assert_eq!(persistent.len(), deck.len() + 1);
    assert!(state.rewards.chosen.is_some());

    // Post-victory turns are rejected.
    assert!(!state.end_turn(now));
}

#[test]
fn test_empty_decks_stalemate_immediately() {
    let mut state = BattleState::with_decks(&[], &[], 500, 9);
    assert_eq!(state.outcome(), Outcome::Stalemate);
    assert!(!state.end_turn(0.0));
    assert_eq!(state.player.hp, SHIP_BASE_HP);
    assert_eq!(state.opponent.hp, SHIP_BASE_HP);
}

#[test]
fn test_ceasefire_suppresses_one_attack_phase() {
    let mut state = BattleState::with_decks(&[], &[], 500, 13);
    state.opponent.field[0][0] = unit("Raider", 5000, 400);
    state.player.hand.push(catalog::find("Ceasefire").unwrap().fresh());
    assert!(actions::queue_immediate(&mut state, 0));

    let mut now = 0.0;
    state.end_turn(now);
    drive(&mut state, &mut now);
    assert_eq!(state.player.hp, SHIP_BASE_HP);

    // The flag is one-shot: the raider fires on the following turn.
    state.end_turn(now);
    drive(&mut state, &mut now);
    assert_eq!(state.player.hp, SHIP_BASE_HP - 400);
}

#[test]
fn test_damage_trigger_fires_from_attack_path() {
    let mut state = BattleState::with_decks(&[], &[], 500, 17);
    state.player.field[0][0] = catalog::find("Masochist").unwrap().fresh();
    state.opponent.field[0][0] = unit("Raider", 5000, 100);

    let mut now = 0.0;
    state.end_turn(now);
    drive(&mut state, &mut now);

    // The masochist absorbed the hit and healed its own ship.
    assert_eq!(state.player.hp, SHIP_BASE_HP + 500);
    assert!(state.player.field[0][0].hp < state.player.field[0][0].max_hp);
}

#[test]
fn test_immediate_interleave_varies_with_seed() {
    // When both queues hold a card, the acting side is drawn at random.
    // Across many seeds both orderings must occur.
    let mut first_actors = std::collections::HashSet::new();
    for seed in 0..40 {
        let mut state = BattleState::with_decks(&[], &[], 500, seed);
        // A unit on each side keeps the match in progress; zero damage keeps
        // the exchange itself uninteresting.
        state.player.field[0][0] = unit("Watcher", 100, 0);
        state.opponent.field[0][0] = unit("Watcher", 100, 0);
        state.player.hand.push(catalog::find("Greed").unwrap().fresh());
        assert!(actions::queue_immediate(&mut state, 0));
        state.opponent.immediate_queue.push(catalog::find("Greed").unwrap().fresh());

        state.end_turn(0.0);
        let first = state
            .log
            .iter()
            .find(|line| line.contains("activated"))
            .expect("no activation logged")
            .to_string();
        if first.contains(&format!("from {}", Side::Player)) {
            first_actors.insert(Side::Player);
        } else {
            first_actors.insert(Side::Opponent);
        }
    }
    assert_eq!(first_actors.len(), 2, "queue interleave never varied");
}

#[test]
fn test_multipliers_shape_attack_damage_end_to_end() {
    let mut state = BattleState::with_decks(&[], &[], 500, 21);
    state.player.field[0][0] = unit("Striker", 300, 200);
    state.player.hand.push(catalog::find("Glass Cannon").unwrap().fresh());
    assert!(actions::queue_immediate(&mut state, 0));

    let mut now = 0.0;
    state.end_turn(now);
    drive(&mut state, &mut now);

    // Glass Cannon tripled both multipliers before the attack landed.
    assert_eq!(state.opponent.hp, SHIP_BASE_HP - 600);
}

#[test]
fn test_log_records_full_exchange() {
    let mut state = BattleState::with_decks(&[], &[], 500, 23);
    state.player.field[1][2] = unit("Striker", 300, 150);
    state.opponent.field[0][2] = unit("Bulwark", 1000, 0);

    let mut now = 0.0;
    state.end_turn(now);
    drive(&mut state, &mut now);

    assert_eq!(state.opponent.field[0][2].hp, 850);
    assert!(state
        .log
        .iter()
        .any(|line| line.contains("Striker") && line.contains("Bulwark") && line.contains("150")));
}
