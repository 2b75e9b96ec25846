//! Static card catalog
//!
//! Immutable card templates. Instantiating a card for a deck, hand or board
//! is always a value copy with runtime state reset (`Card::fresh`).

use crate::core::{Card, CardKind, CardType, DamageTrigger, Effect};
use crate::{EngineError, Result};
use rand::Rng;
use rustc_hash::FxHashMap;
use std::sync::OnceLock;

fn unit(name: &str, hp: i32, dmg: i32, cost: i32, ty: CardType) -> Card {
    Card::new(name, hp, dmg, cost, ty)
}

fn special(name: &str, hp: i32, dmg: i32, cost: i32, ty: CardType, effect: Effect, desc: &str) -> Card {
    let mut card = Card::new(name, hp, dmg, cost, ty);
    card.kind = CardKind::Special;
    card.effect = Some(effect);
    card.description = Some(desc.to_string());
    card
}

fn immediate(name: &str, cost: i32, effect: Effect, desc: &str) -> Card {
    let mut card = Card::new(name, 0, 0, cost, CardType::Utility);
    card.kind = CardKind::Immediate;
    card.effect = Some(effect);
    card.description = Some(desc.to_string());
    card
}

fn field_effect(name: &str, cost: i32, ty: CardType, effect: Effect, desc: &str) -> Card {
    let mut card = Card::new(name, 0, 0, cost, ty);
    card.kind = CardKind::FieldEffect;
    card.effect = Some(effect);
    card.description = Some(desc.to_string());
    card
}

fn build_catalog() -> Vec<Card> {
    let mut masochist = unit("Masochist", 800, 150, 350, CardType::Shield);
    masochist.on_damaged = Some(DamageTrigger::HealOwnShip { amount: 500 });
    masochist.description = Some("When it takes damage, heal your ship by 500".to_string());

    vec![
        unit("Shield", 500, 50, 80, CardType::Shield),
        unit("Shield Mk2", 900, 80, 300, CardType::Shield),
        unit("Shield Mk3", 1400, 120, 600, CardType::Shield),
        unit("Turret", 200, 200, 100, CardType::Turret),
        unit("Turret Mk2", 260, 320, 340, CardType::Turret),
        unit("Turret Mk3", 320, 480, 550, CardType::Turret),
        unit("Drone", 300, 100, 50, CardType::Drone),
        unit("Drone Mk2", 450, 170, 270, CardType::Drone),
        unit("Drone Mk3", 620, 240, 430, CardType::Drone),
        special(
            "Mechanic",
            320,
            80,
            500,
            CardType::Utility,
            Effect::HealAllAllies { amount: 100 },
            "Heal all friendly units by 100 HP",
        ),
        special(
            "Bombard",
            220,
            150,
            800,
            CardType::Turret,
            Effect::DamageAllEnemies { amount: 100 },
            "Damage all enemy units by 100 HP",
        ),
        special(
            "Alternator",
            240,
            400,
            350,
            CardType::Turret,
            Effect::AlternatingFire,
            "Fires only every other turn",
        ),
        special(
            "Overheat",
            260,
            180,
            300,
            CardType::Drone,
            Effect::SelfDestructAfter { uses: 3 },
            "Self-destructs after attacking 3 times",
        ),
        special(
            "Overheat Mk2",
            300,
            240,
            500,
            CardType::Drone,
            Effect::BlastRandomEnemyAfter { uses: 3, damage: 1000 },
            "After 3 attacks, explodes for 1000 damage to a random enemy card",
        ),
        special(
            "Overheat Mk3",
            340,
            260,
            650,
            CardType::Drone,
            Effect::BlastAllEnemiesAfter { uses: 3, damage: 1000 },
            "After 3 attacks, explodes for 1000 damage to all enemy cards",
        ),
        immediate("Greed", 130, Effect::DrawCards { count: 2 }, "Draw 2 more cards"),
        immediate("Greed Mk2", 200, Effect::DrawCards { count: 3 }, "Draw 3 more cards"),
        immediate("Greed Mk3", 260, Effect::DrawCards { count: 4 }, "Draw 4 more cards"),
        immediate(
            "Bomb",
            170,
            Effect::Bombardment {
                unit_damage: 100,
                ship_damage: 50,
            },
            "Deal 100 to all enemy units and 50 to the enemy ship",
        ),
        immediate(
            "Bomb Mk2",
            350,
            Effect::Shockwave {
                enemy_damage: 500,
                friendly_damage: 100,
            },
            "Deal 500 to all enemy units and 100 to all friendly units",
        ),
        immediate("Ceasefire", 80, Effect::Ceasefire, "End the attack phase for this turn"),
        field_effect(
            "Battle Drills",
            2000,
            CardType::Turret,
            Effect::ScaleOwnMultiplier { factor: 1.5 },
            "Increases your cards' damage by 50% (mult)",
        ),
        field_effect(
            "Reinforced Hull",
            1000,
            CardType::Shield,
            Effect::HealOwnShip { amount: 1000 },
            "Increase ship HP by 1000",
        ),
        immediate(
            "Nano Surge",
            1000,
            Effect::FieldRepair {
                ship_amount: 300,
                unit_amount: 50,
            },
            "Heal ship by 300 and all friendly units by 50",
        ),
        field_effect(
            "Dampening Field",
            1500,
            CardType::Utility,
            Effect::ScaleEnemyMultiplier { factor: 0.85 },
            "Reduce incoming damage taken by 15%",
        ),
        special(
            "Fragile Lens",
            50,
            40,
            300,
            CardType::Utility,
            Effect::ScaleOwnMultiplier { factor: 1.2 },
            "Each turn on the field, increase your damage multiplier by 20%",
        ),
        special(
            "Blurred Lens",
            50,
            40,
            320,
            CardType::Utility,
            Effect::ScaleEnemyMultiplier { factor: 0.8 },
            "Each turn on the field, reduce the opponent's damage multiplier by 20%",
        ),
        special(
            "Piercing Beam",
            240,
            260,
            600,
            CardType::Turret,
            Effect::StrikeEnemyShip { amount: 100 },
            "Each attack also deals 100 damage to the enemy ship",
        ),
        special(
            "Guardian Angel",
            520,
            100,
            380,
            CardType::Shield,
            Effect::HealRandomAlly { amount: 120 },
            "Heals a random friendly unit by 120 each turn it's on the field",
        ),
        field_effect(
            "Reactor Overdrive",
            2200,
            CardType::Utility,
            Effect::Overdrive {
                factor: 1.25,
                backlash: 400,
            },
            "Boost your damage by 25% but deal 400 damage to your ship",
        ),
        special(
            "Lone Wolf",
            1000,
            6000,
            1600,
            CardType::Turret,
            Effect::LoneHunter,
            "Damage 6000 minus 2000 per other friendly card; HP 1000 minus 333 per other friendly card (min 1)",
        ),
        masochist,
        immediate(
            "Glass Cannon",
            900,
            Effect::ScaleBothMultipliers { factor: 3.0 },
            "Immediately triples both sides' damage multipliers",
        ),
    ]
}

static CATALOG: OnceLock<Vec<Card>> = OnceLock::new();
static NAME_INDEX: OnceLock<FxHashMap<&'static str, usize>> = OnceLock::new();

/// All card templates.
pub fn all() -> &'static [Card] {
    CATALOG.get_or_init(build_catalog).as_slice()
}

/// Look up a template by name.
pub fn find(name: &str) -> Option<&'static Card> {
    let index = NAME_INDEX.get_or_init(|| {
        all()
            .iter()
            .enumerate()
            .map(|(i, card)| (card.name.as_str(), i))
            .collect()
    });
    index.get(name).map(|&i| &all()[i])
}

/// The starting decklist: (card name, copies).
pub fn default_decklist() -> &'static [(&'static str, usize)] {
    &[
        ("Shield", 1),
        ("Turret", 2),
        ("Drone", 1),
        ("Mechanic", 1),
        ("Overheat Mk2", 1),
        ("Greed", 1),
        ("Bomb", 1),
        ("Bomb Mk2", 1),
        ("Fragile Lens", 1),
        ("Glass Cannon", 1),
    ]
}

/// Instantiate a deck from a (name, copies) list.
pub fn deck_from_list(entries: &[(&str, usize)]) -> Result<Vec<Card>> {
    let mut deck = Vec::new();
    for &(name, copies) in entries {
        let template = find(name).ok_or_else(|| EngineError::UnknownCard(name.to_string()))?;
        for _ in 0..copies {
            deck.push(template.fresh());
        }
    }
    if deck.is_empty() {
        return Err(EngineError::InvalidDeck("decklist produced no cards".to_string()));
    }
    Ok(deck)
}

/// Instantiate the default starting deck.
pub fn build_default_deck() -> Result<Vec<Card>> {
    deck_from_list(default_decklist())
}

/// Generate an opponent deck by drawing uniformly from the catalog until the
/// accumulated cost exceeds `cost_limit`.
pub fn generate_deck_with_cost(cost_limit: i32, rng: &mut impl Rng) -> Vec<Card> {
    let templates = all();
    let mut deck = Vec::new();
    if cost_limit <= 0 || templates.is_empty() {
        return deck;
    }

    let mut total_cost = 0;
    while total_cost <= cost_limit {
        let drawn = &templates[rng.gen_range(0..templates.len())];
        deck.push(drawn.fresh());
        total_cost += drawn.cost;
    }
    deck
}
