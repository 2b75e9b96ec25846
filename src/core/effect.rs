//! Card effect variants
//!
//! Effects are plain data attached to catalog entries; the behavior for each
//! variant lives in `game::effects`. Keeping the enum closure-free means card
//! templates stay serializable and value-copyable.

use serde::{Deserialize, Serialize};

/// What a card does when its effect is activated.
///
/// Board-bound activations (a card attacking from a slot) receive the slot
/// coordinates; immediate and field-effect activations do not.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Effect {
    /// Heal every live friendly unit.
    HealAllAllies { amount: i32 },
    /// Damage every live enemy unit.
    DamageAllEnemies { amount: i32 },
    /// Skip every second attack (fires on odd activations only).
    AlternatingFire,
    /// Destroy this card once it has been activated `uses` times.
    SelfDestructAfter { uses: u32 },
    /// After `uses` activations, blast one random enemy unit and self-destruct.
    BlastRandomEnemyAfter { uses: u32, damage: i32 },
    /// After `uses` activations, blast every enemy unit and self-destruct.
    BlastAllEnemiesAfter { uses: u32, damage: i32 },
    /// Draw extra cards from the owner's deck.
    DrawCards { count: usize },
    /// Damage all enemy units and the enemy ship.
    Bombardment { unit_damage: i32, ship_damage: i32 },
    /// Damage all enemy units, with collateral damage to friendly units.
    Shockwave { enemy_damage: i32, friendly_damage: i32 },
    /// End the attack phase for this turn.
    Ceasefire,
    /// Multiply the owner's damage multiplier.
    ScaleOwnMultiplier { factor: f64 },
    /// Multiply the enemy's damage multiplier.
    ScaleEnemyMultiplier { factor: f64 },
    /// Multiply both sides' damage multipliers.
    ScaleBothMultipliers { factor: f64 },
    /// Heal the owner's ship (no cap).
    HealOwnShip { amount: i32 },
    /// Heal the owner's ship and all friendly units.
    FieldRepair { ship_amount: i32, unit_amount: i32 },
    /// Deal direct damage to the enemy ship.
    StrikeEnemyShip { amount: i32 },
    /// Heal one random live friendly unit.
    HealRandomAlly { amount: i32 },
    /// Boost the owner's multiplier at the cost of ship damage.
    Overdrive { factor: f64, backlash: i32 },
    /// Recompute own stats from the number of other live friendly cards.
    LoneHunter,
}
