//! Post-victory reward selection

use crate::catalog;
use crate::core::Card;
use crate::game::state::BattleState;
use rand::seq::SliceRandom;
use rand::Rng;

/// How many reward cards one victory offers.
pub const REWARD_OFFER_COUNT: usize = 3;
/// The reward pool keeps only this many of the highest-cost eligible cards.
pub const REWARD_POOL_CAP: usize = 10;

/// Build a reward offer from `templates`: cards cheaper than `difficulty`,
/// highest-cost `REWARD_POOL_CAP` of them, shuffled, first `count` taken.
/// Empty when nothing qualifies.
pub fn pick_reward_cards(templates: &[Card], difficulty: i32, count: usize, rng: &mut impl Rng) -> Vec<Card> {
    let mut pool: Vec<&Card> = templates.iter().filter(|card| card.cost < difficulty).collect();
    if pool.is_empty() {
        return Vec::new();
    }
    pool.sort_by(|a, b| b.cost.cmp(&a.cost));
    pool.truncate(REWARD_POOL_CAP);
    pool.shuffle(rng);
    pool.into_iter().take(count).map(|card| card.fresh()).collect()
}

/// Populate the reward offer the first time a won battle asks for one.
/// A no-op once an offer exists or a reward was already taken.
pub(crate) fn refresh_reward_offer(state: &mut BattleState) {
    if state.rewards.added || !state.rewards.options.is_empty() {
        return;
    }
    let difficulty = state.difficulty;
    let offer = {
        let mut rng = state.rng.borrow_mut();
        pick_reward_cards(catalog::all(), difficulty, REWARD_OFFER_COUNT, &mut *rng)
    };
    if offer.is_empty() {
        // Nothing qualifies at this difficulty. Mark the offer settled so the
        // battle reports "no rewards" instead of reselecting every tick.
        state.rewards.added = true;
        return;
    }
    state.log.push(format!("Victory: {} reward cards offered", offer.len()));
    state.rewards.options.extend(offer);
}

/// Take the reward at `index`, appending a fresh copy to both the battle-local
/// deck and the caller's persistent deck. Idempotent after the first pick;
/// out-of-range indices are rejected. Returns whether a card was added.
pub fn choose_reward(state: &mut BattleState, index: usize, persistent_deck: &mut Vec<Card>) -> bool {
    if state.rewards.added {
        return false;
    }
    let Some(card) = state.rewards.options.get(index) else {
        return false;
    };
    let chosen = card.fresh();
    state.log.push(format!("Reward chosen: {}", chosen.name));
    persistent_deck.push(chosen.fresh());
    state.player.deck.push(chosen.clone());
    state.rewards.chosen = Some(chosen);
    state.rewards.added = true;
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::CardType;
    use rand::SeedableRng;
    use rand_chacha::ChaCha12Rng;

    fn priced(name: &str, cost: i32) -> Card {
        Card::new(name, 100, 10, cost, CardType::Drone)
    }

    #[test]
    fn test_only_cheaper_cards_qualify() {
        let templates = vec![priced("Cheap", 50), priced("Exact", 100), priced("Rich", 200)];
        let mut rng = ChaCha12Rng::seed_from_u64(1);
        let offer = pick_reward_cards(&templates, 100, 3, &mut rng);
        assert_eq!(offer.len(), 1);
        assert_eq!(offer[0].name, "Cheap");
    }

    #[test]
    fn test_empty_pool_when_nothing_qualifies() {
        let templates = vec![priced("Rich", 500)];
        let mut rng = ChaCha12Rng::seed_from_u64(1);
        assert!(pick_reward_cards(&templates, 100, 3, &mut rng).is_empty());
    }

    #[test]
    fn test_pool_capped_to_ten_highest_cost() {
        let templates: Vec<Card> = (0..50).map(|i| priced(&format!("C{i}"), 10 + i)).collect();
        let mut rng = ChaCha12Rng::seed_from_u64(5);
        let offer = pick_reward_cards(&templates, 1000, 3, &mut rng);
        assert_eq!(offer.len(), 3);
        // The 10 highest costs are 50..59, i.e. C40..C49.
        for card in &offer {
            assert!(card.cost >= 50, "offered {} outside capped pool", card.name);
        }
    }

    #[test]
    fn test_offer_smaller_than_requested() {
        let templates = vec![priced("A", 10), priced("B", 20)];
        let mut rng = ChaCha12Rng::seed_from_u64(2);
        assert_eq!(pick_reward_cards(&templates, 100, 3, &mut rng).len(), 2);
    }

    #[test]
    fn test_choose_reward_once() {
        let mut state = BattleState::with_decks(&[], &[], 500, 11);
        state.rewards.options.push(priced("Prize", 40));
        let mut persistent = Vec::new();

        assert!(choose_reward(&mut state, 0, &mut persistent));
        assert_eq!(persistent.len(), 1);
        assert_eq!(state.player.deck.last().unwrap().name, "Prize");
        assert_eq!(state.rewards.chosen.as_ref().unwrap().name, "Prize");

        // Second pick is ignored.
        assert!(!choose_reward(&mut state, 0, &mut persistent));
        assert_eq!(persistent.len(), 1);
    }

    #[test]
    fn test_choose_reward_rejects_bad_index() {
        let mut state = BattleState::with_decks(&[], &[], 500, 11);
        state.rewards.options.push(priced("Prize", 40));
        let mut persistent = Vec::new();
        assert!(!choose_reward(&mut state, 5, &mut persistent));
        assert!(!state.rewards.added);
    }

    #[test]
    fn test_refresh_marks_empty_offer_settled() {
        // Difficulty 1: no catalog card costs less than 1.
        let mut state = BattleState::with_decks(&[], &[], 1, 11);
        refresh_reward_offer(&mut state);
        assert!(state.rewards.options.is_empty());
        assert!(state.rewards.added);

        refresh_reward_offer(&mut state);
        assert!(state.rewards.options.is_empty());
    }

    #[test]
    fn test_refresh_is_lazy_and_single_shot() {
        let mut state = BattleState::with_decks(&[], &[], 500, 11);
        refresh_reward_offer(&mut state);
        let first: Vec<String> = state.rewards.options.iter().map(|c| c.name.clone()).collect();
        assert!(!first.is_empty());

        refresh_reward_offer(&mut state);
        let second: Vec<String> = state.rewards.options.iter().map(|c| c.name.clone()).collect();
        assert_eq!(first, second);
    }
}
