//! voidfleet - headless battle simulator
//!
//! Runs one full battle with a scripted first-fit player against the
//! generated opponent deck and prints a result summary. Mostly a driver for
//! eyeballing balance changes and for reproducibility checks: the same seed
//! always produces the same battle.

use clap::Parser;
use voidfleet::catalog;
use voidfleet::game::actions;
use voidfleet::game::state::BattleState;
use voidfleet::Outcome;

/// Synthetic frame interval driving the animation sequencer.
const TICK_SECS: f64 = 0.05;

#[derive(Parser)]
#[command(name = "voidfleet")]
#[command(about = "Card battle simulator", long_about = None)]
struct Cli {
    /// RNG seed; omit for a wall-clock seed
    #[arg(long)]
    seed: Option<u64>,

    /// Battle difficulty (scales the opponent deck budget and reward pool)
    #[arg(long, default_value_t = 500)]
    difficulty: i32,

    /// Give up after this many turns
    #[arg(long, default_value_t = 100)]
    max_turns: usize,

    /// Print the full action log after the battle
    #[arg(long, short)]
    verbose: bool,

    /// Print the final battle state as JSON
    #[arg(long)]
    dump_state: bool,
}

/// First-fit player policy: queue every immediate in hand, then place each
/// remaining card into the first empty slot until the board or hand runs out.
fn play_hand(state: &mut BattleState) {
    loop {
        let immediate = state
            .player
            .hand
            .iter()
            .position(|c| c.kind == voidfleet::core::CardKind::Immediate);
        match immediate {
            Some(i) => {
                actions::queue_immediate(state, i);
            }
            None => break,
        }
    }
    while !state.player.hand.is_empty() {
        let Some((row, col)) = state.player.first_empty_slot() else {
            break;
        };
        if !actions::place_card(state, 0, row, col) {
            break;
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let seed = cli.seed.unwrap_or_else(|| {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or(0)
    });

    let mut persistent_deck = catalog::build_default_deck()?;
    let mut state = BattleState::new(&persistent_deck, cli.difficulty, seed);

    let mut now = 0.0;
    let mut turns = 0;
    while turns < cli.max_turns && !state.outcome().is_terminal() {
        play_hand(&mut state);
        state.end_turn(now);
        turns += 1;
        while state.is_animating() {
            now += TICK_SECS;
            state.tick(now);
        }
        // One settled tick so a victory detected mid-animation still
        // refreshes the reward offer.
        state.tick(now);
    }

    let outcome = state.outcome();
    println!("seed: {seed}");
    println!("difficulty: {}", cli.difficulty);
    println!("turns: {turns}");
    println!("outcome: {outcome:?}");
    println!("player ship: {}", state.player.hp);
    println!("opponent ship: {}", state.opponent.hp);

    if outcome == Outcome::Victory {
        let offered: Vec<&str> = state.rewards.options.iter().map(|c| c.name.as_str()).collect();
        println!("rewards offered: {offered:?}");
        if voidfleet::game::rewards::choose_reward(&mut state, 0, &mut persistent_deck) {
            let chosen = state.rewards.chosen.as_ref().map(|c| c.name.as_str()).unwrap_or("");
            println!("reward chosen: {chosen}");
        }
    }

    if cli.verbose {
        println!("--- action log ---");
        for line in state.log.iter() {
            println!("{line}");
        }
    }

    if cli.dump_state {
        println!("{}", state.to_json()?);
    }

    Ok(())
}
