use anyhow::Context;
use rand::rngs::SmallRng;
use rand::SeedableRng;
use serde::Serialize;

use seabattle::{init_logging, AiPlayer, Game, GameConfig, GenerateError, Side};

#[derive(Debug, Default, Serialize)]
struct Summary {
    seed: u64,
    games: usize,
    user_wins: usize,
    ai_wins: usize,
    setup_failures: usize,
    average_turns: f64,
}

/// Play `games` computer-vs-computer games and report the outcomes as JSON.
/// Each game gets a single board attempt per side, so `setup_failures`
/// measures how often fleet placement runs out of attempts.
fn main() -> anyhow::Result<()> {
    init_logging();
    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 || args.len() > 3 {
        eprintln!("Usage: {} <seed> [games]", args[0]);
        std::process::exit(1);
    }
    let seed: u64 = args[1].parse().context("seed must be an integer")?;
    let games: usize = match args.get(2) {
        Some(n) => n.parse().context("games must be an integer")?,
        None => 1,
    };

    let config = GameConfig::default();
    let mut summary = Summary {
        seed,
        games,
        ..Summary::default()
    };
    let mut total_turns = 0;
    for i in 0..games {
        let rng = SmallRng::seed_from_u64(seed.wrapping_add(i as u64));
        let game = Game::new(
            &config,
            rng,
            1,
            Box::new(AiPlayer::new()),
            Box::new(AiPlayer::new()),
        );
        let mut game = match game {
            Ok(game) => game,
            Err(GenerateError::AttemptsExhausted { .. }) => {
                summary.setup_failures += 1;
                continue;
            }
            Err(e) => return Err(e).context("invalid game configuration"),
        };
        match game.run(|_, _| {})? {
            Side::User => summary.user_wins += 1,
            Side::Ai => summary.ai_wins += 1,
        }
        total_turns += game.turn();
    }
    let played = summary.user_wins + summary.ai_wins;
    if played > 0 {
        summary.average_turns = total_turns as f64 / played as f64;
    }

    println!("{}", serde_json::to_string(&summary)?);
    Ok(())
}
