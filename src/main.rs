use std::io;

use anyhow::Context;
use clap::Parser;
use rand::rngs::SmallRng;
use rand::SeedableRng;

use seabattle::{
    init_logging, ui, AiPlayer, CliPlayer, Game, GameConfig, Player, PlayerError, Side,
    BOARD_SIZE,
};

/// Whole boards tried per side before setup is abandoned.
const BOARD_ROUNDS: usize = 20;

#[derive(Parser)]
#[command(author, version, about = "Sea battle against the computer", long_about = None)]
struct Cli {
    #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
    seed: Option<u64>,
    /// Cells per side of each board.
    #[arg(long, default_value_t = BOARD_SIZE as u8, value_parser = clap::value_parser!(u8).range(6..=9))]
    size: u8,
    /// Let the computer play both sides.
    #[arg(long)]
    autoplay: bool,
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    if let Some(s) = cli.seed {
        println!("Using fixed seed: {} (game will be reproducible)", s);
    }
    let rng = match cli.seed {
        Some(s) => SmallRng::seed_from_u64(s),
        None => SmallRng::from_rng(&mut rand::rng()),
    };
    let config = GameConfig::with_size(usize::from(cli.size));

    let user: Box<dyn Player> = if cli.autoplay {
        Box::new(AiPlayer::new())
    } else {
        Box::new(CliPlayer::new(io::stdin().lock(), io::stdout()))
    };
    let mut game = Game::new(&config, rng, BOARD_ROUNDS, user, Box::new(AiPlayer::new()))
        .context("failed to set up the boards, please restart the game")?;

    ui::print_greeting(config.size);
    let result = game.run(|game, turn| match turn {
        None => {
            println!();
            ui::print_boards(game.user_board(), game.ai_board());
            println!(
                "\n{} to move",
                match game.current_side() {
                    Side::User => "You are",
                    Side::Ai => "The computer is",
                }
            );
        }
        // the interactive player reports its own shots
        Some(turn) if turn.side == Side::Ai || cli.autoplay => {
            println!("{}", ui::describe_turn(turn));
        }
        Some(_) => {}
    });

    match result {
        Ok(winner) => {
            println!();
            ui::print_boards(game.user_board(), game.ai_board());
            println!("\n{}", ui::winner_message(winner));
            Ok(())
        }
        Err(PlayerError::InputClosed) => {
            println!("Input closed, leaving the game.");
            Ok(())
        }
        Err(e) => Err(e).context("game aborted"),
    }
}
