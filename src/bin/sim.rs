use clap::Parser;
use rand::{rngs::SmallRng, SeedableRng};
use serde::Serialize;
use sinkfloat::{init_logging, play_out, Difficulty, GameEngine, GameStatus, RandomPlayer};

/// Play many games with a random shooter and print a JSON summary.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[arg(long, value_enum, default_value_t = Difficulty::Normal)]
    difficulty: Difficulty,
    #[arg(long, default_value_t = 100)]
    games: usize,
    #[arg(long, default_value_t = 0)]
    seed: u64,
}

#[derive(Serialize)]
struct Summary {
    difficulty: Difficulty,
    games: usize,
    wins: usize,
    losses: usize,
    win_rate: f64,
    mean_shots: f64,
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let args = Args::parse();
    let mut rng = SmallRng::seed_from_u64(args.seed);

    let (mut wins, mut losses, mut shots) = (0, 0, 0);
    for _ in 0..args.games {
        let mut engine = GameEngine::new(args.difficulty.config(), &mut rng)?;
        let mut player = RandomPlayer::new();
        match play_out(&mut engine, &mut player, &mut rng)? {
            GameStatus::Won => wins += 1,
            GameStatus::Lost => losses += 1,
            GameStatus::InProgress => {}
        }
        shots += engine.shots_fired();
    }

    let per_game = |n: usize| {
        if args.games == 0 {
            0.0
        } else {
            n as f64 / args.games as f64
        }
    };
    let summary = Summary {
        difficulty: args.difficulty,
        games: args.games,
        wins,
        losses,
        win_rate: per_game(wins),
        mean_shots: per_game(shots),
    };
    println!("{}", serde_json::to_string(&summary)?);
    Ok(())
}
