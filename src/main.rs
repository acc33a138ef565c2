#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use sinkfloat::{
    init_logging, Bell, Difficulty, GameConfig, GameEngine, GameStatus, Muted, Session,
    SessionOptions, Sound, DEFAULT_POLL_MS,
};

#[cfg(feature = "std")]
use clap::Parser;
#[cfg(feature = "std")]
use rand::rngs::SmallRng;
#[cfg(feature = "std")]
use std::io::Write;
#[cfg(feature = "std")]
use rand::SeedableRng;
#[cfg(feature = "std")]
use tokio::io::BufReader;
#[cfg(feature = "std")]
use tokio::time::Duration;

/// Find the hidden fleet before your attempts run out.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    /// Skip the menu and play this preset.
    #[arg(long, value_enum, conflicts_with = "rows")]
    difficulty: Option<Difficulty>,
    /// Custom board rows (requires --cols, --boats and --attempts).
    #[arg(long, requires = "cols")]
    rows: Option<usize>,
    #[arg(long, requires = "boats")]
    cols: Option<usize>,
    #[arg(long, requires = "attempts")]
    boats: Option<usize>,
    #[arg(long, requires = "rows")]
    attempts: Option<u32>,
    #[arg(long, help = "Fix RNG seed for reproducible boards (e.g., --seed 12345)")]
    seed: Option<u64>,
    /// Interval between end-of-game checks.
    #[arg(long, default_value_t = DEFAULT_POLL_MS)]
    poll_ms: u64,
    /// Disable the terminal bell.
    #[arg(long)]
    mute: bool,
    /// Keep unsunk ships hidden when the game ends.
    #[arg(long)]
    no_reveal: bool,
}

#[cfg(feature = "std")]
impl Cli {
    fn custom_config(&self) -> Option<GameConfig> {
        Some(GameConfig::new(
            self.rows?,
            self.cols?,
            self.boats?,
            self.attempts?,
        ))
    }
}

#[cfg(feature = "std")]
#[tokio::main]
async fn main() {
    init_logging();
    let cli = Cli::parse();
    let code = match run(cli).await {
        Ok(()) => 0,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            1
        }
    };
    let _ = std::io::stdout().flush();
    // tokio's stdin reader blocks runtime shutdown until another line arrives,
    // so every path out of the game leaves through here
    std::process::exit(code);
}

#[cfg(feature = "std")]
async fn run(cli: Cli) -> anyhow::Result<()> {
    let options = SessionOptions {
        poll_interval: Duration::from_millis(cli.poll_ms.max(1)),
        reveal_on_end: !cli.no_reveal,
    };
    let sound: Box<dyn Sound> = if cli.mute {
        Box::new(Muted)
    } else {
        Box::new(Bell::new(std::io::stderr()))
    };
    let mut session = Session::new(
        BufReader::new(tokio::io::stdin()),
        std::io::stdout(),
        sound,
        options,
    );

    let config = if let Some(config) = cli.custom_config() {
        config
    } else if let Some(d) = cli.difficulty {
        d.config()
    } else {
        match session.choose_difficulty().await? {
            Some(d) => d.config(),
            None => return Ok(()),
        }
    };
    config.validate()?;

    if let Some(s) = cli.seed {
        writeln!(
            std::io::stdout(),
            "Using fixed seed: {} (board will be reproducible)",
            s
        )?;
    }
    let mut rng = if let Some(s) = cli.seed {
        SmallRng::seed_from_u64(s)
    } else {
        let mut seed_rng = rand::rng();
        SmallRng::from_rng(&mut seed_rng)
    };

    let mut engine = GameEngine::new(config, &mut rng)?;
    writeln!(
        std::io::stdout(),
        "Sink the fleet! {} ships hidden on a {}x{} board, {} attempts.",
        config.boats,
        config.rows,
        config.cols,
        config.attempts
    )?;
    let outcome = session.play(&mut engine).await?;
    if outcome.status == GameStatus::InProgress {
        log::info!("player left after {} shots", outcome.shots);
    }
    Ok(())
}
