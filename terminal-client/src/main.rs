mod input;
mod render;

use clap::Parser;
use tokio::sync::mpsc;

use render::TerminalRenderer;
use snake_engine::{FileScoreStore, GameRng, GameSession, GameSettings, log, logger};

#[derive(Parser)]
#[command(name = "snake_terminal")]
struct Args {
    /// YAML settings file; missing file means defaults.
    #[arg(long, default_value = "snake.yaml")]
    config: String,

    /// File holding the best score across sessions.
    #[arg(long, default_value = "snake_high_score.txt")]
    high_score_file: String,

    /// Log destination; the grid owns stdout while the game runs.
    #[arg(long, default_value = "snake.log")]
    log_file: String,

    /// Fixed RNG seed for reproducible food placement.
    #[arg(long)]
    seed: Option<u64>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    logger::init_file_logger(&args.log_file, None)?;

    let settings = GameSettings::load_from_yaml_file(&args.config)?;
    let rng = match args.seed {
        Some(seed) => GameRng::new(seed),
        None => GameRng::from_random(),
    };
    log!(
        "Starting game: grid {}x{}, tick {}ms, rng seed {}",
        settings.grid_size,
        settings.grid_size,
        settings.tick_interval_ms,
        rng.seed()
    );

    let store = FileScoreStore::new(args.high_score_file);
    let renderer = TerminalRenderer::new()?;

    let (sender, receiver) = mpsc::unbounded_channel();
    input::spawn_input_thread(sender);

    GameSession::new(&settings, store, renderer, rng)
        .run(receiver)
        .await;

    log!("Session ended");
    Ok(())
}
