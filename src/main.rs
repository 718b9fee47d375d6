#![warn(clippy::all)]

use anyhow::{ensure, Result};
use clap::Parser;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use torus_life::{Config, EngineConfig, FrameLimiter, LifeEngine, Pattern};
use tracing::info;

/// Runs Conway's Game of Life on a toroidal grid without a window.
#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[arg(long, default_value_t = Config::DEFAULT_WIDTH)]
    width: usize,

    #[arg(long, default_value_t = Config::DEFAULT_HEIGHT)]
    height: usize,

    /// Seconds between generations.
    #[arg(long, default_value_t = Config::DEFAULT_INTERVAL)]
    interval: f64,

    /// Seed for the random initial board; random when omitted.
    #[arg(long)]
    seed: Option<u64>,

    /// Start from a single pattern at the centre instead of a random board.
    #[arg(long, value_name = "block|beehive|blinker|toad|glider")]
    pattern: Option<Pattern>,

    /// Stop after this many generations.
    #[arg(long, default_value_t = 100)]
    generations: u64,

    #[arg(long, default_value_t = Config::MAX_FPS)]
    max_fps: f64,

    /// Print the final board to stdout.
    #[arg(long)]
    print: bool,
}

fn main() -> Result<()> {
    init_tracing();
    let args = Args::parse();
    ensure!(
        args.width >= 1 && args.height >= 1,
        "grid dimensions must be positive, got {}x{}",
        args.width,
        args.height
    );

    let mut engine = LifeEngine::with_config(EngineConfig {
        width: args.width,
        height: args.height,
        interval: args.interval,
    });
    if engine.current_speed() != args.interval {
        info!(
            requested = args.interval,
            applied = engine.current_speed(),
            "tick interval out of range"
        );
    }
    seed_board(&mut engine, &args)?;
    info!(
        width = args.width,
        height = args.height,
        population = engine.population(),
        "starting simulation"
    );

    let mut limiter = FrameLimiter::new(args.max_fps);
    engine.toggle_run();
    while engine.generation() < args.generations {
        if engine.advance_frame(limiter.now()) {
            info!(
                generation = engine.generation(),
                population = engine.population(),
                fps = limiter.fps(),
                "generation"
            );
        }
        limiter.delay();
    }
    engine.toggle_run();

    if args.print {
        print!("{}", engine.grid());
    }
    Ok(())
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();
}

fn seed_board(engine: &mut LifeEngine, args: &Args) -> Result<()> {
    match args.pattern {
        Some(pattern) => {
            let (pw, ph) = pattern.size();
            let x = args.width.saturating_sub(pw) / 2;
            let y = args.height.saturating_sub(ph) / 2;
            engine.stamp(pattern, x, y)?;
        }
        None => {
            let mut rng = match args.seed {
                Some(seed) => ChaCha8Rng::seed_from_u64(seed),
                None => ChaCha8Rng::from_entropy(),
            };
            engine.randomize_all(&mut rng);
        }
    }
    Ok(())
}
