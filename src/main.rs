//! Headless Tile Rise runner (default binary).
//!
//! Plays one or more sessions with an autoplay policy and prints a summary.
//! Board settings come from tile-rise.toml / `TILE_RISE_*` variables; logging from `RUST_LOG`.

use anyhow::{Context, Result};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use tile_rise::autoplay::{run_session, SessionReport};
use tile_rise::cli::{parse_run_args, summary_lines, RunArgs};
use tile_rise::config::load_config;
use tile_rise::core::{EngineConfig, GridEngine};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("tile_rise=info,tile_rise_autoplay=info")),
        )
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let run = parse_run_args(&args)?;

    let mut config = load_config();
    if let Some(seed) = run.seed {
        config.use_fixed_seed = true;
        config.seed = seed;
    }
    info!(
        "Board {}x{} (out zone {}), values {}..={}, rise every {} moves",
        config.width,
        config.height,
        config.out_zone_rows,
        config.min_value,
        config.max_value,
        config.rise_interval
    );

    let reports = play(&config, &run)?;
    for line in summary_lines(&reports) {
        println!("{}", line);
    }
    Ok(())
}

fn build_engine(config: EngineConfig) -> Result<GridEngine> {
    let mut engine = GridEngine::new(config).context("invalid engine configuration")?;
    engine.on_game_over(|score| debug!("Game over notification, final score {}", score));
    Ok(engine)
}

fn play(config: &EngineConfig, run: &RunArgs) -> Result<Vec<SessionReport>> {
    let mut reports = Vec::with_capacity(run.games as usize);
    let mut engine = build_engine(config.clone())?;

    for game in 0..run.games {
        if game > 0 {
            if config.use_fixed_seed {
                // A fixed seed replays the same session on every reset, so step it per game.
                let next = EngineConfig {
                    seed: config.seed.wrapping_add(game),
                    ..config.clone()
                };
                engine = build_engine(next)?;
            } else {
                engine.new_game();
            }
        }

        let mut policy = run.policy.build(engine.seed().wrapping_add(1));
        let report = run_session(&mut engine, policy.as_mut(), run.max_moves);
        println!(
            "game {} seed {} score {} moves {} ({})",
            game + 1,
            report.seed,
            report.score,
            report.moves,
            report.stop
        );
        reports.push(report);
    }
    Ok(reports)
}
