//! Console client entry point.
mod app;
mod render;

use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result, bail};
use clap::Parser;
use dicebound_content::moon_elf;
use dicebound_core::{Combatant, Engine, GameConfig, PcgRng};

/// Dice-driven duel in the terminal.
#[derive(Debug, Parser)]
#[command(name = "dicebound", about = "Turn-based dice duel in the terminal")]
struct Cli {
    /// RNG seed; derived from the clock when omitted.
    #[arg(long)]
    seed: Option<u64>,

    /// Flavor-text banner printed at startup (missing file is tolerated).
    #[arg(long, default_value = "crates/client/assets/banner.txt")]
    banner: PathBuf,

    /// RON hero catalog; the first two entries fight. Defaults to the
    /// built-in Moon Elf mirror match.
    #[arg(long)]
    heroes: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    setup_logging();

    let config = GameConfig::new();
    let seed = cli.seed.unwrap_or_else(clock_seed);
    tracing::info!(seed, "starting duel");

    let (first, second) = load_heroes(&cli, &config)?;
    let engine = Engine::duel(
        config,
        first,
        second,
        Box::new(PcgRng::seed_from_u64(seed)),
        Box::new(app::PromptDecisions),
    );

    app::run(engine, &cli.banner)
}

fn load_heroes(cli: &Cli, config: &GameConfig) -> Result<(Combatant, Combatant)> {
    match &cli.heroes {
        Some(path) => {
            let mut heroes = dicebound_content::HeroLoader::load(path, config)?;
            if heroes.len() < 2 {
                bail!(
                    "hero catalog {} holds {} hero(es), need at least 2",
                    path.display(),
                    heroes.len()
                );
            }
            let second = heroes.swap_remove(1);
            let first = heroes.swap_remove(0);
            Ok((first, second))
        }
        None => {
            let first = moon_elf("Good Moon Elf", config).context("building Moon Elf kit")?;
            let second = moon_elf("Evil Moon Elf", config).context("building Moon Elf kit")?;
            Ok((first, second))
        }
    }
}

/// Diagnostics go to stderr behind `RUST_LOG`; stdout stays clean for the
/// game text.
fn setup_logging() {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0x5eed)
}
