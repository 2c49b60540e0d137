use std::io;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use rand::Rng;
use sweeper_core::{GameConfig, PlayEngine};

use game::SessionEnd;
use settings::BoardSettings;

mod game;
mod input;
mod render;
mod settings;

#[derive(Parser, Debug)]
#[command(version, about = "Minesweeper in the terminal", long_about = None)]
struct Args {
    /// What log level to use
    #[command(flatten)]
    verbose: clap_verbosity_flag::Verbosity,

    /// TOML file with rows, columns, mines and seed, flags win over it
    #[arg(short, long)]
    config: Option<PathBuf>,

    #[command(flatten)]
    board: BoardSettings,
}

fn init_logging(verbose: &clap_verbosity_flag::Verbosity) -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(verbose.tracing_level_filter())
        .with_writer(io::stderr)
        .try_init()
        .map_err(|err| anyhow::anyhow!("could not initialize logger: {err}"))
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_logging(&args.verbose)?;

    let file_settings = match &args.config {
        Some(path) => BoardSettings::load(path)?,
        None => BoardSettings::default(),
    };
    let settings = args.board.or(file_settings);
    log::debug!("settings: {:?}", settings);

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut output = io::stdout().lock();

    let config = match settings.mines {
        Some(mines) => GameConfig::new(settings.size(), mines).context("invalid board settings")?,
        None => match game::ask_config(settings.size(), &mut input, &mut output)? {
            Some(config) => config,
            None => return Ok(()),
        },
    };
    let seed = settings.seed.unwrap_or_else(|| rand::rng().random());
    log::debug!("seed: {}", seed);

    let mut engine = PlayEngine::new(config, seed)?;
    let end = game::play(&mut engine, &mut input, &mut output)?;
    log::debug!("Session ended: {:?}", end);
    if end == SessionEnd::InputClosed {
        log::info!("Replay this field with --seed {}", seed);
    }
    Ok(())
}
