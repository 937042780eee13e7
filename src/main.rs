use std::path::PathBuf;

use clap::Parser;
use env_logger::TimestampPrecision;
use log::{info, LevelFilter};
use thiserror::Error;

use rubik_sim::{DriverConfig, NetRenderer, PseudoSolver};

/// Scramble a cube, run the random-move pseudo-solver, print every step.
#[derive(Parser)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Driver configuration file, in TOML format.
    #[arg(long, short = 'c')]
    config: Option<PathBuf>,

    /// Random seed (overrides the config file).
    #[arg(long, short = 's')]
    seed: Option<u64>,

    /// Number of scramble moves (overrides the config file).
    #[arg(long)]
    scramble_moves: Option<usize>,

    /// Maximum solve steps (overrides the config file).
    #[arg(long)]
    max_steps: Option<usize>,

    /// Print plain symbols without ANSI colors.
    #[arg(long)]
    no_color: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Debug, Error)]
enum CliError {
    #[error("failed to read config file {path}: {source}")]
    ReadConfig {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config file {path}: {source}")]
    ParseConfig {
        path: PathBuf,
        source: toml::de::Error,
    },
}

fn load_config(cli: &Cli) -> Result<DriverConfig, CliError> {
    let mut config = match &cli.config {
        Some(path) => {
            let text = std::fs::read_to_string(path).map_err(|source| CliError::ReadConfig {
                path: path.clone(),
                source,
            })?;
            toml::from_str(&text).map_err(|source| CliError::ParseConfig {
                path: path.clone(),
                source,
            })?
        }
        None => DriverConfig::default(),
    };

    if let Some(seed) = cli.seed {
        config = config.with_seed(seed);
    }
    if let Some(moves) = cli.scramble_moves {
        config = config.with_scramble_moves(moves);
    }
    if let Some(steps) = cli.max_steps {
        config = config.with_max_steps(steps);
    }
    Ok(config)
}

fn main() -> Result<(), CliError> {
    let cli = Cli::parse();

    env_logger::Builder::new()
        .filter_level(match cli.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        })
        .format_timestamp(Some(TimestampPrecision::Millis))
        .init();

    let config = load_config(&cli)?;
    info!("using {config:?}");

    let trajectory = PseudoSolver::new(config).run();
    let renderer = NetRenderer::new().colored(!cli.no_color);

    println!("Scramble: {}", trajectory.scramble);
    println!();
    print!("{}", renderer.render_trajectory(&trajectory));

    if trajectory.solved {
        println!("Solved after {} steps", trajectory.move_count());
    } else {
        println!("Not solved after {} steps", trajectory.move_count());
    }
    Ok(())
}
