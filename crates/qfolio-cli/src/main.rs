//! qfolio command-line interface.
//!
//! QAOA portfolio selection on a simulated quantum register: compile a
//! portfolio to QUBO/Ising form, sample the ansatz, and report the best
//! asset subset found.

use clap::{Parser, Subcommand};
use console::style;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

mod commands;

use commands::{optimize, sample, tune};

/// qfolio - QAOA portfolio selection on a simulated quantum register
#[derive(Parser)]
#[command(name = "qfolio")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Optimize a portfolio with given or randomly drawn angles
    Optimize {
        /// Portfolio JSON file
        #[arg(short, long)]
        input: String,

        /// Number of QAOA layers
        #[arg(short, long, default_value = "1")]
        layers: usize,

        /// Number of measurement shots
        #[arg(short, long, default_value = "100")]
        samples: usize,

        /// Mixer angles, comma-separated (drawn uniformly from [0, π] if omitted)
        #[arg(long, value_delimiter = ',')]
        betas: Option<Vec<f64>>,

        /// Cost angles, comma-separated (drawn uniformly from [0, 2π] if omitted)
        #[arg(long, value_delimiter = ',')]
        gammas: Option<Vec<f64>>,

        /// Seed for reproducible runs
        #[arg(long)]
        seed: Option<u64>,

        /// Write the result as JSON to this file
        #[arg(short, long)]
        output: Option<String>,
    },

    /// Grid-search QAOA angles, then optimize with the winners
    Tune {
        /// Portfolio JSON file
        #[arg(short, long)]
        input: String,

        /// Number of QAOA layers
        #[arg(short, long, default_value = "1")]
        layers: usize,

        /// Angle grid resolution per axis
        #[arg(short, long, default_value = "4")]
        grid_size: usize,

        /// Number of measurement shots per grid cell
        #[arg(short, long, default_value = "50")]
        samples: usize,

        /// Seed for reproducible runs
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Generate a demo portfolio JSON file
    Sample {
        /// Number of assets
        #[arg(short, long, default_value = "4")]
        assets: usize,

        /// Output file (stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,

        /// Seed for reproducible data
        #[arg(long)]
        seed: Option<u64>,
    },
}

impl Commands {
    fn run(self) -> anyhow::Result<()> {
        match self {
            Commands::Optimize {
                input,
                layers,
                samples,
                betas,
                gammas,
                seed,
                output,
            } => optimize::execute(
                &input,
                layers,
                samples,
                betas,
                gammas,
                seed,
                output.as_deref(),
            ),
            Commands::Tune {
                input,
                layers,
                grid_size,
                samples,
                seed,
            } => tune::execute(&input, layers, grid_size, samples, seed),
            Commands::Sample {
                assets,
                output,
                seed,
            } => sample::execute(assets, output.as_deref(), seed),
        }
    }
}

/// Map `-v` repetitions onto a log filter; `RUST_LOG` is not consulted.
fn init_logging(verbose: u8) {
    const LEVELS: [&str; 4] = ["warn", "info", "debug", "trace"];
    let directive = LEVELS[usize::from(verbose).min(LEVELS.len() - 1)];
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(directive))
        .with_target(false)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command.run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{} {err:#}", style("error:").red().bold());
            ExitCode::FAILURE
        }
    }
}
