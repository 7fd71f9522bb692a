//! CLI frontend for the malady condition engine.

mod commands;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "malady",
    about = "Malady: run status-effect scenarios and browse the condition catalog",
    version,
    propagate_version = true
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a scenario file tick by tick
    Simulate {
        /// Path to a JSON scenario
        scenario: PathBuf,

        /// Number of ticks to simulate
        #[arg(short, long, default_value = "100")]
        ticks: u64,

        /// RNG seed, overriding the scenario's own
        #[arg(short, long)]
        seed: Option<u64>,

        /// Show every event, not just the notable ones
        #[arg(short, long)]
        verbose: bool,
    },

    /// List every condition kind the engine knows
    Catalog {
        /// Only show kinds whose key or name contains this text
        filter: Option<String>,
    },

    /// Show how one condition reads at a given duration and intensity
    Inspect {
        /// Condition key (e.g. bite, drunk, sleep)
        kind: String,

        /// Remaining duration
        #[arg(short, long, default_value = "100")]
        duration: i32,

        /// Intensity
        #[arg(short, long, default_value = "1")]
        intensity: i32,

        /// Body region key (e.g. arm_l, torso)
        #[arg(short, long)]
        region: Option<String>,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Simulate {
            scenario,
            ticks,
            seed,
            verbose,
        } => commands::simulate::run(&scenario, ticks, seed, verbose),
        Commands::Catalog { filter } => commands::catalog::run(filter.as_deref()),
        Commands::Inspect {
            kind,
            duration,
            intensity,
            region,
        } => commands::inspect::run(&kind, duration, intensity, region.as_deref()),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
