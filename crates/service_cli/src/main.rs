//! Rambo CLI - Command Line Driver for Phase-Space Generation
//!
//! This is the operational entry point for the RAMBO phase-space generator.
//! It is the external caller of the generation kernel: it chooses the run
//! parameters, invokes the generator, and performs its own downstream
//! reduction (a conservation-residual summary) on the flat buffer.
//!
//! # Commands
//!
//! - `rambo generate` - Generate phase-space points and report diagnostics
//! - `rambo check` - Verify kernel invariants on a small fixed run

use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod error;

pub use error::{CliError, Result};

/// RAMBO phase-space generator CLI
#[derive(Parser)]
#[command(name = "rambo")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate phase-space points and report summary diagnostics
    Generate {
        /// Centre-of-mass energy of the colliding beams
        #[arg(short, long, default_value = "100")]
        ecms: f64,

        /// Number of events to generate
        #[arg(short = 'n', long, default_value = "1000")]
        points: usize,

        /// Number of output particles per event
        #[arg(short = 'o', long, default_value = "4")]
        n_out: usize,

        /// Seed for reproducible generation (selects the sequential seeded
        /// policy; omit for parallel per-worker sampling)
        #[arg(short, long)]
        seed: Option<u64>,

        /// Number of worker threads for the per-worker policy (default: all cores)
        #[arg(short, long)]
        threads: Option<usize>,
    },

    /// Verify kernel invariants on a small fixed run
    Check,
}

fn main() -> Result<()> {
    // Initialise tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    if cli.verbose {
        info!("Verbose mode enabled");
    }

    match cli.command {
        Commands::Generate {
            ecms,
            points,
            n_out,
            seed,
            threads,
        } => commands::generate::run(ecms, points, n_out, seed, threads),
        Commands::Check => commands::check::run(),
    }
}
