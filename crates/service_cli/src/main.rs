//! bsval - Black-Scholes Valuation CLI
//!
//! Command-line entry point for the Black-Scholes pricing engine and its
//! verification harness.
//!
//! # Commands
//!
//! - `bsval price` - Price a European option (defaults to S=K=100, T=1, r=0.05, σ=0.2 call)
//! - `bsval verify` - Run the monotonicity, diversity and fuzzing checks
//!
//! Exit status is 0 on success and 1 on any error or failed check.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod error;
mod logging;

pub use error::{CliError, Result};

use commands::price::PriceRequest;
use commands::verify::VerifyOverrides;
use logging::LogLevel;

/// Black-Scholes option pricing and verification
#[derive(Parser)]
#[command(name = "bsval")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output (debug logging)
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Log level when RUST_LOG is not set (trace, debug, info, warn, error)
    #[arg(long, global = true, default_value = "warn")]
    log_level: LogLevel,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Price a European option
    Price {
        /// Spot price (S)
        #[arg(long, default_value_t = 100.0, allow_negative_numbers = true)]
        spot: f64,

        /// Strike price (K)
        #[arg(long, default_value_t = 100.0, allow_negative_numbers = true)]
        strike: f64,

        /// Time to expiry in years (T)
        #[arg(long, default_value_t = 1.0, allow_negative_numbers = true)]
        expiry: f64,

        /// Risk-free rate (r)
        #[arg(long, default_value_t = 0.05, allow_negative_numbers = true)]
        rate: f64,

        /// Volatility (sigma)
        #[arg(long, default_value_t = 0.2, allow_negative_numbers = true)]
        volatility: f64,

        /// Option type (call or put)
        #[arg(short = 't', long, default_value = "call")]
        option_type: String,

        /// Print d1, d2 and their terms before the price
        #[arg(long)]
        explain: bool,
    },

    /// Run the verification harness
    Verify {
        /// Harness configuration file (TOML)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Fuzzing seed
        #[arg(long)]
        seed: Option<u64>,

        /// Number of fuzzing trials
        #[arg(long)]
        trials: Option<usize>,

        /// Number of diverse cases to select
        #[arg(long)]
        top_n: Option<usize>,
    },
}

fn init_tracing(log_level: LogLevel, verbose: bool) {
    let level = if verbose { LogLevel::Debug } else { log_level };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level.as_filter_str())),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn dispatch(command: Commands) -> Result<()> {
    match command {
        Commands::Price {
            spot,
            strike,
            expiry,
            rate,
            volatility,
            option_type,
            explain,
        } => {
            let request = PriceRequest {
                spot,
                strike,
                expiry,
                rate,
                volatility,
                option_type,
            };
            commands::price::run(&request, explain)
        }
        Commands::Verify {
            config,
            seed,
            trials,
            top_n,
        } => commands::verify::run(
            config.as_deref(),
            VerifyOverrides {
                seed,
                trials,
                top_n,
            },
        ),
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.log_level, cli.verbose);

    if cli.verbose {
        info!("Verbose mode enabled");
    }

    match dispatch(cli.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {}", err);
            ExitCode::FAILURE
        }
    }
}
