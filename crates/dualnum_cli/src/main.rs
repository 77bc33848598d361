//! dualnum CLI - Derivatives by Dual Numbers
//!
//! # Commands
//!
//! - `dualnum sqrt <N>` - Newton square root with the derivative from AD
//! - `dualnum eval <FUNCTION> <X>` - Value and derivative of an elementary function
//! - `dualnum bessel <KIND> <NU> <X>` - Value and derivative of a Bessel function
//! - `dualnum check` - Print the resolved configuration

use clap::{Parser, Subcommand};
use dualnum_cli::commands;
use dualnum_cli::config::{build_config, CliArgs};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Forward-mode automatic differentiation on dual numbers
#[derive(Parser, Debug)]
#[command(name = "dualnum")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Configuration file path (TOML format)
    #[arg(short, long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true)]
    log_level: Option<String>,

    /// Enable verbose output (debug level unless --log-level is given)
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Newton solver tolerance
    #[arg(long, global = true)]
    tolerance: Option<f64>,

    /// Newton solver iteration cap
    #[arg(long, global = true)]
    max_iterations: Option<usize>,

    /// Decimal places in printed results
    #[arg(long, global = true)]
    precision: Option<usize>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Square root of N by Newton iteration
    Sqrt {
        /// Number to take the square root of
        n: f64,

        /// Starting point (defaults to N)
        #[arg(long, allow_negative_numbers = true)]
        x0: Option<f64>,
    },

    /// Evaluate an elementary function and its derivative
    Eval {
        /// Function name (see --list)
        #[arg(required_unless_present = "list")]
        function: Option<String>,

        /// Point of evaluation
        #[arg(required_unless_present = "list", allow_negative_numbers = true)]
        x: Option<f64>,

        /// Report domain violations as errors instead of NaN
        #[arg(long)]
        strict: bool,

        /// List the supported functions
        #[arg(long)]
        list: bool,
    },

    /// Evaluate a cylinder Bessel function and its derivative
    Bessel {
        /// Kind: j, y, i, k, h1, h2
        kind: String,

        /// Order
        #[arg(allow_negative_numbers = true)]
        nu: f64,

        /// Argument
        #[arg(allow_negative_numbers = true)]
        x: f64,
    },

    /// Print the resolved configuration
    Check,
}

impl From<&Cli> for CliArgs {
    fn from(cli: &Cli) -> Self {
        let log_level = match (&cli.log_level, cli.verbose) {
            (Some(level), _) => Some(level.clone()),
            (None, true) => Some("debug".to_string()),
            (None, false) => None,
        };
        CliArgs {
            config_file: cli.config.clone(),
            log_level,
            tolerance: cli.tolerance,
            max_iterations: cli.max_iterations,
            precision: cli.precision,
        }
    }
}

fn init_tracing(log_level: &str) {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = build_config(&CliArgs::from(&cli))?;

    init_tracing(config.log_level.as_filter_str());
    tracing::debug!(
        log_level = %config.log_level,
        tolerance = config.solver.tolerance,
        max_iterations = config.solver.max_iterations,
        precision = config.output.precision,
        "Configuration loaded"
    );

    match cli.command {
        Commands::Sqrt { n, x0 } => commands::sqrt::run(n, x0, &config)?,
        Commands::Eval {
            function,
            x,
            strict,
            list,
        } => commands::eval::run(function.as_deref(), x, list, strict, &config)?,
        Commands::Bessel { kind, nu, x } => commands::bessel::run(&kind, nu, x, &config)?,
        Commands::Check => commands::check::run(&config)?,
    }

    Ok(())
}
