mod commands;
mod prompt;

use clap::{Parser, Subcommand};
use credset_config::{AppConfig, ConfigLoader};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// Manage named credential sets for application bundles.
#[derive(Parser, Debug)]
#[command(name = "credset", version, about, long_about = None)]
struct Cli {
    /// Override the credset home directory (default: $CREDSET_HOME, then ~/.credset).
    #[arg(long, global = true)]
    home: Option<PathBuf>,

    /// Enable debug logging on stderr.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Generate a credential set from a bundle's declared credentials.
    Generate {
        /// Name of the credential set. Defaults to the bundle name.
        #[arg(long, default_value = "")]
        name: String,

        /// Do not prompt; fill every source with a placeholder value.
        #[arg(long)]
        silent: bool,

        /// Bundle file declaring the required credentials.
        #[arg(short, long, default_value = "bundle.json")]
        file: PathBuf,
    },

    /// List stored credential sets.
    List {
        /// Output format: json, yaml or table.
        #[arg(short, long)]
        output: Option<String>,
    },

    /// Show a credential set and where each credential comes from.
    Show {
        /// Name of the credential set.
        name: String,

        /// Output format: json, yaml or table.
        #[arg(short, long)]
        output: Option<String>,
    },

    /// Delete a credential set.
    Delete {
        /// Name of the credential set.
        name: String,
    },
}

fn init_tracing(config: &AppConfig, verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("credset=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(config.log_level.as_deref().unwrap_or("credset=warn"))
        })
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let loader = match cli.home.clone() {
        Some(home) => ConfigLoader::with_home(home),
        None => ConfigLoader::new(),
    };
    let config = match loader.load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {e}");
            return ExitCode::FAILURE;
        }
    };

    init_tracing(&config, cli.verbose);

    match commands::execute(cli.command, &config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
