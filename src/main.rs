//! twinmon - polling telemetry monitor
//!
//! A command-line tool that watches an IoT gateway's sensor endpoint and
//! raises rule-based alerts when readings cross thresholds or the
//! reported system status changes.

use clap::Parser;
use twinmon::cli::args::{generate_completions, Cli, Commands};
use twinmon::commands::{run_fetch, run_watch};
use twinmon::config::{Config, ConfigFile};
use twinmon::error::AppError;

fn main() {
    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .format_timestamp(None)
        .init();

    // Parse CLI arguments
    let cli = Cli::parse();

    // Set log level based on verbose flag
    if cli.verbose {
        log::set_max_level(log::LevelFilter::Debug);
    }

    // Run the appropriate command
    let result = run(&cli);

    if let Err(e) = result {
        log::error!("{}", e);
        print_error(&e);
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<(), AppError> {
    let config = load_config(cli)?;

    match &cli.command {
        Commands::Watch(args) => run_watch(args, cli.format, config),

        Commands::Fetch(args) => run_fetch(args, cli.format, config),

        Commands::Completions { shell } => {
            generate_completions(*shell);
            Ok(())
        }
    }
}

fn load_config(cli: &Cli) -> Result<Config, AppError> {
    match &cli.config {
        Some(path) => Ok(ConfigFile::load(path)?),
        None => Ok(ConfigFile::load_default().unwrap_or_default()),
    }
}

fn print_error(err: &AppError) {
    eprintln!("Error: {}", err);

    // Print helpful hints for common errors
    match err {
        AppError::Transport(_) => {
            eprintln!();
            eprintln!("Hint: Check that the gateway is reachable and the base URL is");
            eprintln!("      correct ('twinmon fetch --url http://<gateway>:5000').");
        }
        AppError::Config(twinmon::error::ConfigError::FileNotFound(path)) => {
            eprintln!();
            eprintln!("Hint: No configuration file at '{}'.", path);
            eprintln!("      Create one or pass --config with a valid path.");
        }
        _ => {}
    }
}
