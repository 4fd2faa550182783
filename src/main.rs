mod commands;
mod config;
mod constants;
mod extract;

use anyhow::Result;
use clap::Parser;
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Config file path, resolved against the project root unless absolute
    #[arg(long, default_value = constants::CONFIG_FILENAME)]
    config_file: String,

    /// Enable verbose output (info level)
    #[arg(long, short = 'v')]
    verbose: bool,

    /// Suppress all non-essential output (error level only)
    #[arg(long, short = 'q')]
    quiet: bool,

    /// Enable debug output (debug level)
    #[arg(long)]
    debug: bool,

    #[command(flatten)]
    path_args: config::PathArgs,

    #[command(flatten)]
    extract_args: config::ExtractArgs,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    initialize_logging(&cli);
    run_main(cli)
}

fn initialize_logging(cli: &Cli) {
    let level = if cli.debug {
        "debug"
    } else if cli.verbose {
        "info"
    } else if cli.quiet {
        "error"
    } else {
        "warn" // default level
    };

    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else {
        EnvFilter::new(level)
    };

    fmt().with_env_filter(filter).with_target(false).init();
}

fn run_main(cli: Cli) -> Result<()> {
    let root_dir = config::resolve_project_root(cli.path_args.root.as_deref())?;
    let file_config = config::load_config(&root_dir, &cli.config_file)?;

    let cli_config = config::ConfigInput {
        paths: Some(cli.path_args.into()),
        extract: Some(cli.extract_args.into()),
    };

    let config = config::ConfigBuilder::new(root_dir)
        .with_file(file_config)
        .with_cli_args(cli_config)
        .resolve();

    info!("Extracting latest changelog section");
    commands::cmd_extract(&config)
}
