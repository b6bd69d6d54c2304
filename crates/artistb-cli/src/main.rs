use std::path::{Path, PathBuf};

use anyhow::{Result, ensure};
use artistb_infrastructure::ConfigService;
use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

mod commands;

use crate::commands::page::OutputFormat;

#[derive(Parser)]
#[command(name = "artistb")]
#[command(about = "artistb CLI - resolve public artist pages from the profile backend", long_about = None)]
#[command(version)]
struct Cli {
    /// Config file (default: <config dir>/artistb/config.toml)
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Verbose logging (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Load the public page data for a username
    Page {
        username: String,

        #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
        format: OutputFormat,

        /// Wrap JSON output with the load report
        #[arg(long)]
        report: bool,
    },
    /// Show the resolved configuration (the API key is never printed)
    Config,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let service = config_service(cli.config.as_deref())?;

    match cli.command {
        Commands::Page {
            username,
            format,
            report,
        } => commands::page::run(&service, &username, format, report).await?,
        Commands::Config => commands::config::run(&service)?,
    }

    Ok(())
}

/// Logs go to stderr; stdout carries only command output.
fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let default_directives = format!(
        "warn,artistb_core={level},artistb_infrastructure={level},artistb_application={level}"
    );

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| default_directives.into()))
        .with(
            fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();
}

fn config_service(path: Option<&Path>) -> Result<ConfigService> {
    let service = ConfigService::new();
    match path {
        Some(path) => {
            ensure!(path.exists(), "Config file not found: {}", path.display());
            Ok(service.with_path(path))
        }
        None => Ok(service),
    }
}
