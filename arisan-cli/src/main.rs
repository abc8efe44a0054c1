mod animation;
mod commands;
mod config;

use arisan_core::ArisanError;
use clap::{Parser, Subcommand};
use config::CliConfig;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "arisan")]
#[command(about = "Arisan rotating draw - every participant wins once per cycle")]
#[command(version)]
struct Cli {
    /// Data directory for config, templates and exports
    #[arg(short, long, global = true)]
    data_dir: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Skip the spinning animation
    #[arg(long, global = true)]
    no_animation: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Roster template and import commands
    #[command(subcommand)]
    Roster(commands::RosterCommands),

    /// Draw winners from a roster file
    Draw(commands::DrawArgs),

    /// Re-derive the index a recorded seed selects
    Replay(commands::ReplayArgs),

    /// Run an interactive draw session
    Session(commands::SessionArgs),
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Get data directory
    let data_dir = cli.data_dir.unwrap_or_else(config::default_data_dir);

    // Ensure data directory exists
    tokio::fs::create_dir_all(&data_dir).await?;

    let mut config = CliConfig::load(&data_dir).await?;
    config.verbose |= cli.verbose;
    if cli.no_animation {
        config.animation.enabled = false;
    }

    // Initialize logging
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(log_filter(config.verbose)))
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::debug!("Using data directory {}", config.data_dir.display());

    // Execute command
    let result = match cli.command {
        Commands::Roster(cmd) => commands::handle_roster_command(cmd, &config),
        Commands::Draw(args) => commands::handle_draw_command(args, &config),
        Commands::Replay(args) => commands::handle_replay_command(args),
        Commands::Session(args) => commands::run_session(args, &config),
    };

    if let Err(e) = result {
        match e {
            ArisanError::MissingColumn { column } => {
                eprintln!("Error: Roster file has no '{}' column", column);
                eprintln!("Use 'arisan roster template' to get a file in the right shape");
            }
            ArisanError::UnsupportedFormat(path) => {
                eprintln!("Error: Unsupported roster file: {}", path);
                eprintln!("Supported formats: csv, xlsx, xlsm, xls, ods, txt");
            }
            ArisanError::EmptyPool => {
                eprintln!("Error: No participants to draw from");
            }
            _ => {
                eprintln!("Error: {}", e);
            }
        }
        std::process::exit(1);
    }

    Ok(())
}

/// Core events stay quiet unless verbose so winners are not announced before the spin
fn log_filter(verbose: bool) -> String {
    if verbose {
        "arisan=debug,arisan_core=debug".to_string()
    } else {
        "arisan=info,arisan_core=warn".to_string()
    }
}
