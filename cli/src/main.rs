//! Dispatching Dashboard CLI
//!
//! Command-line interface for the dispatch API.
//!
//! # Usage
//!
//! ```bash
//! dispatch queue
//! dispatch leaderboard --format json
//! dispatch close 1a2b3c4d --resource R002
//! dispatch simulate
//! dispatch config set default_resource R001
//! ```

use clap::{Parser, Subcommand};

mod commands;
mod config;
mod output;

#[derive(Parser)]
#[command(name = "dispatch")]
#[command(version)]
#[command(about = "Dispatching Dashboard Command Line Interface", long_about = None)]
struct Cli {
    /// API endpoint URL
    #[arg(long, env = "DISPATCH_API_URL")]
    api_url: Option<String>,

    /// Output format
    #[arg(long, short)]
    format: Option<output::OutputFormat>,

    /// Profile name from config file
    #[arg(long, short)]
    profile: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the virtual queue, most urgent first
    Queue {
        /// Only tickets of this skill group
        #[arg(long)]
        skill_group: Option<String>,
    },
    /// Show the engineer leaderboard
    Leaderboard,
    /// Show closed tickets
    Archive,
    /// List skill groups and their point values
    Skills,
    /// List engineers
    Engineers,
    /// Close a ticket and award points
    Close {
        /// Ticket ID from the queue
        ticket_id: String,
        /// Closing engineer (defaults to the configured default_resource)
        #[arg(long, short)]
        resource: Option<String>,
    },
    /// Close the next ticket with the first engineer
    Simulate,
    /// Configure CLI
    Config {
        #[command(subcommand)]
        action: ConfigCommands,
    },
}

#[derive(Subcommand)]
enum ConfigCommands {
    /// Set configuration value
    Set { key: String, value: String },
    /// Get configuration value
    Get { key: String },
    /// List all configuration
    List,
    /// Initialize configuration
    Init,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let config = config::Config::load(cli.profile.as_deref()).unwrap_or_default();
    let api_url = cli
        .api_url
        .or(config.api_url.clone())
        .unwrap_or_else(|| config::DEFAULT_API_URL.to_string());
    let format = cli
        .format
        .or_else(|| config.default_format.as_deref().and_then(output::OutputFormat::parse))
        .unwrap_or(output::OutputFormat::Table);

    let client = commands::ApiClient::new(&api_url);

    let result = match cli.command {
        Commands::Queue { skill_group } => {
            commands::tickets::queue(&client, format, skill_group.as_deref()).await
        }
        Commands::Archive => commands::tickets::archive(&client, format).await,
        Commands::Close { ticket_id, resource } => {
            match resource.or(config.default_resource.clone()) {
                Some(resource) => commands::tickets::close(&client, &ticket_id, &resource).await,
                None => Err("No --resource given and no default_resource configured".into()),
            }
        }
        Commands::Simulate => commands::tickets::simulate(&client, format).await,
        Commands::Leaderboard => commands::leaderboard::show(&client, format).await,
        Commands::Skills => commands::leaderboard::skills(&client, format).await,
        Commands::Engineers => commands::leaderboard::engineers(&client, format).await,
        Commands::Config { action } => {
            commands::config::handle(action, cli.profile.as_deref()).await
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
