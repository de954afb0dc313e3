//! `rosterd` - CLI for the roster data service
//!
//! This binary serves the roster API, seeds the database, and inspects
//! configuration and storage state.

#![warn(missing_debug_implementations)]
#![deny(unsafe_code)]

use clap::Parser;

use roster::cli::{Cli, Command, ConfigCommand, SeedCommand, StatusCommand};
use roster::{init_logging, Config, Storage};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity
    init_logging(cli.verbosity());

    // Load configuration
    let mut config = Config::load_from(cli.config.clone())?;

    // Execute the command
    match cli.command {
        Command::Serve(cmd) => {
            if let Some(port) = cmd.port {
                config.server.port = port;
            }
            let storage = Storage::open(config.database_path())?;
            roster::server::serve(&config, storage).await?;
            Ok(())
        }
        Command::Seed(cmd) => handle_seed(&config, &cmd),
        Command::Status(cmd) => handle_status(&config, &cmd),
        Command::Config(cmd) => handle_config(&config, cmd),
    }
}

fn handle_seed(config: &Config, cmd: &SeedCommand) -> anyhow::Result<()> {
    let path = cmd
        .database
        .clone()
        .unwrap_or_else(|| config.database_path());

    let storage = Storage::open(&path)?;
    let summary = roster::seed::run(&storage)?;

    println!("Seeded {}", path.display());
    println!("  {} team members", summary.members);
    println!("  {} sub-teams", summary.sub_teams);
    Ok(())
}

fn handle_status(config: &Config, cmd: &StatusCommand) -> anyhow::Result<()> {
    let path = config.database_path();

    if !path.exists() {
        if cmd.json {
            let status = serde_json::json!({
                "database_path": path,
                "exists": false,
            });
            println!("{}", serde_json::to_string_pretty(&status)?);
        } else {
            println!("rosterd status");
            println!("--------------");
            println!("Database:      {} (not created yet)", path.display());
            println!("Run `rosterd seed` to create and populate it.");
        }
        return Ok(());
    }

    let storage = Storage::open(&path)?;
    let stats = storage.stats()?;

    if cmd.json {
        let status = serde_json::json!({
            "database_path": path,
            "exists": true,
            "team_members": stats.member_count,
            "sub_teams": stats.sub_team_count,
            "db_size_bytes": stats.db_size_bytes,
        });
        println!("{}", serde_json::to_string_pretty(&status)?);
    } else {
        println!("rosterd status");
        println!("--------------");
        println!("Database:      {}", path.display());
        println!("Team members:  {}", stats.member_count);
        println!("Sub-teams:     {}", stats.sub_team_count);
        println!("Size:          {} bytes", stats.db_size_bytes);
    }
    Ok(())
}

fn handle_config(config: &Config, cmd: ConfigCommand) -> anyhow::Result<()> {
    match cmd {
        ConfigCommand::Show { json } => {
            if json {
                println!("{}", serde_json::to_string_pretty(config)?);
            } else {
                println!("Current Configuration");
                println!("=====================");
                println!();
                println!("[Server]");
                println!("  Listen address:     {}", config.listen_addr());
                println!("  Assets directory:   {}", config.assets_dir().display());
                println!(
                    "  CORS origins:       {}",
                    config.server.cors_allowed_origins.join(", ")
                );
                println!();
                println!("[Storage]");
                println!("  Database path:      {}", config.database_path().display());
            }
        }
        ConfigCommand::Path => {
            println!("{}", Config::default_config_path().display());
        }
        ConfigCommand::Validate { file } => {
            let path = file.unwrap_or_else(Config::default_config_path);
            println!("Validating configuration: {}", path.display());
            match Config::load_from(Some(path)) {
                Ok(_) => println!("Configuration is valid."),
                Err(e) => println!("Configuration error: {e}"),
            }
        }
    }
    Ok(())
}
