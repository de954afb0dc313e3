//! CLI command definitions.
//!
//! This module defines the structure of all CLI subcommands.

use std::path::PathBuf;

use clap::{Args, Subcommand};

/// Serve command arguments.
#[derive(Debug, Args)]
pub struct ServeCommand {
    /// Override the configured listen port
    #[arg(short, long)]
    pub port: Option<u16>,
}

/// Seed command arguments.
#[derive(Debug, Args)]
pub struct SeedCommand {
    /// Override the configured database path
    #[arg(long, value_name = "FILE")]
    pub database: Option<PathBuf>,
}

/// Status command arguments.
#[derive(Debug, Args)]
pub struct StatusCommand {
    /// Output as JSON
    #[arg(short, long)]
    pub json: bool,
}

/// Configuration management commands.
#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Show the resolved configuration
    Show {
        /// Output as JSON
        #[arg(short, long)]
        json: bool,
    },

    /// Print the default configuration file path
    Path,

    /// Validate a configuration file
    Validate {
        /// Configuration file to validate (defaults to the standard path)
        #[arg(value_name = "FILE")]
        file: Option<PathBuf>,
    },
}
