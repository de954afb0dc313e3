//! `roster` - Data service for the Team OSHSHAROHI roster
//!
//! This library provides the storage, seeding, and HTTP query layers behind
//! the team website's roster content: team members and sub-teams held in a
//! single SQLite file, seeded out-of-band and served read-only.

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]
#![deny(unsafe_code)]

pub mod aliases;
pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod model;
pub mod seed;
pub mod server;
pub mod storage;

pub use config::Config;
pub use error::{Error, Result};
pub use logging::init_logging;
pub use model::{SubTeam, TeamMember};
pub use storage::{Storage, StorageStats};
