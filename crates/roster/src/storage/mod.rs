//! Storage layer for the roster service.
//!
//! This module provides `SQLite`-based persistent storage for team members
//! and sub-teams, and the typed repository operations the HTTP layer and the
//! seed procedure are built on. The store is file-backed: opened once at
//! startup, written only by seeding.

pub mod migrations;
pub mod schema;

use std::path::{Path, PathBuf};

use rusqlite::{params, Connection, OptionalExtension};
use tracing::{debug, info};

use crate::error::{Error, Result};
use crate::model::{SubTeam, TeamMember};

/// Storage engine for the roster.
///
/// Owns the only database connection in the process. Repository operations
/// have no business logic: filtering, ordering, and persistence only.
#[derive(Debug)]
pub struct Storage {
    /// Path to the database file.
    path: PathBuf,
    /// Database connection.
    conn: Connection,
}

impl Storage {
    /// Open or create a storage database at the given path.
    ///
    /// Creates the parent directories and database file if they don't exist.
    /// Initializes the schema if this is a new database.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened or schema
    /// initialization fails.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();

        // Create parent directories if needed
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                std::fs::create_dir_all(parent).map_err(|source| Error::DirectoryCreate {
                    path: parent.to_path_buf(),
                    source,
                })?;
            }
        }

        debug!("Opening database at {}", path.display());
        let conn = Connection::open(&path).map_err(|source| Error::DatabaseOpen {
            path: path.clone(),
            source,
        })?;

        // Enable WAL mode for better concurrent read performance
        conn.execute_batch("PRAGMA journal_mode=WAL; PRAGMA synchronous=NORMAL;")?;

        // Initialize schema
        migrations::initialize_schema(&conn)?;

        info!("Database opened successfully at {}", path.display());
        Ok(Self { path, conn })
    }

    /// Create an in-memory storage instance for testing.
    ///
    /// # Errors
    ///
    /// Returns an error if the in-memory database cannot be created.
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory().map_err(|source| Error::DatabaseOpen {
            path: PathBuf::from(":memory:"),
            source,
        })?;

        migrations::initialize_schema(&conn)?;

        Ok(Self {
            path: PathBuf::from(":memory:"),
            conn,
        })
    }

    /// Get the path to the database file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Checkpoint the write-ahead log into the main database file.
    ///
    /// The request path never writes, so this is only called at the end of
    /// the seed procedure to leave the single database file holding the full
    /// snapshot.
    ///
    /// # Errors
    ///
    /// Returns an error if the checkpoint fails.
    pub fn flush(&self) -> Result<()> {
        if self.path.to_string_lossy() == ":memory:" {
            return Ok(());
        }
        self.conn
            .query_row("PRAGMA wal_checkpoint(TRUNCATE)", [], |_row| Ok(()))?;
        Ok(())
    }

    /// Insert a team member, returning the assigned row id.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidRecord`] if a required field is empty, or an
    /// error if the database operation fails.
    pub fn insert_member(&self, member: &TeamMember) -> Result<i64> {
        member.validate()?;

        self.conn.execute(
            r"
            INSERT INTO team_members
                (name, role, title, description, subteam, color, image_path, display_order)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)
            ",
            params![
                member.name,
                member.role,
                member.title,
                member.description,
                member.subteam,
                member.color,
                member.image_path,
                member.display_order,
            ],
        )?;

        let id = self.conn.last_insert_rowid();
        debug!("Inserted team member '{}' with id {}", member.name, id);
        Ok(id)
    }

    /// Get all team members, ordered by `(subteam, display_order)` ascending.
    ///
    /// Equal ordering keys resolve by row-creation order.
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails.
    pub fn all_members(&self) -> Result<Vec<TeamMember>> {
        let mut stmt = self.conn.prepare(
            r"
            SELECT id, name, role, title, description, subteam, color, image_path, display_order
            FROM team_members ORDER BY subteam, display_order, id
            ",
        )?;

        let members = stmt
            .query_map([], Self::row_to_member)?
            .collect::<std::result::Result<Vec<_>, _>>()?;

        Ok(members)
    }

    /// Get team members whose `subteam` exactly matches the given name,
    /// ordered by `display_order`.
    ///
    /// An unknown subteam yields an empty vec, not an error.
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails.
    pub fn members_by_subteam(&self, subteam: &str) -> Result<Vec<TeamMember>> {
        let mut stmt = self.conn.prepare(
            r"
            SELECT id, name, role, title, description, subteam, color, image_path, display_order
            FROM team_members WHERE subteam = ?1 ORDER BY display_order, id
            ",
        )?;

        let members = stmt
            .query_map([subteam], Self::row_to_member)?
            .collect::<std::result::Result<Vec<_>, _>>()?;

        Ok(members)
    }

    /// Insert or replace a sub-team keyed by its `id`.
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails.
    pub fn upsert_sub_team(&self, team: &SubTeam) -> Result<()> {
        let goals = serde_json::to_string(&team.goals)?;
        let achievements = serde_json::to_string(&team.achievements)?;

        self.conn.execute(
            r"
            INSERT OR REPLACE INTO sub_teams (id, name, icon, description, goals, achievements)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6)
            ",
            params![
                team.id,
                team.name,
                team.icon,
                team.description,
                goals,
                achievements,
            ],
        )?;

        debug!("Upserted sub-team '{}'", team.id);
        Ok(())
    }

    /// Get all sub-teams in storage order.
    ///
    /// # Errors
    ///
    /// Returns [`Error::SequenceDecode`] if a stored sequence column holds
    /// malformed text, or an error if the database operation fails.
    pub fn all_sub_teams(&self) -> Result<Vec<SubTeam>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, name, icon, description, goals, achievements FROM sub_teams",
        )?;

        let rows = stmt
            .query_map([], Self::row_to_raw_sub_team)?
            .collect::<std::result::Result<Vec<_>, _>>()?;

        rows.into_iter().map(RawSubTeam::decode).collect()
    }

    /// Get a sub-team by its id.
    ///
    /// # Errors
    ///
    /// Returns [`Error::SequenceDecode`] if a stored sequence column holds
    /// malformed text, or an error if the database operation fails.
    pub fn sub_team_by_id(&self, id: &str) -> Result<Option<SubTeam>> {
        let raw = self
            .conn
            .query_row(
                "SELECT id, name, icon, description, goals, achievements FROM sub_teams WHERE id = ?1",
                [id],
                Self::row_to_raw_sub_team,
            )
            .optional()?;

        raw.map(RawSubTeam::decode).transpose()
    }

    /// Delete all rows from both tables.
    ///
    /// Used only by the seed procedure, never by request-serving code.
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails.
    pub fn clear_all(&self) -> Result<()> {
        self.conn.execute("DELETE FROM team_members", [])?;
        self.conn.execute("DELETE FROM sub_teams", [])?;
        info!("Cleared team_members and sub_teams");
        Ok(())
    }

    /// Get storage statistics.
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails.
    pub fn stats(&self) -> Result<StorageStats> {
        let member_count: i64 =
            self.conn
                .query_row("SELECT COUNT(*) FROM team_members", [], |row| row.get(0))?;
        let sub_team_count: i64 =
            self.conn
                .query_row("SELECT COUNT(*) FROM sub_teams", [], |row| row.get(0))?;

        let db_size_bytes = if self.path.to_string_lossy() == ":memory:" {
            0
        } else {
            std::fs::metadata(&self.path).map(|m| m.len()).unwrap_or(0)
        };

        Ok(StorageStats {
            member_count,
            sub_team_count,
            db_size_bytes,
        })
    }

    /// Convert a database row to a `TeamMember`.
    fn row_to_member(row: &rusqlite::Row) -> rusqlite::Result<TeamMember> {
        Ok(TeamMember {
            id: Some(row.get(0)?),
            name: row.get(1)?,
            role: row.get(2)?,
            title: row.get(3)?,
            description: row.get(4)?,
            subteam: row.get(5)?,
            color: row.get(6)?,
            image_path: row.get(7)?,
            display_order: row.get(8)?,
        })
    }

    /// Convert a database row to a `RawSubTeam` with undecoded sequences.
    fn row_to_raw_sub_team(row: &rusqlite::Row) -> rusqlite::Result<RawSubTeam> {
        Ok(RawSubTeam {
            id: row.get(0)?,
            name: row.get(1)?,
            icon: row.get(2)?,
            description: row.get(3)?,
            goals: row.get(4)?,
            achievements: row.get(5)?,
        })
    }
}

/// A sub-team row before its sequence columns are decoded.
#[derive(Debug)]
struct RawSubTeam {
    id: String,
    name: String,
    icon: String,
    description: String,
    goals: String,
    achievements: String,
}

impl RawSubTeam {
    /// Decode the JSON sequence columns into an owned [`SubTeam`].
    fn decode(self) -> Result<SubTeam> {
        let goals = decode_sequence(&self.goals, "goals", &self.id)?;
        let achievements = decode_sequence(&self.achievements, "achievements", &self.id)?;
        Ok(SubTeam {
            id: self.id,
            name: self.name,
            icon: self.icon,
            description: self.description,
            goals,
            achievements,
        })
    }
}

/// Decode a JSON-encoded string array column.
fn decode_sequence(text: &str, column: &'static str, id: &str) -> Result<Vec<String>> {
    serde_json::from_str(text).map_err(|source| Error::SequenceDecode {
        column,
        id: id.to_string(),
        source,
    })
}

/// Statistics about the storage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StorageStats {
    /// Number of team member rows.
    pub member_count: i64,
    /// Number of sub-team rows.
    pub sub_team_count: i64,
    /// Size of the database file in bytes.
    pub db_size_bytes: u64,
}
