//! `SQLite` schema definitions for the roster store.
//!
//! This module contains the SQL statements for creating and managing
//! the database schema.

/// SQL statement to create the team members table.
pub const CREATE_TEAM_MEMBERS_TABLE: &str = r"
CREATE TABLE IF NOT EXISTS team_members (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL,
    role TEXT NOT NULL,
    title TEXT NOT NULL DEFAULT '',
    description TEXT NOT NULL DEFAULT '',
    subteam TEXT NOT NULL,
    color TEXT NOT NULL DEFAULT 'brand-red',
    image_path TEXT NOT NULL,
    display_order INTEGER NOT NULL DEFAULT 0,
    created_at TEXT NOT NULL DEFAULT (datetime('now'))
)
";

/// SQL statement to create the sub-teams table.
///
/// `goals` and `achievements` hold JSON-encoded string arrays.
pub const CREATE_SUB_TEAMS_TABLE: &str = r"
CREATE TABLE IF NOT EXISTS sub_teams (
    id TEXT PRIMARY KEY,
    name TEXT NOT NULL,
    icon TEXT NOT NULL,
    description TEXT NOT NULL DEFAULT '',
    goals TEXT NOT NULL DEFAULT '[]',
    achievements TEXT NOT NULL DEFAULT '[]'
)
";

/// SQL statement to create an index on `subteam` for filtered listings.
pub const CREATE_SUBTEAM_INDEX: &str = r"
CREATE INDEX IF NOT EXISTS idx_team_members_subteam ON team_members(subteam)
";

/// SQL statement to create the metadata table for storing key-value pairs.
pub const CREATE_METADATA_TABLE: &str = r"
CREATE TABLE IF NOT EXISTS metadata (
    key TEXT PRIMARY KEY,
    value TEXT NOT NULL
)
";

/// All schema creation statements in order.
pub const SCHEMA_STATEMENTS: &[&str] = &[
    CREATE_TEAM_MEMBERS_TABLE,
    CREATE_SUB_TEAMS_TABLE,
    CREATE_SUBTEAM_INDEX,
    CREATE_METADATA_TABLE,
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schema_statements_not_empty() {
        assert!(!SCHEMA_STATEMENTS.is_empty());
        for stmt in SCHEMA_STATEMENTS {
            assert!(!stmt.is_empty());
        }
    }

    #[test]
    fn test_create_team_members_table_contains_required_columns() {
        assert!(CREATE_TEAM_MEMBERS_TABLE.contains("id INTEGER PRIMARY KEY"));
        assert!(CREATE_TEAM_MEMBERS_TABLE.contains("name TEXT NOT NULL"));
        assert!(CREATE_TEAM_MEMBERS_TABLE.contains("subteam TEXT NOT NULL"));
        assert!(CREATE_TEAM_MEMBERS_TABLE.contains("image_path TEXT NOT NULL"));
        assert!(CREATE_TEAM_MEMBERS_TABLE.contains("display_order INTEGER NOT NULL DEFAULT 0"));
    }

    #[test]
    fn test_create_sub_teams_table_structure() {
        assert!(CREATE_SUB_TEAMS_TABLE.contains("id TEXT PRIMARY KEY"));
        assert!(CREATE_SUB_TEAMS_TABLE.contains("goals TEXT NOT NULL DEFAULT '[]'"));
        assert!(CREATE_SUB_TEAMS_TABLE.contains("achievements TEXT NOT NULL DEFAULT '[]'"));
    }

    #[test]
    fn test_create_metadata_table_structure() {
        assert!(CREATE_METADATA_TABLE.contains("key TEXT PRIMARY KEY"));
        assert!(CREATE_METADATA_TABLE.contains("value TEXT NOT NULL"));
    }
}
