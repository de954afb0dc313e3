//! Seed procedure for the roster store.
//!
//! A one-shot, operator-invoked clear-and-repopulate of both tables from the
//! literal dataset in [`dataset`]. This is the only writer of persisted
//! state; it never runs while the server is handling traffic.

pub mod dataset;

use tracing::info;

use crate::error::Result;
use crate::storage::Storage;

/// Counts reported after a successful seeding run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeedSummary {
    /// Team member rows inserted.
    pub members: usize,
    /// Sub-team rows inserted.
    pub sub_teams: usize,
}

/// Clear both tables and repopulate them from the literal dataset.
///
/// Records are inserted in listed order, so re-running always produces the
/// same end state (clear-then-insert, not additive).
///
/// # Errors
///
/// Returns an error if clearing, inserting, or the final checkpoint fails.
pub fn run(storage: &Storage) -> Result<SeedSummary> {
    storage.clear_all()?;

    let members = dataset::team_members();
    for member in &members {
        storage.insert_member(member)?;
    }
    info!("Seeded {} team members", members.len());

    let sub_teams = dataset::sub_teams();
    for team in &sub_teams {
        storage.upsert_sub_team(team)?;
    }
    info!("Seeded {} sub-teams", sub_teams.len());

    storage.flush()?;

    Ok(SeedSummary {
        members: members.len(),
        sub_teams: sub_teams.len(),
    })
}
