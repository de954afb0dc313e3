//! Response types mirrored from the roster service wire format.
//!
//! These are deliberately independent of the service crate: the client
//! depends only on the JSON contract, not on server internals.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// The uniform response wrapper used by every endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct Envelope<T> {
    /// Whether the request was served successfully.
    pub success: bool,
    /// The payload, present on success.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    /// Element count for list payloads.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub count: Option<usize>,
    /// Error message, present on failure.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// A team member as served by the flat listing endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamMember {
    /// Row identifier.
    pub id: i64,
    /// Full name.
    pub name: String,
    /// Short category label.
    pub role: String,
    /// Descriptive role string.
    pub title: String,
    /// Free-text biography.
    pub description: String,
    /// Long display name of the member's sub-team.
    pub subteam: String,
    /// Display-only color tag.
    pub color: String,
    /// Portrait path, relative to the service base URL.
    pub image_path: String,
    /// Ordering key within the sub-team.
    pub display_order: i64,
}

/// A member entry in the grouped listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupedMember {
    /// Row identifier.
    pub id: i64,
    /// Full name.
    pub name: String,
    /// Short category label.
    pub role: String,
    /// Descriptive role string.
    pub title: String,
    /// Free-text biography.
    pub description: String,
    /// Display-only color tag.
    pub color: String,
    /// Portrait path, relative to the service base URL.
    #[serde(rename = "img")]
    pub image_path: String,
}

/// The grouped listing: sub-team display name to its member entries.
pub type GroupedMembers = BTreeMap<String, Vec<GroupedMember>>;

/// A sub-team entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubTeam {
    /// Stable slug identifying this sub-team.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Symbolic icon name.
    pub icon: String,
    /// Free-text description.
    pub description: String,
    /// Ordered list of goals.
    pub goals: Vec<String>,
    /// Ordered list of achievements.
    pub achievements: Vec<String>,
}

/// A sub-team with its derived member list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubTeamDetail {
    /// The sub-team itself.
    #[serde(flatten)]
    pub sub_team: SubTeam,
    /// Members resolved through the service's alias table.
    pub members: Vec<SubTeamMemberRef>,
}

/// Compact member reference attached to a sub-team detail.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubTeamMemberRef {
    /// Row identifier, stringified by the service.
    pub id: String,
    /// Full name.
    pub name: String,
    /// Title when present, otherwise the short role label.
    pub role: String,
    /// Portrait path, relative to the service base URL.
    #[serde(rename = "image")]
    pub image_path: String,
}

/// Health probe payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Health {
    /// Constant `"ok"` when the service is up.
    pub status: String,
    /// Server-side timestamp of the probe.
    pub timestamp: String,
}
