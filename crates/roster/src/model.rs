//! Core roster types.
//!
//! This module defines the data structures for team members and sub-teams,
//! along with the response projections used by the HTTP query layer.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// A member of the team roster.
///
/// Members are created exclusively by the seed procedure and are immutable
/// afterwards. The `subteam` field holds the long display-name form of the
/// category (e.g. "Electronics & Powertrain"), not the short slug used to
/// key [`SubTeam`] rows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamMember {
    /// Unique identifier (assigned by the storage layer).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    /// Full name.
    pub name: String,

    /// Short category label, e.g. "TEAM LEAD".
    pub role: String,

    /// Descriptive role string, e.g. "Project Director".
    pub title: String,

    /// Free-text biography.
    pub description: String,

    /// Long display name of the sub-team this member belongs to.
    pub subteam: String,

    /// Display-only color tag, opaque to this layer.
    pub color: String,

    /// Path to the member's portrait under the static assets prefix.
    pub image_path: String,

    /// Ordering key within a sub-team; ties resolve by insertion order.
    pub display_order: i64,
}

impl TeamMember {
    /// Check that all required fields are present.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidRecord`] naming the first empty required field.
    pub fn validate(&self) -> Result<()> {
        for (field, value) in [
            ("name", &self.name),
            ("role", &self.role),
            ("subteam", &self.subteam),
            ("image_path", &self.image_path),
        ] {
            if value.trim().is_empty() {
                return Err(Error::invalid_record(format!(
                    "team member field '{field}' must not be empty"
                )));
            }
        }
        Ok(())
    }

    /// The role string shown next to the member in sub-team views.
    ///
    /// Prefers the descriptive `title`, falling back to the short `role`
    /// label when no title is set.
    #[must_use]
    pub fn display_role(&self) -> &str {
        if self.title.is_empty() {
            &self.role
        } else {
            &self.title
        }
    }
}

/// A sub-team entry.
///
/// `goals` and `achievements` are persisted as JSON text and must round-trip
/// through the storage layer without loss of order or content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubTeam {
    /// Stable slug identifying this sub-team, e.g. "powertrain".
    pub id: String,

    /// Display name.
    pub name: String,

    /// Symbolic icon name, opaque to this layer.
    pub icon: String,

    /// Free-text description.
    pub description: String,

    /// Ordered list of goals.
    pub goals: Vec<String>,

    /// Ordered list of achievements.
    pub achievements: Vec<String>,
}

/// Member projection used by the grouped listing.
///
/// Drops `display_order` and the raw `subteam` key (the grouping key already
/// carries it) and renames `image_path` to `img`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemberSummary {
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
    /// Portrait path.
    #[serde(rename = "img")]
    pub image_path: String,
}

impl From<&TeamMember> for MemberSummary {
    fn from(member: &TeamMember) -> Self {
        Self {
            id: member.id.unwrap_or_default(),
            name: member.name.clone(),
            role: member.role.clone(),
            title: member.title.clone(),
            description: member.description.clone(),
            color: member.color.clone(),
            image_path: member.image_path.clone(),
        }
    }
}

/// Compact member reference attached to a sub-team detail response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubTeamMemberRef {
    /// Row identifier, stringified.
    pub id: String,
    /// Full name.
    pub name: String,
    /// Title when present, otherwise the short role label.
    pub role: String,
    /// Portrait path.
    #[serde(rename = "image")]
    pub image_path: String,
}

impl From<&TeamMember> for SubTeamMemberRef {
    fn from(member: &TeamMember) -> Self {
        Self {
            id: member.id.unwrap_or_default().to_string(),
            name: member.name.clone(),
            role: member.display_role().to_string(),
            image_path: member.image_path.clone(),
        }
    }
}

/// A sub-team together with its derived member list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubTeamDetail {
    /// The sub-team row.
    #[serde(flatten)]
    pub sub_team: SubTeam,
    /// Members whose `subteam` display name maps to this sub-team's id.
    pub members: Vec<SubTeamMemberRef>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn member(name: &str) -> TeamMember {
        TeamMember {
            id: Some(7),
            name: name.to_string(),
            role: "TEAM LEAD".to_string(),
            title: "Project Director".to_string(),
            description: "Leads the team.".to_string(),
            subteam: "Leadership".to_string(),
            color: "brand-red".to_string(),
            image_path: "/assets/lead.jpg".to_string(),
            display_order: 1,
        }
    }

    #[test]
    fn test_validate_ok() {
        assert!(member("Tajbir Ahmed").validate().is_ok());
    }

    #[test]
    fn test_validate_empty_name() {
        let mut m = member("x");
        m.name = String::new();
        let err = m.validate().unwrap_err();
        assert!(err.to_string().contains("name"));
    }

    #[test]
    fn test_validate_empty_subteam() {
        let mut m = member("x");
        m.subteam = "  ".to_string();
        let err = m.validate().unwrap_err();
        assert!(err.to_string().contains("subteam"));
    }

    #[test]
    fn test_validate_empty_image_path() {
        let mut m = member("x");
        m.image_path = String::new();
        assert!(m.validate().is_err());
    }

    #[test]
    fn test_display_role_prefers_title() {
        let m = member("x");
        assert_eq!(m.display_role(), "Project Director");
    }

    #[test]
    fn test_display_role_falls_back_to_role() {
        let mut m = member("x");
        m.title = String::new();
        assert_eq!(m.display_role(), "TEAM LEAD");
    }

    #[test]
    fn test_member_summary_projection() {
        let summary = MemberSummary::from(&member("Tajbir Ahmed"));
        assert_eq!(summary.id, 7);
        assert_eq!(summary.name, "Tajbir Ahmed");
        assert_eq!(summary.image_path, "/assets/lead.jpg");

        let json = serde_json::to_value(&summary).unwrap();
        assert!(json.get("img").is_some());
        assert!(json.get("image_path").is_none());
        assert!(json.get("subteam").is_none());
        assert!(json.get("display_order").is_none());
    }

    #[test]
    fn test_sub_team_member_ref_projection() {
        let reference = SubTeamMemberRef::from(&member("Tajbir Ahmed"));
        assert_eq!(reference.id, "7");
        assert_eq!(reference.role, "Project Director");

        let json = serde_json::to_value(&reference).unwrap();
        assert!(json.get("image").is_some());
    }

    #[test]
    fn test_member_serializes_without_id_when_unset() {
        let mut m = member("x");
        m.id = None;
        let json = serde_json::to_value(&m).unwrap();
        assert!(json.get("id").is_none());
    }

    #[test]
    fn test_sub_team_detail_flattens() {
        let detail = SubTeamDetail {
            sub_team: SubTeam {
                id: "powertrain".to_string(),
                name: "Powertrain".to_string(),
                icon: "Zap".to_string(),
                description: String::new(),
                goals: vec!["a".to_string()],
                achievements: vec![],
            },
            members: vec![],
        };
        let json = serde_json::to_value(&detail).unwrap();
        assert_eq!(json["id"], "powertrain");
        assert!(json.get("members").is_some());
        assert!(json.get("sub_team").is_none());
    }
}
