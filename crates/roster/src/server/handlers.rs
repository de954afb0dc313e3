//! Request handlers for the roster API.
//!
//! All routes are read-only. Repository failures are logged here and
//! converted to `{success: false, error}` envelopes with a server-fault
//! status; a missing sub-team id is the only 404.

use std::collections::BTreeMap;

use axum::extract::{Path, State};
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use chrono::Utc;
use serde_json::json;
use tracing::error;

use crate::aliases;
use crate::model::{MemberSummary, SubTeamDetail, SubTeamMemberRef};

use super::envelope::Envelope;
use super::AppState;

/// Build a failure response with the given status.
fn fail(status: StatusCode, message: &str) -> Response {
    (status, Json(Envelope::err(message))).into_response()
}

/// `GET /api/team-members`: all members in roster order.
pub(crate) async fn list_members(State(state): State<AppState>) -> Response {
    match state.with_storage(|storage| storage.all_members()) {
        Ok(members) => {
            let count = members.len();
            Json(Envelope::ok_with_count(members, count)).into_response()
        }
        Err(err) => {
            error!("Error fetching team members: {err}");
            fail(
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to fetch team members",
            )
        }
    }
}

/// `GET /api/team-members/:subteam`: members of one sub-team.
///
/// An unknown subteam yields an empty list with `count: 0`, not a 404.
pub(crate) async fn members_by_subteam(
    State(state): State<AppState>,
    Path(subteam): Path<String>,
) -> Response {
    match state.with_storage(|storage| storage.members_by_subteam(&subteam)) {
        Ok(members) => {
            let count = members.len();
            Json(Envelope::ok_with_count(members, count)).into_response()
        }
        Err(err) => {
            error!("Error fetching team members by subteam: {err}");
            fail(
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to fetch team members",
            )
        }
    }
}

/// `GET /api/team-members-grouped`: members reduced into a map keyed by
/// sub-team display name.
pub(crate) async fn grouped_members(State(state): State<AppState>) -> Response {
    match state.with_storage(|storage| storage.all_members()) {
        Ok(members) => {
            let mut grouped: BTreeMap<String, Vec<MemberSummary>> = BTreeMap::new();
            for member in &members {
                grouped
                    .entry(member.subteam.clone())
                    .or_default()
                    .push(MemberSummary::from(member));
            }
            Json(Envelope::ok(grouped)).into_response()
        }
        Err(err) => {
            error!("Error fetching grouped team members: {err}");
            fail(
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to fetch team members",
            )
        }
    }
}

/// `GET /api/sub-teams`: all sub-teams with decoded sequence fields.
pub(crate) async fn list_sub_teams(State(state): State<AppState>) -> Response {
    match state.with_storage(|storage| storage.all_sub_teams()) {
        Ok(teams) => {
            let count = teams.len();
            Json(Envelope::ok_with_count(teams, count)).into_response()
        }
        Err(err) => {
            error!("Error fetching sub-teams: {err}");
            fail(
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to fetch sub-teams",
            )
        }
    }
}

/// `GET /api/sub-teams/:id`: one sub-team with its derived member list.
///
/// The short id is translated through the alias table to the display name
/// used on member rows before querying.
pub(crate) async fn sub_team_detail(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Response {
    let result = state.with_storage(|storage| {
        let Some(sub_team) = storage.sub_team_by_id(&id)? else {
            return Ok(None);
        };

        let display_name = aliases::display_name_or_self(&id);
        let members = storage.members_by_subteam(display_name)?;

        Ok(Some(SubTeamDetail {
            sub_team,
            members: members.iter().map(SubTeamMemberRef::from).collect(),
        }))
    });

    match result {
        Ok(Some(detail)) => Json(Envelope::ok(detail)).into_response(),
        Ok(None) => fail(StatusCode::NOT_FOUND, "Sub-team not found"),
        Err(err) => {
            error!("Error fetching sub-team: {err}");
            fail(StatusCode::INTERNAL_SERVER_ERROR, "Failed to fetch sub-team")
        }
    }
}

/// `GET /api/health`: liveness probe, always 200.
pub(crate) async fn health() -> Response {
    Json(json!({
        "status": "ok",
        "timestamp": Utc::now().to_rfc3339(),
    }))
    .into_response()
}

/// `GET /assets/*path`: static image files, mapped 1:1 to disk.
pub(crate) async fn get_asset(
    State(state): State<AppState>,
    Path(path): Path<String>,
) -> Response {
    if is_unsafe_path(&path) {
        return fail(StatusCode::NOT_FOUND, "Asset not found");
    }

    let full_path = state.assets_dir().join(&path);
    match tokio::fs::read(&full_path).await {
        Ok(bytes) => (
            [(header::CONTENT_TYPE, content_type_for(&path))],
            bytes,
        )
            .into_response(),
        Err(_) => fail(StatusCode::NOT_FOUND, "Asset not found"),
    }
}

/// Reject anything that could escape the assets directory.
fn is_unsafe_path(path: &str) -> bool {
    path.split('/')
        .any(|segment| segment.is_empty() || segment == "." || segment == "..")
}

/// Content type from the file extension; images only, octet-stream otherwise.
fn content_type_for(path: &str) -> &'static str {
    let extension = path.rsplit('.').next().unwrap_or_default();
    match extension.to_ascii_lowercase().as_str() {
        "jpg" | "jpeg" => "image/jpeg",
        "png" => "image/png",
        "gif" => "image/gif",
        "svg" => "image/svg+xml",
        "webp" => "image/webp",
        "ico" => "image/x-icon",
        _ => "application/octet-stream",
    }
}
