//! The typed accessor over the roster HTTP surface.

use std::time::Duration;

use reqwest::Url;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::error::{ClientError, Result};
use crate::fallback;
use crate::types::{
    Envelope, GroupedMembers, Health, SubTeam, SubTeamDetail, TeamMember,
};

/// Environment variable naming the service base URL.
pub const BASE_URL_ENV: &str = "ROSTER_API_URL";

/// Base URL used when no configuration is provided.
pub const DEFAULT_BASE_URL: &str = "http://localhost:3001";

/// How long a single request may take before the client gives up.
///
/// Kept short so consumers fall back instead of hanging the page.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(4);

/// Whether a payload was served by the live service or substituted from the
/// bundled snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fetched<T> {
    /// Served by the live service.
    Live(T),
    /// Substituted from the bundled snapshot after a failed request.
    Fallback(T),
}

impl<T> Fetched<T> {
    /// Borrow the payload regardless of provenance.
    pub fn data(&self) -> &T {
        match self {
            Self::Live(data) | Self::Fallback(data) => data,
        }
    }

    /// Consume the wrapper, discarding provenance.
    pub fn into_data(self) -> T {
        match self {
            Self::Live(data) | Self::Fallback(data) => data,
        }
    }

    /// Check whether the payload came from the bundled snapshot.
    #[must_use]
    pub fn is_fallback(&self) -> bool {
        matches!(self, Self::Fallback(_))
    }
}

/// Client for the roster data service.
#[derive(Debug, Clone)]
pub struct RosterClient {
    base_url: Url,
    http: reqwest::Client,
}

impl RosterClient {
    /// Create a client against the given base URL.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL is unparseable or the HTTP client cannot
    /// be constructed.
    pub fn new(base_url: &str) -> Result<Self> {
        let url = Url::parse(base_url).map_err(|_| ClientError::InvalidBaseUrl {
            url: base_url.to_string(),
        })?;
        if url.cannot_be_a_base() {
            return Err(ClientError::InvalidBaseUrl {
                url: base_url.to_string(),
            });
        }

        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;

        Ok(Self {
            base_url: url,
            http,
        })
    }

    /// Create a client from `ROSTER_API_URL`, defaulting to the local
    /// service address.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured URL is invalid.
    pub fn from_env() -> Result<Self> {
        let base_url =
            std::env::var(BASE_URL_ENV).unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        Self::new(&base_url)
    }

    /// The base URL this client targets.
    #[must_use]
    pub fn base_url(&self) -> &str {
        self.base_url.as_str()
    }

    /// Fetch all team members.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure or a non-success envelope.
    pub async fn team_members(&self) -> Result<Vec<TeamMember>> {
        self.get_data(&["api", "team-members"]).await
    }

    /// Fetch team members of one sub-team by its display name.
    ///
    /// An unknown name yields an empty vec, mirroring the service.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure or a non-success envelope.
    pub async fn team_members_by_subteam(&self, subteam: &str) -> Result<Vec<TeamMember>> {
        self.get_data(&["api", "team-members", subteam]).await
    }

    /// Fetch team members grouped by sub-team display name.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure or a non-success envelope.
    pub async fn grouped_members(&self) -> Result<GroupedMembers> {
        self.get_data(&["api", "team-members-grouped"]).await
    }

    /// Fetch team members grouped by sub-team, substituting the bundled
    /// snapshot if the service is unreachable or answers with an error.
    ///
    /// The provenance is explicit in the return type; at most one
    /// substitution happens, never a retry loop.
    pub async fn grouped_members_or_fallback(&self) -> Fetched<GroupedMembers> {
        match self.grouped_members().await {
            Ok(data) => Fetched::Live(data),
            Err(err) => {
                warn!("Falling back to bundled roster snapshot: {err}");
                Fetched::Fallback(fallback::grouped_snapshot())
            }
        }
    }

    /// Fetch all sub-teams.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure or a non-success envelope.
    pub async fn sub_teams(&self) -> Result<Vec<SubTeam>> {
        self.get_data(&["api", "sub-teams"]).await
    }

    /// Fetch one sub-team by id, with its derived member list.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Api`] when the id is unknown, or an error on
    /// transport failure.
    pub async fn sub_team_with_members(&self, id: &str) -> Result<SubTeamDetail> {
        self.get_data(&["api", "sub-teams", id]).await
    }

    /// Probe the service health endpoint.
    ///
    /// Never fails: any transport or decode problem reads as "not healthy".
    pub async fn health(&self) -> bool {
        let url = self.endpoint(&["api", "health"]);
        match self.http.get(url).send().await {
            Ok(response) => response
                .json::<Health>()
                .await
                .map(|health| health.status == "ok")
                .unwrap_or(false),
            Err(err) => {
                debug!("Health probe failed: {err}");
                false
            }
        }
    }

    /// Resolve a possibly-relative image path against the base URL.
    ///
    /// Absolute URLs pass through untouched; one leading separator is
    /// stripped before joining so no double slash appears.
    #[must_use]
    pub fn resolve_asset_url(&self, image_path: &str) -> String {
        resolve_asset_url(self.base_url.as_str(), image_path)
    }

    /// Build an endpoint URL from path segments, percent-encoding each.
    fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        // cannot_be_a_base was rejected in new(), so this always succeeds.
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    /// GET an endpoint and unwrap its envelope.
    async fn get_data<T: DeserializeOwned>(&self, segments: &[&str]) -> Result<T> {
        let url = self.endpoint(segments);
        debug!("GET {url}");

        let envelope: Envelope<T> = self.http.get(url).send().await?.json().await?;

        if !envelope.success {
            return Err(ClientError::Api {
                message: envelope
                    .error
                    .unwrap_or_else(|| "service reported failure".to_string()),
            });
        }
        envelope.data.ok_or(ClientError::MissingData)
    }
}

/// Resolve a possibly-relative image path against a service base URL.
///
/// This is the pure helper behind [`RosterClient::resolve_asset_url`]:
/// absolute URLs pass through, otherwise one leading `/` is stripped and the
/// path joined onto the base address.
#[must_use]
pub fn resolve_asset_url(base_url: &str, image_path: &str) -> String {
    if image_path.starts_with("http") {
        return image_path.to_string();
    }
    let clean = image_path.strip_prefix('/').unwrap_or(image_path);
    format!("{}/{}", base_url.trim_end_matches('/'), clean)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_asset_url_joins_relative_path() {
        assert_eq!(
            resolve_asset_url("http://h:3001", "/assets/x.jpg"),
            "http://h:3001/assets/x.jpg"
        );
    }

    #[test]
    fn test_resolve_asset_url_without_leading_slash() {
        assert_eq!(
            resolve_asset_url("http://h:3001", "assets/x.jpg"),
            "http://h:3001/assets/x.jpg"
        );
    }

    #[test]
    fn test_resolve_asset_url_passes_absolute_through() {
        assert_eq!(
            resolve_asset_url("http://h:3001", "https://cdn.example/x.jpg"),
            "https://cdn.example/x.jpg"
        );
    }

    #[test]
    fn test_resolve_asset_url_no_double_slash() {
        assert_eq!(
            resolve_asset_url("http://h:3001/", "/assets/x.jpg"),
            "http://h:3001/assets/x.jpg"
        );
    }

    #[test]
    fn test_client_resolve_uses_configured_base() {
        let client = RosterClient::new("http://h:3001").unwrap();
        assert_eq!(
            client.resolve_asset_url("/assets/x.jpg"),
            "http://h:3001/assets/x.jpg"
        );
    }

    #[test]
    fn test_new_rejects_invalid_base_url() {
        assert!(matches!(
            RosterClient::new("not a url"),
            Err(ClientError::InvalidBaseUrl { .. })
        ));
        assert!(matches!(
            RosterClient::new("data:text/plain,hi"),
            Err(ClientError::InvalidBaseUrl { .. })
        ));
    }

    #[test]
    fn test_endpoint_percent_encodes_segments() {
        let client = RosterClient::new("http://localhost:3001").unwrap();
        let url = client.endpoint(&["api", "team-members", "Electronics & Powertrain"]);
        assert_eq!(
            url.as_str(),
            "http://localhost:3001/api/team-members/Electronics%20&%20Powertrain"
        );
    }

    #[test]
    fn test_fetched_accessors() {
        let live = Fetched::Live(1);
        assert!(!live.is_fallback());
        assert_eq!(*live.data(), 1);

        let fallback = Fetched::Fallback(2);
        assert!(fallback.is_fallback());
        assert_eq!(fallback.into_data(), 2);
    }
}
