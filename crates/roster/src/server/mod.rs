//! HTTP query layer for the roster service.
//!
//! An axum router over the storage handle. The store is opened once at
//! startup and passed in explicitly; request handlers only ever read from
//! it, so a single mutex around the connection is the only synchronization.

pub mod envelope;
mod handlers;

use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use axum::extract::{Request, State};
use axum::http::{header, HeaderMap, HeaderValue, Method, StatusCode};
use axum::middleware::{from_fn_with_state, Next};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::Router;
use tracing::info;

use crate::config::Config;
use crate::error::{Error, Result};
use crate::storage::Storage;

/// Shared state handed to every request handler.
#[derive(Debug, Clone)]
pub struct AppState {
    storage: Arc<Mutex<Storage>>,
    assets_dir: Arc<PathBuf>,
    allowed_origins: Arc<Vec<String>>,
}

impl AppState {
    /// Build the request state from an opened store and the configuration.
    #[must_use]
    pub fn new(storage: Storage, config: &Config) -> Self {
        Self {
            storage: Arc::new(Mutex::new(storage)),
            assets_dir: Arc::new(config.assets_dir()),
            allowed_origins: Arc::new(config.server.cors_allowed_origins.clone()),
        }
    }

    /// Run a read operation against the store.
    ///
    /// # Errors
    ///
    /// Returns the operation's error, or an internal error if the storage
    /// lock is poisoned.
    pub(crate) fn with_storage<T>(&self, op: impl FnOnce(&Storage) -> Result<T>) -> Result<T> {
        let guard = self
            .storage
            .lock()
            .map_err(|_| Error::internal("storage lock poisoned"))?;
        op(&guard)
    }

    /// The directory static assets are served from.
    pub(crate) fn assets_dir(&self) -> &Path {
        &self.assets_dir
    }
}

/// Build the roster API router.
#[must_use]
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/api/team-members", get(handlers::list_members))
        .route(
            "/api/team-members/:subteam",
            get(handlers::members_by_subteam),
        )
        .route("/api/team-members-grouped", get(handlers::grouped_members))
        .route("/api/sub-teams", get(handlers::list_sub_teams))
        .route("/api/sub-teams/:id", get(handlers::sub_team_detail))
        .route("/api/health", get(handlers::health))
        .route("/assets/*path", get(handlers::get_asset))
        .layer(from_fn_with_state(state.clone(), cors_middleware))
        .with_state(state)
}

/// Bind the configured address and serve requests until shutdown.
///
/// # Errors
///
/// Returns an error if the listen address cannot be bound or the server
/// fails while running.
pub async fn serve(config: &Config, storage: Storage) -> Result<()> {
    let state = AppState::new(storage, config);
    let app = build_router(state);

    let addr = config.listen_addr();
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|source| Error::ServerBind {
            addr: addr.to_string(),
            source,
        })?;

    info!("Roster API listening on http://{addr}");
    for route in [
        "/api/team-members",
        "/api/team-members/:subteam",
        "/api/team-members-grouped",
        "/api/sub-teams",
        "/api/sub-teams/:id",
        "/api/health",
    ] {
        info!("  GET {route}");
    }

    axum::serve(listener, app).await?;
    Ok(())
}

/// Allow-list CORS for the configured site origins, GET/OPTIONS only.
async fn cors_middleware(State(state): State<AppState>, req: Request, next: Next) -> Response {
    let origin = req
        .headers()
        .get(header::ORIGIN)
        .and_then(|v| v.to_str().ok())
        .map(ToString::to_string);

    if req.method() == Method::OPTIONS {
        let mut response = StatusCode::NO_CONTENT.into_response();
        apply_cors_headers(response.headers_mut(), origin.as_deref(), &state);
        return response;
    }

    let mut response = next.run(req).await;
    apply_cors_headers(response.headers_mut(), origin.as_deref(), &state);
    response
}

fn apply_cors_headers(headers: &mut HeaderMap, origin: Option<&str>, state: &AppState) {
    let Some(origin) = origin else { return };
    if !state.allowed_origins.iter().any(|o| o == origin) {
        return;
    }

    if let Ok(value) = HeaderValue::from_str(origin) {
        headers.insert("access-control-allow-origin", value);
    }
    headers.insert(
        "access-control-allow-methods",
        HeaderValue::from_static("GET,OPTIONS"),
    );
    headers.insert(
        "access-control-allow-headers",
        HeaderValue::from_static("content-type"),
    );
    headers.insert(
        "access-control-allow-credentials",
        HeaderValue::from_static("true"),
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_state() -> AppState {
        AppState::new(Storage::open_in_memory().unwrap(), &Config::default())
    }

    #[test]
    fn test_with_storage_runs_operation() {
        let state = test_state();
        let count = state
            .with_storage(|storage| Ok(storage.all_members()?.len()))
            .unwrap();
        assert_eq!(count, 0);
    }

    #[test]
    fn test_cors_headers_applied_for_allowed_origin() {
        let state = test_state();
        let mut headers = HeaderMap::new();
        apply_cors_headers(&mut headers, Some("http://localhost:5173"), &state);
        assert_eq!(
            headers.get("access-control-allow-origin").unwrap(),
            "http://localhost:5173"
        );
    }

    #[test]
    fn test_cors_headers_skipped_for_unknown_origin() {
        let state = test_state();
        let mut headers = HeaderMap::new();
        apply_cors_headers(&mut headers, Some("http://evil.example"), &state);
        assert!(headers.get("access-control-allow-origin").is_none());
    }

    #[test]
    fn test_cors_headers_skipped_without_origin() {
        let state = test_state();
        let mut headers = HeaderMap::new();
        apply_cors_headers(&mut headers, None, &state);
        assert!(headers.is_empty());
    }
}
