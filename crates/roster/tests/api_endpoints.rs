//! End-to-end tests for the roster API.
//!
//! Each test boots the real router on an ephemeral port against a seeded
//! in-memory store and drives it over HTTP.

use roster::server::{build_router, AppState};
use roster::{Config, Storage};
use serde_json::Value;

async fn spawn_app(config: Config) -> String {
    let storage = Storage::open_in_memory().expect("open in-memory storage");
    roster::seed::run(&storage).expect("seed storage");

    let state = AppState::new(storage, &config);
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind ephemeral port");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("serve");
    });

    format!("http://{addr}")
}

async fn get_json(url: &str) -> (reqwest::StatusCode, Value) {
    let response = reqwest::get(url).await.expect("request");
    let status = response.status();
    let body = response.json().await.expect("json body");
    (status, body)
}

#[tokio::test]
async fn team_members_returns_full_roster_with_count() {
    let base = spawn_app(Config::default()).await;
    let (status, body) = get_json(&format!("{base}/api/team-members")).await;

    assert_eq!(status, 200);
    assert_eq!(body["success"], true);
    assert_eq!(body["count"], 22);
    assert_eq!(body["data"].as_array().unwrap().len(), 22);

    // Ordered by (subteam, display_order): Aerodynamics & Ergonomics first.
    assert_eq!(body["data"][0]["subteam"], "Aerodynamics & Ergonomics");
    assert_eq!(body["data"][0]["name"], "Ishmam Mohammed Chowdhury");
}

#[tokio::test]
async fn team_members_by_subteam_serves_leadership_in_order() {
    let base = spawn_app(Config::default()).await;
    let (status, body) = get_json(&format!("{base}/api/team-members/Leadership")).await;

    assert_eq!(status, 200);
    assert_eq!(body["success"], true);
    assert_eq!(body["count"], 2);
    assert_eq!(body["data"][0]["name"], "Tajbir Ahmed");
    assert_eq!(body["data"][1]["name"], "Mahir Dyan");
}

#[tokio::test]
async fn team_members_by_subteam_decodes_url_encoding() {
    let base = spawn_app(Config::default()).await;
    let (status, body) =
        get_json(&format!("{base}/api/team-members/Electronics%20%26%20Powertrain")).await;

    assert_eq!(status, 200);
    assert_eq!(body["count"], 7);
}

#[tokio::test]
async fn team_members_by_unknown_subteam_is_empty_success() {
    let base = spawn_app(Config::default()).await;
    let (status, body) = get_json(&format!("{base}/api/team-members/Nonexistent")).await;

    assert_eq!(status, 200);
    assert_eq!(body["success"], true);
    assert_eq!(body["count"], 0);
    assert_eq!(body["data"].as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn grouped_members_keys_match_roster_subteams() {
    let base = spawn_app(Config::default()).await;
    let (status, body) = get_json(&format!("{base}/api/team-members-grouped")).await;

    assert_eq!(status, 200);
    assert_eq!(body["success"], true);

    let grouped = body["data"].as_object().unwrap();
    assert_eq!(grouped.len(), 5);
    assert_eq!(grouped["Leadership"].as_array().unwrap().len(), 2);
    assert_eq!(
        grouped["Electronics & Powertrain"].as_array().unwrap().len(),
        7
    );

    // The projection renames image_path and drops grouping metadata.
    let lead = &grouped["Leadership"][0];
    assert_eq!(lead["name"], "Tajbir Ahmed");
    assert_eq!(lead["img"], "/assets/tajbir-ahmed.jpg");
    assert!(lead.get("image_path").is_none());
    assert!(lead.get("subteam").is_none());
    assert!(lead.get("display_order").is_none());
}

#[tokio::test]
async fn sub_teams_decode_goal_sequences_in_order() {
    let base = spawn_app(Config::default()).await;
    let (status, body) = get_json(&format!("{base}/api/sub-teams")).await;

    assert_eq!(status, 200);
    assert_eq!(body["count"], 6);

    let teams = body["data"].as_array().unwrap();
    let powertrain = teams
        .iter()
        .find(|t| t["id"] == "powertrain")
        .expect("powertrain sub-team");
    assert_eq!(
        powertrain["goals"],
        serde_json::json!([
            "Increase battery efficiency by 20%",
            "Develop custom motor controller"
        ])
    );
    assert_eq!(powertrain["achievements"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn sub_team_detail_attaches_translated_members() {
    let base = spawn_app(Config::default()).await;
    let (status, body) = get_json(&format!("{base}/api/sub-teams/powertrain")).await;

    assert_eq!(status, 200);
    assert_eq!(body["success"], true);
    assert_eq!(body["data"]["id"], "powertrain");
    assert_eq!(body["data"]["name"], "Powertrain");

    // "powertrain" translates to the Electronics & Powertrain member pool.
    let members = body["data"]["members"].as_array().unwrap();
    assert_eq!(members.len(), 7);
    assert_eq!(members[0]["name"], "Md. Shafinuzzaman");
    assert_eq!(members[0]["role"], "Electronics, Powertrain & Drivetrain");
    assert_eq!(members[0]["image"], "/assets/shafinuzzaman.jpg");
    assert!(members[0]["id"].is_string());
}

#[tokio::test]
async fn sub_team_detail_alias_is_many_to_one() {
    let base = spawn_app(Config::default()).await;

    // dynamics and chassis collapse onto the same member pool.
    let (_, dynamics) = get_json(&format!("{base}/api/sub-teams/dynamics")).await;
    let (_, chassis) = get_json(&format!("{base}/api/sub-teams/chassis")).await;

    assert_eq!(dynamics["data"]["members"], chassis["data"]["members"]);
    assert_eq!(dynamics["data"]["members"].as_array().unwrap().len(), 4);
}

#[tokio::test]
async fn unknown_sub_team_returns_not_found_envelope() {
    let base = spawn_app(Config::default()).await;
    let (status, body) = get_json(&format!("{base}/api/sub-teams/aerodynamics")).await;

    assert_eq!(status, 404);
    assert_eq!(body["success"], false);
    assert_eq!(body["error"], "Sub-team not found");
    assert!(body.get("data").is_none());
}

#[tokio::test]
async fn health_reports_ok_with_timestamp() {
    let base = spawn_app(Config::default()).await;
    let (status, body) = get_json(&format!("{base}/api/health")).await;

    assert_eq!(status, 200);
    assert_eq!(body["status"], "ok");
    assert!(body["timestamp"].is_string());
}

#[tokio::test]
async fn cors_headers_present_for_allowed_origin() {
    let base = spawn_app(Config::default()).await;

    let client = reqwest::Client::new();
    let response = client
        .get(format!("{base}/api/health"))
        .header("origin", "http://localhost:5173")
        .send()
        .await
        .unwrap();

    assert_eq!(
        response
            .headers()
            .get("access-control-allow-origin")
            .unwrap(),
        "http://localhost:5173"
    );
}

#[tokio::test]
async fn cors_headers_absent_for_unlisted_origin() {
    let base = spawn_app(Config::default()).await;

    let client = reqwest::Client::new();
    let response = client
        .get(format!("{base}/api/health"))
        .header("origin", "http://evil.example")
        .send()
        .await
        .unwrap();

    assert!(response
        .headers()
        .get("access-control-allow-origin")
        .is_none());
}

#[tokio::test]
async fn assets_served_from_configured_directory() {
    let assets_dir = std::env::temp_dir().join(format!("roster_assets_{}", std::process::id()));
    std::fs::create_dir_all(&assets_dir).unwrap();
    std::fs::write(assets_dir.join("tajbir-ahmed.jpg"), b"not really a jpeg").unwrap();

    let mut config = Config::default();
    config.server.assets_dir = Some(assets_dir.clone());
    let base = spawn_app(config).await;

    let response = reqwest::get(format!("{base}/assets/tajbir-ahmed.jpg"))
        .await
        .unwrap();
    assert_eq!(response.status(), 200);
    assert_eq!(
        response.headers().get("content-type").unwrap(),
        "image/jpeg"
    );
    assert_eq!(response.bytes().await.unwrap().as_ref(), b"not really a jpeg");

    let _ = std::fs::remove_dir_all(&assets_dir);
}

#[tokio::test]
async fn missing_asset_is_not_found() {
    let base = spawn_app(Config::default()).await;
    let (status, body) = get_json(&format!("{base}/assets/missing.jpg")).await;

    assert_eq!(status, 404);
    assert_eq!(body["success"], false);
}

#[tokio::test]
async fn asset_path_traversal_is_rejected() {
    let base = spawn_app(Config::default()).await;

    let client = reqwest::Client::new();
    let response = client
        .get(format!("{base}/assets/%2e%2e/secret.txt"))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 404);
}
