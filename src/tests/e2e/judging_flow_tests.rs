use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use std::sync::Arc;
use tower::ServiceExt;

use crate::shared::infrastructure::document_store::in_memory::InMemoryDocumentStore;
use crate::shared::infrastructure::snapshot_store::file::FileSnapshotStore;
use crate::shell::http::router;
use crate::shell::state::AppState;

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&bytes).unwrap_or(Value::Null))
}

fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::post(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::get(uri).body(Body::empty()).unwrap()
}

async fn submit_project(app: &Router, team_name: &str, title: &str) -> String {
    let (status, json) = send(
        app,
        post_json("/projects", json!({ "team_name": team_name, "title": title })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    json["project_id"].as_str().unwrap().to_string()
}

async fn rate(app: &Router, project_id: &str, judge_id: &str, scores: [f64; 4]) {
    let (status, _) = send(
        app,
        post_json(
            "/ratings",
            json!({
                "project_id": project_id,
                "judge_id": judge_id,
                "impact": scores[0],
                "innovation": scores[1],
                "feasibility": scores[2],
                "presentation": scores[3],
            }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::NO_CONTENT);
}

#[tokio::test]
async fn it_should_rank_projects_and_publish_the_snapshot() {
    let snapshot_dir = tempfile::tempdir().unwrap();
    let app = router(AppState::new(
        Arc::new(InMemoryDocumentStore::new()),
        Arc::new(FileSnapshotStore::new(snapshot_dir.path())),
    ));

    let falcons = submit_project(&app, "Falcons", "Pollution Monitor").await;
    let v4 = submit_project(&app, "V4", "Campus Navigator").await;
    let idle = submit_project(&app, "Idle Hands", "Unfinished").await;

    rate(&app, &falcons, "het@s4ds.com", [20.0, 25.0, 20.0, 20.0]).await;
    rate(&app, &falcons, "lekhraj@s4ds.com", [22.0, 23.0, 24.0, 23.0]).await;
    rate(&app, &v4, "het@s4ds.com", [15.0, 15.0, 15.0, 15.0]).await;
    // A judge revising their rating replaces it.
    rate(&app, &v4, "het@s4ds.com", [25.0, 25.0, 25.0, 25.0]).await;

    let (status, board) = send(&app, get("/leaderboard?refresh_snapshot=true")).await;
    assert_eq!(status, StatusCode::OK);
    let order: Vec<(&str, &str, i64)> = board
        .as_array()
        .unwrap()
        .iter()
        .map(|row| {
            (
                row["project_id"].as_str().unwrap(),
                row["display_score"].as_str().unwrap(),
                row["rank"].as_i64().unwrap(),
            )
        })
        .collect();
    assert_eq!(
        order,
        vec![
            (v4.as_str(), "100.0", 1),
            (falcons.as_str(), "88.5", 2),
            (idle.as_str(), "0.0", 3),
        ]
    );

    let (status, snapshot) = send(&app, get("/leaderboard/snapshot")).await;
    assert_eq!(status, StatusCode::OK);
    assert!(snapshot["updatedAt"].is_i64());
    assert_eq!(
        snapshot["entries"],
        json!([
            { "id": v4, "teamName": "V4", "projectName": "Campus Navigator", "score": 100.0, "rank": 1 },
            { "id": falcons, "teamName": "Falcons", "projectName": "Pollution Monitor", "score": 88.5, "rank": 2 },
            { "id": idle, "teamName": "Idle Hands", "projectName": "Unfinished", "score": 0.0, "rank": 3 },
        ])
    );

    let (status, dashboard) = send(&app, get("/dashboard")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(dashboard["total_projects"], json!(3));
    assert_eq!(dashboard["active_judges"], json!(2));
    assert_eq!(dashboard["evaluations_complete"], json!(2));
    assert_eq!(
        dashboard["evaluations"][0],
        json!({
            "project_id": falcons,
            "project_title": "Pollution Monitor",
            "total_score": 177.0,
            "evaluation_count": 2,
            "evaluated_by": "het@s4ds.com, lekhraj@s4ds.com",
        })
    );
}

#[tokio::test]
async fn it_should_keep_serving_the_last_snapshot_after_a_restart() {
    let snapshot_dir = tempfile::tempdir().unwrap();
    let first = router(AppState::new(
        Arc::new(InMemoryDocumentStore::new()),
        Arc::new(FileSnapshotStore::new(snapshot_dir.path())),
    ));
    let project_id = submit_project(&first, "Falcons", "Pollution Monitor").await;
    rate(&first, &project_id, "het@s4ds.com", [20.0, 25.0, 20.0, 20.0]).await;
    send(&first, get("/leaderboard?refresh_snapshot=true")).await;

    let restarted = router(AppState::new(
        Arc::new(InMemoryDocumentStore::new()),
        Arc::new(FileSnapshotStore::new(snapshot_dir.path())),
    ));
    let (_, board) = send(&restarted, get("/leaderboard")).await;
    assert_eq!(board, json!([]));
    let (_, snapshot) = send(&restarted, get("/leaderboard/snapshot")).await;
    assert_eq!(snapshot["entries"][0]["teamName"], json!("Falcons"));
    assert_eq!(snapshot["entries"][0]["score"], json!(85.0));
}
