//! Integration tests for the score REST API, driven through the router
//! without binding a socket.

use axum::body::Body;
use axum::Router;
use http::{header, Request, StatusCode};
use serde_json::{json, Value};
use tower::ServiceExt;

use sliding_puzzle::scores::database::ScoreDatabase;
use sliding_puzzle::servers::{WebConfig, WebServer};

fn test_app() -> (Router, ScoreDatabase) {
    let db = ScoreDatabase::in_memory().unwrap();
    let server = WebServer::new(WebConfig::default(), db.clone());
    (server.create_router(), db)
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

fn post_score(body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/api/scores")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

#[tokio::test]
async fn test_post_score_returns_created_record() {
    let (app, _db) = test_app();

    let response = app
        .oneshot(post_score(json!({
            "playerName": "  Ada  ",
            "moves": 20,
            "time": 90,
            "puzzleType": "neon"
        })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);
    let record = body_json(response).await;
    assert_eq!(record["playerName"], "Ada");
    assert_eq!(record["moves"], 20);
    assert_eq!(record["time"], 90);
    assert_eq!(record["puzzleType"], "neon");
    assert!(record["id"].as_str().is_some_and(|id| !id.is_empty()));
    assert!(record["createdAt"]
        .as_str()
        .is_some_and(|ts| !ts.is_empty()));
}

#[tokio::test]
async fn test_post_score_defaults_puzzle_type() {
    let (app, _db) = test_app();

    let response = app
        .oneshot(post_score(json!({
            "playerName": "Ada",
            "moves": 5,
            "time": 10
        })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);
    assert_eq!(body_json(response).await["puzzleType"], "custom");
}

#[tokio::test]
async fn test_post_score_rejects_missing_fields() {
    for body in [
        json!({ "moves": 5, "time": 10 }),
        json!({ "playerName": "Ada", "time": 10 }),
        json!({ "playerName": "Ada", "moves": 5 }),
        json!({ "playerName": "   ", "moves": 5, "time": 10 }),
    ] {
        let (app, _db) = test_app();
        let response = app.oneshot(post_score(body.clone())).await.unwrap();
        assert_eq!(
            response.status(),
            StatusCode::BAD_REQUEST,
            "body {} should be rejected",
            body
        );
    }
}

#[tokio::test]
async fn test_get_scores_orders_by_moves_then_time() {
    let (app, db) = test_app();
    db.insert_score("a", 20, 90, "custom").unwrap();
    db.insert_score("b", 15, 200, "custom").unwrap();
    db.insert_score("c", 15, 100, "custom").unwrap();

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/scores")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let scores = body_json(response).await;
    let ranking: Vec<(i64, i64)> = scores
        .as_array()
        .unwrap()
        .iter()
        .map(|s| (s["moves"].as_i64().unwrap(), s["time"].as_i64().unwrap()))
        .collect();
    assert_eq!(ranking, vec![(15, 100), (15, 200), (20, 90)]);
}

#[tokio::test]
async fn test_get_scores_returns_at_most_ten() {
    let (app, db) = test_app();
    for i in 0..12 {
        db.insert_score("p", i, 60, "custom").unwrap();
    }

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/scores")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await.as_array().unwrap().len(), 10);
}
