use axum::{body::to_bytes, http::Request, Router};
use runboard_rs::{config::Config, routes, state::AppState};
use serde_json::Value;
use tower::ServiceExt;

fn test_config() -> Config {
    Config {
        port: 0,
        fetch_limit: 200,
        cache_ttl: std::time::Duration::from_secs(900),
        data_dir: std::env::temp_dir().join(format!("runboard-test-{}", uuid::Uuid::new_v4())),
        strava_client_id: None,
        strava_client_secret: None,
        strava_refresh_token: None,
    }
}

fn app() -> Router {
    let state = AppState::new(test_config());
    Router::new()
        .merge(routes::charts::router())
        .merge(routes::weight::router())
        .with_state(state)
}

async fn post_weight(app: &Router, payload: Value) -> axum::response::Response {
    app.clone()
        .oneshot(
            Request::builder()
                .uri("/api/weight")
                .method("POST")
                .header("content-type", "application/json")
                .body(axum::body::Body::from(payload.to_string()))
                .expect("request"),
        )
        .await
        .expect("response")
}

#[tokio::test]
async fn logged_entries_come_back_in_order() {
    let app = app();

    for (date, kg) in [("2026-03-01", 74.5), ("2026-03-08", 74.1), ("2026-03-15", 73.8)] {
        let response = post_weight(&app, serde_json::json!({"date": date, "weight_kg": kg})).await;
        assert_eq!(response.status(), axum::http::StatusCode::OK);
    }

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/weight")
                .method("GET")
                .body(axum::body::Body::empty())
                .expect("request"),
        )
        .await
        .expect("response");

    assert_eq!(response.status(), axum::http::StatusCode::OK);
    let body = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body bytes");
    let json: Value = serde_json::from_slice(&body).expect("json");
    let entries = json["entries"].as_array().expect("entries array");
    assert_eq!(entries.len(), 3);
    assert_eq!(entries[0]["date"], "2026-03-01");
    assert_eq!(entries[0]["weight_kg"], 74.5);
    assert_eq!(entries[2]["date"], "2026-03-15");
}

#[tokio::test]
async fn missing_date_defaults_to_today() {
    let response = post_weight(&app(), serde_json::json!({"weight_kg": 80.0})).await;

    assert_eq!(response.status(), axum::http::StatusCode::OK);
    let body = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body bytes");
    let json: Value = serde_json::from_slice(&body).expect("json");
    assert_eq!(json["weight_kg"], 80.0);
    assert!(json["date"].as_str().is_some());
}

#[tokio::test]
async fn out_of_range_weights_are_rejected() {
    let app = app();

    for kg in [20.0, 250.0, -5.0] {
        let response =
            post_weight(&app, serde_json::json!({"date": "2026-03-01", "weight_kg": kg})).await;
        assert_eq!(response.status(), axum::http::StatusCode::BAD_REQUEST);
        let body = to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body bytes");
        let json: Value = serde_json::from_slice(&body).expect("json");
        assert!(json["error"].as_str().expect("error").contains("Invalid weight"));
    }
}

#[tokio::test]
async fn boundary_weights_are_accepted() {
    let app = app();

    for kg in [30.0, 200.0] {
        let response =
            post_weight(&app, serde_json::json!({"date": "2026-03-01", "weight_kg": kg})).await;
        assert_eq!(response.status(), axum::http::StatusCode::OK);
    }
}

#[tokio::test]
async fn weight_chart_renders_png() {
    let app = app();

    for (date, kg) in [("2026-03-01", 74.5), ("2026-03-08", 74.1)] {
        post_weight(&app, serde_json::json!({"date": date, "weight_kg": kg})).await;
    }

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/charts/weight")
                .method("GET")
                .body(axum::body::Body::empty())
                .expect("request"),
        )
        .await
        .expect("response");

    assert_eq!(response.status(), axum::http::StatusCode::OK);
    let content_type = response
        .headers()
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("");
    assert_eq!(content_type, "image/png");
    let body = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body bytes");
    assert!(body.len() > 100);
    assert_eq!(&body[..8], b"\x89PNG\r\n\x1a\n");
}

#[tokio::test]
async fn weight_chart_with_no_entries_still_renders() {
    let response = app()
        .oneshot(
            Request::builder()
                .uri("/api/charts/weight")
                .method("GET")
                .body(axum::body::Body::empty())
                .expect("request"),
        )
        .await
        .expect("response");

    assert_eq!(response.status(), axum::http::StatusCode::OK);
}
