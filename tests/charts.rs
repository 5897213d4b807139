use axum::{body::to_bytes, http::Request, Router};
use chrono::NaiveDate;
use runboard_rs::pipeline::calendar::build_calendar;
use runboard_rs::pipeline::render::{
    heatmap_dimensions, render_calendar_heatmap, render_weekly_chart, render_weight_chart,
};
use runboard_rs::store::weight::WeightEntry;
use runboard_rs::types::chart::ChartOptions;
use runboard_rs::types::gradient::Gradient;
use runboard_rs::types::summary::{CalendarWeek, WeekBucket};
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
        .with_state(state)
}

fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").expect("date")
}

fn bucket(week_start: &str, miles: f64) -> WeekBucket {
    WeekBucket {
        week_start: date(week_start),
        total_miles: miles,
        number_of_runs: 3,
    }
}

async fn get_json(app: Router, uri: &str) -> (axum::http::StatusCode, Value) {
    let response = app
        .oneshot(
            Request::builder()
                .uri(uri)
                .method("GET")
                .body(axum::body::Body::empty())
                .expect("request"),
        )
        .await
        .expect("response");
    let status = response.status();
    let body = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body bytes");
    let json: Value = serde_json::from_slice(&body).expect("json");
    (status, json)
}

#[test]
fn weekly_chart_draws_line_and_markers() {
    let weeks = vec![
        bucket("2026-02-16", 12.0),
        bucket("2026-02-23", 15.5),
        bucket("2026-03-02", 9.0),
    ];

    let svg = render_weekly_chart(&weeks, &ChartOptions::line_defaults()).expect("svg");
    assert!(svg.starts_with("<svg"));
    assert!(svg.contains("Weekly Running Mileage"));
    assert!(svg.contains("<path"));
    assert_eq!(svg.matches("<circle").count(), 3);
    assert!(svg.contains("Feb 16"));
    assert!(svg.contains("Mar 02"));
}

#[test]
fn empty_weekly_chart_still_renders_a_frame() {
    let svg = render_weekly_chart(&[], &ChartOptions::line_defaults()).expect("svg");
    assert!(svg.contains("Weekly Running Mileage"));
    assert!(!svg.contains("<path"));
    assert!(!svg.contains("<circle"));
}

#[test]
fn single_point_gets_a_marker_but_no_line() {
    let weeks = vec![bucket("2026-03-02", 9.0)];

    let svg = render_weekly_chart(&weeks, &ChartOptions::line_defaults()).expect("svg");
    assert!(!svg.contains("<path"));
    assert_eq!(svg.matches("<circle").count(), 1);
}

#[test]
fn weight_chart_orders_by_date() {
    let entries = vec![
        WeightEntry {
            date: date("2026-03-08"),
            weight_kg: 74.1,
        },
        WeightEntry {
            date: date("2026-03-01"),
            weight_kg: 74.5,
        },
    ];

    let svg = render_weight_chart(&entries, &ChartOptions::line_defaults()).expect("svg");
    assert!(svg.contains("Body Weight (kg)"));
    let first = svg.find("Mar 01").expect("first label");
    let second = svg.find("Mar 08").expect("second label");
    assert!(first < second);
}

#[test]
fn heatmap_renders_one_cell_per_day() {
    let grid = build_calendar(&[], Some(date("2026-03-04")));

    let svg = render_calendar_heatmap(&grid, &Gradient::default()).expect("svg");
    assert_eq!(svg.matches("<rect").count(), 42);
    // All rest days share the neutral fill.
    assert_eq!(svg.matches("#161B22").count(), 42);
}

#[test]
fn heatmap_rejects_ragged_weeks() {
    let ragged = vec![CalendarWeek {
        week_start: date("2026-03-02"),
        days: Vec::new(),
        total_miles: 0.0,
        total_runs: 0,
    }];

    assert!(render_calendar_heatmap(&ragged, &Gradient::default()).is_err());
}

#[test]
fn heatmap_height_tracks_week_count() {
    let (w_small, h_small) = heatmap_dimensions(2);
    let (w_large, h_large) = heatmap_dimensions(6);
    assert_eq!(w_small, w_large);
    assert!(h_large > h_small);
}

#[test]
fn gradient_endpoints_and_stroke() {
    let gradient = Gradient::default();
    assert_eq!(gradient.interpolate(0.0), "#0E4429");
    assert_eq!(gradient.interpolate(1.0), "#39D353");
    assert_eq!(gradient.stroke(), "#39D353");
    assert!(Gradient::get("ocean").is_some());
    assert!(Gradient::get("lava").is_none());
}

#[tokio::test]
async fn unknown_gradient_is_rejected() {
    let (status, json) = get_json(app(), "/api/charts/weekly?gradient=lava").await;
    assert_eq!(status, axum::http::StatusCode::BAD_REQUEST);
    assert!(json["error"].as_str().expect("error").contains("Invalid gradient"));
}

#[tokio::test]
async fn width_requires_height() {
    let (status, json) = get_json(app(), "/api/charts/weekly?width=900").await;
    assert_eq!(status, axum::http::StatusCode::BAD_REQUEST);
    assert!(json["error"]
        .as_str()
        .expect("error")
        .contains("width and height"));
}

#[tokio::test]
async fn dimensions_out_of_range_are_rejected() {
    let (status, json) = get_json(app(), "/api/charts/weekly?width=100&height=100").await;
    assert_eq!(status, axum::http::StatusCode::BAD_REQUEST);
    assert!(json["error"].as_str().expect("error").contains("Invalid dimensions"));

    let (status, json) = get_json(app(), "/api/charts/calendar?width=4000&height=4000").await;
    assert_eq!(status, axum::http::StatusCode::BAD_REQUEST);
    assert!(json["error"].as_str().expect("error").contains("too large"));
}

#[tokio::test]
async fn weekly_chart_without_credentials_is_a_gateway_error() {
    let (status, json) = get_json(app(), "/api/charts/weekly").await;
    assert_eq!(status, axum::http::StatusCode::BAD_GATEWAY);
    assert!(json["error"].as_str().is_some());
}
