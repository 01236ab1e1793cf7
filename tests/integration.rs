//! Integration tests for the trip reports API.
//!
//! This test suite drives the router against the bundled sample dataset
//! (`config/data/trips.yaml`) and covers:
//! - The main page payload (listing + both yearly charts)
//! - The employee page payload
//! - Individual report endpoints
//! - Degraded results for unknown employees
//! - Error cases

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tower::ServiceExt;

use trip_reports::api::{create_router, AppState};
use trip_reports::config::ConfigLoader;

// =============================================================================
// Test Helpers
// =============================================================================

fn create_test_state() -> AppState {
    let loader = ConfigLoader::load("./config/app.yaml").expect("Failed to load config");
    let repository = loader.load_dataset().expect("Failed to load dataset");
    AppState::from_repository(repository)
}

fn create_router_for_test() -> Router {
    create_router(create_test_state())
}

async fn get(router: Router, uri: &str) -> (StatusCode, Value) {
    let response = router
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json: Value = serde_json::from_slice(&body_bytes).unwrap();

    (status, json)
}

fn years(series: &Value) -> Vec<i64> {
    series
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["x"].as_i64().unwrap())
        .collect()
}

// =============================================================================
// Main Page
// =============================================================================

#[tokio::test]
async fn test_main_report_contains_listing_and_charts() {
    let (status, report) = get(create_router_for_test(), "/report").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(report["table"].as_array().unwrap().len(), 5);
    assert_eq!(
        report["chart1"],
        json!([{"x": 2020, "y": 10}, {"x": 2021, "y": 25}, {"x": 2022, "y": 15}])
    );
    assert_eq!(
        report["chart2"],
        json!([{"x": 2020, "y": 2}, {"x": 2021, "y": 1}, {"x": 2022, "y": 2}])
    );
}

#[tokio::test]
async fn test_trip_listing_most_recent_first() {
    let (status, trips) = get(create_router_for_test(), "/trips").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        trips,
        json!([
            {"id": 2, "name": "B", "destination": "Dest3", "date": "05.03.2022", "duration": 5, "moneySpent": 15},
            {"id": 1, "name": "A", "destination": "Dest2", "date": "21.02.2021", "duration": 4, "moneySpent": 20},
            {"id": 2, "name": "B", "destination": "Dest2", "date": "21.02.2021", "duration": 4, "moneySpent": 5},
            {"id": 3, "name": "C", "destination": "Kazan", "date": "10.06.2020", "duration": 4, "moneySpent": 0},
            {"id": 1, "name": "A", "destination": "Dest1", "date": "01.01.2020", "duration": 11, "moneySpent": 10}
        ])
    );
}

#[tokio::test]
async fn test_trip_count_counts_unassigned_trips_once() {
    // Trip 5 has no employees and trip 2 has two; both count once
    let (status, series) = get(create_router_for_test(), "/stats/trips-by-year").await;

    assert_eq!(status, StatusCode::OK);
    let total: i64 = series
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["y"].as_i64().unwrap())
        .sum();
    assert_eq!(total, 5);
}

#[tokio::test]
async fn test_yearly_series_are_ascending() {
    for uri in [
        "/stats/money-by-year",
        "/stats/trips-by-year",
        "/employees/2/trips-by-year",
    ] {
        let (status, series) = get(create_router_for_test(), uri).await;
        assert_eq!(status, StatusCode::OK);

        let years = years(&series);
        assert!(
            years.windows(2).all(|w| w[0] < w[1]),
            "{} returned unsorted years {:?}",
            uri,
            years
        );
    }
}

// =============================================================================
// Employee Page
// =============================================================================

#[tokio::test]
async fn test_employee_page_payload() {
    let (status, report) = get(create_router_for_test(), "/employees/2").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        report["table"],
        json!({
            "name": "B",
            "tripCount": 2,
            "moneySpent": 20,
            "avgTripCount": 1.0,
            "avgMoneySpent": 10.0
        })
    );
    assert_eq!(
        report["chart"],
        json!([{"x": 2021, "y": 1}, {"x": 2022, "y": 1}])
    );
}

#[tokio::test]
async fn test_zero_spend_employee_summary() {
    let (status, summary) = get(create_router_for_test(), "/employees/3/summary").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(summary["name"], "C");
    assert_eq!(summary["tripCount"], 1);
    assert_eq!(summary["moneySpent"], 0);
    assert_eq!(summary["avgTripCount"].as_f64(), Some(1.0));
    assert_eq!(summary["avgMoneySpent"].as_f64(), Some(0.0));
}

#[tokio::test]
async fn test_employee_without_trips_has_zero_averages() {
    let (status, report) = get(create_router_for_test(), "/employees/4").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(report["table"]["name"], "D");
    assert_eq!(report["table"]["tripCount"], 0);
    assert_eq!(report["table"]["avgTripCount"].as_f64(), Some(0.0));
    assert_eq!(report["table"]["avgMoneySpent"].as_f64(), Some(0.0));
    assert_eq!(report["chart"], json!([]));
}

// =============================================================================
// Degraded Results and Errors
// =============================================================================

#[tokio::test]
async fn test_unknown_employee_returns_default_summary() {
    let (status, summary) = get(create_router_for_test(), "/employees/404/summary").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(summary["name"], "");
    assert_eq!(summary["tripCount"], 0);
    assert_eq!(summary["moneySpent"], 0);
}

#[tokio::test]
async fn test_unknown_employee_returns_empty_chart() {
    let (status, series) = get(create_router_for_test(), "/employees/404/trips-by-year").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(series, json!([]));
}

#[tokio::test]
async fn test_strict_summary_reports_unknown_employee() {
    let (status, error) = get(create_router_for_test(), "/employees/404/summary/strict").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(error["code"], "EMPLOYEE_NOT_FOUND");
}

#[tokio::test]
async fn test_strict_summary_matches_dashboard_summary_for_known_employee() {
    let (_, dashboard) = get(create_router_for_test(), "/employees/1/summary").await;
    let (status, strict) = get(create_router_for_test(), "/employees/1/summary/strict").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(strict, dashboard);
}

#[tokio::test]
async fn test_malformed_employee_id_returns_400() {
    let (status, error) = get(create_router_for_test(), "/employees/not-a-number").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error["code"], "INVALID_EMPLOYEE_ID");
    assert!(error["message"].as_str().unwrap().contains("not-a-number"));
}

#[tokio::test]
async fn test_repeated_requests_are_identical() {
    let (_, first) = get(create_router_for_test(), "/report").await;
    let (_, second) = get(create_router_for_test(), "/report").await;

    assert_eq!(first, second);
}
