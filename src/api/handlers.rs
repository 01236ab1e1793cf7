//! HTTP request handlers for the trip reports API.
//!
//! This module contains the handler functions for all API endpoints. The
//! dashboard endpoints use the degrading service operations, so an unknown
//! employee renders as an empty chart and a zeroed summary rather than an
//! error. `/employees/:id/summary/strict` uses the fallible form and maps
//! the lookup failure to an error status.

use std::time::Instant;

use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};
use serde_json::{json, Value};
use tracing::{info, warn};
use uuid::Uuid;

use crate::models::{EmployeeSummary, TripLineItem, YearSeriesPoint};
use crate::service::ReportingService;

use super::response::{ApiErrorResponse, EmployeeReport, MainReport};
use super::state::AppState;

type ApiResult<T> = Result<Json<T>, ApiErrorResponse>;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .route("/report", get(main_report_handler))
        .route("/trips", get(trips_handler))
        .route("/stats/money-by-year", get(money_by_year_handler))
        .route("/stats/trips-by-year", get(trips_by_year_handler))
        .route("/employees/:id", get(employee_report_handler))
        .route("/employees/:id/summary", get(employee_summary_handler))
        .route(
            "/employees/:id/summary/strict",
            get(employee_summary_strict_handler),
        )
        .route(
            "/employees/:id/trips-by-year",
            get(employee_trips_by_year_handler),
        )
        .with_state(state)
}

async fn health_handler() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

/// Handler for GET /report: the main dashboard page payload.
async fn main_report_handler(State(state): State<AppState>) -> ApiResult<MainReport> {
    run_report(&state, "main_report", |service| MainReport {
        table: service.list_all_trip_line_items(),
        chart1: service.money_spent_by_year(),
        chart2: service.trip_count_by_year(),
    })
    .await
    .map(Json)
}

/// Handler for GET /trips.
async fn trips_handler(State(state): State<AppState>) -> ApiResult<Vec<TripLineItem>> {
    run_report(&state, "trips", ReportingService::list_all_trip_line_items)
        .await
        .map(Json)
}

/// Handler for GET /stats/money-by-year.
async fn money_by_year_handler(State(state): State<AppState>) -> ApiResult<Vec<YearSeriesPoint>> {
    run_report(&state, "money_by_year", ReportingService::money_spent_by_year)
        .await
        .map(Json)
}

/// Handler for GET /stats/trips-by-year.
async fn trips_by_year_handler(State(state): State<AppState>) -> ApiResult<Vec<YearSeriesPoint>> {
    run_report(&state, "trips_by_year", ReportingService::trip_count_by_year)
        .await
        .map(Json)
}

/// Handler for GET /employees/:id: the employee page payload.
async fn employee_report_handler(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> ApiResult<EmployeeReport> {
    let id = parse_employee_id(&raw_id)?;
    run_report(&state, "employee_report", move |service| EmployeeReport {
        table: service.employee_summary(id),
        chart: service.employee_trip_count_by_year(id),
    })
    .await
    .map(Json)
}

/// Handler for GET /employees/:id/summary.
async fn employee_summary_handler(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> ApiResult<EmployeeSummary> {
    let id = parse_employee_id(&raw_id)?;
    run_report(&state, "employee_summary", move |service| {
        service.employee_summary(id)
    })
    .await
    .map(Json)
}

/// Handler for GET /employees/:id/summary/strict.
///
/// An unknown employee is a 404 and a failed fetch a 503.
async fn employee_summary_strict_handler(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> ApiResult<EmployeeSummary> {
    let id = parse_employee_id(&raw_id)?;
    let summary = run_report(&state, "employee_summary_strict", move |service| {
        service.try_employee_summary(id)
    })
    .await??;
    Ok(Json(summary))
}

/// Handler for GET /employees/:id/trips-by-year.
async fn employee_trips_by_year_handler(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> ApiResult<Vec<YearSeriesPoint>> {
    let id = parse_employee_id(&raw_id)?;
    run_report(&state, "employee_trips_by_year", move |service| {
        service.employee_trip_count_by_year(id)
    })
    .await
    .map(Json)
}

fn parse_employee_id(raw: &str) -> Result<u32, ApiErrorResponse> {
    raw.parse::<u32>().map_err(|_| {
        warn!(raw_id = %raw, "Rejected malformed employee id");
        ApiErrorResponse::invalid_employee_id(raw)
    })
}

/// Builds a report off the async runtime.
///
/// Repository fetches are blocking calls, so each report runs on the
/// blocking pool with its own clone of the service.
async fn run_report<T, F>(
    state: &AppState,
    report: &'static str,
    build: F,
) -> Result<T, ApiErrorResponse>
where
    T: Send + 'static,
    F: FnOnce(&ReportingService) -> T + Send + 'static,
{
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, report, "Processing report request");

    let service = state.service().clone();
    let start_time = Instant::now();

    match tokio::task::spawn_blocking(move || build(&service)).await {
        Ok(result) => {
            info!(
                correlation_id = %correlation_id,
                report,
                duration_us = start_time.elapsed().as_micros(),
                "Report built"
            );
            Ok(result)
        }
        Err(err) => {
            warn!(correlation_id = %correlation_id, report, error = %err, "Report task failed");
            Err(ApiErrorResponse::report_failed(err.to_string()))
        }
    }
}
