//! Response types for the trip reports API.
//!
//! This module defines the page payloads and the error response structures
//! for the HTTP API.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::error::ReportError;
use crate::models::{EmployeeSummary, TripLineItem, YearSeriesPoint};

/// Everything the dashboard's main page renders.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MainReport {
    /// All-trips listing, most recent first.
    pub table: Vec<TripLineItem>,
    /// Money spent per year.
    pub chart1: Vec<YearSeriesPoint>,
    /// Business trips per year.
    pub chart2: Vec<YearSeriesPoint>,
}

/// Everything the dashboard's employee page renders.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmployeeReport {
    /// Totals and averages for the employee.
    pub table: EmployeeSummary,
    /// The employee's trips per year.
    pub chart: Vec<YearSeriesPoint>,
}

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates an error for an employee id that is not a number.
    pub fn invalid_employee_id(raw: &str) -> Self {
        Self::with_details(
            "INVALID_EMPLOYEE_ID",
            format!("Invalid employee id: {}", raw),
            "Employee ids are non-negative integers",
        )
    }
}

/// API error with HTTP status code.
#[derive(Debug)]
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl ApiErrorResponse {
    /// A 400 response for a malformed employee id.
    pub fn invalid_employee_id(raw: &str) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            error: ApiError::invalid_employee_id(raw),
        }
    }

    /// A 500 response for a report task that did not finish.
    pub fn report_failed(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            error: ApiError::with_details("REPORT_FAILED", "Report could not be built", message),
        }
    }
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<ReportError> for ApiErrorResponse {
    fn from(error: ReportError) -> Self {
        let description = error.to_string();
        match error {
            ReportError::EmployeeNotFound { id } => ApiErrorResponse {
                status: StatusCode::NOT_FOUND,
                error: ApiError::new("EMPLOYEE_NOT_FOUND", format!("Employee not found: {}", id)),
            },
            ReportError::FetchFailed {
                source_name,
                message,
            } => ApiErrorResponse {
                status: StatusCode::SERVICE_UNAVAILABLE,
                error: ApiError::with_details(
                    "FETCH_FAILED",
                    format!("Failed to fetch {}", source_name),
                    message,
                ),
            },
            ReportError::ConfigNotFound { .. }
            | ReportError::ConfigParseError { .. }
            | ReportError::InvalidDataset { .. } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration error",
                    description,
                ),
            },
        }
    }
}
