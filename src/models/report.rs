//! Report structures handed to the presentation layer.
//!
//! Field names on the wire follow what the dashboard's charts and tables
//! read (`x`/`y` for chart points, camelCase for table rows), so these types
//! carry explicit serde renames.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Display format for trip dates in listings (day.month.year).
pub const TRIP_DATE_FORMAT: &str = "%d.%m.%Y";

/// One row of the all-trips listing: a single assignment, flattened.
///
/// # Example
///
/// ```
/// use trip_reports::models::TripLineItem;
///
/// let item = TripLineItem {
///     employee_id: 2,
///     employee_name: "B".to_string(),
///     destination: "Dest3".to_string(),
///     date: "05.03.2022".to_string(),
///     duration: 5,
///     money_spent: 15,
/// };
/// let json = serde_json::to_value(&item).unwrap();
/// assert_eq!(json["moneySpent"], 15);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TripLineItem {
    /// Id of the assigned employee.
    #[serde(rename = "id")]
    pub employee_id: u32,
    /// Name of the assigned employee.
    #[serde(rename = "name")]
    pub employee_name: String,
    /// Trip destination.
    pub destination: String,
    /// Trip start date formatted with [`TRIP_DATE_FORMAT`].
    pub date: String,
    /// Trip length in whole days.
    pub duration: i64,
    /// Money the employee spent on the trip.
    #[serde(rename = "moneySpent")]
    pub money_spent: i64,
}

/// One point of a yearly series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct YearSeriesPoint {
    /// Calendar year of the bucket.
    #[serde(rename = "x")]
    pub year: i32,
    /// Aggregated value for the year.
    #[serde(rename = "y")]
    pub value: i64,
}

impl YearSeriesPoint {
    /// Creates a new point.
    pub fn new(year: i32, value: i64) -> Self {
        Self { year, value }
    }
}

/// Per-employee totals and yearly averages.
///
/// `Default` is the degraded summary reported for an employee that could
/// not be looked up: empty name, every field zero.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeSummary {
    /// Employee display name.
    pub name: String,
    /// Number of trips across all years.
    #[serde(rename = "tripCount")]
    pub trip_count: i64,
    /// Money spent across all years.
    #[serde(rename = "moneySpent")]
    pub money_spent: i64,
    /// Trips per distinct year with trips, zero when there are none.
    #[serde(rename = "avgTripCount", with = "rust_decimal::serde::float")]
    pub avg_trip_count: Decimal,
    /// Money spent per distinct year with trips, zero when there are none.
    #[serde(rename = "avgMoneySpent", with = "rust_decimal::serde::float")]
    pub avg_money_spent: Decimal,
}
