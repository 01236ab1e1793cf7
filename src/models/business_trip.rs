//! Business trip record as supplied by the data-access layer.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// A business trip: a destination plus a date range, independent of which
/// employees were assigned to it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BusinessTripRecord {
    /// Unique identifier for the trip.
    pub id: u32,
    /// Where the trip went.
    pub destination: String,
    /// First day of the trip.
    pub start_date: NaiveDate,
    /// Last day of the trip. Never before `start_date`.
    pub end_date: NaiveDate,
}

impl BusinessTripRecord {
    /// Returns the calendar year the trip started in.
    ///
    /// This is the year bucket every yearly report files the trip under.
    ///
    /// # Examples
    ///
    /// ```
    /// use trip_reports::models::BusinessTripRecord;
    /// use chrono::NaiveDate;
    ///
    /// let trip = BusinessTripRecord {
    ///     id: 1,
    ///     destination: "Berlin".to_string(),
    ///     start_date: NaiveDate::from_ymd_opt(2021, 12, 30).unwrap(),
    ///     end_date: NaiveDate::from_ymd_opt(2022, 1, 3).unwrap(),
    /// };
    /// assert_eq!(trip.year(), 2021);
    /// ```
    pub fn year(&self) -> i32 {
        self.start_date.year()
    }

    /// Returns the trip length in whole days (`end_date - start_date`).
    pub fn duration_days(&self) -> i64 {
        (self.end_date - self.start_date).num_days()
    }
}
