//! Parallel trip-count and money-spent year buckets for employee statistics.

use rust_decimal::Decimal;

use crate::models::YearSeriesPoint;

use super::YearlyAggregator;

/// Aggregates trip count and money spent side by side.
///
/// Each [`add_value`](Self::add_value) touches both bucket sets, so a year
/// that produced any observation has an entry in both, even with zero spend.
/// The two averages therefore share the same denominator.
#[derive(Debug, Clone, Default)]
pub struct YearlyStatAggregator {
    trips: YearlyAggregator,
    money: YearlyAggregator,
}

impl YearlyStatAggregator {
    /// Creates an aggregator with no buckets.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a trip count and a money amount to the buckets for `year`.
    pub fn add_value(&mut self, year: i32, trip_count: i64, money_spent: i64) {
        self.trips.add_value(year, trip_count);
        self.money.add_value(year, money_spent);
    }

    /// Total trips across all years.
    pub fn total_trip_count(&self) -> i64 {
        self.trips.total()
    }

    /// Total money spent across all years.
    pub fn total_money_spent(&self) -> i64 {
        self.money.total()
    }

    /// Trips per distinct year, or zero if no year was observed.
    ///
    /// # Examples
    ///
    /// ```
    /// use trip_reports::aggregation::YearlyStatAggregator;
    /// use rust_decimal::Decimal;
    ///
    /// let mut stats = YearlyStatAggregator::new();
    /// assert_eq!(stats.average_trips_per_year(), Decimal::ZERO);
    ///
    /// stats.add_value(2020, 1, 10);
    /// stats.add_value(2020, 1, 10);
    /// stats.add_value(2021, 1, 10);
    /// assert_eq!(stats.average_trips_per_year(), Decimal::new(15, 1));
    /// ```
    pub fn average_trips_per_year(&self) -> Decimal {
        average(self.trips.total(), self.trips.year_count())
    }

    /// Money spent per distinct year, or zero if no year was observed.
    pub fn average_money_per_year(&self) -> Decimal {
        average(self.money.total(), self.money.year_count())
    }

    /// Year-sorted trip-count series.
    pub fn trip_count_results(&self) -> Vec<YearSeriesPoint> {
        self.trips.results()
    }

    /// Year-sorted money-spent series.
    pub fn money_spent_results(&self) -> Vec<YearSeriesPoint> {
        self.money.results()
    }
}

fn average(total: i64, years: usize) -> Decimal {
    if years == 0 {
        return Decimal::ZERO;
    }
    Decimal::from(total) / Decimal::from(years as u64)
}
