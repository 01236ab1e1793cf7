//! Year-bucketed accumulation of a single metric.

use std::collections::HashMap;

use crate::models::YearSeriesPoint;

/// Accumulates one integer value per calendar year.
///
/// Buckets live in a hash map, so the year order is only established when
/// [`YearlyAggregator::results`] sorts them.
///
/// # Examples
///
/// ```
/// use trip_reports::aggregation::YearlyAggregator;
/// use trip_reports::models::YearSeriesPoint;
///
/// let mut aggregator = YearlyAggregator::new();
/// aggregator.add_value(2021, 20);
/// aggregator.add_value(2020, 10);
/// aggregator.add_value(2021, 5);
///
/// assert_eq!(
///     aggregator.results(),
///     vec![YearSeriesPoint::new(2020, 10), YearSeriesPoint::new(2021, 25)]
/// );
/// ```
#[derive(Debug, Clone, Default)]
pub struct YearlyAggregator {
    buckets: HashMap<i32, i64>,
}

impl YearlyAggregator {
    /// Creates an aggregator with no buckets.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `amount` to the bucket for `year`, creating the bucket if absent.
    pub fn add_value(&mut self, year: i32, amount: i64) {
        *self.buckets.entry(year).or_insert(0) += amount;
    }

    /// Returns one point per observed year, ascending by year.
    ///
    /// Years without observations are absent, not zero-filled.
    pub fn results(&self) -> Vec<YearSeriesPoint> {
        let mut points: Vec<YearSeriesPoint> = self
            .buckets
            .iter()
            .map(|(&year, &value)| YearSeriesPoint::new(year, value))
            .collect();
        points.sort_unstable_by_key(|p| p.year);
        points
    }

    /// Returns the sum over all buckets.
    pub fn total(&self) -> i64 {
        self.buckets.values().sum()
    }

    /// Returns the number of distinct years observed.
    pub fn year_count(&self) -> usize {
        self.buckets.len()
    }

    /// Returns true if no value was ever added.
    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    /// Folds another aggregator's buckets into this one.
    pub fn merge(&mut self, other: &YearlyAggregator) {
        for (&year, &value) in &other.buckets {
            self.add_value(year, value);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_empty_aggregator_yields_empty_series() {
        let aggregator = YearlyAggregator::new();
        assert!(aggregator.results().is_empty());
        assert!(aggregator.is_empty());
        assert_eq!(aggregator.total(), 0);
    }

    #[test]
    fn test_first_value_creates_bucket() {
        let mut aggregator = YearlyAggregator::new();
        aggregator.add_value(2020, 7);
        assert_eq!(aggregator.results(), vec![YearSeriesPoint::new(2020, 7)]);
    }

    #[test]
    fn test_values_in_same_year_are_summed() {
        let mut aggregator = YearlyAggregator::new();
        for _ in 0..3 {
            aggregator.add_value(2020, 1);
        }
        aggregator.add_value(2021, 1);
        aggregator.add_value(2021, 1);
        aggregator.add_value(2022, 1);

        assert_eq!(
            aggregator.results(),
            vec![
                YearSeriesPoint::new(2020, 3),
                YearSeriesPoint::new(2021, 2),
                YearSeriesPoint::new(2022, 1),
            ]
        );
        assert_eq!(aggregator.year_count(), 3);
        assert_eq!(aggregator.total(), 6);
    }

    #[test]
    fn test_gaps_are_not_zero_filled() {
        let mut aggregator = YearlyAggregator::new();
        aggregator.add_value(2024, 1);
        aggregator.add_value(2018, 1);

        let years: Vec<i32> = aggregator.results().iter().map(|p| p.year).collect();
        assert_eq!(years, vec![2018, 2024]);
    }

    #[test]
    fn test_zero_amount_still_creates_bucket() {
        let mut aggregator = YearlyAggregator::new();
        aggregator.add_value(2023, 0);
        assert_eq!(aggregator.results(), vec![YearSeriesPoint::new(2023, 0)]);
    }

    #[test]
    fn test_merge_adds_bucket_wise() {
        let mut left = YearlyAggregator::new();
        left.add_value(2020, 10);
        left.add_value(2021, 20);

        let mut right = YearlyAggregator::new();
        right.add_value(2021, 5);
        right.add_value(2022, 15);

        left.merge(&right);
        assert_eq!(
            left.results(),
            vec![
                YearSeriesPoint::new(2020, 10),
                YearSeriesPoint::new(2021, 25),
                YearSeriesPoint::new(2022, 15),
            ]
        );
    }

    proptest! {
        #[test]
        fn prop_results_strictly_ascending(observations in prop::collection::vec((1990i32..2040, 0i64..10_000), 1..200)) {
            let mut aggregator = YearlyAggregator::new();
            for &(year, amount) in &observations {
                aggregator.add_value(year, amount);
            }

            let results = aggregator.results();
            prop_assert!(!results.is_empty());
            for pair in results.windows(2) {
                prop_assert!(pair[0].year < pair[1].year);
            }
        }

        #[test]
        fn prop_total_matches_input_sum(observations in prop::collection::vec((1990i32..2040, 0i64..10_000), 0..200)) {
            let mut aggregator = YearlyAggregator::new();
            for &(year, amount) in &observations {
                aggregator.add_value(year, amount);
            }

            let expected: i64 = observations.iter().map(|&(_, amount)| amount).sum();
            let series_sum: i64 = aggregator.results().iter().map(|p| p.value).sum();
            prop_assert_eq!(aggregator.total(), expected);
            prop_assert_eq!(series_sum, expected);
        }

        #[test]
        fn prop_partitioned_merge_equals_whole(
            observations in prop::collection::vec((1990i32..2040, 0i64..10_000), 0..200),
            split in 0usize..200,
        ) {
            let split = split.min(observations.len());
            let (head, tail) = observations.split_at(split);

            let mut whole = YearlyAggregator::new();
            for &(year, amount) in &observations {
                whole.add_value(year, amount);
            }

            let mut first = YearlyAggregator::new();
            for &(year, amount) in head {
                first.add_value(year, amount);
            }
            let mut second = YearlyAggregator::new();
            for &(year, amount) in tail {
                second.add_value(year, amount);
            }
            first.merge(&second);

            prop_assert_eq!(first.results(), whole.results());
        }
    }
}
