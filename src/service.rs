//! Reporting service: builds trip listings, yearly series and employee
//! summaries from the records the data-access layer supplies.
//!
//! Every operation fetches once, builds fresh aggregators, and returns
//! freshly built output. Nothing is cached between calls.
//!
//! Each report comes in two forms. The `try_*` form returns the lookup
//! failure as a [`ReportError`]. The plain form is what the dashboard uses:
//! on any failure it returns an empty series or a zeroed [`EmployeeSummary`]
//! instead, logging a lookup failure as a warning and anything else as an
//! error.

use std::sync::Arc;

use tracing::{debug, error, warn};

use crate::aggregation::{DataSource, ExtractionStrategy, YearlyAggregator, YearlyStatAggregator};
use crate::error::{ReportError, ReportResult};
use crate::models::{EmployeeSummary, TRIP_DATE_FORMAT, TripLineItem, YearSeriesPoint};
use crate::repository::{BusinessTripRepository, EmployeeRepository};

/// Façade over the data-access layer that produces report structures.
#[derive(Clone)]
pub struct ReportingService {
    employees: Arc<dyn EmployeeRepository>,
    business_trips: Arc<dyn BusinessTripRepository>,
}

impl ReportingService {
    /// Creates a service reading from the given repositories.
    pub fn new(
        employees: Arc<dyn EmployeeRepository>,
        business_trips: Arc<dyn BusinessTripRepository>,
    ) -> Self {
        Self {
            employees,
            business_trips,
        }
    }

    /// Lists every assignment of every employee, most recent trip first.
    ///
    /// Assignments starting on the same day keep the order they were
    /// supplied in (employees in repository order, then assignments in
    /// employee order).
    pub fn try_list_all_trip_line_items(&self) -> ReportResult<Vec<TripLineItem>> {
        let employees = self.employees.fetch_all_employees_with_trips()?;

        let mut dated_items = Vec::new();
        for employee in &employees {
            for assignment in &employee.assignments {
                let trip = &assignment.trip;
                dated_items.push((
                    trip.start_date,
                    TripLineItem {
                        employee_id: employee.id,
                        employee_name: employee.name.clone(),
                        destination: trip.destination.clone(),
                        date: trip.start_date.format(TRIP_DATE_FORMAT).to_string(),
                        duration: trip.duration_days(),
                        money_spent: assignment.money_spent,
                    },
                ));
            }
        }

        // sort_by is stable, ties keep traversal order
        dated_items.sort_by(|a, b| b.0.cmp(&a.0));

        debug!(items = dated_items.len(), "Built trip listing");
        Ok(dated_items.into_iter().map(|(_, item)| item).collect())
    }

    /// Degrading form of [`try_list_all_trip_line_items`](Self::try_list_all_trip_line_items).
    pub fn list_all_trip_line_items(&self) -> Vec<TripLineItem> {
        degrade("list_all_trip_line_items", self.try_list_all_trip_line_items())
    }

    /// Aggregates `strategy` over `source`, bucketed by trip start year.
    ///
    /// This is the single traversal every yearly series goes through.
    pub fn try_yearly_series(
        &self,
        strategy: ExtractionStrategy,
        source: DataSource,
    ) -> ReportResult<Vec<YearSeriesPoint>> {
        let mut aggregator = YearlyAggregator::new();

        match source {
            DataSource::AllEmployees => {
                for employee in self.employees.fetch_all_employees_with_trips()? {
                    for assignment in &employee.assignments {
                        aggregator.add_value(
                            assignment.year(),
                            strategy.extract_from_assignment(assignment),
                        );
                    }
                }
            }
            DataSource::AllBusinessTrips => {
                for trip in self.business_trips.fetch_all_business_trips()? {
                    aggregator.add_value(trip.year(), strategy.extract_from_business_trip(&trip));
                }
            }
            DataSource::SingleEmployee(id) => {
                let employee = self.employees.fetch_employee_with_trips(id)?;
                for assignment in &employee.assignments {
                    aggregator.add_value(
                        assignment.year(),
                        strategy.extract_from_assignment(assignment),
                    );
                }
            }
        }

        let series = aggregator.results();
        debug!(
            metric = %strategy,
            source = ?source,
            points = series.len(),
            "Built yearly series"
        );
        Ok(series)
    }

    /// Degrading form of [`try_yearly_series`](Self::try_yearly_series).
    pub fn yearly_series(
        &self,
        strategy: ExtractionStrategy,
        source: DataSource,
    ) -> Vec<YearSeriesPoint> {
        degrade("yearly_series", self.try_yearly_series(strategy, source))
    }

    /// Money spent by all employees, per trip start year.
    pub fn try_money_spent_by_year(&self) -> ReportResult<Vec<YearSeriesPoint>> {
        let strategy = ExtractionStrategy::MoneySpent;
        self.try_yearly_series(strategy, strategy.data_source())
    }

    /// Degrading form of [`try_money_spent_by_year`](Self::try_money_spent_by_year).
    pub fn money_spent_by_year(&self) -> Vec<YearSeriesPoint> {
        degrade("money_spent_by_year", self.try_money_spent_by_year())
    }

    /// Distinct business trips per start year.
    ///
    /// Counts trips, not assignments, so a trip with several employees is
    /// counted once.
    pub fn try_trip_count_by_year(&self) -> ReportResult<Vec<YearSeriesPoint>> {
        let strategy = ExtractionStrategy::TripCount;
        self.try_yearly_series(strategy, strategy.data_source())
    }

    /// Degrading form of [`try_trip_count_by_year`](Self::try_trip_count_by_year).
    pub fn trip_count_by_year(&self) -> Vec<YearSeriesPoint> {
        degrade("trip_count_by_year", self.try_trip_count_by_year())
    }

    /// One employee's assignments per start year.
    pub fn try_employee_trip_count_by_year(
        &self,
        employee_id: u32,
    ) -> ReportResult<Vec<YearSeriesPoint>> {
        self.try_yearly_series(
            ExtractionStrategy::TripCount,
            DataSource::SingleEmployee(employee_id),
        )
    }

    /// Degrading form of [`try_employee_trip_count_by_year`](Self::try_employee_trip_count_by_year).
    pub fn employee_trip_count_by_year(&self, employee_id: u32) -> Vec<YearSeriesPoint> {
        degrade(
            "employee_trip_count_by_year",
            self.try_employee_trip_count_by_year(employee_id),
        )
    }

    /// Totals and per-year averages for one employee.
    ///
    /// Averages divide by the number of distinct years with at least one
    /// assignment, and are zero for an employee without trips.
    pub fn try_employee_summary(&self, employee_id: u32) -> ReportResult<EmployeeSummary> {
        let employee = self.employees.fetch_employee_with_trips(employee_id)?;

        let mut stats = YearlyStatAggregator::new();
        for assignment in &employee.assignments {
            stats.add_value(
                assignment.year(),
                ExtractionStrategy::TripCount.extract_from_assignment(assignment),
                ExtractionStrategy::MoneySpent.extract_from_assignment(assignment),
            );
        }

        let summary = EmployeeSummary {
            name: employee.name,
            trip_count: stats.total_trip_count(),
            money_spent: stats.total_money_spent(),
            avg_trip_count: stats.average_trips_per_year(),
            avg_money_spent: stats.average_money_per_year(),
        };
        debug!(
            employee_id,
            trip_count = summary.trip_count,
            money_spent = summary.money_spent,
            "Built employee summary"
        );
        Ok(summary)
    }

    /// Degrading form of [`try_employee_summary`](Self::try_employee_summary).
    pub fn employee_summary(&self, employee_id: u32) -> EmployeeSummary {
        degrade("employee_summary", self.try_employee_summary(employee_id))
    }
}

/// Swaps a failed report for its empty default, logging the failure.
///
/// Lookup failures are expected on a dashboard (stale links, a storage
/// hiccup) and log at `warn`. Anything else means the data layer is
/// misconfigured and logs at `error`.
fn degrade<T: Default>(operation: &'static str, result: ReportResult<T>) -> T {
    result.unwrap_or_else(|err: ReportError| {
        if err.is_lookup_failure() {
            warn!(operation, error = %err, "Report lookup failed, returning empty result");
        } else {
            error!(operation, error = %err, "Report failed unexpectedly, returning empty result");
        }
        T::default()
    })
}
