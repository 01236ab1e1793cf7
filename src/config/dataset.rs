//! Dataset loading: turns the normalized YAML dataset into the joined
//! records the reporting service reads.

use std::collections::{HashMap, HashSet};
use std::path::Path;

use tracing::info;

use crate::error::{ReportError, ReportResult};
use crate::models::{BusinessTripRecord, EmployeeRecord, TripAssignment};
use crate::repository::InMemoryRepository;

use super::loader::load_yaml;
use super::types::DatasetFile;

/// Loads trip datasets from YAML.
///
/// # Example
///
/// ```no_run
/// use trip_reports::config::DatasetLoader;
///
/// let repository = DatasetLoader::load("./config/data/trips.yaml")?;
/// println!("{} employees", repository.employee_count());
/// # Ok::<(), trip_reports::error::ReportError>(())
/// ```
pub struct DatasetLoader;

impl DatasetLoader {
    /// Loads and resolves a dataset file.
    ///
    /// Fails with `ConfigNotFound` / `ConfigParseError` for unreadable files
    /// and `InvalidDataset` for records that do not fit together.
    pub fn load<P: AsRef<Path>>(path: P) -> ReportResult<InMemoryRepository> {
        let path = path.as_ref();
        let file = load_yaml::<DatasetFile>(path)?;
        let repository = Self::resolve(file)?;

        info!(
            path = %path.display(),
            employees = repository.employee_count(),
            business_trips = repository.business_trip_count(),
            "Loaded trip dataset"
        );
        Ok(repository)
    }

    /// Joins assignment rows onto their trips, keeping file order.
    pub fn resolve(file: DatasetFile) -> ReportResult<InMemoryRepository> {
        let mut trips_by_id: HashMap<u32, BusinessTripRecord> = HashMap::new();
        let mut business_trips = Vec::with_capacity(file.business_trips.len());

        for entry in file.business_trips {
            if entry.end_date < entry.start_date {
                return Err(ReportError::InvalidDataset {
                    message: format!(
                        "business trip {} ends on {} before it starts on {}",
                        entry.id, entry.end_date, entry.start_date
                    ),
                });
            }

            let trip = BusinessTripRecord {
                id: entry.id,
                destination: entry.destination,
                start_date: entry.start_date,
                end_date: entry.end_date,
            };
            if trips_by_id.insert(trip.id, trip.clone()).is_some() {
                return Err(ReportError::InvalidDataset {
                    message: format!("duplicate business trip id {}", trip.id),
                });
            }
            business_trips.push(trip);
        }

        let mut seen_employees = HashSet::new();
        let mut employees = Vec::with_capacity(file.employees.len());

        for entry in file.employees {
            if !seen_employees.insert(entry.id) {
                return Err(ReportError::InvalidDataset {
                    message: format!("duplicate employee id {}", entry.id),
                });
            }

            let mut assignments = Vec::with_capacity(entry.assignments.len());
            for assignment in entry.assignments {
                if assignment.money_spent < 0 {
                    return Err(ReportError::InvalidDataset {
                        message: format!(
                            "employee {} has negative spend {} on trip {}",
                            entry.id, assignment.money_spent, assignment.trip_id
                        ),
                    });
                }

                let trip = trips_by_id.get(&assignment.trip_id).ok_or_else(|| {
                    ReportError::InvalidDataset {
                        message: format!(
                            "employee {} is assigned to unknown business trip {}",
                            entry.id, assignment.trip_id
                        ),
                    }
                })?;

                assignments.push(TripAssignment {
                    money_spent: assignment.money_spent,
                    trip: trip.clone(),
                });
            }

            employees.push(EmployeeRecord {
                id: entry.id,
                name: entry.name,
                assignments,
            });
        }

        Ok(InMemoryRepository::new(employees, business_trips))
    }
}
