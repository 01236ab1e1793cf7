//! Configuration and dataset file types.
//!
//! These are the strongly-typed structures deserialized from the YAML
//! application config and the YAML trip dataset.

use std::path::PathBuf;

use chrono::NaiveDate;
use serde::Deserialize;

/// Top-level application configuration (`app.yaml`).
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// HTTP listener settings.
    #[serde(default)]
    pub server: ServerConfig,
    /// Log filter settings.
    #[serde(default)]
    pub logging: LoggingConfig,
    /// Where the trip dataset lives.
    pub data: DataConfig,
}

/// HTTP listener settings.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Interface to bind.
    #[serde(default = "default_host")]
    pub host: String,
    /// Port to bind.
    #[serde(default = "default_port")]
    pub port: u16,
}

impl ServerConfig {
    /// Returns `host:port` for binding.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8080
}

/// Log filter settings.
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// An `EnvFilter` directive such as `info` or `trip_reports=debug`.
    #[serde(default = "default_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
        }
    }
}

fn default_level() -> String {
    "info".to_string()
}

/// Dataset location.
#[derive(Debug, Clone, Deserialize)]
pub struct DataConfig {
    /// Path to the dataset file. Relative paths resolve against the
    /// directory of the config file.
    pub path: PathBuf,
}

/// Trip dataset file structure, normalized the way the tables are stored.
#[derive(Debug, Clone, Deserialize)]
pub struct DatasetFile {
    /// Every distinct business trip.
    #[serde(default)]
    pub business_trips: Vec<BusinessTripEntry>,
    /// Every employee with references to the trips they went on.
    #[serde(default)]
    pub employees: Vec<EmployeeEntry>,
}

/// A business trip row.
#[derive(Debug, Clone, Deserialize)]
pub struct BusinessTripEntry {
    /// Trip id referenced by assignments.
    pub id: u32,
    /// Trip destination.
    pub destination: String,
    /// First day of the trip.
    pub start_date: NaiveDate,
    /// Last day of the trip.
    pub end_date: NaiveDate,
}

/// An employee row with its assignment rows.
#[derive(Debug, Clone, Deserialize)]
pub struct EmployeeEntry {
    /// Employee id.
    pub id: u32,
    /// Display name.
    pub name: String,
    /// Assignment rows, in display order.
    #[serde(default)]
    pub assignments: Vec<AssignmentEntry>,
}

/// An assignment row linking an employee to a trip.
#[derive(Debug, Clone, Deserialize)]
pub struct AssignmentEntry {
    /// Id of the referenced business trip.
    pub trip_id: u32,
    /// Money spent by the employee on the trip.
    #[serde(default)]
    pub money_spent: i64,
}
