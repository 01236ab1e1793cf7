//! Configuration and dataset loading for the trip reporting engine.
//!
//! This module loads the application settings (listener, log level, data
//! location) and the trip dataset from YAML files.
//!
//! # Example
//!
//! ```no_run
//! use trip_reports::config::ConfigLoader;
//!
//! let loader = ConfigLoader::load("./config/app.yaml").unwrap();
//! let repository = loader.load_dataset().unwrap();
//! println!("Loaded {} employees", repository.employee_count());
//! ```

mod dataset;
mod loader;
mod types;

pub use dataset::DatasetLoader;
pub use loader::ConfigLoader;
pub use types::{
    AppConfig, AssignmentEntry, BusinessTripEntry, DataConfig, DatasetFile, EmployeeEntry,
    LoggingConfig, ServerConfig,
};
