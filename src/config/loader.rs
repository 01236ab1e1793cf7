//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the
//! application configuration from a YAML file.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{ReportError, ReportResult};
use crate::repository::InMemoryRepository;

use super::dataset::DatasetLoader;
use super::types::AppConfig;

/// Loads and provides access to the application configuration.
///
/// # File Layout
///
/// ```text
/// config/
/// ├── app.yaml          # Server, logging and data settings
/// └── data/
///     └── trips.yaml    # Employees, business trips and assignments
/// ```
///
/// # Example
///
/// ```no_run
/// use trip_reports::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/app.yaml")?;
/// println!("Listening on {}", loader.config().server.bind_address());
/// let repository = loader.load_dataset()?;
/// # Ok::<(), trip_reports::error::ReportError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: AppConfig,
    data_path: PathBuf,
}

impl ConfigLoader {
    /// Loads configuration from the specified YAML file.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` on success, or an error if:
    /// - The file is missing (`ConfigNotFound`)
    /// - The file is not valid YAML or lacks `data.path` (`ConfigParseError`)
    pub fn load<P: AsRef<Path>>(path: P) -> ReportResult<Self> {
        let path = path.as_ref();
        let config = load_yaml::<AppConfig>(path)?;

        let data_path = if config.data.path.is_relative() {
            path.parent()
                .unwrap_or_else(|| Path::new("."))
                .join(&config.data.path)
        } else {
            config.data.path.clone()
        };

        Ok(Self { config, data_path })
    }

    /// Returns the loaded configuration.
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Returns the dataset path, resolved against the config file's directory.
    pub fn data_path(&self) -> &Path {
        &self.data_path
    }

    /// Loads the configured dataset into an in-memory repository.
    pub fn load_dataset(&self) -> ReportResult<InMemoryRepository> {
        DatasetLoader::load(&self.data_path)
    }
}

/// Loads and parses a YAML file.
pub(crate) fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> ReportResult<T> {
    let path_str = path.display().to_string();

    let content = fs::read_to_string(path).map_err(|_| ReportError::ConfigNotFound {
        path: path_str.clone(),
    })?;

    serde_yaml::from_str(&content).map_err(|e| ReportError::ConfigParseError {
        path: path_str,
        message: e.to_string(),
    })
}
