//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the ledger
//! configuration from a YAML file.

use std::fs;
use std::path::Path;

use crate::error::{LedgerError, LedgerResult};

use super::types::LedgerConfig;

/// Loads the ledger configuration.
///
/// # Example
///
/// ```no_run
/// use hours_ledger::config::ConfigLoader;
///
/// let config = ConfigLoader::load("./config/ledger.yaml")?;
/// println!("Placeholder place: {}", config.default_place);
/// # Ok::<(), hours_ledger::error::LedgerError>(())
/// ```
#[derive(Debug, Clone, Copy)]
pub struct ConfigLoader;

impl ConfigLoader {
    /// Loads configuration from the YAML file at `path`.
    ///
    /// # Returns
    ///
    /// Returns the configuration on success, or an error if:
    /// - The file does not exist or cannot be read (`ConfigNotFound`)
    /// - The file is not valid YAML for a [`LedgerConfig`] (`ConfigParseError`)
    pub fn load<P: AsRef<Path>>(path: P) -> LedgerResult<LedgerConfig> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| LedgerError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        Self::parse(&content).map_err(|message| LedgerError::ConfigParseError {
            path: path_str,
            message,
        })
    }

    /// Parses configuration from YAML text.
    pub fn from_yaml_str(content: &str) -> LedgerResult<LedgerConfig> {
        Self::parse(content).map_err(|message| LedgerError::ConfigParseError {
            path: "<inline>".to_string(),
            message,
        })
    }

    fn parse(content: &str) -> Result<LedgerConfig, String> {
        serde_yaml::from_str(content).map_err(|e| e.to_string())
    }
}
