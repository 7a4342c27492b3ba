//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading checkroll
//! master data from YAML files.

use std::fs;
use std::path::Path;

use tracing::info;

use crate::error::{EngineError, EngineResult};

use super::types::{MasterConfig, MasterData};

/// Loads and provides access to the checkroll master data.
///
/// The `ConfigLoader` reads the YAML configuration from a directory and
/// validates it into a [`MasterData`] instance.
///
/// # Directory Structure
///
/// ```text
/// config/agrigen/
/// └── master.yaml   # Estate identity, norms, reference lists, sampling
/// ```
///
/// # Example
///
/// ```no_run
/// use checkroll_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/agrigen").unwrap();
/// println!("Norm value: {}", loader.master().norms().norm_value);
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    master: MasterData,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the configuration directory (e.g., "./config/agrigen")
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - `master.yaml` is missing (`ConfigNotFound`)
    /// - the file contains invalid YAML (`ConfigParseError`)
    /// - the parsed tables fail validation (`InvalidJobType`, `InvalidArgument`)
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let dir = path.as_ref();
        let master_path = dir.join("master.yaml");

        let contents = fs::read_to_string(&master_path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                EngineError::ConfigNotFound {
                    path: master_path.display().to_string(),
                }
            } else {
                EngineError::ConfigParseError {
                    path: master_path.display().to_string(),
                    message: e.to_string(),
                }
            }
        })?;

        let config: MasterConfig =
            serde_yaml::from_str(&contents).map_err(|e| EngineError::ConfigParseError {
                path: master_path.display().to_string(),
                message: e.to_string(),
            })?;

        let master = MasterData::new(config)?;
        info!(
            estate_id = master.estate().estate_id,
            job_types = master.job_types().len(),
            divisions = master.reference().division_ids.len(),
            fields = master.reference().field_ids.len(),
            "loaded checkroll master data"
        );

        Ok(Self { master })
    }

    /// Returns the validated master data.
    pub fn master(&self) -> &MasterData {
        &self.master
    }

    /// Consumes the loader and returns the master data.
    pub fn into_master(self) -> MasterData {
        self.master
    }
}
