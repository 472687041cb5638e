//! Reader configuration.

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::bands::{BandTable, TieBreak};
use crate::error::{L1bError, L1bResult};

/// Configuration for [`crate::L1bReader`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct L1bConfig {
    /// Band grouping table searched when locating a band.
    pub band_table: BandTable,

    /// Group selection when a band number appears in more than one group.
    pub tie_break: TieBreak,

    /// Disable HDF5's automatic stderr diagnostics before opening files.
    pub silence_hdf5_errors: bool,
}

impl Default for L1bConfig {
    fn default() -> Self {
        Self {
            band_table: BandTable::modis(),
            tie_break: TieBreak::LastMatch,
            silence_hdf5_errors: true,
        }
    }
}

impl L1bConfig {
    /// Parse a YAML document. Missing keys take their default.
    pub fn from_yaml_str(yaml: &str) -> L1bResult<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a YAML configuration file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> L1bResult<Self> {
        let yaml = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&yaml)
    }

    /// Load configuration from environment variables.
    ///
    /// `MODIS_L1B_CONFIG` names a YAML file used as the base;
    /// `MODIS_L1B_TIE_BREAK` (`first`/`last`) and `MODIS_L1B_SILENCE_HDF5`
    /// (`true`/`1`) override individual settings.
    pub fn from_env() -> L1bResult<Self> {
        let mut config = match std::env::var("MODIS_L1B_CONFIG") {
            Ok(path) => Self::from_file(path)?,
            Err(_) => Self::default(),
        };

        if let Ok(val) = std::env::var("MODIS_L1B_TIE_BREAK") {
            config.tie_break = TieBreak::from_str(&val);
        }

        if let Ok(val) = std::env::var("MODIS_L1B_SILENCE_HDF5") {
            config.silence_hdf5_errors = val.to_lowercase() == "true" || val == "1";
        }

        Ok(config)
    }

    /// Validate the configuration.
    pub fn validate(&self) -> L1bResult<()> {
        if self.band_table.groups.is_empty() {
            return Err(L1bError::InvalidConfig("band_table has no groups".to_string()));
        }

        let mut fields = HashSet::new();
        for group in &self.band_table.groups {
            if group.band_dataset.is_empty() || group.field.is_empty() {
                return Err(L1bError::InvalidConfig(format!(
                    "group '{}' needs both band_dataset and field",
                    group.group
                )));
            }
            if !fields.insert(group.field.as_str()) {
                return Err(L1bError::InvalidConfig(format!(
                    "field '{}' appears in more than one group",
                    group.field
                )));
            }
        }

        Ok(())
    }
}
