//! Error types for MODIS L1B reading operations.

use thiserror::Error;

/// Result type for MODIS L1B operations.
pub type L1bResult<T> = Result<T, L1bError>;

/// Error types for MODIS L1B reading.
#[derive(Error, Debug)]
pub enum L1bError {
    /// The underlying file could not be opened (missing, corrupt, permissions)
    #[error("failed to open {path}: {reason}")]
    FileOpen { path: String, reason: String },

    /// Requested dataset or attribute is absent
    #[error("dataset not found: {0}")]
    DatasetNotFound(String),

    /// Requested band is not present in any lookup table
    #[error("band not found: {0}")]
    BandNotFound(String),

    /// An attribute or array does not have the expected shape or type
    #[error("malformed attribute: {0}")]
    MalformedAttribute(String),

    /// Caller supplied an argument outside the accepted set
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The file library failed while reading an existing dataset
    #[error("read failed: {0}")]
    Read(String),

    /// Reader configuration could not be loaded or is inconsistent
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// File I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl L1bError {
    /// Create a FileOpen error.
    pub fn file_open(path: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::FileOpen {
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Create a DatasetNotFound error.
    pub fn dataset_not_found(msg: impl Into<String>) -> Self {
        Self::DatasetNotFound(msg.into())
    }

    /// Create a DatasetNotFound error for a missing attribute.
    pub fn attribute_not_found(dataset: &str, attr: &str) -> Self {
        Self::DatasetNotFound(format!("attribute '{}' on '{}'", attr, dataset))
    }

    /// Create a BandNotFound error.
    pub fn band_not_found(msg: impl Into<String>) -> Self {
        Self::BandNotFound(msg.into())
    }

    /// Create a MalformedAttribute error.
    pub fn malformed(msg: impl Into<String>) -> Self {
        Self::MalformedAttribute(msg.into())
    }

    /// Create an InvalidArgument error.
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    /// Create a Read error.
    pub fn read(msg: impl Into<String>) -> Self {
        Self::Read(msg.into())
    }
}

impl From<serde_yaml::Error> for L1bError {
    fn from(err: serde_yaml::Error) -> Self {
        Self::InvalidConfig(err.to_string())
    }
}
