//! Access pattern for hierarchical swath files.
//!
//! The reader only needs to list datasets, read a dataset in full (by name or
//! by position) and read one attribute of a dataset. [`SwathSource`] captures
//! exactly that, so the pipeline runs unchanged against a real file
//! ([`crate::native::NetCdfSwath`]) or synthetic data ([`MemorySwath`]).

use std::collections::BTreeMap;

use crate::error::{L1bError, L1bResult};
use crate::grid::RawArray;

/// Value of a dataset attribute.
#[derive(Debug, Clone, PartialEq)]
pub enum AttrValue {
    /// Scalar or sequence attribute, converted to `f64`.
    Numbers(Vec<f64>),
    /// Character attribute.
    Text(String),
}

impl AttrValue {
    /// Numeric values, if this is a numeric attribute.
    pub fn as_numbers(&self) -> Option<&[f64]> {
        match self {
            Self::Numbers(values) => Some(values),
            Self::Text(_) => None,
        }
    }

    /// Text value, if this is a character attribute.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            Self::Numbers(_) => None,
        }
    }
}

impl From<f64> for AttrValue {
    fn from(value: f64) -> Self {
        Self::Numbers(vec![value])
    }
}

impl From<Vec<f64>> for AttrValue {
    fn from(values: Vec<f64>) -> Self {
        Self::Numbers(values)
    }
}

impl From<&str> for AttrValue {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

/// Read access to an open swath file.
pub trait SwathSource {
    /// Dataset names in file order.
    fn dataset_names(&self) -> L1bResult<Vec<String>>;

    /// Read a named dataset in full.
    fn read_dataset(&self, name: &str) -> L1bResult<RawArray>;

    /// Read the dataset at `position` in file order.
    fn read_dataset_at(&self, position: usize) -> L1bResult<RawArray>;

    /// Read one attribute of a named dataset.
    fn read_attribute(&self, dataset: &str, attr: &str) -> L1bResult<AttrValue>;

    /// Read a numeric attribute, failing if it holds text.
    fn numeric_attribute(&self, dataset: &str, attr: &str) -> L1bResult<Vec<f64>> {
        match self.read_attribute(dataset, attr)? {
            AttrValue::Numbers(values) => Ok(values),
            AttrValue::Text(_) => Err(L1bError::malformed(format!(
                "'{}' on '{}' is text, expected numbers",
                attr, dataset
            ))),
        }
    }

    /// Read a text attribute, failing if it holds numbers.
    fn text_attribute(&self, dataset: &str, attr: &str) -> L1bResult<String> {
        match self.read_attribute(dataset, attr)? {
            AttrValue::Text(text) => Ok(text),
            AttrValue::Numbers(_) => Err(L1bError::malformed(format!(
                "'{}' on '{}' is numeric, expected text",
                attr, dataset
            ))),
        }
    }
}

#[derive(Debug, Clone)]
struct MemoryDataset {
    name: String,
    array: RawArray,
    attributes: BTreeMap<String, AttrValue>,
}

/// In-memory swath file.
///
/// Datasets keep insertion order so positional access behaves like a file.
///
/// ```
/// use modis_l1b::{MemorySwath, RawArray, SwathSource};
///
/// let swath = MemorySwath::new()
///     .with_dataset("Latitude", RawArray::new(vec![1, 2], vec![10.0, 11.0]).unwrap())
///     .with_attribute("Latitude", "units", "degrees");
/// assert_eq!(swath.dataset_names().unwrap(), vec!["Latitude".to_string()]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct MemorySwath {
    datasets: Vec<MemoryDataset>,
}

impl MemorySwath {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a dataset, replacing any existing dataset of the same name.
    pub fn with_dataset(mut self, name: &str, array: RawArray) -> Self {
        match self.datasets.iter_mut().find(|d| d.name == name) {
            Some(existing) => existing.array = array,
            None => self.datasets.push(MemoryDataset {
                name: name.to_string(),
                array,
                attributes: BTreeMap::new(),
            }),
        }
        self
    }

    /// Attach an attribute to a dataset added earlier.
    ///
    /// Attributes on unknown datasets are ignored.
    pub fn with_attribute(mut self, dataset: &str, attr: &str, value: impl Into<AttrValue>) -> Self {
        if let Some(d) = self.datasets.iter_mut().find(|d| d.name == dataset) {
            d.attributes.insert(attr.to_string(), value.into());
        }
        self
    }

    fn dataset(&self, name: &str) -> L1bResult<&MemoryDataset> {
        self.datasets
            .iter()
            .find(|d| d.name == name)
            .ok_or_else(|| L1bError::dataset_not_found(name))
    }
}

impl SwathSource for MemorySwath {
    fn dataset_names(&self) -> L1bResult<Vec<String>> {
        Ok(self.datasets.iter().map(|d| d.name.clone()).collect())
    }

    fn read_dataset(&self, name: &str) -> L1bResult<RawArray> {
        Ok(self.dataset(name)?.array.clone())
    }

    fn read_dataset_at(&self, position: usize) -> L1bResult<RawArray> {
        self.datasets
            .get(position)
            .map(|d| d.array.clone())
            .ok_or_else(|| L1bError::dataset_not_found(format!("dataset at position {}", position)))
    }

    fn read_attribute(&self, dataset: &str, attr: &str) -> L1bResult<AttrValue> {
        self.dataset(dataset)?
            .attributes
            .get(attr)
            .cloned()
            .ok_or_else(|| L1bError::attribute_not_found(dataset, attr))
    }
}
