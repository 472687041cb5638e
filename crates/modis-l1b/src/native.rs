//! Swath file access through the native netcdf library.
//!
//! libnetcdf reads netCDF-3, netCDF-4/HDF5 and, when built with HDF4
//! support, the HDF4 scientific datasets that MODIS L1B and MOD03 products
//! ship in. System requirements: libnetcdf-dev (with HDF4 enabled) and
//! libhdf5-dev.
//!
//! A [`NetCdfSwath`] owns the open file. Dropping it closes the file, so every
//! exit path of a reader operation (including early `?` returns) releases
//! the handle.

use std::path::{Path, PathBuf};
use std::sync::Once;

use tracing::debug;

use crate::error::{L1bError, L1bResult};
use crate::grid::RawArray;
use crate::source::{AttrValue, SwathSource};

/// Silence HDF5's automatic error printing to stderr.
///
/// The HDF5 C library prints diagnostics to stderr even when the error is
/// handled on the Rust side (e.g. probing for an attribute that a product
/// variant does not carry). This disables that output with H5Eset_auto2.
/// Only the first call has any effect.
pub fn silence_hdf5_errors() {
    static INIT: Once = Once::new();

    INIT.call_once(|| {
        // SAFETY: H5Eset_auto2 is thread-safe and null handlers are a
        // documented way to disable automatic error printing.
        unsafe {
            hdf5_metno_sys::h5e::H5Eset_auto2(
                hdf5_metno_sys::h5e::H5E_DEFAULT,
                None,
                std::ptr::null_mut(),
            );
        }
    });
}

/// An open swath file backed by libnetcdf.
pub struct NetCdfSwath {
    path: PathBuf,
    file: netcdf::File,
}

impl NetCdfSwath {
    /// Open a file read-only.
    pub fn open<P: AsRef<Path>>(path: P) -> L1bResult<Self> {
        let path = path.as_ref();
        let file = netcdf::open(path)
            .map_err(|e| L1bError::file_open(path.display().to_string(), e.to_string()))?;

        debug!(path = %path.display(), "Opened swath file");

        Ok(Self {
            path: path.to_path_buf(),
            file,
        })
    }

    /// Path this handle was opened from.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn variable(&self, name: &str) -> L1bResult<netcdf::Variable<'_>> {
        self.file
            .variable(name)
            .ok_or_else(|| L1bError::dataset_not_found(name))
    }
}

impl Drop for NetCdfSwath {
    fn drop(&mut self) {
        debug!(path = %self.path.display(), "Closing swath file");
    }
}

impl SwathSource for NetCdfSwath {
    fn dataset_names(&self) -> L1bResult<Vec<String>> {
        Ok(self.file.variables().map(|v| v.name()).collect())
    }

    fn read_dataset(&self, name: &str) -> L1bResult<RawArray> {
        let var = self.variable(name)?;
        read_variable(&var)
    }

    fn read_dataset_at(&self, position: usize) -> L1bResult<RawArray> {
        let var = self.file.variables().nth(position).ok_or_else(|| {
            L1bError::dataset_not_found(format!("dataset at position {}", position))
        })?;
        read_variable(&var)
    }

    fn read_attribute(&self, dataset: &str, attr: &str) -> L1bResult<AttrValue> {
        let var = self.variable(dataset)?;
        if !has_attr(&var, attr) {
            return Err(L1bError::attribute_not_found(dataset, attr));
        }
        let value = var
            .attribute_value(attr)
            .ok_or_else(|| L1bError::attribute_not_found(dataset, attr))?
            .map_err(|e| L1bError::read(format!("attribute '{}' on '{}': {}", attr, dataset, e)))?;
        convert_attribute(dataset, attr, value)
    }
}

// =============================================================================
// Internal helpers
// =============================================================================

/// Check if a variable has an attribute with the given name.
/// This avoids HDF5 error spam when checking for optional attributes.
fn has_attr(var: &netcdf::Variable<'_>, name: &str) -> bool {
    var.attributes().any(|attr| attr.name() == name)
}

/// Read a whole variable as `f64`.
///
/// Tries the stored numeric types in turn; MODIS science data is `u16`,
/// band tables are `f32` and geolocation is `f32`/`f64`.
fn read_variable(var: &netcdf::Variable<'_>) -> L1bResult<RawArray> {
    let shape: Vec<usize> = var.dimensions().iter().map(|d| d.len()).collect();
    let data = read_values_f64(var)?;
    RawArray::new(shape, data)
}

fn read_values_f64(var: &netcdf::Variable<'_>) -> L1bResult<Vec<f64>> {
    if let Ok(values) = var.get_values::<f64, _>(..) {
        return Ok(values);
    }
    if let Ok(values) = var.get_values::<f32, _>(..) {
        return Ok(widen(values));
    }
    if let Ok(values) = var.get_values::<u16, _>(..) {
        return Ok(widen(values));
    }
    if let Ok(values) = var.get_values::<i16, _>(..) {
        return Ok(widen(values));
    }
    if let Ok(values) = var.get_values::<u8, _>(..) {
        return Ok(widen(values));
    }
    if let Ok(values) = var.get_values::<i8, _>(..) {
        return Ok(widen(values));
    }
    if let Ok(values) = var.get_values::<i32, _>(..) {
        return Ok(widen(values));
    }
    if let Ok(values) = var.get_values::<u32, _>(..) {
        return Ok(widen(values));
    }
    Err(L1bError::read(format!(
        "'{}' has no numeric representation",
        var.name()
    )))
}

fn widen<T: Into<f64>>(values: Vec<T>) -> Vec<f64> {
    values.into_iter().map(Into::into).collect()
}

fn convert_attribute(dataset: &str, attr: &str, value: netcdf::AttributeValue) -> L1bResult<AttrValue> {
    use netcdf::AttributeValue as V;

    let numbers = match value {
        V::Str(text) => return Ok(AttrValue::Text(text)),
        V::Strs(texts) => return Ok(AttrValue::Text(texts.join(","))),
        V::Uchar(v) => vec![f64::from(v)],
        V::Uchars(v) => widen(v),
        V::Schar(v) => vec![f64::from(v)],
        V::Schars(v) => widen(v),
        V::Ushort(v) => vec![f64::from(v)],
        V::Ushorts(v) => widen(v),
        V::Short(v) => vec![f64::from(v)],
        V::Shorts(v) => widen(v),
        V::Uint(v) => vec![f64::from(v)],
        V::Uints(v) => widen(v),
        V::Int(v) => vec![f64::from(v)],
        V::Ints(v) => widen(v),
        V::Float(v) => vec![f64::from(v)],
        V::Floats(v) => widen(v),
        V::Double(v) => vec![v],
        V::Doubles(v) => v,
        other => {
            return Err(L1bError::malformed(format!(
                "attribute '{}' on '{}' has unsupported type {:?}",
                attr, dataset, other
            )))
        }
    };
    Ok(AttrValue::Numbers(numbers))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_missing_file_is_file_open_error() {
        let err = NetCdfSwath::open("/nonexistent/MOD021KM.A2000066.hdf")
            .err()
            .expect("opening a missing file must fail");
        match err {
            L1bError::FileOpen { path, .. } => assert!(path.contains("MOD021KM")),
            other => panic!("expected FileOpen, got {:?}", other),
        }
    }

    #[test]
    fn test_silence_is_idempotent() {
        silence_hdf5_errors();
        silence_hdf5_errors();
    }

    #[test]
    fn test_convert_text_and_numeric_attributes() {
        let text = convert_attribute("d", "band_names", netcdf::AttributeValue::Str("1,2".into()))
            .unwrap();
        assert_eq!(text, AttrValue::Text("1,2".into()));

        let range = convert_attribute(
            "d",
            "valid_range",
            netcdf::AttributeValue::Ushorts(vec![0, 32767]),
        )
        .unwrap();
        assert_eq!(range, AttrValue::Numbers(vec![0.0, 32767.0]));
    }
}
