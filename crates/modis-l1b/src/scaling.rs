//! Calibration attributes of a science dataset.

use tracing::debug;

use crate::bands::FieldCategory;
use crate::error::{L1bError, L1bResult};
use crate::source::SwathSource;

/// Valid-range, fill and affine calibration for one band.
///
/// Calibrated value = `(count - offset) * scale`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CalibrationRecord {
    /// Smallest valid raw count (inclusive).
    pub valid_min: f64,
    /// Largest valid raw count (inclusive).
    pub valid_max: f64,
    /// Raw count meaning "no measurement".
    pub fill_value: f64,
    pub scale: f64,
    pub offset: f64,
}

/// Read the calibration of band `index` in `field`.
pub fn resolve_scaling<S: SwathSource + ?Sized>(
    source: &S,
    field: &str,
    category: FieldCategory,
    index: usize,
) -> L1bResult<CalibrationRecord> {
    let (valid_min, valid_max) = read_valid_range(source, field)?;
    let fill_value = read_fill_value(source, field)?;

    let scale = element_at(source, field, category.scales_attr(), index)?;
    let offset = element_at(source, field, category.offsets_attr(), index)?;

    let record = CalibrationRecord {
        valid_min,
        valid_max,
        fill_value,
        scale,
        offset,
    };

    debug!(
        field = field,
        index = index,
        category = ?category,
        valid_min = valid_min,
        valid_max = valid_max,
        fill_value = fill_value,
        scale = scale,
        offset = offset,
        "Resolved calibration"
    );

    Ok(record)
}

/// Read the two-element `valid_range` attribute.
pub(crate) fn read_valid_range<S: SwathSource + ?Sized>(source: &S, field: &str) -> L1bResult<(f64, f64)> {
    match source.numeric_attribute(field, "valid_range")?.as_slice() {
        &[min, max] => Ok((min, max)),
        other => Err(L1bError::malformed(format!(
            "valid_range on '{}' has {} values, expected 2",
            field,
            other.len()
        ))),
    }
}

/// Read the scalar `_FillValue` attribute.
pub(crate) fn read_fill_value<S: SwathSource + ?Sized>(source: &S, field: &str) -> L1bResult<f64> {
    match source.numeric_attribute(field, "_FillValue")?.as_slice() {
        &[fill] => Ok(fill),
        other => Err(L1bError::malformed(format!(
            "_FillValue on '{}' has {} values, expected 1",
            field,
            other.len()
        ))),
    }
}

/// Read element `index` of a per-band attribute sequence.
pub(crate) fn element_at<S: SwathSource + ?Sized>(
    source: &S,
    field: &str,
    attr: &str,
    index: usize,
) -> L1bResult<f64> {
    let values = source.numeric_attribute(field, attr)?;
    values.get(index).copied().ok_or_else(|| {
        L1bError::malformed(format!(
            "{} on '{}' has {} entries, band index {} requested",
            attr,
            field,
            values.len(),
            index
        ))
    })
}
