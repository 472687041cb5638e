//! Invalid-sample masking and calibration.
//!
//! NaN is the no-data marker. A raw count is invalid when it is above
//! `valid_max`, below `valid_min` or equal to the fill value; invalid cells
//! become NaN before the affine transform and stay NaN after it.

use tracing::debug;

use crate::grid::BandGrid;
use crate::scaling::CalibrationRecord;

/// Flag the cells of `values` that are out of range or fill.
pub fn classify_invalid(values: &[f64], cal: &CalibrationRecord) -> Vec<bool> {
    values
        .iter()
        .map(|&v| v > cal.valid_max || v < cal.valid_min || v == cal.fill_value)
        .collect()
}

/// Mask invalid counts and apply `(count - offset) * scale`.
///
/// With `apply_mask_wrapper` the result is a [`MaskedGrid`] whose reductions
/// skip no-data cells; otherwise the bare grid is returned with NaN present.
pub fn mask_invalid(raw: BandGrid, cal: &CalibrationRecord, apply_mask_wrapper: bool) -> CalibratedBand {
    let invalid = classify_invalid(&raw.data, cal);
    let invalid_count = invalid.iter().filter(|&&flag| flag).count();

    let BandGrid { mut data, rows, cols } = raw;
    for (value, &bad) in data.iter_mut().zip(&invalid) {
        *value = if bad {
            f64::NAN
        } else {
            (*value - cal.offset) * cal.scale
        };
    }

    debug!(
        rows = rows,
        cols = cols,
        invalid = invalid_count,
        wrapped = apply_mask_wrapper,
        "Masked and calibrated band"
    );

    let grid = BandGrid { data, rows, cols };
    if apply_mask_wrapper {
        CalibratedBand::Masked(MaskedGrid::new(grid))
    } else {
        CalibratedBand::Bare(grid)
    }
}

/// A grid whose reductions ignore no-data (NaN) cells.
#[derive(Debug, Clone, PartialEq)]
pub struct MaskedGrid {
    grid: BandGrid,
}

impl MaskedGrid {
    pub fn new(grid: BandGrid) -> Self {
        Self { grid }
    }

    /// The underlying grid, NaN at masked cells.
    pub fn grid(&self) -> &BandGrid {
        &self.grid
    }

    pub fn into_grid(self) -> BandGrid {
        self.grid
    }

    /// `true` where the cell holds no data.
    pub fn mask(&self) -> Vec<bool> {
        self.grid.data.iter().map(|v| v.is_nan()).collect()
    }

    /// Whether the cell at (row, col) is masked. Out-of-bounds cells are masked.
    pub fn is_masked(&self, row: usize, col: usize) -> bool {
        self.grid.get(row, col).map_or(true, f64::is_nan)
    }

    fn valid(&self) -> impl Iterator<Item = f64> + '_ {
        self.grid.data.iter().copied().filter(|v| !v.is_nan())
    }

    /// Number of cells holding data.
    pub fn count(&self) -> usize {
        self.valid().count()
    }

    /// Sum over cells holding data (0 when all are masked).
    pub fn sum(&self) -> f64 {
        self.valid().sum()
    }

    /// Mean over cells holding data, `None` when all are masked.
    pub fn mean(&self) -> Option<f64> {
        let count = self.count();
        if count == 0 {
            None
        } else {
            Some(self.sum() / count as f64)
        }
    }

    pub fn min(&self) -> Option<f64> {
        self.valid().reduce(f64::min)
    }

    pub fn max(&self) -> Option<f64> {
        self.valid().reduce(f64::max)
    }

    /// Copy of the data with masked cells replaced by `fill`.
    pub fn filled(&self, fill: f64) -> Vec<f64> {
        self.grid
            .data
            .iter()
            .map(|&v| if v.is_nan() { fill } else { v })
            .collect()
    }
}

/// Output of a band load.
#[derive(Debug, Clone, PartialEq)]
pub enum CalibratedBand {
    /// Plain grid; no-data cells are NaN and the caller handles them.
    Bare(BandGrid),
    /// Grid wrapped so reductions skip no-data cells.
    Masked(MaskedGrid),
}

impl CalibratedBand {
    /// The grid values, whichever form this is.
    pub fn grid(&self) -> &BandGrid {
        match self {
            Self::Bare(grid) => grid,
            Self::Masked(masked) => masked.grid(),
        }
    }

    pub fn into_grid(self) -> BandGrid {
        match self {
            Self::Bare(grid) => grid,
            Self::Masked(masked) => masked.into_grid(),
        }
    }

    pub fn is_masked(&self) -> bool {
        matches!(self, Self::Masked(_))
    }

    /// Wrap as a [`MaskedGrid`] (no-op if already wrapped).
    pub fn into_masked(self) -> MaskedGrid {
        match self {
            Self::Bare(grid) => MaskedGrid::new(grid),
            Self::Masked(masked) => masked,
        }
    }
}
