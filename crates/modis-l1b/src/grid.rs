//! Array types for swath data.
//!
//! Datasets are read into [`RawArray`] (any rank, row-major) and individual
//! band planes or geolocation arrays are carried as [`BandGrid`] (2-D,
//! along-track rows by cross-track columns).

use crate::error::{L1bError, L1bResult};

/// An N-dimensional dataset read in full, converted to `f64`.
#[derive(Debug, Clone, PartialEq)]
pub struct RawArray {
    /// Dimension lengths, slowest-varying first.
    pub shape: Vec<usize>,
    /// Values in row-major order.
    pub data: Vec<f64>,
}

impl RawArray {
    /// Create a new array, checking that `data` fills `shape` exactly.
    pub fn new(shape: Vec<usize>, data: Vec<f64>) -> L1bResult<Self> {
        let expected: usize = shape.iter().product();
        if expected != data.len() {
            return Err(L1bError::malformed(format!(
                "shape {:?} needs {} values, got {}",
                shape,
                expected,
                data.len()
            )));
        }
        Ok(Self { shape, data })
    }

    /// Number of dimensions.
    pub fn ndim(&self) -> usize {
        self.shape.len()
    }

    /// Extract the 2-D plane at `index` along axis 0 of a 3-D array.
    pub fn plane(&self, index: usize) -> L1bResult<BandGrid> {
        let (bands, rows, cols) = match self.shape.as_slice() {
            &[bands, rows, cols] => (bands, rows, cols),
            other => {
                return Err(L1bError::malformed(format!(
                    "expected a 3-D band stack, got shape {:?}",
                    other
                )))
            }
        };
        if index >= bands {
            return Err(L1bError::malformed(format!(
                "band index {} outside band axis of length {}",
                index, bands
            )));
        }

        let plane_len = rows * cols;
        let start = index * plane_len;
        let data = self
            .data
            .get(start..start + plane_len)
            .ok_or_else(|| {
                L1bError::malformed(format!(
                    "shape {:?} needs {} values, got {}",
                    self.shape,
                    bands * plane_len,
                    self.data.len()
                ))
            })?
            .to_vec();
        Ok(BandGrid { data, rows, cols })
    }

    /// Interpret a 2-D array as a grid.
    pub fn into_grid(self) -> L1bResult<BandGrid> {
        match self.shape.as_slice() {
            &[rows, cols] => Ok(BandGrid {
                data: self.data,
                rows,
                cols,
            }),
            other => Err(L1bError::malformed(format!(
                "expected a 2-D array, got shape {:?}",
                other
            ))),
        }
    }
}

/// A 2-D grid of values in row-major order (row 0 first).
#[derive(Debug, Clone, PartialEq)]
pub struct BandGrid {
    /// Grid values.
    pub data: Vec<f64>,
    /// Along-track samples.
    pub rows: usize,
    /// Cross-track samples.
    pub cols: usize,
}

impl BandGrid {
    /// Create a new grid, checking that `data` has `rows * cols` values.
    pub fn new(data: Vec<f64>, rows: usize, cols: usize) -> L1bResult<Self> {
        if data.len() != rows * cols {
            return Err(L1bError::malformed(format!(
                "{}x{} grid needs {} values, got {}",
                rows,
                cols,
                rows * cols,
                data.len()
            )));
        }
        Ok(Self { data, rows, cols })
    }

    /// Grid dimensions as `(rows, cols)`.
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Total number of cells.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Get the value at a specific grid coordinate.
    pub fn get(&self, row: usize, col: usize) -> Option<f64> {
        if row >= self.rows || col >= self.cols {
            return None;
        }
        self.data.get(row * self.cols + col).copied()
    }
}
