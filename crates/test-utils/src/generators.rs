//! Synthetic swath data generators.
//!
//! These produce predictable digital counts and coordinates so tests can
//! check band selection and calibration cell by cell.

/// Creates a band stack with predictable counts.
///
/// Each cell value is `band * 1000 + row * cols + col`, so a plane pulled out
/// of the stack identifies its band by the thousands digit.
///
/// # Returns
///
/// A `Vec<f64>` of length `bands * rows * cols`, band axis first.
///
/// # Example
///
/// ```
/// use test_utils::create_band_stack;
///
/// let stack = create_band_stack(3, 2, 2);
/// assert_eq!(stack.len(), 12);
/// assert_eq!(stack[0], 0.0);     // band 0, cell 0
/// assert_eq!(stack[5], 1001.0);  // band 1, cell 1
/// ```
pub fn create_band_stack(bands: usize, rows: usize, cols: usize) -> Vec<f64> {
    let mut data = Vec::with_capacity(bands * rows * cols);
    for band in 0..bands {
        for cell in 0..rows * cols {
            data.push((band * 1000 + cell) as f64);
        }
    }
    data
}

/// Overwrites cells of one band plane in a stack with `value`.
///
/// `cells` are `(row, col)` positions; positions outside the plane are ignored.
pub fn inject_value(
    stack: &mut [f64],
    band: usize,
    rows: usize,
    cols: usize,
    cells: &[(usize, usize)],
    value: f64,
) {
    for &(row, col) in cells {
        if row < rows && col < cols {
            stack[band * rows * cols + row * cols + col] = value;
        }
    }
}

/// Creates a longitude grid sweeping from `start` eastwards by `step` degrees
/// per column, in the [-180, 180) convention.
pub fn create_longitude_grid(rows: usize, cols: usize, start: f64, step: f64) -> Vec<f64> {
    let mut data = Vec::with_capacity(rows * cols);
    for _row in 0..rows {
        for col in 0..cols {
            let mut lon = start + step * col as f64;
            while lon >= 180.0 {
                lon -= 360.0;
            }
            data.push(lon);
        }
    }
    data
}

/// Creates a latitude grid descending from `north` by `step` degrees per row.
pub fn create_latitude_grid(rows: usize, cols: usize, north: f64, step: f64) -> Vec<f64> {
    let mut data = Vec::with_capacity(rows * cols);
    for row in 0..rows {
        let lat = north - step * row as f64;
        data.extend(std::iter::repeat(lat).take(cols));
    }
    data
}
