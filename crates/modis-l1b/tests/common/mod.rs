//! Synthetic L1B swaths for integration tests.
//!
//! The synthetic file keeps the four MODIS band tables and science datasets
//! but with small stacks:
//!
//! | Band table          | Bands   | Science dataset         | Family      |
//! |---------------------|---------|-------------------------|-------------|
//! | `Band_250M`         | 1, 2, 3 | `EV_250_Aggr1km_RefSB`  | reflectance |
//! | `Band_500M`         | 4, 5    | `EV_500_Aggr1km_RefSB`  | reflectance |
//! | `Band_1KM_RefSB`    | 8       | `EV_1KM_RefSB`          | reflectance |
//! | `Band_1KM_Emissive` | 31      | `EV_1KM_Emissive`       | radiance    |
//!
//! Counts follow `test_utils::create_band_stack` (`band * 1000 + cell`).
//! Band 2 has fill values at [`FILL_CELLS`] and an out-of-range count at
//! [`OUT_OF_RANGE_CELL`].

#![allow(dead_code)]

use modis_l1b::{MemorySwath, RawArray};
use test_utils::{calibration, create_band_stack, inject_value, modis};

pub const ROWS: usize = 4;
pub const COLS: usize = 5;

pub const FILL_CELLS: [(usize, usize); 2] = [(0, 0), (3, 4)];
pub const OUT_OF_RANGE_CELL: (usize, usize) = (1, 2);
pub const OUT_OF_RANGE_COUNT: f64 = 40000.0;

pub const RADIANCE_SCALE: f64 = 0.01;
pub const RADIANCE_OFFSET: f64 = 5.0;

/// A band-number table dataset.
pub fn numbers(bands: &[f64]) -> RawArray {
    RawArray::new(vec![bands.len()], bands.to_vec()).unwrap()
}

/// A clean science stack of `bands` planes.
pub fn stack(bands: usize) -> RawArray {
    RawArray::new(vec![bands, ROWS, COLS], create_band_stack(bands, ROWS, COLS)).unwrap()
}

/// `EV_250_Aggr1km_RefSB` counts with band 2's fills and out-of-range count.
fn ev250_counts() -> Vec<f64> {
    let mut counts = create_band_stack(3, ROWS, COLS);
    inject_value(&mut counts, 1, ROWS, COLS, &FILL_CELLS, modis::FILL_VALUE);
    inject_value(
        &mut counts,
        1,
        ROWS,
        COLS,
        &[OUT_OF_RANGE_CELL],
        OUT_OF_RANGE_COUNT,
    );
    counts
}

/// Band 2's plane as stored.
pub fn band2_counts() -> Vec<f64> {
    ev250_counts()[ROWS * COLS..2 * ROWS * COLS].to_vec()
}

/// Whether `(row, col)` of band 2 was injected as invalid.
pub fn band2_invalid(row: usize, col: usize) -> bool {
    FILL_CELLS.contains(&(row, col)) || (row, col) == OUT_OF_RANGE_CELL
}

fn with_reflective_attrs(swath: MemorySwath, field: &str, bands: usize, names: &str) -> MemorySwath {
    swath
        .with_attribute(field, "valid_range", modis::VALID_RANGE.to_vec())
        .with_attribute(field, "_FillValue", modis::FILL_VALUE)
        .with_attribute(field, "reflectance_scales", calibration::SCALES[..bands].to_vec())
        .with_attribute(field, "reflectance_offsets", calibration::OFFSETS[..bands].to_vec())
        .with_attribute(field, "band_names", names)
}

/// The synthetic L1B swath described in the module docs.
pub fn synthetic_l1b() -> MemorySwath {
    let ev250 = RawArray::new(vec![3, ROWS, COLS], ev250_counts()).unwrap();

    let swath = MemorySwath::new()
        .with_dataset("Band_250M", numbers(&[1.0, 2.0, 3.0]))
        .with_dataset("Band_500M", numbers(&[4.0, 5.0]))
        .with_dataset("Band_1KM_RefSB", numbers(&[8.0]))
        .with_dataset("Band_1KM_Emissive", numbers(&[31.0]))
        .with_dataset("EV_250_Aggr1km_RefSB", ev250)
        .with_dataset("EV_500_Aggr1km_RefSB", stack(2))
        .with_dataset("EV_1KM_RefSB", stack(1))
        .with_dataset("EV_1KM_Emissive", stack(1));

    let swath = with_reflective_attrs(swath, "EV_250_Aggr1km_RefSB", 3, "1,2,3");
    let swath = with_reflective_attrs(swath, "EV_500_Aggr1km_RefSB", 2, "4,5");
    let swath = with_reflective_attrs(swath, "EV_1KM_RefSB", 1, "8");

    swath
        .with_attribute("EV_1KM_Emissive", "valid_range", modis::VALID_RANGE.to_vec())
        .with_attribute("EV_1KM_Emissive", "_FillValue", modis::FILL_VALUE)
        .with_attribute("EV_1KM_Emissive", "radiance_scales", vec![RADIANCE_SCALE])
        .with_attribute("EV_1KM_Emissive", "radiance_offsets", vec![RADIANCE_OFFSET])
        .with_attribute("EV_1KM_Emissive", "band_names", "31")
}
