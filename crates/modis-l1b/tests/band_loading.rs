//! Integration tests for band loading against synthetic L1B swaths.

mod common;

use common::*;
use modis_l1b::{
    load_band_legacy_from, CalibratedBand, L1bConfig, L1bError, L1bReader, LoadOptions, Quantity,
    RawArray, TieBreak,
};
use test_utils::{assert_approx_eq, calibration};

fn reader() -> L1bReader {
    L1bReader::default()
}

fn scaled(apply_mask: bool) -> LoadOptions {
    LoadOptions {
        apply_scaling: true,
        apply_mask,
    }
}

// =============================================================================
// Table-based loading
// =============================================================================

#[test]
fn test_band2_round_trip() {
    let swath = synthetic_l1b();
    let band = reader()
        .load_band_from(&swath, 2, &scaled(false))
        .expect("band 2 should load");

    assert!(!band.is_masked());
    let grid = band.grid();
    assert_eq!(grid.shape(), (ROWS, COLS));

    let (scale, offset) = (calibration::SCALES[1], calibration::OFFSETS[1]);
    for row in 0..ROWS {
        for col in 0..COLS {
            let value = grid.get(row, col).unwrap();
            if band2_invalid(row, col) {
                assert!(value.is_nan(), "({}, {}) should be no data", row, col);
            } else {
                // band 2 is plane index 1: counts are 1000 + cell
                let count = (1000 + row * COLS + col) as f64;
                assert_approx_eq!(value, (count - offset) * scale, 1e-9);
            }
        }
    }
}

#[test]
fn test_unscaled_load_returns_raw_counts() {
    let swath = synthetic_l1b();
    let band = reader()
        .load_band_from(
            &swath,
            2,
            &LoadOptions {
                apply_scaling: false,
                apply_mask: true,
            },
        )
        .unwrap();

    match band {
        CalibratedBand::Bare(grid) => {
            assert_eq!(grid.data, band2_counts());
            assert!(grid.data.iter().all(|v| !v.is_nan()));
        }
        CalibratedBand::Masked(_) => panic!("unscaled load must not be wrapped"),
    }
}

#[test]
fn test_masked_load_skips_invalid_cells_in_reductions() {
    let swath = synthetic_l1b();
    let masked = reader()
        .load_band_from(&swath, 2, &scaled(true))
        .unwrap()
        .into_masked();

    let invalid = FILL_CELLS.len() + 1;
    assert_eq!(masked.count(), ROWS * COLS - invalid);

    let expected: Vec<f64> = (0..ROWS * COLS)
        .filter(|cell| !band2_invalid(cell / COLS, cell % COLS))
        .map(|cell| ((1000 + cell) as f64 - calibration::OFFSETS[1]) * calibration::SCALES[1])
        .collect();
    let expected_mean = expected.iter().sum::<f64>() / expected.len() as f64;
    assert_approx_eq!(masked.mean().unwrap(), expected_mean, 1e-9);
}

#[test]
fn test_emissive_band_uses_radiance_family() {
    let swath = synthetic_l1b();
    let grid = reader()
        .load_band_from(&swath, 31, &scaled(false))
        .unwrap()
        .into_grid();

    for (cell, value) in grid.data.iter().enumerate() {
        assert_approx_eq!(*value, (cell as f64 - RADIANCE_OFFSET) * RADIANCE_SCALE, 1e-12);
    }
}

#[test]
fn test_other_groups_select_their_planes() {
    let swath = synthetic_l1b();
    let options = LoadOptions {
        apply_scaling: false,
        apply_mask: false,
    };

    // band 5 is index 1 of EV_500_Aggr1km_RefSB
    let grid = reader().load_band_from(&swath, 5, &options).unwrap().into_grid();
    assert_eq!(grid.data[0], 1000.0);

    // band 3 is index 2 of EV_250_Aggr1km_RefSB
    let grid = reader().load_band_from(&swath, 3, &options).unwrap().into_grid();
    assert_eq!(grid.data[0], 2000.0);
}

#[test]
fn test_absent_band_is_band_not_found() {
    let swath = synthetic_l1b();
    let err = reader()
        .load_band_from(&swath, 6, &LoadOptions::default())
        .unwrap_err();
    assert!(matches!(err, L1bError::BandNotFound(_)), "got {:?}", err);
}

#[test]
fn test_missing_band_table_is_dataset_not_found() {
    // A swath without the emissive band table
    let swath = modis_l1b::MemorySwath::new()
        .with_dataset("Band_250M", numbers(&[1.0, 2.0]))
        .with_dataset("Band_500M", numbers(&[3.0]))
        .with_dataset("Band_1KM_RefSB", numbers(&[8.0]));
    let err = reader()
        .load_band_from(&swath, 1, &LoadOptions::default())
        .unwrap_err();
    assert!(matches!(err, L1bError::DatasetNotFound(_)), "got {:?}", err);
}

#[test]
fn test_two_dimensional_field_is_malformed() {
    let swath = synthetic_l1b().with_dataset(
        "EV_1KM_RefSB",
        RawArray::new(vec![ROWS, COLS], vec![0.0; ROWS * COLS]).unwrap(),
    );
    let err = reader()
        .load_band_from(&swath, 8, &LoadOptions::default())
        .unwrap_err();
    assert!(matches!(err, L1bError::MalformedAttribute(_)), "got {:?}", err);
}

#[test]
fn test_tie_break_policy_selects_group() {
    // band 3 listed in both the 250m and 500m tables
    let swath = synthetic_l1b().with_dataset("Band_500M", numbers(&[3.0, 5.0]));
    let options = LoadOptions {
        apply_scaling: false,
        apply_mask: false,
    };

    let last = reader().load_band_from(&swath, 3, &options).unwrap().into_grid();
    assert_eq!(last.data[0], 0.0, "last match is EV_500 index 0");

    let first_reader = L1bReader::new(L1bConfig {
        tie_break: TieBreak::FirstMatch,
        ..L1bConfig::default()
    });
    let first = first_reader.load_band_from(&swath, 3, &options).unwrap().into_grid();
    assert_eq!(first.data[0], 2000.0, "first match is EV_250 index 2");
}

// =============================================================================
// Legacy loading
// =============================================================================

#[test]
fn test_legacy_matches_table_path() {
    let swath = synthetic_l1b();

    let legacy = load_band_legacy_from(&swath, "EV_250_Aggr1km_RefSB", "2", Quantity::Reflectance)
        .expect("legacy load");
    let table = reader()
        .load_band_from(&swath, 2, &scaled(true))
        .unwrap()
        .into_masked();

    assert_eq!(legacy.mask(), table.mask());
    assert_eq!(legacy.filled(-1.0), table.filled(-1.0));
}

#[test]
fn test_legacy_radiance_family() {
    let swath = synthetic_l1b();
    let grid = load_band_legacy_from(&swath, "EV_1KM_Emissive", "31", Quantity::Radiance)
        .unwrap()
        .into_grid();
    assert_approx_eq!(grid.data[0], (0.0 - RADIANCE_OFFSET) * RADIANCE_SCALE, 1e-12);
}

#[test]
fn test_legacy_unknown_label_is_band_not_found() {
    let swath = synthetic_l1b();
    let err = load_band_legacy_from(&swath, "EV_250_Aggr1km_RefSB", "13lo", Quantity::Reflectance)
        .unwrap_err();
    assert!(matches!(err, L1bError::BandNotFound(_)), "got {:?}", err);
}

#[test]
fn test_legacy_missing_family_is_dataset_not_found() {
    // EV_250 carries only reflectance_* attributes
    let swath = synthetic_l1b();
    let err = load_band_legacy_from(&swath, "EV_250_Aggr1km_RefSB", "1", Quantity::Radiance)
        .unwrap_err();
    assert!(matches!(err, L1bError::DatasetNotFound(_)), "got {:?}", err);
}

#[test]
fn test_legacy_labels_are_trimmed() {
    let swath = synthetic_l1b().with_attribute("EV_500_Aggr1km_RefSB", "band_names", "4, 5");
    let grid = load_band_legacy_from(&swath, "EV_500_Aggr1km_RefSB", "5", Quantity::Reflectance)
        .unwrap()
        .into_grid();
    let expected = (1000.0 - calibration::OFFSETS[1]) * calibration::SCALES[1];
    assert_approx_eq!(grid.data[0], expected, 1e-12);
}
