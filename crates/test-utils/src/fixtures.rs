//! Common test fixtures for MODIS L1B tests.

/// MODIS L1B 1km product layout.
pub mod modis {
    /// Band numbers of `Band_250M`.
    pub const BAND_250M: [f32; 2] = [1.0, 2.0];

    /// Band numbers of `Band_500M`.
    pub const BAND_500M: [f32; 5] = [3.0, 4.0, 5.0, 6.0, 7.0];

    /// Band numbers of `Band_1KM_RefSB`; 13.5 and 14.5 are the high-gain halves.
    pub const BAND_1KM_REFSB: [f32; 15] = [
        8.0, 9.0, 10.0, 11.0, 12.0, 13.0, 13.5, 14.0, 14.5, 15.0, 16.0, 17.0, 18.0, 19.0, 26.0,
    ];

    /// Band numbers of `Band_1KM_Emissive`.
    pub const BAND_1KM_EMISSIVE: [f32; 16] = [
        20.0, 21.0, 22.0, 23.0, 24.0, 25.0, 27.0, 28.0, 29.0, 30.0, 31.0, 32.0, 33.0, 34.0, 35.0,
        36.0,
    ];

    /// The four band tables in file order: 250M, 500M, 1KM_RefSB, 1KM_Emissive.
    pub fn band_groups() -> [&'static [f32]; 4] {
        [&BAND_250M, &BAND_500M, &BAND_1KM_REFSB, &BAND_1KM_EMISSIVE]
    }

    /// `valid_range` of every science dataset.
    pub const VALID_RANGE: [f64; 2] = [0.0, 32767.0];

    /// `_FillValue` of every science dataset.
    pub const FILL_VALUE: f64 = 65535.0;

    /// Sample granule used by real-file tests (place under `testdata/`).
    pub const SAMPLE_L1B: &str = "MOD021KM.A2000066.2255.061.2017171220013.hdf";

    /// Matching geolocation granule.
    pub const SAMPLE_GEO: &str = "MOD03.A2000066.2255.061.2017171195808.hdf";
}

/// Calibration constants for synthetic bands.
pub mod calibration {
    /// Per-band scales, one per synthetic band.
    pub const SCALES: [f64; 3] = [0.5, 0.25, 2.0];

    /// Per-band offsets, one per synthetic band.
    pub const OFFSETS: [f64; 3] = [0.0, 100.0, 10.0];
}
