//! Geolocation loading.
//!
//! MOD03/MYD03 geolocation files store latitude as the first dataset and
//! longitude as the second; both are read by position, without scaling.
//! Longitudes are returned in [0, 360).

use tracing::debug;

use crate::error::{L1bError, L1bResult};
use crate::grid::BandGrid;
use crate::source::SwathSource;

/// Latitude/longitude grids of one swath, same shape.
#[derive(Debug, Clone, PartialEq)]
pub struct GeoGrid {
    /// Degrees north.
    pub latitude: BandGrid,
    /// Degrees east in [0, 360).
    pub longitude: BandGrid,
}

impl GeoGrid {
    /// Pair two grids, normalizing longitude.
    pub fn new(latitude: BandGrid, mut longitude: BandGrid) -> L1bResult<Self> {
        if latitude.shape() != longitude.shape() {
            return Err(L1bError::malformed(format!(
                "latitude shape {:?} differs from longitude shape {:?}",
                latitude.shape(),
                longitude.shape()
            )));
        }
        normalize_longitude(&mut longitude.data);
        Ok(Self {
            latitude,
            longitude,
        })
    }

    /// Grid dimensions as `(rows, cols)`.
    pub fn shape(&self) -> (usize, usize) {
        self.latitude.shape()
    }
}

/// Shift negative longitudes by 360 so all values lie in [0, 360).
///
/// Non-negative values and NaN are left untouched.
pub fn normalize_longitude(lon: &mut [f64]) {
    for value in lon.iter_mut() {
        if *value < 0.0 {
            let shifted = *value + 360.0;
            // -1e-14 + 360 rounds to 360
            *value = if shifted >= 360.0 { 0.0 } else { shifted };
        }
    }
}

/// Read latitude (position 0) and longitude (position 1) from a geolocation file.
pub fn load_geo_from<S: SwathSource + ?Sized>(source: &S) -> L1bResult<GeoGrid> {
    let latitude = source.read_dataset_at(0)?.into_grid()?;
    let longitude = source.read_dataset_at(1)?.into_grid()?;

    debug!(
        rows = latitude.rows,
        cols = latitude.cols,
        "Loaded geolocation"
    );

    GeoGrid::new(latitude, longitude)
}

/// Read the named `Latitude`/`Longitude` tie-point datasets of an L1B file.
///
/// These are on a coarser (5 km) grid than the 1 km science data.
pub fn load_swath_coords_from<S: SwathSource + ?Sized>(source: &S) -> L1bResult<GeoGrid> {
    let latitude = source.read_dataset("Latitude")?.into_grid()?;
    let longitude = source.read_dataset("Longitude")?.into_grid()?;
    GeoGrid::new(latitude, longitude)
}
