//! Band loading: locate, slice, calibrate and mask.

use std::path::Path;

use tracing::{debug, info};

use crate::bands::{locate_band, FieldCategory};
use crate::config::L1bConfig;
use crate::error::{L1bError, L1bResult};
use crate::geo::{load_geo_from, load_swath_coords_from, GeoGrid};
use crate::grid::RawArray;
use crate::mask::{mask_invalid, CalibratedBand, MaskedGrid};
use crate::native::{silence_hdf5_errors, NetCdfSwath};
use crate::scaling::{element_at, read_fill_value, read_valid_range, resolve_scaling, CalibrationRecord};
use crate::source::{AttrValue, SwathSource};

/// Options for [`L1bReader::load_band`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadOptions {
    /// Mask invalid counts and convert to reflectance/radiance.
    /// When false the raw counts are returned untouched.
    pub apply_scaling: bool,
    /// Wrap the calibrated grid so reductions skip no-data cells.
    pub apply_mask: bool,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            apply_scaling: true,
            apply_mask: false,
        }
    }
}

/// Physical quantity requested from the legacy loader.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Quantity {
    Reflectance,
    Radiance,
}

impl Quantity {
    /// Parse `"reflectance"` or `"radiance"` (case-insensitive).
    pub fn from_str(s: &str) -> L1bResult<Self> {
        match s.trim().to_lowercase().as_str() {
            "reflectance" => Ok(Self::Reflectance),
            "radiance" => Ok(Self::Radiance),
            other => Err(L1bError::invalid_argument(format!(
                "expected 'reflectance' or 'radiance', got '{}'",
                other
            ))),
        }
    }

    /// Attribute family for this quantity.
    pub fn category(&self) -> FieldCategory {
        match self {
            Self::Reflectance => FieldCategory::Reflective,
            Self::Radiance => FieldCategory::Emissive,
        }
    }
}

/// MODIS L1B reader.
///
/// Every path-based operation opens the file, does its work and closes the
/// file before returning, on success and on error alike.
#[derive(Debug, Clone, Default)]
pub struct L1bReader {
    config: L1bConfig,
}

impl L1bReader {
    pub fn new(config: L1bConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &L1bConfig {
        &self.config
    }

    /// Open a swath file with this reader's settings.
    pub fn open<P: AsRef<Path>>(&self, path: P) -> L1bResult<NetCdfSwath> {
        if self.config.silence_hdf5_errors {
            silence_hdf5_errors();
        }
        NetCdfSwath::open(path)
    }

    /// Load one band of an L1B file by band number.
    pub fn load_band<P: AsRef<Path>>(
        &self,
        path: P,
        band: i64,
        options: &LoadOptions,
    ) -> L1bResult<CalibratedBand> {
        let swath = self.open(path)?;
        self.load_band_from(&swath, band, options)
    }

    /// Load one band by band number from an open source.
    pub fn load_band_from<S: SwathSource + ?Sized>(
        &self,
        source: &S,
        band: i64,
        options: &LoadOptions,
    ) -> L1bResult<CalibratedBand> {
        let location = locate_band(source, &self.config.band_table, band, self.config.tie_break)?;
        let plane = source.read_dataset(&location.field)?.plane(location.index)?;

        debug!(
            band = band,
            field = %location.field,
            index = location.index,
            rows = plane.rows,
            cols = plane.cols,
            scaling = options.apply_scaling,
            "Read band plane"
        );

        if !options.apply_scaling {
            return Ok(CalibratedBand::Bare(plane));
        }

        let cal = resolve_scaling(source, &location.field, location.category, location.index)?;
        Ok(mask_invalid(plane, &cal, options.apply_mask))
    }

    /// Load a band by its label in the dataset's `band_names` attribute.
    ///
    /// For files whose layout does not follow the band-table convention.
    /// `refrad` must be `"reflectance"` or `"radiance"`. The result is always
    /// wrapped.
    pub fn load_band_legacy<P: AsRef<Path>>(
        &self,
        path: P,
        dataset: &str,
        band_label: &str,
        refrad: &str,
    ) -> L1bResult<MaskedGrid> {
        let quantity = Quantity::from_str(refrad)?;
        let swath = self.open(path)?;
        load_band_legacy_from(&swath, dataset, band_label, quantity)
    }

    /// Load latitude/longitude from a geolocation (MOD03/MYD03) file.
    pub fn load_geo<P: AsRef<Path>>(&self, path: P) -> L1bResult<GeoGrid> {
        let swath = self.open(path)?;
        load_geo_from(&swath)
    }

    /// Load the 5 km `Latitude`/`Longitude` tie points embedded in an L1B file.
    pub fn load_swath_coords<P: AsRef<Path>>(&self, path: P) -> L1bResult<GeoGrid> {
        let swath = self.open(path)?;
        load_swath_coords_from(&swath)
    }

    /// List dataset names, in file order.
    pub fn list_datasets<P: AsRef<Path>>(&self, path: P) -> L1bResult<Vec<String>> {
        let path = path.as_ref();
        let swath = self.open(path)?;
        let names = swath.dataset_names()?;
        info!(path = %path.display(), count = names.len(), datasets = ?names, "Listed datasets");
        Ok(names)
    }

    /// Read a full dataset.
    pub fn read_dataset<P: AsRef<Path>>(&self, path: P, dataset: &str) -> L1bResult<RawArray> {
        let swath = self.open(path)?;
        swath.read_dataset(dataset)
    }

    /// Read one attribute of a dataset.
    pub fn read_attribute<P: AsRef<Path>>(
        &self,
        path: P,
        dataset: &str,
        attr: &str,
    ) -> L1bResult<AttrValue> {
        let swath = self.open(path)?;
        swath.read_attribute(dataset, attr)
    }
}

/// Legacy band load against an open source.
pub fn load_band_legacy_from<S: SwathSource + ?Sized>(
    source: &S,
    dataset: &str,
    band_label: &str,
    quantity: Quantity,
) -> L1bResult<MaskedGrid> {
    let band_names = source.text_attribute(dataset, "band_names")?;
    let index = band_names
        .split(',')
        .position(|name| name.trim() == band_label)
        .ok_or_else(|| {
            L1bError::band_not_found(format!(
                "band '{}' not in band_names '{}' of '{}'",
                band_label, band_names, dataset
            ))
        })?;

    let plane = source.read_dataset(dataset)?.plane(index)?;

    let category = quantity.category();
    let (valid_min, valid_max) = read_valid_range(source, dataset)?;
    let cal = CalibrationRecord {
        valid_min,
        valid_max,
        fill_value: read_fill_value(source, dataset)?,
        scale: element_at(source, dataset, category.scales_attr(), index)?,
        offset: element_at(source, dataset, category.offsets_attr(), index)?,
    };

    debug!(
        dataset = dataset,
        band = band_label,
        index = index,
        quantity = ?quantity,
        "Legacy band load"
    );

    Ok(mask_invalid(plane, &cal, true).into_masked())
}

// =============================================================================
// Default-configuration shortcuts
// =============================================================================

/// Load one band of an L1B file with the default MODIS configuration.
pub fn load_band<P: AsRef<Path>>(path: P, band: i64, options: &LoadOptions) -> L1bResult<CalibratedBand> {
    L1bReader::default().load_band(path, band, options)
}

/// Load a band by `band_names` label with the default configuration.
pub fn load_band_legacy<P: AsRef<Path>>(
    path: P,
    dataset: &str,
    band_label: &str,
    refrad: &str,
) -> L1bResult<MaskedGrid> {
    L1bReader::default().load_band_legacy(path, dataset, band_label, refrad)
}

/// Load latitude/longitude from a geolocation file.
pub fn load_geo<P: AsRef<Path>>(path: P) -> L1bResult<GeoGrid> {
    L1bReader::default().load_geo(path)
}

/// Load the tie-point coordinates embedded in an L1B file.
pub fn load_swath_coords<P: AsRef<Path>>(path: P) -> L1bResult<GeoGrid> {
    L1bReader::default().load_swath_coords(path)
}

/// List the datasets of a file.
pub fn list_datasets<P: AsRef<Path>>(path: P) -> L1bResult<Vec<String>> {
    L1bReader::default().list_datasets(path)
}

/// Read a full dataset from a file.
pub fn read_dataset<P: AsRef<Path>>(path: P, dataset: &str) -> L1bResult<RawArray> {
    L1bReader::default().read_dataset(path, dataset)
}

/// Read one attribute of a dataset in a file.
pub fn read_attribute<P: AsRef<Path>>(path: P, dataset: &str, attr: &str) -> L1bResult<AttrValue> {
    L1bReader::default().read_attribute(path, dataset, attr)
}
