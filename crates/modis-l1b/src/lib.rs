//! MODIS Level-1B reader.
//!
//! This crate reads MODIS L1B calibrated radiance products (MOD021KM /
//! MYD021KM) and their geolocation companions (MOD03 / MYD03), turning raw
//! digital counts into reflectance or radiance with invalid samples masked.
//!
//! # Pipeline
//!
//! ```text
//! load_band(path, band)
//!      │
//!      ├─► locate_band      band number → (science dataset, band-axis index)
//!      │
//!      ├─► RawArray::plane  slice the band out of the 3-D stack
//!      │
//!      ├─► resolve_scaling  valid_range, _FillValue, scale/offset for the band
//!      │
//!      └─► mask_invalid     out-of-range/fill → NaN, then (count - offset) * scale
//! ```
//!
//! # L1B Data Structure
//!
//! The 1 km product stacks bands along axis 0 of four science datasets
//! (`EV_250_Aggr1km_RefSB`, `EV_500_Aggr1km_RefSB`, `EV_1KM_RefSB`,
//! `EV_1KM_Emissive`). Reflective solar bands carry `reflectance_scales` /
//! `reflectance_offsets`, thermal emissive bands `radiance_scales` /
//! `radiance_offsets`; radiance is in W·m⁻²·sr⁻¹·µm⁻¹.
//!
//! # Example
//!
//! ```ignore
//! use modis_l1b::{load_band, load_geo, LoadOptions};
//!
//! let options = LoadOptions { apply_scaling: true, apply_mask: true };
//! let band31 = load_band("MOD021KM.A2000066.2255.061.hdf", 31, &options)?.into_masked();
//! println!("mean radiance: {:?}", band31.mean());
//!
//! let geo = load_geo("MOD03.A2000066.2255.061.hdf")?;
//! ```

pub mod bands;
pub mod config;
pub mod error;
pub mod geo;
pub mod grid;
pub mod loader;
pub mod mask;
pub mod native;
pub mod scaling;
pub mod source;

// Re-export commonly used types at crate root
pub use bands::{locate_band, locate_in, BandGroup, BandLocation, BandTable, FieldCategory, TieBreak};
pub use config::L1bConfig;
pub use error::{L1bError, L1bResult};
pub use geo::{load_geo_from, load_swath_coords_from, normalize_longitude, GeoGrid};
pub use grid::{BandGrid, RawArray};
pub use loader::{
    list_datasets, load_band, load_band_legacy, load_band_legacy_from, load_geo,
    load_swath_coords, read_attribute, read_dataset, L1bReader, LoadOptions, Quantity,
};
pub use mask::{classify_invalid, mask_invalid, CalibratedBand, MaskedGrid};
pub use native::{silence_hdf5_errors, NetCdfSwath};
pub use scaling::{resolve_scaling, CalibrationRecord};
pub use source::{AttrValue, MemorySwath, SwathSource};
