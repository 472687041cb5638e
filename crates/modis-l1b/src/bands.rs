//! Band lookup tables and band location.
//!
//! MODIS L1B files split the 36 spectral bands over four science datasets by
//! resolution and type. Each science dataset has a companion dataset listing
//! the band numbers stacked along its band axis:
//!
//! | Group            | Band numbers dataset  | Science dataset         |
//! |------------------|-----------------------|-------------------------|
//! | 250m reflective  | `Band_250M`           | `EV_250_Aggr1km_RefSB`  |
//! | 500m reflective  | `Band_500M`           | `EV_500_Aggr1km_RefSB`  |
//! | 1km reflective   | `Band_1KM_RefSB`      | `EV_1KM_RefSB`          |
//! | 1km emissive     | `Band_1KM_Emissive`   | `EV_1KM_Emissive`       |
//!
//! Band numbers are truncated to integers, so the 1km reflective half-bands
//! 13.5 and 14.5 read as 13 and 14; within a group the first position wins,
//! which selects 13lo/14lo.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::{L1bError, L1bResult};
use crate::source::SwathSource;

/// Calibration family of a science dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldCategory {
    /// Reflective solar bands, calibrated with `reflectance_*` attributes.
    Reflective,
    /// Thermal emissive bands, calibrated with `radiance_*` attributes.
    Emissive,
}

impl FieldCategory {
    /// Infer the category from a science dataset name (`...RefSB` → reflective).
    pub fn from_field_name(field: &str) -> Self {
        if field.contains("Ref") {
            Self::Reflective
        } else {
            Self::Emissive
        }
    }

    /// Name of the per-band scale attribute for this family.
    pub fn scales_attr(&self) -> &'static str {
        match self {
            Self::Reflective => "reflectance_scales",
            Self::Emissive => "radiance_scales",
        }
    }

    /// Name of the per-band offset attribute for this family.
    pub fn offsets_attr(&self) -> &'static str {
        match self {
            Self::Reflective => "reflectance_offsets",
            Self::Emissive => "radiance_offsets",
        }
    }
}

/// One resolution/type group of bands.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BandGroup {
    /// Short group label, used in log output.
    pub group: String,
    /// Dataset listing the band numbers of this group.
    pub band_dataset: String,
    /// Science dataset holding the samples, band axis first.
    pub field: String,
    /// Calibration family of `field`.
    pub category: FieldCategory,
}

impl BandGroup {
    /// Create a group, deriving the category from the field name.
    pub fn new(group: &str, band_dataset: &str, field: &str) -> Self {
        Self {
            group: group.to_string(),
            band_dataset: band_dataset.to_string(),
            field: field.to_string(),
            category: FieldCategory::from_field_name(field),
        }
    }
}

/// Ordered band-grouping table of an instrument.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BandTable {
    pub groups: Vec<BandGroup>,
}

impl BandTable {
    /// The MODIS L1B 1km (MOD021KM/MYD021KM) table, in search order.
    pub fn modis() -> Self {
        Self {
            groups: vec![
                BandGroup::new("250m_reflective", "Band_250M", "EV_250_Aggr1km_RefSB"),
                BandGroup::new("500m_reflective", "Band_500M", "EV_500_Aggr1km_RefSB"),
                BandGroup::new("1km_reflective", "Band_1KM_RefSB", "EV_1KM_RefSB"),
                BandGroup::new("1km_emissive", "Band_1KM_Emissive", "EV_1KM_Emissive"),
            ],
        }
    }
}

impl Default for BandTable {
    fn default() -> Self {
        Self::modis()
    }
}

/// Which group wins when a band number appears in more than one group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TieBreak {
    /// The last matching group in table order.
    #[default]
    LastMatch,
    /// The first matching group in table order.
    FirstMatch,
}

impl TieBreak {
    /// Parse from string (case-insensitive), defaulting to `LastMatch`.
    pub fn from_str(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "first" | "first_match" => Self::FirstMatch,
            _ => Self::LastMatch,
        }
    }
}

/// Where a band lives in the file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BandLocation {
    /// Science dataset holding the band.
    pub field: String,
    /// Position along the science dataset's band axis.
    pub index: usize,
    /// Calibration family of `field`.
    pub category: FieldCategory,
}

/// Locate `band` by reading each group's band-number dataset from `source`.
pub fn locate_band<S: SwathSource + ?Sized>(
    source: &S,
    table: &BandTable,
    band: i64,
    tie_break: TieBreak,
) -> L1bResult<BandLocation> {
    let mut numbered = Vec::with_capacity(table.groups.len());
    for group in &table.groups {
        let numbers: Vec<i64> = source
            .read_dataset(&group.band_dataset)?
            .data
            .iter()
            .map(|&n| n as i64)
            .collect();
        numbered.push((group, numbers));
    }
    locate_in(&numbered, band, tie_break)
}

/// Locate `band` among groups whose band numbers are already known.
pub fn locate_in(
    groups: &[(&BandGroup, Vec<i64>)],
    band: i64,
    tie_break: TieBreak,
) -> L1bResult<BandLocation> {
    let mut matches = groups.iter().filter_map(|(group, numbers)| {
        numbers
            .iter()
            .position(|&n| n == band)
            .map(|index| (*group, index))
    });

    let first = matches
        .next()
        .ok_or_else(|| L1bError::band_not_found(format!("band {} is in no band table", band)))?;
    let rest: Vec<_> = matches.collect();

    let (group, index) = if rest.is_empty() {
        first
    } else {
        warn!(
            band = band,
            groups = rest.len() + 1,
            policy = ?tie_break,
            "Band number appears in more than one group"
        );
        match tie_break {
            TieBreak::FirstMatch => first,
            TieBreak::LastMatch => rest[rest.len() - 1],
        }
    };

    debug!(
        band = band,
        group = %group.group,
        field = %group.field,
        index = index,
        "Located band"
    );

    Ok(BandLocation {
        field: group.field.clone(),
        index,
        category: group.category,
    })
}
