//! Band selection and renaming
//!
//! The first pipeline stage: pick the color bands out of whatever the
//! loader produced and give them their working names, without touching
//! pixel geometry or ordering.

use log::info;

use crate::raster::errors::RasterResult;
use crate::raster::{Band, Raster};

/// Select and rename bands from a raster
///
/// Produces a new raster exposing exactly the requested bands under their
/// target names, in mapping order, with the source raster's dimensions
/// and transform. The source raster is left untouched.
///
/// # Arguments
/// * `raster` - The source raster
/// * `mapping` - (source name, target name) pairs
///
/// # Returns
/// The re-banded raster, or MissingBand if a source name does not exist
pub fn select_bands(raster: &Raster, mapping: &[(String, String)]) -> RasterResult<Raster> {
    info!(
        "Selecting {} bands out of {:?}",
        mapping.len(),
        raster.band_names()
    );

    let mut bands = Vec::with_capacity(mapping.len());
    for (source, target) in mapping {
        let values = raster.band_values(source)?.to_vec();
        bands.push(Band::new(target, values));
    }

    Raster::from_bands(
        raster.width(),
        raster.height(),
        *raster.transform(),
        bands,
    )
}
