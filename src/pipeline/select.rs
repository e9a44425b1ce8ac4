//! Masked pixel selection
//!
//! The last raster stage: pull the labeled pixels out of the grid into
//! the geo-indexed table form, each sample carrying its map location and
//! band values.

use log::info;

use crate::raster::errors::{RasterError, RasterResult};
use crate::raster::{Mask, Raster, Sample, SampleSet};

fn select_where(raster: &Raster, mask: &Mask, keep: bool) -> RasterResult<SampleSet> {
    if raster.len() != mask.len() {
        return Err(RasterError::ShapeMismatch {
            expected: raster.len(),
            actual: mask.len(),
        });
    }

    let band_names: Vec<String> = raster
        .band_names()
        .iter()
        .map(|n| n.to_string())
        .collect();

    let mut samples = Vec::new();
    for (i, label) in mask.labels().iter().enumerate() {
        if *label != keep {
            continue;
        }

        samples.push(Sample {
            point: raster.point_at(i),
            values: raster.bands().iter().map(|b| b.values[i]).collect(),
        });
    }

    Ok(SampleSet {
        band_names,
        samples,
    })
}

/// Select the pixels whose mask label is true
///
/// Relative pixel order is preserved. Together with `select_unmasked`
/// the two outputs partition the raster exactly.
///
/// # Arguments
/// * `raster` - The source raster
/// * `mask` - A parallel mask with identical pixel ordering
///
/// # Returns
/// The selected samples, or ShapeMismatch if pixel counts differ
pub fn select_masked(raster: &Raster, mask: &Mask) -> RasterResult<SampleSet> {
    let selected = select_where(raster, mask, true)?;
    info!(
        "Selected {} of {} pixels where '{}' is set",
        selected.len(),
        raster.len(),
        mask.name
    );
    Ok(selected)
}

/// Select the pixels whose mask label is false
///
/// The complement of `select_masked` over the same inputs.
pub fn select_unmasked(raster: &Raster, mask: &Mask) -> RasterResult<SampleSet> {
    select_where(raster, mask, false)
}
