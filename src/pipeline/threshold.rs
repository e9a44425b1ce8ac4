//! Percentile threshold classification
//!
//! Turns a numeric band into boolean labels by cutting at a quantile of
//! the band's own value distribution, so the cutoff adapts to each
//! image instead of being a fixed constant.

use log::info;

use crate::pipeline::stats::{percentile, sorted_copy};
use crate::raster::errors::RasterResult;
use crate::raster::{Mask, Raster};

/// Classify pixels against a quantile cutoff of one band
///
/// The cutoff is the value at quantile `q` of the band (linear
/// interpolation between order statistics). A pixel is labeled true iff
/// its value strictly exceeds the cutoff; values exactly at the cutoff
/// are labeled false. Deterministic for identical input ordering.
///
/// # Arguments
/// * `raster` - The source raster
/// * `band_name` - Band to classify on
/// * `q` - Quantile in [0, 1]
/// * `label_name` - Name of the boolean attribute (conventionally "label")
///
/// # Returns
/// A new mask, or EmptyInput / InvalidPercentile / MissingBand on bad
/// input
pub fn classify(raster: &Raster, band_name: &str, q: f64, label_name: &str) -> RasterResult<Mask> {
    let values = raster.band_values(band_name)?;
    let cutoff = percentile(&sorted_copy(values), q)?;

    info!(
        "Classifying band '{}' at quantile {}: cutoff {}",
        band_name, q, cutoff
    );

    let labels: Vec<bool> = values.iter().map(|v| *v > cutoff).collect();

    Mask::from_labels(raster.width(), raster.height(), label_name, labels)
}
