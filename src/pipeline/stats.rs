//! Order statistics shared by the pipeline stages
//!
//! Percentiles are always computed in a single reduction pass over a
//! sorted copy of the band, then consumed by per-pixel map passes; no
//! stage recomputes global statistics per pixel.

use crate::raster::errors::{RasterError, RasterResult};
use crate::raster::Raster;

/// Return a sorted copy of a value slice
pub fn sorted_copy(values: &[f64]) -> Vec<f64> {
    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);
    sorted
}

/// Value at quantile `q` of a sorted slice
///
/// Uses linear interpolation between the closest order statistics, the
/// standard percentile definition: rank `q * (n - 1)` over the sorted
/// values.
///
/// # Arguments
/// * `sorted` - Values in ascending order
/// * `q` - Quantile in [0, 1]
///
/// # Returns
/// The interpolated value, or an error for empty input or a quantile
/// outside [0, 1]
pub fn percentile(sorted: &[f64], q: f64) -> RasterResult<f64> {
    if sorted.is_empty() {
        return Err(RasterError::EmptyInput);
    }
    if !(0.0..=1.0).contains(&q) {
        return Err(RasterError::InvalidPercentile { low: q, high: q });
    }

    let rank = q * (sorted.len() - 1) as f64;
    let lower = rank.floor() as usize;
    let upper = rank.ceil() as usize;

    if lower == upper {
        return Ok(sorted[lower]);
    }

    let fraction = rank - lower as f64;
    Ok(sorted[lower] + fraction * (sorted[upper] - sorted[lower]))
}

/// Summary statistics for one band
#[derive(Debug, Clone)]
pub struct BandSummary {
    /// Band name
    pub name: String,
    /// Smallest value
    pub min: f64,
    /// Largest value
    pub max: f64,
    /// Arithmetic mean
    pub mean: f64,
    /// Median (50th percentile)
    pub median: f64,
}

/// Compute summary statistics for every band of a raster
///
/// # Arguments
/// * `raster` - The raster to summarize
///
/// # Returns
/// One summary per band, in band order, or EmptyInput for a zero-pixel
/// raster
pub fn summarize(raster: &Raster) -> RasterResult<Vec<BandSummary>> {
    if raster.is_empty() {
        return Err(RasterError::EmptyInput);
    }

    let mut summaries = Vec::with_capacity(raster.bands().len());

    for band in raster.bands() {
        let sorted = sorted_copy(&band.values);
        let sum: f64 = band.values.iter().sum();

        summaries.push(BandSummary {
            name: band.name.clone(),
            min: sorted[0],
            max: sorted[sorted.len() - 1],
            mean: sum / band.values.len() as f64,
            median: percentile(&sorted, 0.5)?,
        });
    }

    Ok(summaries)
}
