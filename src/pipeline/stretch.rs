//! Percentile contrast stretching
//!
//! Rescales each color band into [0, 1] by clipping at a low and high
//! percentile of the band's value distribution, then combines the three
//! rescaled channels into a composite color attribute ready for
//! rendering.

use log::info;

use crate::pipeline::stats::{percentile, sorted_copy};
use crate::raster::errors::{RasterError, RasterResult};
use crate::raster::{Band, ColorLayer, Raster};

/// Options for the contrast stretch
#[derive(Debug, Clone)]
pub struct StretchOptions {
    /// Low percentile clip point, in [0, 1]
    pub low: f64,
    /// High percentile clip point, in [0, 1]
    pub high: f64,
    /// Name of the composite color attribute
    pub color_name: String,
}

impl Default for StretchOptions {
    fn default() -> Self {
        StretchOptions {
            low: 0.02,
            high: 0.98,
            color_name: "RGB".to_string(),
        }
    }
}

/// Contrast-stretch a three-band raster and attach a color layer
///
/// Per band, the values at the low and high percentiles are computed in
/// one reduction pass, then every pixel is rescaled with
/// `(v - p_low) / (p_high - p_low)` and clamped to [0, 1]. A band whose
/// two clip points coincide maps entirely to 0. The three rescaled
/// channels are combined, in band order, into a composite color layer.
///
/// # Arguments
/// * `raster` - A raster with exactly three numeric bands
/// * `options` - Percentile clip points and output layer name
///
/// # Returns
/// A new raster with the rescaled bands and the color layer attached
pub fn stretch_colors(raster: &Raster, options: &StretchOptions) -> RasterResult<Raster> {
    if options.low >= options.high
        || !(0.0..=1.0).contains(&options.low)
        || !(0.0..=1.0).contains(&options.high)
    {
        return Err(RasterError::InvalidPercentile {
            low: options.low,
            high: options.high,
        });
    }

    if raster.is_empty() {
        return Err(RasterError::EmptyInput);
    }

    if raster.bands().len() != 3 {
        return Err(RasterError::GenericError(format!(
            "Contrast stretch expects 3 bands, raster has {}",
            raster.bands().len()
        )));
    }

    let mut stretched = Vec::with_capacity(3);
    for band in raster.bands() {
        let sorted = sorted_copy(&band.values);
        let p_low = percentile(&sorted, options.low)?;
        let p_high = percentile(&sorted, options.high)?;
        let range = p_high - p_low;

        info!(
            "Stretching band '{}': clip points {} .. {}",
            band.name, p_low, p_high
        );

        let values: Vec<f64> = if range == 0.0 {
            // Zero-variance band inside the clip range: everything maps
            // to the bottom of the output range.
            vec![0.0; band.values.len()]
        } else {
            band.values
                .iter()
                .map(|v| ((v - p_low) / range).clamp(0.0, 1.0))
                .collect()
        };

        stretched.push(Band::new(&band.name, values));
    }

    let color_values: Vec<[f64; 3]> = (0..raster.len())
        .map(|i| {
            [
                stretched[0].values[i],
                stretched[1].values[i],
                stretched[2].values[i],
            ]
        })
        .collect();

    let color = ColorLayer {
        name: options.color_name.clone(),
        values: color_values,
    };

    Raster::from_bands(
        raster.width(),
        raster.height(),
        *raster.transform(),
        stretched,
    )?
    .with_color(color)
}
