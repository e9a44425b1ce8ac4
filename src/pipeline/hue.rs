//! Hue extraction
//!
//! Converts three color channels into the HSV hue angle, the channel the
//! vegetation threshold operates on. Hue isolates the color tone from
//! brightness and saturation, which makes it robust against the uneven
//! illumination typical of stitched aerial imagery.

use log::info;

use crate::raster::errors::RasterResult;
use crate::raster::{Band, Raster};

/// Per-pixel hue from three channel scalars, normalized to [0, 1)
///
/// Standard RGB->HSV sector formula: 60 degree rotations anchored on the
/// dominant channel, divided by 360. An achromatic pixel (all channels
/// equal) has no defined hue angle and maps to 0 by policy.
fn hue_value(r: f64, g: f64, b: f64) -> f64 {
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let delta = max - min;

    if delta == 0.0 {
        return 0.0;
    }

    let sector = if max == r {
        ((g - b) / delta).rem_euclid(6.0)
    } else if max == g {
        (b - r) / delta + 2.0
    } else {
        (r - g) / delta + 4.0
    };

    sector * 60.0 / 360.0
}

/// Derive a hue band from three channel bands
///
/// Returns a copy of the input raster with one added band holding the
/// per-pixel hue in [0, 1); the source bands are not modified.
///
/// # Arguments
/// * `raster` - The source raster
/// * `red`, `green`, `blue` - Names of the three channel bands
/// * `out_name` - Name of the derived band (conventionally "HUE")
///
/// # Returns
/// The extended raster, or MissingBand if a channel band is absent
pub fn extract_hue(
    raster: &Raster,
    red: &str,
    green: &str,
    blue: &str,
    out_name: &str,
) -> RasterResult<Raster> {
    let r_values = raster.band_values(red)?;
    let g_values = raster.band_values(green)?;
    let b_values = raster.band_values(blue)?;

    info!(
        "Extracting hue band '{}' from '{}', '{}', '{}'",
        out_name, red, green, blue
    );

    let hues: Vec<f64> = (0..raster.len())
        .map(|i| hue_value(r_values[i], g_values[i], b_values[i]))
        .collect();

    raster.with_band(Band::new(out_name, hues))
}
