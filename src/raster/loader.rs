//! Orthomosaic loading collaborator
//!
//! Decodes an orthomosaic image into the raster model. Format parsing is
//! delegated entirely to the image crate; this module only widens the
//! decoded RGB channels into named f64 bands and attaches pixel
//! georeferencing from an optional world file.

use std::path::Path;

use image::RgbImage;
use log::info;

use crate::raster::errors::RasterResult;
use crate::raster::transform::GeoTransform;
use crate::raster::types::{Band, Raster};

/// Band names produced by the loader, in R, G, B order
pub const LOADED_BAND_NAMES: [&str; 3] = ["band_1", "band_2", "band_3"];

/// Load an orthomosaic image into a raster
///
/// The image is decoded to 8-bit RGB and widened into three f64 bands
/// named `band_1`, `band_2`, `band_3` with values in 0..=255. When a
/// world file path is given it supplies the pixel-to-map transform;
/// otherwise the identity transform is used and pixel indices double as
/// map coordinates.
///
/// # Arguments
/// * `path` - Path to the orthomosaic image
/// * `world_file` - Optional path to a world file with the affine coefficients
///
/// # Returns
/// The loaded raster or an error
pub fn load_orthomosaic(path: &Path, world_file: Option<&Path>) -> RasterResult<Raster> {
    info!("Loading orthomosaic from {}", path.display());

    let image = image::open(path)?;
    let rgb = image.to_rgb8();

    let transform = match world_file {
        Some(wf) => {
            info!("Reading world file {}", wf.display());
            GeoTransform::from_world_file(wf)?
        }
        None => {
            info!("No world file given, using identity transform");
            GeoTransform::identity()
        }
    };

    let raster = raster_from_rgb(&rgb, transform)?;
    info!(
        "Loaded raster: {}x{} pixels, bands {:?}",
        raster.width(),
        raster.height(),
        raster.band_names()
    );

    Ok(raster)
}

/// Build a raster from a decoded RGB image and a transform
pub fn raster_from_rgb(rgb: &RgbImage, transform: GeoTransform) -> RasterResult<Raster> {
    let width = rgb.width();
    let height = rgb.height();
    let pixel_count = (width as usize) * (height as usize);

    let mut red = Vec::with_capacity(pixel_count);
    let mut green = Vec::with_capacity(pixel_count);
    let mut blue = Vec::with_capacity(pixel_count);

    for pixel in rgb.pixels() {
        red.push(pixel[0] as f64);
        green.push(pixel[1] as f64);
        blue.push(pixel[2] as f64);
    }

    Raster::from_bands(
        width,
        height,
        transform,
        vec![
            Band::new(LOADED_BAND_NAMES[0], red),
            Band::new(LOADED_BAND_NAMES[1], green),
            Band::new(LOADED_BAND_NAMES[2], blue),
        ],
    )
}
