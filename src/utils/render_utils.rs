//! Raster rendering utilities
//!
//! This module writes pipeline products to ordinary image files: the
//! composite color layer as a true-color PNG, the vegetation mask as a
//! black-and-white PNG, and a tinted overlay of the mask on the color
//! rendering. Nothing in the core consumes these outputs.

use image::{GrayImage, Luma, Rgb, RgbImage};
use log::info;

use crate::raster::errors::{RasterError, RasterResult};
use crate::raster::{Mask, Raster};

/// Tint applied to vegetation pixels in the overlay rendering
const OVERLAY_TINT: [f64; 3] = [0.0, 255.0, 0.0];
/// Overlay blend weight of the tint against the background
const OVERLAY_ALPHA: f64 = 0.5;

fn channel_to_u8(value: f64) -> u8 {
    (value.clamp(0.0, 1.0) * 255.0).round() as u8
}

/// Render a raster's color layer to an RGB image
///
/// # Arguments
/// * `raster` - A raster with an attached color layer
///
/// # Returns
/// The rendered image, or an error if no color layer is attached
pub fn color_to_image(raster: &Raster) -> RasterResult<RgbImage> {
    let color = raster.color().ok_or_else(|| {
        RasterError::GenericError("Raster has no color layer to render".to_string())
    })?;

    let width = raster.width();
    let mut image = RgbImage::new(width, raster.height());

    for (i, triple) in color.values.iter().enumerate() {
        let x = (i as u32) % width;
        let y = (i as u32) / width;
        image.put_pixel(
            x,
            y,
            Rgb([
                channel_to_u8(triple[0]),
                channel_to_u8(triple[1]),
                channel_to_u8(triple[2]),
            ]),
        );
    }

    Ok(image)
}

/// Render a mask to a black-and-white image
///
/// True labels become white pixels, false labels black.
pub fn mask_to_image(mask: &Mask) -> GrayImage {
    let width = mask.width();
    let mut image = GrayImage::new(width, mask.height());

    for (i, label) in mask.labels().iter().enumerate() {
        let x = (i as u32) % width;
        let y = (i as u32) / width;
        image.put_pixel(x, y, Luma([if *label { 255 } else { 0 }]));
    }

    image
}

/// Render the mask tinted over the color layer
///
/// Vegetation pixels are blended halfway toward green; background
/// pixels keep the color rendering, so the overlay reads like the
/// stretched image with the detected vegetation highlighted.
///
/// # Arguments
/// * `raster` - A raster with an attached color layer
/// * `mask` - The vegetation mask, parallel to the raster
///
/// # Returns
/// The overlay image, or an error on a missing color layer or a pixel
/// count mismatch
pub fn overlay_to_image(raster: &Raster, mask: &Mask) -> RasterResult<RgbImage> {
    if raster.len() != mask.len() {
        return Err(RasterError::ShapeMismatch {
            expected: raster.len(),
            actual: mask.len(),
        });
    }

    let mut image = color_to_image(raster)?;

    for (i, label) in mask.labels().iter().enumerate() {
        if !*label {
            continue;
        }

        let x = (i as u32) % raster.width();
        let y = (i as u32) / raster.width();
        let pixel = image.get_pixel(x, y);

        let blended = Rgb([
            blend(pixel[0], OVERLAY_TINT[0]),
            blend(pixel[1], OVERLAY_TINT[1]),
            blend(pixel[2], OVERLAY_TINT[2]),
        ]);
        image.put_pixel(x, y, blended);
    }

    Ok(image)
}

fn blend(background: u8, tint: f64) -> u8 {
    let value = background as f64 * (1.0 - OVERLAY_ALPHA) + tint * OVERLAY_ALPHA;
    value.round().clamp(0.0, 255.0) as u8
}

/// Save a raster's color layer as a PNG-style image file
pub fn save_color_image(raster: &Raster, output_path: &str) -> RasterResult<()> {
    let image = color_to_image(raster)?;
    info!("Saving color rendering to {}", output_path);
    image.save(output_path)?;
    Ok(())
}

/// Save a mask as a black-and-white image file
pub fn save_mask_image(mask: &Mask, output_path: &str) -> RasterResult<()> {
    let image = mask_to_image(mask);
    info!("Saving mask rendering to {}", output_path);
    image.save(output_path)?;
    Ok(())
}

/// Save the mask-over-color overlay as an image file
pub fn save_overlay_image(raster: &Raster, mask: &Mask, output_path: &str) -> RasterResult<()> {
    let image = overlay_to_image(raster, mask)?;
    info!("Saving overlay rendering to {}", output_path);
    image.save(output_path)?;
    Ok(())
}
