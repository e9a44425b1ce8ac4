//! Pixel-to-map affine transform handling
//!
//! This module provides the 6-parameter affine model used to georeference
//! orthomosaic pixels, restricted to the axis-aligned case (zero rotation
//! terms), and a parser for the plain-text world file format that carries
//! those coefficients alongside an image.

use std::fs;
use std::path::Path;

use crate::coordinate::Point;
use crate::raster::errors::{RasterError, RasterResult};

/// Affine mapping from pixel indices to map coordinates
///
/// Follows the usual geotransform coefficient layout
/// [origin_x, pixel_width, 0, origin_y, 0, pixel_height] with the rotation
/// terms fixed at zero. `origin_x`/`origin_y` locate the outer corner of
/// the top-left pixel; `pixel_height` is negative for north-up imagery.
#[derive(Debug, Clone, Copy)]
pub struct GeoTransform {
    /// Map X coordinate of the top-left corner of pixel (0, 0)
    pub origin_x: f64,
    /// Map units per pixel along X
    pub pixel_width: f64,
    /// Map Y coordinate of the top-left corner of pixel (0, 0)
    pub origin_y: f64,
    /// Map units per pixel along Y (negative for north-up imagery)
    pub pixel_height: f64,
}

impl GeoTransform {
    /// Create a new transform from explicit coefficients
    pub fn new(origin_x: f64, pixel_width: f64, origin_y: f64, pixel_height: f64) -> Self {
        GeoTransform {
            origin_x,
            pixel_width,
            origin_y,
            pixel_height,
        }
    }

    /// Identity transform: one map unit per pixel, origin at (0, 0)
    ///
    /// Used when no world file accompanies the image, so pixel indices
    /// double as map coordinates.
    pub fn identity() -> Self {
        GeoTransform::new(0.0, 1.0, 0.0, -1.0)
    }

    /// Map coordinates of the center of pixel (col, row)
    pub fn pixel_center(&self, col: u32, row: u32) -> Point {
        Point::new(
            self.origin_x + (col as f64 + 0.5) * self.pixel_width,
            self.origin_y + (row as f64 + 0.5) * self.pixel_height,
        )
    }

    /// Parse a world file into a transform
    ///
    /// World files carry six lines: pixel width, the two rotation terms,
    /// pixel height, then the map coordinates of the *center* of the
    /// top-left pixel. The rotation terms must be zero; rotated imagery
    /// is not supported.
    pub fn from_world_file(path: &Path) -> RasterResult<Self> {
        let content = fs::read_to_string(path)?;

        let values: Vec<f64> = content
            .lines()
            .map(|line| line.trim())
            .filter(|line| !line.is_empty())
            .map(|line| {
                line.parse::<f64>()
                    .map_err(|_| RasterError::GenericError(
                        format!("Invalid world file value '{}' in {}", line, path.display())))
            })
            .collect::<RasterResult<Vec<f64>>>()?;

        if values.len() != 6 {
            return Err(RasterError::GenericError(format!(
                "World file {} must have 6 values, found {}",
                path.display(),
                values.len()
            )));
        }

        let pixel_width = values[0];
        let rot_y = values[1];
        let rot_x = values[2];
        let pixel_height = values[3];
        let center_x = values[4];
        let center_y = values[5];

        if rot_x != 0.0 || rot_y != 0.0 {
            return Err(RasterError::GenericError(format!(
                "World file {} has rotation terms; rotated imagery is not supported",
                path.display()
            )));
        }

        if pixel_width == 0.0 || pixel_height == 0.0 {
            return Err(RasterError::GenericError(format!(
                "World file {} has a zero pixel size",
                path.display()
            )));
        }

        // The world file anchors the center of pixel (0, 0); shift back
        // half a pixel to get the corner origin used by the transform.
        Ok(GeoTransform::new(
            center_x - 0.5 * pixel_width,
            pixel_width,
            center_y - 0.5 * pixel_height,
            pixel_height,
        ))
    }
}
