//! Core raster data model
//!
//! A raster is a row-major grid of pixels carrying named numeric bands and
//! an optional composite color layer. Pipeline stages never mutate their
//! input: each stage builds and returns a new value.

use crate::coordinate::Point;
use crate::raster::errors::{RasterError, RasterResult};
use crate::raster::transform::GeoTransform;

/// A named band of per-pixel values, row-major
#[derive(Debug, Clone)]
pub struct Band {
    /// Band name, unique within a raster
    pub name: String,
    /// One value per pixel, row-major
    pub values: Vec<f64>,
}

impl Band {
    /// Create a new band
    pub fn new(name: &str, values: Vec<f64>) -> Self {
        Band {
            name: name.to_string(),
            values,
        }
    }
}

/// A composite renderable color attribute, one RGB triple per pixel
///
/// Derived from three source bands by the contrast stretcher; recomputed
/// whenever the source bands change, never maintained independently.
/// Channel values are normalized to [0, 1].
#[derive(Debug, Clone)]
pub struct ColorLayer {
    /// Attribute name (default "RGB")
    pub name: String,
    /// One (r, g, b) triple per pixel, row-major
    pub values: Vec<[f64; 3]>,
}

/// A raster: a pixel grid with named bands and pixel georeferencing
#[derive(Debug, Clone)]
pub struct Raster {
    width: u32,
    height: u32,
    transform: GeoTransform,
    bands: Vec<Band>,
    color: Option<ColorLayer>,
}

impl Raster {
    /// Create a raster from bands
    ///
    /// Every band must carry exactly `width * height` values.
    pub fn from_bands(
        width: u32,
        height: u32,
        transform: GeoTransform,
        bands: Vec<Band>,
    ) -> RasterResult<Self> {
        let expected = (width as usize) * (height as usize);
        for band in &bands {
            if band.values.len() != expected {
                return Err(RasterError::ShapeMismatch {
                    expected,
                    actual: band.values.len(),
                });
            }
        }

        Ok(Raster {
            width,
            height,
            transform,
            bands,
            color: None,
        })
    }

    /// Raster width in pixels
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Raster height in pixels
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Total pixel count
    pub fn len(&self) -> usize {
        (self.width as usize) * (self.height as usize)
    }

    /// Whether the raster has zero pixels
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The pixel-to-map transform
    pub fn transform(&self) -> &GeoTransform {
        &self.transform
    }

    /// All bands, in insertion order
    pub fn bands(&self) -> &[Band] {
        &self.bands
    }

    /// Names of all bands, in insertion order
    pub fn band_names(&self) -> Vec<&str> {
        self.bands.iter().map(|b| b.name.as_str()).collect()
    }

    /// Look up a band by name
    pub fn band(&self, name: &str) -> Option<&Band> {
        self.bands.iter().find(|b| b.name == name)
    }

    /// Look up a band's values by name, or fail with MissingBand
    pub fn band_values(&self, name: &str) -> RasterResult<&[f64]> {
        self.band(name)
            .map(|b| b.values.as_slice())
            .ok_or_else(|| RasterError::MissingBand(name.to_string()))
    }

    /// The composite color layer, if one has been attached
    pub fn color(&self) -> Option<&ColorLayer> {
        self.color.as_ref()
    }

    /// Return a copy of this raster with one band appended
    ///
    /// The band must match the raster's pixel count. The input raster is
    /// left untouched.
    pub fn with_band(&self, band: Band) -> RasterResult<Self> {
        if band.values.len() != self.len() {
            return Err(RasterError::ShapeMismatch {
                expected: self.len(),
                actual: band.values.len(),
            });
        }

        let mut raster = self.clone();
        raster.bands.push(band);
        Ok(raster)
    }

    /// Attach a composite color layer, consuming the raster
    ///
    /// The layer must match the raster's pixel count.
    pub fn with_color(mut self, color: ColorLayer) -> RasterResult<Self> {
        if color.values.len() != self.len() {
            return Err(RasterError::ShapeMismatch {
                expected: self.len(),
                actual: color.values.len(),
            });
        }

        self.color = Some(color);
        Ok(self)
    }

    /// Map coordinates of the center of the pixel at a row-major index
    pub fn point_at(&self, index: usize) -> Point {
        let col = (index % self.width as usize) as u32;
        let row = (index / self.width as usize) as u32;
        self.transform.pixel_center(col, row)
    }
}

/// A boolean per-pixel classification over a raster grid
///
/// Produced by thresholding, replaced (not edited in place) by denoising,
/// consumed by masked selection.
#[derive(Debug, Clone)]
pub struct Mask {
    width: u32,
    height: u32,
    /// Attribute name (default "label")
    pub name: String,
    labels: Vec<bool>,
}

impl Mask {
    /// Create a mask from labels
    pub fn from_labels(width: u32, height: u32, name: &str, labels: Vec<bool>) -> RasterResult<Self> {
        let expected = (width as usize) * (height as usize);
        if labels.len() != expected {
            return Err(RasterError::ShapeMismatch {
                expected,
                actual: labels.len(),
            });
        }

        Ok(Mask {
            width,
            height,
            name: name.to_string(),
            labels,
        })
    }

    /// Mask width in pixels
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Mask height in pixels
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Total pixel count
    pub fn len(&self) -> usize {
        (self.width as usize) * (self.height as usize)
    }

    /// Whether the mask has zero pixels
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// All labels, row-major
    pub fn labels(&self) -> &[bool] {
        &self.labels
    }

    /// Label of the pixel at (col, row)
    pub fn get(&self, col: u32, row: u32) -> bool {
        self.labels[(row as usize) * (self.width as usize) + (col as usize)]
    }

    /// Number of true labels
    pub fn count_true(&self) -> usize {
        self.labels.iter().filter(|&&l| l).count()
    }
}

/// One selected pixel: its map location plus its band values
#[derive(Debug, Clone)]
pub struct Sample {
    /// Map coordinates of the pixel center
    pub point: Point,
    /// Band values in the order of the source raster's bands
    pub values: Vec<f64>,
}

/// The geo-indexed table form of a raster: pixels kept by masked selection
///
/// Relative pixel order of the source raster is preserved.
#[derive(Debug, Clone)]
pub struct SampleSet {
    /// Band names, in the order of each sample's values
    pub band_names: Vec<String>,
    /// Selected pixels, in source order
    pub samples: Vec<Sample>,
}

impl SampleSet {
    /// Number of selected pixels
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Whether no pixels were selected
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }
}
