//! Raster data model and loading
//!
//! This module provides the pixel-grid data model the pipeline operates
//! on, the affine pixel georeferencing, and the image-decoding loader
//! collaborator.

pub mod errors;
pub mod loader;
mod transform;
mod types;


pub use errors::{RasterError, RasterResult};
pub use transform::GeoTransform;
pub use types::{Band, ColorLayer, Mask, Raster, Sample, SampleSet};
