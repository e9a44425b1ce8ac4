//! Custom error types for raster pipeline processing

use std::fmt;
use std::io;

/// Pipeline-specific error types
#[derive(Debug)]
pub enum RasterError {
    /// I/O error
    IoError(io::Error),
    /// A requested band name does not exist in the raster
    MissingBand(String),
    /// Percentile arguments out of range or inverted
    InvalidPercentile { low: f64, high: f64 },
    /// An operation received a raster with zero pixels
    EmptyInput,
    /// Two parallel inputs disagree on pixel count
    ShapeMismatch { expected: usize, actual: usize },
    /// Table row count does not match the grid cell count
    RowCountMismatch { rows: usize, cells: usize },
    /// Quadrilateral corners do not form a convex region
    NonConvexRegion,
    /// Mode-filter window must be odd and non-zero
    InvalidWindow(u32),
    /// Grid dimensions must both be positive
    InvalidGridShape { nx: usize, ny: usize },
    /// Image decoding or encoding failure
    ImageError(String),
    /// Generic error with message
    GenericError(String),
}

impl fmt::Display for RasterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RasterError::IoError(e) => write!(f, "I/O error: {}", e),
            RasterError::MissingBand(name) => write!(f, "Band not found: {}", name),
            RasterError::InvalidPercentile { low, high } =>
                write!(f, "Invalid percentile range: low={}, high={}", low, high),
            RasterError::EmptyInput => write!(f, "Input raster has no pixels"),
            RasterError::ShapeMismatch { expected, actual } =>
                write!(f, "Pixel count mismatch: expected {}, got {}", expected, actual),
            RasterError::RowCountMismatch { rows, cells } =>
                write!(f, "Table has {} rows but grid has {} cells", rows, cells),
            RasterError::NonConvexRegion => write!(f, "Corner points do not form a convex quadrilateral"),
            RasterError::InvalidWindow(k) => write!(f, "Invalid filter window size: {}", k),
            RasterError::InvalidGridShape { nx, ny } =>
                write!(f, "Invalid grid shape: {}x{}", nx, ny),
            RasterError::ImageError(msg) => write!(f, "Image error: {}", msg),
            RasterError::GenericError(msg) => write!(f, "Raster error: {}", msg),
        }
    }
}

impl std::error::Error for RasterError {}

impl From<io::Error> for RasterError {
    fn from(error: io::Error) -> Self {
        RasterError::IoError(error)
    }
}

/// Result type for raster pipeline operations
pub type RasterResult<T> = Result<T, RasterError>;

impl From<String> for RasterError {
    fn from(msg: String) -> Self {
        RasterError::GenericError(msg)
    }
}

impl From<image::ImageError> for RasterError {
    fn from(error: image::ImageError) -> Self {
        RasterError::ImageError(error.to_string())
    }
}

impl From<csv::Error> for RasterError {
    fn from(error: csv::Error) -> Self {
        RasterError::GenericError(format!("CSV error: {}", error))
    }
}
