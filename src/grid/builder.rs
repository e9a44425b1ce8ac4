//! Plot grid construction
//!
//! Discretizes a field quadrilateral into a regular grid of plot cells
//! by bilinear subdivision, the delineation used by field trials laid
//! out in rows and ranges.

use log::info;

use crate::grid::quad::Quadrilateral;
use crate::raster::errors::{RasterError, RasterResult};

/// One cell of a plot grid
#[derive(Debug, Clone)]
pub struct GridCell {
    /// Zero-based row index (along `v`)
    pub row: usize,
    /// Zero-based column index (along `u`)
    pub col: usize,
    /// The cell geometry
    pub quad: Quadrilateral,
}

/// Subdivide a quadrilateral into an nx x ny grid of cells
///
/// Cell (i, j) spans interpolation parameters `i/nx .. (i+1)/nx` along
/// the first edge pair and `j/ny .. (j+1)/ny` along the second. Cells
/// are returned in row-major order (index `j * nx + i`) and tile the
/// region without gaps or overlaps: neighboring cells share their edge
/// corners exactly.
///
/// # Arguments
/// * `quad` - The field region
/// * `nx` - Number of columns, positive
/// * `ny` - Number of rows, positive
///
/// # Returns
/// The `nx * ny` cells, or InvalidGridShape for a zero dimension
pub fn subdivide(quad: &Quadrilateral, nx: usize, ny: usize) -> RasterResult<Vec<GridCell>> {
    if nx == 0 || ny == 0 {
        return Err(RasterError::InvalidGridShape { nx, ny });
    }

    info!("Subdividing field region into {}x{} plot cells", nx, ny);

    let mut cells = Vec::with_capacity(nx * ny);

    for j in 0..ny {
        let v0 = j as f64 / ny as f64;
        let v1 = (j + 1) as f64 / ny as f64;

        for i in 0..nx {
            let u0 = i as f64 / nx as f64;
            let u1 = (i + 1) as f64 / nx as f64;

            let corners = [
                quad.point_at(u0, v0),
                quad.point_at(u1, v0),
                quad.point_at(u1, v1),
                quad.point_at(u0, v1),
            ];

            cells.push(GridCell {
                row: j,
                col: i,
                quad: Quadrilateral::new(corners)?,
            });
        }
    }

    Ok(cells)
}
