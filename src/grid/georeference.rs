//! Georeferencing tabular data onto the plot grid
//!
//! Field-trial tables come without coordinates; their rows are recorded
//! in the same planting order the grid cells are generated in, so the
//! pairing is positional. Once paired, per-plot vegetation statistics
//! follow from counting mask pixels inside each cell.

use log::info;

use crate::grid::builder::GridCell;
use crate::grid::table::PlotTable;
use crate::raster::errors::{RasterError, RasterResult};
use crate::raster::{Mask, Raster};

/// One grid cell paired with its tabular record
#[derive(Debug, Clone)]
pub struct Plot {
    /// The cell geometry and grid indices
    pub cell: GridCell,
    /// The table row associated with this cell
    pub record: Vec<String>,
}

/// Vegetation statistics for one plot
#[derive(Debug, Clone)]
pub struct PlotCoverage {
    /// Grid row of the plot
    pub row: usize,
    /// Grid column of the plot
    pub col: usize,
    /// Raster pixels whose centers fall inside the plot
    pub pixels: usize,
    /// Of those, pixels labeled as vegetation
    pub vegetation_pixels: usize,
    /// vegetation_pixels / pixels, or 0 for an empty plot
    pub fraction: f64,
}

/// Pair table rows 1:1 with grid cells, by position
///
/// Row k is attached to cell k in the grid's row-major order.
///
/// # Arguments
/// * `table` - The per-plot table
/// * `cells` - The grid cells, row-major
///
/// # Returns
/// One plot per cell, or RowCountMismatch when the counts differ
pub fn georeference(table: &PlotTable, cells: &[GridCell]) -> RasterResult<Vec<Plot>> {
    if table.len() != cells.len() {
        return Err(RasterError::RowCountMismatch {
            rows: table.len(),
            cells: cells.len(),
        });
    }

    info!("Georeferencing {} table rows onto the plot grid", table.len());

    Ok(cells
        .iter()
        .zip(table.rows())
        .map(|(cell, record)| Plot {
            cell: cell.clone(),
            record: record.clone(),
        })
        .collect())
}

/// Count vegetation coverage per plot
///
/// Every raster pixel is attributed to the first plot (in the given
/// order) whose quadrilateral contains the pixel's center; pixels on a
/// shared edge are counted once. Pixels outside every plot are ignored.
///
/// # Arguments
/// * `plots` - The georeferenced plots
/// * `raster` - The source raster, for pixel locations
/// * `mask` - The vegetation mask, parallel to the raster
///
/// # Returns
/// One coverage record per plot, in plot order, or ShapeMismatch when
/// raster and mask disagree on pixel count
pub fn coverage(plots: &[Plot], raster: &Raster, mask: &Mask) -> RasterResult<Vec<PlotCoverage>> {
    if raster.len() != mask.len() {
        return Err(RasterError::ShapeMismatch {
            expected: raster.len(),
            actual: mask.len(),
        });
    }

    let mut pixels = vec![0usize; plots.len()];
    let mut vegetation = vec![0usize; plots.len()];

    for (i, label) in mask.labels().iter().enumerate() {
        let point = raster.point_at(i);

        for (p, plot) in plots.iter().enumerate() {
            if plot.cell.quad.contains(&point) {
                pixels[p] += 1;
                if *label {
                    vegetation[p] += 1;
                }
                break;
            }
        }
    }

    Ok(plots
        .iter()
        .enumerate()
        .map(|(p, plot)| PlotCoverage {
            row: plot.cell.row,
            col: plot.cell.col,
            pixels: pixels[p],
            vegetation_pixels: vegetation[p],
            fraction: if pixels[p] == 0 {
                0.0
            } else {
                vegetation[p] as f64 / pixels[p] as f64
            },
        })
        .collect())
}
