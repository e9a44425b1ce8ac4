//! Mode-filter mask denoising
//!
//! Thresholding leaves salt-and-pepper noise: isolated pixels whose hue
//! happened to cross the cutoff. A local majority vote removes them while
//! keeping contiguous vegetation regions intact.

use log::info;

use crate::raster::errors::{RasterError, RasterResult};
use crate::raster::Mask;

/// Replace each label with the majority value of its k x k neighborhood
///
/// The window includes the pixel itself. Pixels near the raster border
/// use the truncated window that fits inside the grid; there is no
/// wrapping or padding. Ties are resolved to false, biasing against
/// false-positive vegetation. The input mask is left untouched.
///
/// # Arguments
/// * `mask` - The mask to denoise
/// * `window` - Neighborhood edge length; must be odd and non-zero
///
/// # Returns
/// A new mask with the filtered labels
pub fn mode_filter(mask: &Mask, window: u32) -> RasterResult<Mask> {
    if window == 0 || window % 2 == 0 {
        return Err(RasterError::InvalidWindow(window));
    }

    let width = mask.width();
    let height = mask.height();
    let radius = window / 2;

    info!(
        "Denoising {}x{} mask with a {}x{} mode filter",
        width, height, window, window
    );

    let mut labels = Vec::with_capacity(mask.len());

    for row in 0..height {
        let row_start = row.saturating_sub(radius);
        let row_end = (row + radius).min(height.saturating_sub(1));

        for col in 0..width {
            let col_start = col.saturating_sub(radius);
            let col_end = (col + radius).min(width.saturating_sub(1));

            let mut true_count: u32 = 0;
            let mut total: u32 = 0;

            for r in row_start..=row_end {
                for c in col_start..=col_end {
                    total += 1;
                    if mask.get(c, r) {
                        true_count += 1;
                    }
                }
            }

            // Strict majority required for true; ties fall to false.
            labels.push(true_count * 2 > total);
        }
    }

    Mask::from_labels(width, height, &mask.name, labels)
}
