//! CLI string parsing utilities
//!
//! This module provides parsers for the small fixed-shape argument
//! strings the CLI accepts: percentile pairs, grid shapes and corner
//! lists.

use crate::coordinate::Point;

/// Parse a percentile range string in the format "low,high"
///
/// # Arguments
/// * `range_str` - String in the format "low,high" (e.g., "0.02,0.98")
///
/// # Returns
/// A tuple of (low, high) or an error if parsing fails
pub fn parse_percentile_range(range_str: &str) -> Result<(f64, f64), String> {
    let parts: Vec<&str> = range_str.split(',').collect();

    if parts.len() != 2 {
        return Err(format!(
            "Invalid percentile range '{}'. Expected 'low,high'",
            range_str
        ));
    }

    let low = parts[0].trim().parse::<f64>()
        .map_err(|_| format!("Invalid low percentile '{}'. Expected a number in 0-1", parts[0]))?;
    let high = parts[1].trim().parse::<f64>()
        .map_err(|_| format!("Invalid high percentile '{}'. Expected a number in 0-1", parts[1]))?;

    Ok((low, high))
}

/// Parse a grid shape string in the format "nx,ny"
///
/// # Arguments
/// * `shape_str` - String in the format "nx,ny" (e.g., "14,9")
///
/// # Returns
/// A tuple of (nx, ny) or an error if parsing fails
pub fn parse_grid_shape(shape_str: &str) -> Result<(usize, usize), String> {
    let parts: Vec<&str> = shape_str.split(',').collect();

    if parts.len() != 2 {
        return Err(format!(
            "Invalid grid shape '{}'. Expected 'nx,ny'",
            shape_str
        ));
    }

    let nx = parts[0].trim().parse::<usize>()
        .map_err(|_| format!("Invalid column count '{}'", parts[0]))?;
    let ny = parts[1].trim().parse::<usize>()
        .map_err(|_| format!("Invalid row count '{}'", parts[1]))?;

    Ok((nx, ny))
}

/// Parse a corner list string into four ordered points
///
/// Corners are whitespace-separated "x,y" pairs walked in ring order,
/// e.g. "0,0 14,0 14,9 0,9".
///
/// # Arguments
/// * `corners_str` - The corner list string
///
/// # Returns
/// The four corner points or an error if parsing fails
pub fn parse_corners(corners_str: &str) -> Result<[Point; 4], String> {
    let parts: Vec<&str> = corners_str.split_whitespace().collect();

    if parts.len() != 4 {
        return Err(format!(
            "Expected 4 corner points, found {} in '{}'",
            parts.len(),
            corners_str
        ));
    }

    let mut corners = [Point::new(0.0, 0.0); 4];
    for (i, part) in parts.iter().enumerate() {
        corners[i] = Point::from_string(part)?;
    }

    Ok(corners)
}
