//! Point structure for representing planar coordinates

/// A point in a planar coordinate system
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    /// X coordinate (longitude or easting in geographic systems)
    pub x: f64,
    /// Y coordinate (latitude or northing in geographic systems)
    pub y: f64,
}

impl Point {
    /// Create a new point
    pub fn new(x: f64, y: f64) -> Self {
        Point { x, y }
    }

    /// Parse a point from a string (format: "x,y")
    pub fn from_string(point_str: &str) -> Result<Self, String> {
        let parts: Vec<&str> = point_str.split(',').collect();
        if parts.len() != 2 {
            return Err(format!("Point '{}' must have 2 comma-separated values", point_str));
        }

        let x = parts[0].trim().parse::<f64>()
            .map_err(|_| format!("Invalid x value '{}'", parts[0]))?;
        let y = parts[1].trim().parse::<f64>()
            .map_err(|_| format!("Invalid y value '{}'", parts[1]))?;

        Ok(Point::new(x, y))
    }
}
