//! Bounding box structure for defining regions

use super::point::Point;

/// An axis-aligned bounding box in a planar coordinate system
#[derive(Debug, Clone, Copy)]
pub struct BoundingBox {
    /// Minimum X coordinate
    pub min_x: f64,
    /// Minimum Y coordinate
    pub min_y: f64,
    /// Maximum X coordinate
    pub max_x: f64,
    /// Maximum Y coordinate
    pub max_y: f64,
}

impl BoundingBox {
    /// Create a new bounding box
    pub fn new(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> Self {
        BoundingBox {
            min_x,
            min_y,
            max_x,
            max_y,
        }
    }

    /// Compute the bounding box of a set of points
    ///
    /// Returns None when the iterator yields no points.
    pub fn from_points<'a, I>(points: I) -> Option<Self>
    where
        I: IntoIterator<Item = &'a Point>,
    {
        let mut iter = points.into_iter();
        let first = iter.next()?;
        let mut bbox = BoundingBox::new(first.x, first.y, first.x, first.y);

        for p in iter {
            bbox.min_x = bbox.min_x.min(p.x);
            bbox.min_y = bbox.min_y.min(p.y);
            bbox.max_x = bbox.max_x.max(p.x);
            bbox.max_y = bbox.max_y.max(p.y);
        }

        Some(bbox)
    }

    /// Get the width of the bounding box
    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    /// Get the height of the bounding box
    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }

    /// Get the center point of the bounding box
    pub fn center(&self) -> Point {
        Point::new(
            self.min_x + self.width() / 2.0,
            self.min_y + self.height() / 2.0,
        )
    }

    /// Compute the display extent for this box
    ///
    /// The returned box shares this box's center but is doubled in each
    /// dimension: the minimum corner moves by half the original span and
    /// each span grows to twice its original size. Used to fetch a basemap
    /// context around an area of interest.
    pub fn expanded(&self) -> Self {
        let half_w = self.width() / 2.0;
        let half_h = self.height() / 2.0;

        BoundingBox::new(
            self.min_x - half_w,
            self.min_y - half_h,
            self.max_x + half_w,
            self.max_y + half_h,
        )
    }
}
