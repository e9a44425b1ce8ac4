//! Tests for quadrilateral geometry

extern crate std;

use crate::coordinate::Point;
use crate::grid::Quadrilateral;
use crate::raster::RasterError;

fn unit_square() -> Quadrilateral {
    Quadrilateral::new([
        Point::new(0.0, 0.0),
        Point::new(1.0, 0.0),
        Point::new(1.0, 1.0),
        Point::new(0.0, 1.0),
    ])
    .unwrap()
}

#[test]
fn test_convex_corners_accepted() {
    // A skewed but convex field outline
    let result = Quadrilateral::new([
        Point::new(0.0, 0.0),
        Point::new(10.0, 1.0),
        Point::new(11.0, 8.0),
        Point::new(-1.0, 7.0),
    ]);
    std::assert!(result.is_ok());
}

#[test]
fn test_non_convex_corners_rejected() {
    // Fourth corner pushed inside the triangle of the other three
    let result = Quadrilateral::new([
        Point::new(0.0, 0.0),
        Point::new(10.0, 0.0),
        Point::new(10.0, 10.0),
        Point::new(9.0, 1.0),
    ]);
    std::assert!(matches!(result, Err(RasterError::NonConvexRegion)));
}

#[test]
fn test_collinear_corners_rejected() {
    let result = Quadrilateral::new([
        Point::new(0.0, 0.0),
        Point::new(1.0, 0.0),
        Point::new(2.0, 0.0),
        Point::new(0.0, 1.0),
    ]);
    std::assert!(matches!(result, Err(RasterError::NonConvexRegion)));
}

#[test]
fn test_point_at_corners() {
    let quad = unit_square();

    std::assert_eq!(quad.point_at(0.0, 0.0), Point::new(0.0, 0.0));
    std::assert_eq!(quad.point_at(1.0, 0.0), Point::new(1.0, 0.0));
    std::assert_eq!(quad.point_at(1.0, 1.0), Point::new(1.0, 1.0));
    std::assert_eq!(quad.point_at(0.0, 1.0), Point::new(0.0, 1.0));
}

#[test]
fn test_point_at_center() {
    let quad = unit_square();
    let center = quad.point_at(0.5, 0.5);
    std::assert_eq!(center, Point::new(0.5, 0.5));
}

#[test]
fn test_contains_interior_and_boundary() {
    let quad = unit_square();

    std::assert!(quad.contains(&Point::new(0.5, 0.5)));
    std::assert!(quad.contains(&Point::new(0.0, 0.5))); // edge
    std::assert!(quad.contains(&Point::new(1.0, 1.0))); // corner
    std::assert!(!quad.contains(&Point::new(1.5, 0.5)));
    std::assert!(!quad.contains(&Point::new(-0.1, -0.1)));
}

#[test]
fn test_contains_with_clockwise_corners() {
    // Same square walked the other way around
    let quad = Quadrilateral::new([
        Point::new(0.0, 0.0),
        Point::new(0.0, 1.0),
        Point::new(1.0, 1.0),
        Point::new(1.0, 0.0),
    ])
    .unwrap();

    std::assert!(quad.contains(&Point::new(0.5, 0.5)));
    std::assert!(!quad.contains(&Point::new(2.0, 0.5)));
}
