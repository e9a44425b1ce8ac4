//! Tests for masked selection

extern crate std;

use crate::pipeline::select::{select_masked, select_unmasked};
use crate::pipeline::tests::test_utils::gray_raster;
use crate::raster::{Mask, RasterError};

#[test]
fn test_select_keeps_labeled_pixels_in_order() {
    let raster = gray_raster(4, 1, vec![10.0, 20.0, 30.0, 40.0]);
    let mask = Mask::from_labels(4, 1, "label", vec![true, false, true, false]).unwrap();

    let selected = select_masked(&raster, &mask).unwrap();
    std::assert_eq!(selected.band_names, vec!["band_1"]);

    let values: Vec<f64> = selected.samples.iter().map(|s| s.values[0]).collect();
    std::assert_eq!(values, vec![10.0, 30.0]);
}

#[test]
fn test_select_carries_pixel_centers() {
    let raster = gray_raster(2, 1, vec![1.0, 2.0]);
    let mask = Mask::from_labels(2, 1, "label", vec![false, true]).unwrap();

    let selected = select_masked(&raster, &mask).unwrap();
    std::assert_eq!(selected.len(), 1);
    std::assert_eq!(selected.samples[0].point, raster.point_at(1));
}

#[test]
fn test_select_and_complement_partition_raster() {
    let raster = gray_raster(3, 2, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
    let mask = Mask::from_labels(3, 2, "label", vec![true, false, true, false, true, false]).unwrap();

    let kept = select_masked(&raster, &mask).unwrap();
    let dropped = select_unmasked(&raster, &mask).unwrap();

    std::assert_eq!(kept.len() + dropped.len(), raster.len());

    let mut all: Vec<f64> = kept
        .samples
        .iter()
        .chain(&dropped.samples)
        .map(|s| s.values[0])
        .collect();
    all.sort_by(f64::total_cmp);
    std::assert_eq!(all, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
}

#[test]
fn test_select_empty_selection() {
    let raster = gray_raster(2, 1, vec![1.0, 2.0]);
    let mask = Mask::from_labels(2, 1, "label", vec![false, false]).unwrap();

    let selected = select_masked(&raster, &mask).unwrap();
    std::assert!(selected.is_empty());
}

#[test]
fn test_select_shape_mismatch() {
    let raster = gray_raster(2, 1, vec![1.0, 2.0]);
    let mask = Mask::from_labels(3, 1, "label", vec![true, true, true]).unwrap();

    let result = select_masked(&raster, &mask);
    std::assert!(matches!(result, Err(RasterError::ShapeMismatch { .. })));
}
