//! Tests for threshold classification

extern crate std;

use crate::pipeline::tests::test_utils::gray_raster;
use crate::pipeline::threshold::classify;
use crate::raster::RasterError;

#[test]
fn test_classify_labels_top_values() {
    // Cutoff at quantile 0.7 of 1..=10 is 7.3; exactly 8, 9, 10 exceed it
    let raster = gray_raster(10, 1, (1..=10).map(|v| v as f64).collect());
    let mask = classify(&raster, "band_1", 0.7, "label").unwrap();

    let expected = [false, false, false, false, false, false, false, true, true, true];
    std::assert_eq!(mask.labels(), &expected);
    std::assert_eq!(mask.count_true(), 3);
}

#[test]
fn test_classify_ties_at_cutoff_are_false() {
    // Quantile 0.5 of [1, 2, 2, 2, 9] is exactly 2; the 2s must stay false
    let raster = gray_raster(5, 1, vec![1.0, 2.0, 2.0, 2.0, 9.0]);
    let mask = classify(&raster, "band_1", 0.5, "label").unwrap();

    std::assert_eq!(mask.labels(), &[false, false, false, false, true]);
}

#[test]
fn test_classify_sets_label_name() {
    let raster = gray_raster(2, 1, vec![1.0, 2.0]);
    let mask = classify(&raster, "band_1", 0.5, "vegetation").unwrap();
    std::assert_eq!(mask.name, "vegetation");
}

#[test]
fn test_classify_rejects_empty() {
    let raster = gray_raster(0, 0, vec![]);
    let result = classify(&raster, "band_1", 0.5, "label");
    std::assert!(matches!(result, Err(RasterError::EmptyInput)));
}

#[test]
fn test_classify_rejects_bad_quantile() {
    let raster = gray_raster(2, 1, vec![1.0, 2.0]);
    let result = classify(&raster, "band_1", -0.2, "label");
    std::assert!(matches!(result, Err(RasterError::InvalidPercentile { .. })));
}

#[test]
fn test_classify_missing_band() {
    let raster = gray_raster(2, 1, vec![1.0, 2.0]);
    let result = classify(&raster, "hue", 0.5, "label");
    std::assert!(matches!(result, Err(RasterError::MissingBand(_))));
}
