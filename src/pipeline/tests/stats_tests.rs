//! Tests for the shared order statistics

extern crate std;

use crate::pipeline::stats::{percentile, sorted_copy, summarize};
use crate::pipeline::tests::test_utils::gray_raster;
use crate::raster::RasterError;

#[test]
fn test_sorted_copy_leaves_input() {
    let values = vec![3.0, 1.0, 2.0];
    let sorted = sorted_copy(&values);
    std::assert_eq!(sorted, vec![1.0, 2.0, 3.0]);
    std::assert_eq!(values, vec![3.0, 1.0, 2.0]);
}

#[test]
fn test_percentile_endpoints() {
    let sorted: Vec<f64> = (1..=10).map(|v| v as f64).collect();
    std::assert_eq!(percentile(&sorted, 0.0).unwrap(), 1.0);
    std::assert_eq!(percentile(&sorted, 1.0).unwrap(), 10.0);
}

#[test]
fn test_percentile_interpolates() {
    let sorted: Vec<f64> = (1..=10).map(|v| v as f64).collect();
    // rank 0.7 * 9 = 6.3, between the 7th and 8th order statistics
    let value = percentile(&sorted, 0.7).unwrap();
    std::assert!((value - 7.3).abs() < 1e-12);
}

#[test]
fn test_percentile_single_value() {
    std::assert_eq!(percentile(&[42.0], 0.5).unwrap(), 42.0);
}

#[test]
fn test_percentile_rejects_empty() {
    let result = percentile(&[], 0.5);
    std::assert!(matches!(result, Err(RasterError::EmptyInput)));
}

#[test]
fn test_percentile_rejects_out_of_range() {
    let result = percentile(&[1.0, 2.0], 1.5);
    std::assert!(matches!(result, Err(RasterError::InvalidPercentile { .. })));
}

#[test]
fn test_summarize_band() {
    let raster = gray_raster(5, 1, vec![1.0, 2.0, 3.0, 4.0, 10.0]);
    let summaries = summarize(&raster).unwrap();

    std::assert_eq!(summaries.len(), 1);
    let summary = &summaries[0];
    std::assert_eq!(summary.name, "band_1");
    std::assert_eq!(summary.min, 1.0);
    std::assert_eq!(summary.max, 10.0);
    std::assert_eq!(summary.mean, 4.0);
    std::assert_eq!(summary.median, 3.0);
}

#[test]
fn test_summarize_rejects_empty() {
    let raster = gray_raster(0, 0, vec![]);
    std::assert!(matches!(summarize(&raster), Err(RasterError::EmptyInput)));
}
