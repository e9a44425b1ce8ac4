//! Tests for the contrast stretcher

extern crate std;

use crate::pipeline::stretch::{stretch_colors, StretchOptions};
use crate::pipeline::tests::test_utils::rgb_raster;
use crate::raster::RasterError;

fn full_range() -> StretchOptions {
    StretchOptions {
        low: 0.0,
        high: 1.0,
        color_name: "RGB".to_string(),
    }
}

#[test]
fn test_stretch_output_clamped() {
    let raster = rgb_raster(
        2,
        2,
        vec![0.0, 100.0, 200.0, 255.0],
        vec![10.0, 20.0, 30.0, 40.0],
        vec![5.0, 5.0, 5.0, 250.0],
    );

    let stretched = stretch_colors(
        &raster,
        &StretchOptions {
            low: 0.1,
            high: 0.9,
            color_name: "RGB".to_string(),
        },
    )
    .unwrap();

    for band in stretched.bands() {
        for v in &band.values {
            std::assert!((0.0..=1.0).contains(v), "value {} out of range", v);
        }
    }
}

#[test]
fn test_stretch_full_range_maps_extremes() {
    let raster = rgb_raster(
        2,
        2,
        vec![0.0, 85.0, 170.0, 255.0],
        vec![0.0, 85.0, 170.0, 255.0],
        vec![0.0, 85.0, 170.0, 255.0],
    );

    let stretched = stretch_colors(&raster, &full_range()).unwrap();
    let r = stretched.band_values("R").unwrap();

    std::assert_eq!(r[0], 0.0);
    std::assert_eq!(r[3], 1.0);
    std::assert!((r[1] - 85.0 / 255.0).abs() < 1e-12);
}

#[test]
fn test_stretch_idempotent_on_stretched_bands() {
    let raster = rgb_raster(
        2,
        2,
        vec![12.0, 40.0, 90.0, 130.0],
        vec![7.0, 14.0, 21.0, 28.0],
        vec![1.0, 2.0, 3.0, 4.0],
    );

    let once = stretch_colors(&raster, &full_range()).unwrap();
    let twice = stretch_colors(&once, &full_range()).unwrap();

    for (a, b) in once.bands().iter().zip(twice.bands()) {
        for (v1, v2) in a.values.iter().zip(&b.values) {
            std::assert!((v1 - v2).abs() < 1e-12);
        }
    }
}

#[test]
fn test_stretch_zero_variance_band_maps_to_zero() {
    let raster = rgb_raster(
        2,
        1,
        vec![50.0, 50.0],
        vec![0.0, 255.0],
        vec![0.0, 255.0],
    );

    let stretched = stretch_colors(&raster, &full_range()).unwrap();
    std::assert_eq!(stretched.band_values("R").unwrap(), &[0.0, 0.0]);
}

#[test]
fn test_stretch_attaches_color_layer() {
    let raster = rgb_raster(
        1,
        2,
        vec![0.0, 255.0],
        vec![255.0, 0.0],
        vec![0.0, 255.0],
    );

    let stretched = stretch_colors(
        &raster,
        &StretchOptions {
            low: 0.0,
            high: 1.0,
            color_name: "truecolor".to_string(),
        },
    )
    .unwrap();

    let color = stretched.color().unwrap();
    std::assert_eq!(color.name, "truecolor");
    std::assert_eq!(color.values.len(), 2);
    std::assert_eq!(color.values[0], [0.0, 1.0, 0.0]);
    std::assert_eq!(color.values[1], [1.0, 0.0, 1.0]);
}

#[test]
fn test_stretch_rejects_bad_percentiles() {
    let raster = rgb_raster(1, 1, vec![1.0], vec![1.0], vec![1.0]);

    for (low, high) in [(0.9, 0.1), (0.5, 0.5), (-0.1, 0.9), (0.1, 1.1)] {
        let result = stretch_colors(
            &raster,
            &StretchOptions {
                low,
                high,
                color_name: "RGB".to_string(),
            },
        );
        std::assert!(
            matches!(result, Err(RasterError::InvalidPercentile { .. })),
            "low={}, high={} accepted",
            low,
            high
        );
    }
}

#[test]
fn test_stretch_rejects_empty_raster() {
    let raster = rgb_raster(0, 0, vec![], vec![], vec![]);
    let result = stretch_colors(&raster, &full_range());
    std::assert!(matches!(result, Err(RasterError::EmptyInput)));
}
