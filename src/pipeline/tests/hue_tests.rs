//! Tests for hue extraction

extern crate std;

use crate::pipeline::hue::extract_hue;
use crate::pipeline::tests::test_utils::rgb_raster;
use crate::raster::RasterError;

fn hues_of(r: Vec<f64>, g: Vec<f64>, b: Vec<f64>) -> Vec<f64> {
    let raster = rgb_raster(r.len() as u32, 1, r, g, b);
    let extended = extract_hue(&raster, "R", "G", "B", "HUE").unwrap();
    extended.band_values("HUE").unwrap().to_vec()
}

#[test]
fn test_primary_hues() {
    let hues = hues_of(
        vec![1.0, 0.0, 0.0],
        vec![0.0, 1.0, 0.0],
        vec![0.0, 0.0, 1.0],
    );

    std::assert_eq!(hues[0], 0.0);
    std::assert!((hues[1] - 1.0 / 3.0).abs() < 1e-12);
    std::assert!((hues[2] - 2.0 / 3.0).abs() < 1e-12);
}

#[test]
fn test_achromatic_pixels_map_to_zero() {
    let hues = hues_of(
        vec![0.0, 0.5, 1.0],
        vec![0.0, 0.5, 1.0],
        vec![0.0, 0.5, 1.0],
    );
    std::assert_eq!(hues, vec![0.0, 0.0, 0.0]);
}

#[test]
fn test_hue_range_is_half_open() {
    // Red dominant with any blue tint wraps back under 1.0
    let hues = hues_of(vec![1.0, 1.0], vec![0.0, 0.0], vec![0.001, 0.999]);
    for h in hues {
        std::assert!((0.0..1.0).contains(&h), "hue {} outside [0, 1)", h);
    }
}

#[test]
fn test_secondary_hues() {
    // Yellow (r = g) sits at 1/6, cyan at 1/2, magenta at 5/6
    let hues = hues_of(
        vec![1.0, 0.0, 1.0],
        vec![1.0, 1.0, 0.0],
        vec![0.0, 1.0, 1.0],
    );

    std::assert!((hues[0] - 1.0 / 6.0).abs() < 1e-12);
    std::assert!((hues[1] - 0.5).abs() < 1e-12);
    std::assert!((hues[2] - 5.0 / 6.0).abs() < 1e-12);
}

#[test]
fn test_hue_does_not_mutate_source() {
    let raster = rgb_raster(1, 1, vec![0.2], vec![0.8], vec![0.4]);
    let extended = extract_hue(&raster, "R", "G", "B", "HUE").unwrap();

    std::assert_eq!(raster.band_names(), vec!["R", "G", "B"]);
    std::assert_eq!(extended.band_names(), vec!["R", "G", "B", "HUE"]);
    std::assert_eq!(extended.band_values("G").unwrap(), raster.band_values("G").unwrap());
}

#[test]
fn test_hue_missing_channel() {
    let raster = rgb_raster(1, 1, vec![0.0], vec![0.0], vec![0.0]);
    let result = extract_hue(&raster, "R", "G", "NIR", "HUE");
    std::assert!(matches!(result, Err(RasterError::MissingBand(_))));
}
