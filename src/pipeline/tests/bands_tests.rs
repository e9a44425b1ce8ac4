//! Tests for band selection

extern crate std;

use crate::pipeline::bands::select_bands;
use crate::raster::{Band, GeoTransform, Raster, RasterError};

fn mapping(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
    pairs
        .iter()
        .map(|(s, t)| (s.to_string(), t.to_string()))
        .collect()
}

fn loader_raster() -> Raster {
    Raster::from_bands(
        2,
        2,
        GeoTransform::identity(),
        vec![
            Band::new("band_1", vec![1.0, 2.0, 3.0, 4.0]),
            Band::new("band_2", vec![5.0, 6.0, 7.0, 8.0]),
            Band::new("band_3", vec![9.0, 10.0, 11.0, 12.0]),
            Band::new("alpha", vec![0.0, 0.0, 0.0, 0.0]),
        ],
    )
    .unwrap()
}

#[test]
fn test_select_renames_in_mapping_order() {
    let raster = loader_raster();
    let selected = select_bands(
        &raster,
        &mapping(&[("band_1", "R"), ("band_2", "G"), ("band_3", "B")]),
    )
    .unwrap();

    std::assert_eq!(selected.band_names(), vec!["R", "G", "B"]);
    std::assert_eq!(selected.band_values("G").unwrap(), &[5.0, 6.0, 7.0, 8.0]);
}

#[test]
fn test_select_preserves_geometry() {
    let raster = loader_raster();
    let selected = select_bands(&raster, &mapping(&[("band_1", "R")])).unwrap();

    std::assert_eq!(selected.width(), raster.width());
    std::assert_eq!(selected.height(), raster.height());
    std::assert_eq!(selected.len(), raster.len());

    // Pixel order unchanged: same map point for the same index
    std::assert_eq!(selected.point_at(3), raster.point_at(3));
}

#[test]
fn test_select_leaves_source_untouched() {
    let raster = loader_raster();
    let _ = select_bands(&raster, &mapping(&[("band_2", "G")])).unwrap();
    std::assert_eq!(raster.band_names(), vec!["band_1", "band_2", "band_3", "alpha"]);
}

#[test]
fn test_select_missing_band() {
    let raster = loader_raster();
    let result = select_bands(&raster, &mapping(&[("band_1", "R"), ("nir", "N")]));

    match result {
        Err(RasterError::MissingBand(name)) => std::assert_eq!(name, "nir"),
        other => std::panic!("Expected MissingBand, got {:?}", other),
    }
}
