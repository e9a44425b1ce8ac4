use crate::raster::{Band, GeoTransform, Raster};

/// Build a raster with a single band named "band_1"
pub fn gray_raster(width: u32, height: u32, values: Vec<f64>) -> Raster {
    Raster::from_bands(
        width,
        height,
        GeoTransform::identity(),
        vec![Band::new("band_1", values)],
    )
    .unwrap()
}

/// Build a three-band raster with bands named "R", "G", "B"
pub fn rgb_raster(width: u32, height: u32, r: Vec<f64>, g: Vec<f64>, b: Vec<f64>) -> Raster {
    Raster::from_bands(
        width,
        height,
        GeoTransform::identity(),
        vec![
            Band::new("R", r),
            Band::new("G", g),
            Band::new("B", b),
        ],
    )
    .unwrap()
}
