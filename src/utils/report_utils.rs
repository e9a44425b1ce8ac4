//! CSV report writing utilities
//!
//! Pipeline products that leave the toolkit as tables: the masked pixel
//! samples and the per-plot coverage report.

use log::info;

use crate::grid::{Plot, PlotCoverage};
use crate::raster::errors::RasterResult;
use crate::raster::SampleSet;
use crate::utils::progress::ProgressTracker;

/// Write selected pixel samples to a CSV file
///
/// Columns: x, y, then one column per band in sample order.
///
/// # Arguments
/// * `samples` - The selected pixels
/// * `output_path` - Path of the CSV file to write
pub fn write_samples_csv(samples: &SampleSet, output_path: &str) -> RasterResult<()> {
    info!(
        "Writing {} samples to {}",
        samples.len(),
        output_path
    );

    let mut writer = csv::Writer::from_path(output_path)?;

    let mut header = vec!["x".to_string(), "y".to_string()];
    header.extend(samples.band_names.iter().cloned());
    writer.write_record(&header)?;

    let progress = ProgressTracker::new(samples.len() as u64, "Writing samples");
    for sample in &samples.samples {
        let mut record = vec![sample.point.x.to_string(), sample.point.y.to_string()];
        record.extend(sample.values.iter().map(|v| v.to_string()));
        writer.write_record(&record)?;
        progress.increment(1);
    }
    progress.finish();

    writer.flush()?;
    Ok(())
}

/// Write the per-plot coverage report to a CSV file
///
/// Each output row joins a plot's tabular record with its grid indices
/// and vegetation statistics.
///
/// # Arguments
/// * `headers` - Column headers of the plot table
/// * `plots` - The georeferenced plots
/// * `stats` - Coverage statistics, parallel to `plots`
/// * `output_path` - Path of the CSV file to write
pub fn write_coverage_csv(
    headers: &[String],
    plots: &[Plot],
    stats: &[PlotCoverage],
    output_path: &str,
) -> RasterResult<()> {
    info!("Writing coverage report for {} plots to {}", plots.len(), output_path);

    let mut writer = csv::Writer::from_path(output_path)?;

    let mut header: Vec<String> = headers.to_vec();
    header.extend([
        "grid_row".to_string(),
        "grid_col".to_string(),
        "pixels".to_string(),
        "vegetation_pixels".to_string(),
        "vegetation_fraction".to_string(),
    ]);
    writer.write_record(&header)?;

    for (plot, coverage) in plots.iter().zip(stats) {
        let mut record = plot.record.clone();
        record.extend([
            coverage.row.to_string(),
            coverage.col.to_string(),
            coverage.pixels.to_string(),
            coverage.vegetation_pixels.to_string(),
            format!("{:.4}", coverage.fraction),
        ]);
        writer.write_record(&record)?;
    }

    writer.flush()?;
    Ok(())
}
