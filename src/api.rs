use std::path::Path;

use log::info;

use crate::coordinate::{BoundingBox, Point};
use crate::grid;
use crate::pipeline;
use crate::pipeline::profile::PipelineProfile;
use crate::pipeline::stretch::StretchOptions;
use crate::raster::errors::RasterResult;
use crate::raster::{loader, Mask, Raster, SampleSet};
use crate::utils::logger::Logger;
use crate::utils::{render_utils, report_utils};

/// Main interface to the cropkit library
pub struct CropKit {
    logger: Logger,
}

impl CropKit {
    /// Create a new CropKit instance
    ///
    /// # Arguments
    /// * `log_file` - Optional path to log file, defaults to "cropkit.log"
    ///
    /// # Returns
    /// A CropKit instance or an error if initialization fails
    pub fn new(log_file: Option<&str>) -> RasterResult<Self> {
        let log_path = log_file.unwrap_or("cropkit.log");
        let logger = Logger::new(log_path)?;
        Ok(CropKit { logger })
    }

    /// Load an orthomosaic and return per-band summary information
    ///
    /// # Arguments
    /// * `input_path` - Path to the orthomosaic image
    /// * `world_file` - Optional path to the companion world file
    ///
    /// # Returns
    /// String containing the band summary or an error
    pub fn analyze(&self, input_path: &str, world_file: Option<&str>) -> RasterResult<String> {
        let raster = self.load(input_path, world_file)?;
        let summaries = pipeline::stats::summarize(&raster)?;

        self.logger.log_band_summaries(&summaries)?;

        let mut result = "Orthomosaic Analysis Results:\n".to_string();
        result.push_str(&format!("  Dimensions: {}x{}\n", raster.width(), raster.height()));
        result.push_str(&format!("  Pixel count: {}\n", raster.len()));
        result.push_str(&format!("  Bands: {}\n", raster.bands().len()));

        for summary in &summaries {
            result.push_str(&format!(
                "\nBand '{}'\n  min: {:.4}\n  max: {:.4}\n  mean: {:.4}\n  median: {:.4}\n",
                summary.name, summary.min, summary.max, summary.mean, summary.median
            ));
        }

        Ok(result)
    }

    /// Contrast-stretch an orthomosaic and save the color rendering
    ///
    /// # Arguments
    /// * `input_path` - Path to the orthomosaic image
    /// * `world_file` - Optional path to the companion world file
    /// * `profile` - Pipeline knobs (band mapping, percentiles, names)
    /// * `output_path` - Path for the rendered image
    ///
    /// # Returns
    /// Result indicating success or an error
    pub fn render(
        &self,
        input_path: &str,
        world_file: Option<&str>,
        profile: &PipelineProfile,
        output_path: &str,
    ) -> RasterResult<()> {
        let raster = self.load(input_path, world_file)?;
        let stretched = self.stretch(&raster, profile)?;

        render_utils::save_color_image(&stretched, output_path)?;
        self.logger.log(&format!("Color rendering saved to {}", output_path))?;
        Ok(())
    }

    /// Run the full vegetation masking pipeline in memory
    ///
    /// Stages: band selection, contrast stretch, hue extraction,
    /// percentile thresholding, mode-filter denoising. Returns the
    /// stretched raster (with hue band and color layer) together with
    /// the denoised mask, for callers that want the values rather than
    /// files.
    ///
    /// # Arguments
    /// * `input_path` - Path to the orthomosaic image
    /// * `world_file` - Optional path to the companion world file
    /// * `profile` - Pipeline knobs
    ///
    /// # Returns
    /// The processed raster and the vegetation mask
    pub fn build_mask(
        &self,
        input_path: &str,
        world_file: Option<&str>,
        profile: &PipelineProfile,
    ) -> RasterResult<(Raster, Mask)> {
        let raster = self.load(input_path, world_file)?;

        let stretched = self.stretch(&raster, profile)?;
        let with_hue = pipeline::hue::extract_hue(&stretched, "R", "G", "B", &profile.hue_band)?;

        let labeled = pipeline::threshold::classify(
            &with_hue,
            &profile.hue_band,
            profile.quantile,
            &profile.label_name,
        )?;
        let denoised = pipeline::denoise::mode_filter(&labeled, profile.window)?;

        info!(
            "Vegetation mask: {} of {} pixels labeled",
            denoised.count_true(),
            denoised.len()
        );
        self.logger.log(&format!(
            "Vegetation mask: {} of {} pixels labeled",
            denoised.count_true(),
            denoised.len()
        ))?;

        Ok((with_hue, denoised))
    }

    /// Run the masking pipeline and write the requested outputs
    ///
    /// # Arguments
    /// * `input_path` - Path to the orthomosaic image
    /// * `world_file` - Optional path to the companion world file
    /// * `profile` - Pipeline knobs
    /// * `mask_output` - Optional path for the black-and-white mask image
    /// * `overlay_output` - Optional path for the tinted overlay image
    /// * `samples_output` - Optional path for the masked samples CSV
    ///
    /// # Returns
    /// Result indicating success or an error
    pub fn mask_to_files(
        &self,
        input_path: &str,
        world_file: Option<&str>,
        profile: &PipelineProfile,
        mask_output: Option<&str>,
        overlay_output: Option<&str>,
        samples_output: Option<&str>,
    ) -> RasterResult<()> {
        let (raster, mask) = self.build_mask(input_path, world_file, profile)?;

        if let Some(path) = mask_output {
            render_utils::save_mask_image(&mask, path)?;
        }

        if let Some(path) = overlay_output {
            render_utils::save_overlay_image(&raster, &mask, path)?;
        }

        if let Some(path) = samples_output {
            let samples = self.select_samples(&raster, &mask)?;
            report_utils::write_samples_csv(&samples, path)?;
        }

        Ok(())
    }

    /// Extract the masked pixel samples
    ///
    /// # Arguments
    /// * `raster` - The processed raster
    /// * `mask` - The vegetation mask
    ///
    /// # Returns
    /// The selected samples
    pub fn select_samples(&self, raster: &Raster, mask: &Mask) -> RasterResult<SampleSet> {
        pipeline::select::select_masked(raster, mask)
    }

    /// Produce the per-plot vegetation coverage report
    ///
    /// Runs the masking pipeline, delineates the plot grid inside the
    /// field corners, georeferences the plot table onto it, counts
    /// vegetation coverage per plot and writes the joined report CSV.
    ///
    /// # Arguments
    /// * `input_path` - Path to the orthomosaic image
    /// * `world_file` - Optional path to the companion world file
    /// * `profile` - Pipeline knobs
    /// * `corners` - Field corners in ring order
    /// * `nx`, `ny` - Grid shape (columns, rows)
    /// * `table_path` - Path to the per-plot CSV table
    /// * `output_path` - Path for the report CSV
    ///
    /// # Returns
    /// Result indicating success or an error
    pub fn plot_report(
        &self,
        input_path: &str,
        world_file: Option<&str>,
        profile: &PipelineProfile,
        corners: [Point; 4],
        nx: usize,
        ny: usize,
        table_path: &str,
        output_path: &str,
    ) -> RasterResult<()> {
        let (raster, mask) = self.build_mask(input_path, world_file, profile)?;

        let quad = grid::Quadrilateral::new(corners)?;
        let cells = grid::subdivide(&quad, nx, ny)?;

        if let Some(bbox) = BoundingBox::from_points(quad.corners()) {
            let extent = bbox.expanded();
            info!(
                "Basemap context extent: ({}, {}) to ({}, {})",
                extent.min_x, extent.min_y, extent.max_x, extent.max_y
            );
        }

        let table = grid::PlotTable::from_csv_path(Path::new(table_path))?;
        let plots = grid::georeference(&table, &cells)?;
        let stats = grid::coverage(&plots, &raster, &mask)?;

        report_utils::write_coverage_csv(table.headers(), &plots, &stats, output_path)?;
        self.logger.log(&format!(
            "Coverage report for {} plots saved to {}",
            plots.len(),
            output_path
        ))?;

        Ok(())
    }

    /// Load an orthomosaic through the image-decoding collaborator
    fn load(&self, input_path: &str, world_file: Option<&str>) -> RasterResult<Raster> {
        self.logger.log(&format!("Loading orthomosaic {}", input_path))?;
        loader::load_orthomosaic(Path::new(input_path), world_file.map(Path::new))
    }

    /// Band selection and contrast stretch shared by render and mask
    fn stretch(&self, raster: &Raster, profile: &PipelineProfile) -> RasterResult<Raster> {
        let selected = pipeline::bands::select_bands(raster, &profile.band_mapping())?;
        pipeline::stretch::stretch_colors(
            &selected,
            &StretchOptions {
                low: profile.stretch_low,
                high: profile.stretch_high,
                color_name: profile.color_name.clone(),
            },
        )
    }
}
