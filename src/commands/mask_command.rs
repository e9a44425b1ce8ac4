//! Vegetation masking command
//!
//! This module implements the command that runs the full masking
//! pipeline and writes the requested mask, overlay and sample outputs.

use clap::ArgMatches;
use log::{info, warn};

use crate::api::CropKit;
use crate::commands::command_traits::Command;
use crate::commands::resolve_profile;
use crate::pipeline::profile::PipelineProfile;
use crate::raster::errors::{RasterError, RasterResult};
use crate::utils::logger::Logger;

/// Command for producing a vegetation mask from an orthomosaic
pub struct MaskCommand<'a> {
    /// Path to the input file
    input_file: String,
    /// Optional path to the companion world file
    world_file: Option<String>,
    /// Optional path for the black-and-white mask image
    mask_output: Option<String>,
    /// Optional path for the tinted overlay image
    overlay_output: Option<String>,
    /// Optional path for the masked samples CSV
    samples_output: Option<String>,
    /// Resolved pipeline profile
    profile: PipelineProfile,
    /// Logger for recording operations
    logger: &'a Logger,
}

impl<'a> MaskCommand<'a> {
    /// Create a new mask command
    ///
    /// # Arguments
    /// * `args` - CLI argument matches from clap
    /// * `logger` - Logger for recording operations
    ///
    /// # Returns
    /// A new MaskCommand instance or an error
    pub fn new(args: &ArgMatches, logger: &'a Logger) -> RasterResult<Self> {
        let input_file = args.get_one::<String>("input")
            .ok_or_else(|| RasterError::GenericError("Missing input file".to_string()))?
            .clone();
        info!("Input file: {}", input_file);

        let world_file = args.get_one::<String>("world-file").cloned();

        let mask_output = args.get_one::<String>("output").cloned();
        info!("Mask output: {:?}", mask_output);

        let overlay_output = args.get_one::<String>("overlay").cloned();
        info!("Overlay output: {:?}", overlay_output);

        let samples_output = args.get_one::<String>("samples").cloned();
        info!("Samples output: {:?}", samples_output);

        if mask_output.is_none() && overlay_output.is_none() && samples_output.is_none() {
            warn!("No mask outputs requested; the pipeline will run for its log record only");
        }

        let profile = resolve_profile(args)?;
        info!(
            "Threshold quantile: {}, denoise window: {}",
            profile.quantile, profile.window
        );

        Ok(MaskCommand {
            input_file,
            world_file,
            mask_output,
            overlay_output,
            samples_output,
            profile,
            logger,
        })
    }
}

impl<'a> Command for MaskCommand<'a> {
    fn execute(&self) -> RasterResult<()> {
        info!("Executing mask command for {}", self.input_file);

        let api = CropKit::new(None)?;
        api.mask_to_files(
            &self.input_file,
            self.world_file.as_deref(),
            &self.profile,
            self.mask_output.as_deref(),
            self.overlay_output.as_deref(),
            self.samples_output.as_deref(),
        )?;

        info!("Masking successful");
        self.logger.log("Masking successful")?;

        Ok(())
    }
}
