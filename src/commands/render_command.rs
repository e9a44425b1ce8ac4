//! Color rendering command
//!
//! This module implements the command that contrast-stretches an
//! orthomosaic and writes the true-color rendering to an image file.

use clap::ArgMatches;
use log::info;

use crate::api::CropKit;
use crate::commands::command_traits::Command;
use crate::commands::resolve_profile;
use crate::pipeline::profile::PipelineProfile;
use crate::raster::errors::{RasterError, RasterResult};
use crate::utils::logger::Logger;

/// Command for rendering a contrast-stretched orthomosaic
pub struct RenderCommand<'a> {
    /// Path to the input file
    input_file: String,
    /// Path to the output image
    output_file: String,
    /// Optional path to the companion world file
    world_file: Option<String>,
    /// Resolved pipeline profile
    profile: PipelineProfile,
    /// Logger for recording operations
    logger: &'a Logger,
}

impl<'a> RenderCommand<'a> {
    /// Create a new render command
    ///
    /// # Arguments
    /// * `args` - CLI argument matches from clap
    /// * `logger` - Logger for recording operations
    ///
    /// # Returns
    /// A new RenderCommand instance or an error
    pub fn new(args: &ArgMatches, logger: &'a Logger) -> RasterResult<Self> {
        let input_file = args.get_one::<String>("input")
            .ok_or_else(|| RasterError::GenericError("Missing input file".to_string()))?
            .clone();
        info!("Input file: {}", input_file);

        let output_file = args.get_one::<String>("output")
            .ok_or_else(|| RasterError::GenericError("Missing output file path for rendering".to_string()))?
            .clone();
        info!("Output file: {}", output_file);

        let world_file = args.get_one::<String>("world-file").cloned();
        let profile = resolve_profile(args)?;
        info!(
            "Stretch percentiles: {} .. {}",
            profile.stretch_low, profile.stretch_high
        );

        Ok(RenderCommand {
            input_file,
            output_file,
            world_file,
            profile,
            logger,
        })
    }
}

impl<'a> Command for RenderCommand<'a> {
    fn execute(&self) -> RasterResult<()> {
        info!("Executing render command for {}", self.input_file);

        let api = CropKit::new(None)?;
        api.render(
            &self.input_file,
            self.world_file.as_deref(),
            &self.profile,
            &self.output_file,
        )?;

        info!("Rendering successful");
        self.logger.log("Rendering successful")?;

        Ok(())
    }
}
