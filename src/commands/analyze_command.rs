//! Orthomosaic analysis command
//!
//! This module implements the default command: load an orthomosaic and
//! report its dimensions and per-band summary statistics.

use clap::ArgMatches;
use log::info;

use crate::api::CropKit;
use crate::commands::command_traits::Command;
use crate::raster::errors::{RasterError, RasterResult};
use crate::utils::logger::Logger;

/// Command for summarizing an orthomosaic
pub struct AnalyzeCommand<'a> {
    /// Path to the input file
    input_file: String,
    /// Optional path to the companion world file
    world_file: Option<String>,
    /// Logger for recording operations
    logger: &'a Logger,
}

impl<'a> AnalyzeCommand<'a> {
    /// Create a new analyze command
    ///
    /// # Arguments
    /// * `args` - CLI argument matches from clap
    /// * `logger` - Logger for recording operations
    ///
    /// # Returns
    /// A new AnalyzeCommand instance or an error
    pub fn new(args: &ArgMatches, logger: &'a Logger) -> RasterResult<Self> {
        let input_file = args.get_one::<String>("input")
            .ok_or_else(|| RasterError::GenericError("Missing input file".to_string()))?
            .clone();
        info!("Input file: {}", input_file);

        let world_file = args.get_one::<String>("world-file").cloned();
        info!("World file: {:?}", world_file);

        Ok(AnalyzeCommand {
            input_file,
            world_file,
            logger,
        })
    }
}

impl<'a> Command for AnalyzeCommand<'a> {
    fn execute(&self) -> RasterResult<()> {
        info!("Executing analyze command for {}", self.input_file);

        let api = CropKit::new(None)?;
        let result = api.analyze(&self.input_file, self.world_file.as_deref())?;

        println!("{}", result);
        self.logger.log("Analysis completed")?;

        Ok(())
    }
}
