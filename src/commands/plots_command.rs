//! Plot grid reporting command
//!
//! This module implements the command that delineates the plot grid over
//! a field, georeferences the trial table onto it and writes the
//! per-plot vegetation coverage report.

use clap::ArgMatches;
use log::info;

use crate::api::CropKit;
use crate::commands::command_traits::Command;
use crate::commands::resolve_profile;
use crate::coordinate::Point;
use crate::pipeline::profile::PipelineProfile;
use crate::raster::errors::{RasterError, RasterResult};
use crate::utils::logger::Logger;
use crate::utils::parse_utils;

/// Command for producing the per-plot coverage report
pub struct PlotsCommand<'a> {
    /// Path to the input file
    input_file: String,
    /// Optional path to the companion world file
    world_file: Option<String>,
    /// Field corners in ring order
    corners: [Point; 4],
    /// Grid shape (columns, rows)
    grid_shape: (usize, usize),
    /// Path to the per-plot CSV table
    table_file: String,
    /// Path for the report CSV
    output_file: String,
    /// Resolved pipeline profile
    profile: PipelineProfile,
    /// Logger for recording operations
    logger: &'a Logger,
}

impl<'a> PlotsCommand<'a> {
    /// Create a new plots command
    ///
    /// # Arguments
    /// * `args` - CLI argument matches from clap
    /// * `logger` - Logger for recording operations
    ///
    /// # Returns
    /// A new PlotsCommand instance or an error
    pub fn new(args: &ArgMatches, logger: &'a Logger) -> RasterResult<Self> {
        let input_file = args.get_one::<String>("input")
            .ok_or_else(|| RasterError::GenericError("Missing input file".to_string()))?
            .clone();
        info!("Input file: {}", input_file);

        let world_file = args.get_one::<String>("world-file").cloned();

        let corners_str = args.get_one::<String>("corners")
            .ok_or_else(|| RasterError::GenericError("Missing --corners for plot delineation".to_string()))?;
        let corners = parse_utils::parse_corners(corners_str)
            .map_err(RasterError::GenericError)?;
        info!("Field corners: {:?}", corners);

        let grid_str = args.get_one::<String>("grid")
            .ok_or_else(|| RasterError::GenericError("Missing --grid for plot delineation".to_string()))?;
        let grid_shape = parse_utils::parse_grid_shape(grid_str)
            .map_err(RasterError::GenericError)?;
        info!("Grid shape: {}x{}", grid_shape.0, grid_shape.1);

        let table_file = args.get_one::<String>("plot-table")
            .ok_or_else(|| RasterError::GenericError("Missing --plot-table with the trial data".to_string()))?
            .clone();
        info!("Plot table: {}", table_file);

        let output_file = args.get_one::<String>("output")
            .ok_or_else(|| RasterError::GenericError("Missing output file path for the report".to_string()))?
            .clone();
        info!("Output file: {}", output_file);

        let profile = resolve_profile(args)?;

        Ok(PlotsCommand {
            input_file,
            world_file,
            corners,
            grid_shape,
            table_file,
            output_file,
            profile,
            logger,
        })
    }
}

impl<'a> Command for PlotsCommand<'a> {
    fn execute(&self) -> RasterResult<()> {
        info!("Executing plots command for {}", self.input_file);

        let api = CropKit::new(None)?;
        api.plot_report(
            &self.input_file,
            self.world_file.as_deref(),
            &self.profile,
            self.corners,
            self.grid_shape.0,
            self.grid_shape.1,
            &self.table_file,
            &self.output_file,
        )?;

        info!("Plot report successful");
        self.logger.log("Plot report successful")?;

        Ok(())
    }
}
