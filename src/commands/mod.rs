//! CLI command implementations
//!
//! This module contains implementations of the commands supported by
//! the CLI application using the Command pattern.

pub mod analyze_command;
pub mod command_traits;
pub mod mask_command;
pub mod plots_command;
pub mod render_command;

pub use analyze_command::AnalyzeCommand;
pub use command_traits::{Command, CommandFactory};
pub use mask_command::MaskCommand;
pub use plots_command::PlotsCommand;
pub use render_command::RenderCommand;

use clap::ArgMatches;

use crate::pipeline::profile::PipelineProfile;
use crate::raster::errors::{RasterError, RasterResult};
use crate::utils::logger::Logger;
use crate::utils::parse_utils;

/// Factory for creating command instances based on CLI arguments
///
/// This factory examines the command-line arguments and creates
/// the appropriate command instance for execution.
pub struct CropkitCommandFactory;

impl CropkitCommandFactory {
    /// Create a new factory instance
    pub fn new() -> Self {
        CropkitCommandFactory
    }
}

impl<'a> CommandFactory<'a> for CropkitCommandFactory {
    fn create_command(&self, args: &ArgMatches, logger: &'a Logger) -> RasterResult<Box<dyn Command + 'a>> {
        // Determine which command to run based on args
        if args.get_flag("plots") {
            Ok(Box::new(PlotsCommand::new(args, logger)?))
        } else if args.get_flag("mask") {
            Ok(Box::new(MaskCommand::new(args, logger)?))
        } else if args.get_flag("render") {
            Ok(Box::new(RenderCommand::new(args, logger)?))
        } else {
            // Default to analyze command
            Ok(Box::new(AnalyzeCommand::new(args, logger)?))
        }
    }
}

/// Resolve the pipeline profile for a command
///
/// Starts from the compiled-in defaults, layers an optional profile
/// file over them and applies individual flag overrides last.
pub(crate) fn resolve_profile(args: &ArgMatches) -> RasterResult<PipelineProfile> {
    let mut profile = match args.get_one::<String>("profile") {
        Some(path) => PipelineProfile::from_file(path)?,
        None => PipelineProfile::default(),
    };

    if let Some(range) = args.get_one::<String>("stretch") {
        let (low, high) = parse_utils::parse_percentile_range(range)
            .map_err(RasterError::GenericError)?;
        profile.stretch_low = low;
        profile.stretch_high = high;
    }

    if let Some(quantile) = args.get_one::<String>("quantile") {
        profile.quantile = quantile.parse::<f64>().map_err(|_| {
            RasterError::GenericError(format!("Invalid quantile '{}'", quantile))
        })?;
    }

    if let Some(window) = args.get_one::<String>("window") {
        profile.window = window.parse::<u32>().map_err(|_| {
            RasterError::GenericError(format!("Invalid window size '{}'", window))
        })?;
    }

    if let Some(bands) = args.get_one::<String>("bands") {
        let names: Vec<&str> = bands.split(',').map(|s| s.trim()).collect();
        if names.len() != 3 {
            return Err(RasterError::GenericError(format!(
                "Expected 3 band names in '{}'",
                bands
            )));
        }
        profile.red_band = names[0].to_string();
        profile.green_band = names[1].to_string();
        profile.blue_band = names[2].to_string();
    }

    Ok(profile)
}
