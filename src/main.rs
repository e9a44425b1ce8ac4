use clap::{Arg, ArgAction, Command as ClapCommand};
use log::error;
use std::process;

// Import from your library
use cropkit::commands::{CommandFactory, CropkitCommandFactory};
use cropkit::utils::logger::Logger;

fn main() {
    let matches = ClapCommand::new("CropKit")
        .version("0.1")
        .about("Vegetation masking and plot delineation for drone orthomosaics")
        .arg(
            Arg::new("input")
                .help("Input orthomosaic image")
                .required(true)
                .index(1),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Enable verbose output")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("world-file")
                .long("world-file")
                .help("World file with the pixel-to-map affine coefficients")
                .value_name("FILE")
                .required(false),
        )
        .arg(
            Arg::new("profile")
                .long("profile")
                .help("TOML profile overriding the built-in pipeline defaults")
                .value_name("FILE")
                .required(false),
        )
        .arg(
            Arg::new("render")
                .short('r')
                .long("render")
                .help("Write a contrast-stretched color rendering")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("mask")
                .short('m')
                .long("mask")
                .help("Run the vegetation masking pipeline")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("plots")
                .short('p')
                .long("plots")
                .help("Produce the per-plot vegetation coverage report")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .help("Output file (rendering image, mask image or report CSV)")
                .value_name("FILE")
                .required(false),
        )
        .arg(
            Arg::new("overlay")
                .long("overlay")
                .help("Write the mask tinted over the color rendering to this file")
                .value_name("FILE")
                .required(false),
        )
        .arg(
            Arg::new("samples")
                .long("samples")
                .help("Write the masked pixel samples as CSV to this file")
                .value_name("FILE")
                .required(false),
        )
        .arg(
            Arg::new("bands")
                .long("bands")
                .help("Source band names for the R, G, B channels (e.g., 'band_1,band_2,band_3')")
                .value_name("R,G,B")
                .required(false),
        )
        .arg(
            Arg::new("stretch")
                .long("stretch")
                .help("Percentile clip points for the contrast stretch (e.g., '0.02,0.98')")
                .value_name("LOW,HIGH")
                .required(false),
        )
        .arg(
            Arg::new("quantile")
                .long("quantile")
                .help("Hue quantile used as the vegetation cutoff (0-1)")
                .value_name("Q")
                .required(false),
        )
        .arg(
            Arg::new("window")
                .long("window")
                .help("Mode-filter window size (odd, e.g., 3)")
                .value_name("K")
                .required(false),
        )
        .arg(
            Arg::new("corners")
                .long("corners")
                .help("Field corners in ring order as four 'x,y' pairs")
                .value_name("CORNERS")
                .required(false),
        )
        .arg(
            Arg::new("grid")
                .long("grid")
                .help("Plot grid shape as 'nx,ny' (e.g., '14,9')")
                .value_name("NX,NY")
                .required(false),
        )
        .arg(
            Arg::new("plot-table")
                .long("plot-table")
                .help("CSV table with one row per plot, in planting order")
                .value_name("FILE")
                .required(false),
        )
        .get_matches();

    let log_file = "cropkit.log";
    let logger = match Logger::new(log_file) {
        Ok(l) => l,
        Err(e) => {
            eprintln!("Error initializing logger: {}", e);
            process::exit(1);
        }
    };

    if let Err(e) = Logger::init_global_logger("cropkit-global.log") {
        eprintln!("Error setting up global logger: {}", e);
        process::exit(1);
    }

    let factory = CropkitCommandFactory::new();

    let command_result = factory.create_command(&matches, &logger);
    match command_result {
        Ok(command) => {
            if let Err(e) = command.execute() {
                error!("Command execution error: {}", e);
                eprintln!("Error: {}", e);
                process::exit(1);
            }
        },
        Err(e) => {
            error!("Failed to create command: {}", e);
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };
}
