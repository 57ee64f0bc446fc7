use std::process;
use log::error;
use asset_tools::cli::args::FilterCitiesCli;
use asset_tools::cli::{init_logging, parse_args, CliProcessor};

fn main() {
    init_logging();

    let cli: FilterCitiesCli = parse_args();
    let processor = CliProcessor::default();

    if let Err(e) = processor.filter_cities(&cli) {
        error!("An error occurred: {}", e);
        process::exit(1);
    }
}
