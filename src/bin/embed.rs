use std::process;
use log::error;
use asset_tools::cli::args::EmbedCli;
use asset_tools::cli::{init_logging, parse_args, CliProcessor};

fn main() {
    init_logging();

    let cli: EmbedCli = parse_args();
    let processor = CliProcessor::for_embed(&cli);

    if let Err(e) = processor.embed(&cli) {
        error!("{}", e);
        process::exit(1);
    }
}
