use crate::core::api::ToolsApiOps;
use crate::error::types::Result;
use super::args::{EmbedCli, FilterCitiesCli};

pub fn embed(api: &dyn ToolsApiOps, args: &EmbedCli) -> Result<()> {
    let report = api.embed_file(&args.input_file, &args.output_file)?;
    println!("{}", report);
    Ok(())
}

pub fn filter_cities(api: &dyn ToolsApiOps, args: &FilterCitiesCli) -> Result<()> {
    let report = api.filter_cities(&args.input_txt, &args.output_csv, Some(args.population_threshold))?;
    println!("{}", report);
    Ok(())
}
