pub mod args;
pub mod commands;

use clap::Parser;
use log::debug;
use crate::core::api::ToolsApi;
use crate::error::types::Result;
use self::args::{EmbedCli, FilterCitiesCli};

/// Logs to stderr at `info` unless `RUST_LOG` says otherwise.
pub fn init_logging() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
}

/// Parses the process arguments, exiting with status 1 on usage errors.
pub fn parse_args<T: Parser>() -> T {
    T::try_parse().unwrap_or_else(|err| {
        let code = if err.use_stderr() { 1 } else { 0 };
        let _ = err.print();
        std::process::exit(code);
    })
}

pub struct CliProcessor {
    api: ToolsApi,
}

impl CliProcessor {
    pub fn new(api: ToolsApi) -> Self {
        Self { api }
    }

    pub fn for_embed(args: &EmbedCli) -> Self {
        Self::new(ToolsApi::builder().with_embed_config(args.embed_config()).build())
    }

    pub fn embed(&self, args: &EmbedCli) -> Result<()> {
        debug!("Processing embed command: {:?}", args);
        commands::embed(&self.api, args)
    }

    pub fn filter_cities(&self, args: &FilterCitiesCli) -> Result<()> {
        debug!("Processing filter_cities command: {:?}", args);
        commands::filter_cities(&self.api, args)
    }
}

impl Default for CliProcessor {
    fn default() -> Self {
        Self::new(ToolsApi::new())
    }
}
