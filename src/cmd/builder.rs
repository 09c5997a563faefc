use serde_json::{to_string, to_string_pretty, Value};
use url::Url;

use super::cmd_children::ChildrenCommand;
use super::cmd_dump::DumpCommand;
use super::cmd_find::FindCommand;
use super::cmd_search::SearchCommand;
use super::cmd_stats::StatsCommand;
use super::interface::{IndexCommand, IndexSet};
use super::parser::{Command, OutputFormat, ToolOpts};
use crate::errors::Result;
use crate::file_format::config::{self, Config, ConfigJson, NavtreeFile};

pub fn fab_command_from_opts(cmd: Command) -> Box<dyn IndexCommand> {
    match cmd {
        Command::Children(c) => Box::new(ChildrenCommand { args: c }),

        Command::Dump(d) => Box::new(DumpCommand { args: d }),

        Command::Find(f) => Box::new(FindCommand { args: f }),

        Command::Search(s) => Box::new(SearchCommand { args: s }),

        Command::Stats(s) => Box::new(StatsCommand { args: s }),
    }
}

/// Combine the config file (if any) with the command line overrides and load
/// every index that names.
pub fn build_index_set(opts: &ToolOpts) -> Result<IndexSet> {
    let mut cfg = match &opts.config {
        Some(path) => config::load(path)?,
        None => Config::from_json(ConfigJson::default())?,
    };

    if opts.no_builtin {
        cfg.include_builtin = false;
    }
    cfg.navtrees.extend(opts.navtrees.iter().map(|path| NavtreeFile { path: path.clone() }));
    if let Some(base_url) = &opts.base_url {
        cfg.base_url = Some(Url::parse(base_url)?);
    }

    Ok(IndexSet {
        indexes: cfg.load_indexes()?,
        base_url: cfg.base_url,
    })
}

pub fn format_output(value: &Value, output_format: &OutputFormat) -> Result<String> {
    Ok(match output_format {
        OutputFormat::Concise => to_string(value)?,
        OutputFormat::Pretty => to_string_pretty(value)?,
    })
}

/// Run a parsed command line to completion, returning what should be printed.
pub fn run_tool(opts: ToolOpts) -> Result<String> {
    let _span = trace_span!("run_tool").entered();
    let set = build_index_set(&opts)?;
    let output_format = opts.output_format.clone();
    let command = fab_command_from_opts(opts.cmd);
    trace!("executing {:?}", command);
    let value = command.execute(&set)?;
    format_output(&value, &output_format)
}
