use clap::{Parser, Subcommand, ValueEnum};

use super::cmd_children::Children;
use super::cmd_dump::Dump;
use super::cmd_find::Find;
use super::cmd_search::Search;
use super::cmd_stats::Stats;

#[derive(Clone, Debug, PartialEq, ValueEnum)]
pub enum OutputFormat {
    /// Pretty-printed JSON.
    Pretty,
    /// Un-pretty-printed JSON.
    Concise,
}

/// Look up documented symbols in Doxygen navigation trees.
#[derive(Debug, Parser)]
#[clap(name = "navtree-tool", version)]
pub struct ToolOpts {
    /// Path to a config.json naming the navtrees to index and the base URL of
    /// the rendered documentation.
    #[clap(long, env = "NAVTREE_CONFIG", value_parser)]
    pub config: Option<String>,

    /// Extra navtree .js files to index, on top of anything from the config.
    #[clap(long = "navtree", value_parser)]
    pub navtrees: Vec<String>,

    /// Leave out the compiled-in groups.
    #[clap(long)]
    pub no_builtin: bool,

    /// Base URL of the rendered documentation; overrides the config.
    #[clap(long, env = "NAVTREE_BASE_URL", value_parser)]
    pub base_url: Option<String>,

    #[clap(long, short, value_enum, ignore_case = true, default_value = "concise")]
    pub output_format: OutputFormat,

    #[clap(subcommand)]
    pub cmd: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    Children(Children),
    Dump(Dump),
    Find(Find),
    Search(Search),
    Stats(Stats),
}
