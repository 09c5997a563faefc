pub mod builder;
pub mod cmd_children;
pub mod cmd_dump;
pub mod cmd_find;
pub mod cmd_search;
pub mod cmd_stats;
pub mod interface;
pub mod parser;

pub use builder::{build_index_set, run_tool};
pub use interface::{IndexCommand, IndexSet};
pub use parser::{OutputFormat, ToolOpts};
