use clap::Args;
use serde_json::{json, Value};

use super::interface::{IndexCommand, IndexSet};
use crate::errors::Result;
use crate::file_format::identifiers::IdentTable;

/// Prefix search over every documented identifier.  Nested entries are only
/// listed when the needle is qualified down to their parent, as in
/// `a4l_cmd_desc::scan_`.
#[derive(Debug, Args)]
pub struct Search {
    #[clap(value_parser)]
    needle: String,

    /// Only return identifiers exactly matching the needle.
    #[clap(long)]
    exact: bool,

    /// Match regardless of ASCII case.
    #[clap(long, short = 'i')]
    ignore_case: bool,

    #[clap(long, value_parser, default_value = "20")]
    limit: usize,
}

#[derive(Debug)]
pub struct SearchCommand {
    pub args: Search,
}

impl IndexCommand for SearchCommand {
    fn execute(&self, set: &IndexSet) -> Result<Value> {
        let table = IdentTable::from_indexes(&set.indexes);
        let results = table.lookup(
            &self.args.needle,
            self.args.exact,
            self.args.ignore_case,
            self.args.limit,
        );

        let values = results
            .into_iter()
            .map(|hit| {
                let mut value = json!(&hit);
                if let Some(base) = &set.base_url {
                    if let Ok(url) = hit.target.to_url(base) {
                        value["url"] = json!(url.as_str());
                    }
                }
                value
            })
            .collect();
        Ok(Value::Array(values))
    }
}
