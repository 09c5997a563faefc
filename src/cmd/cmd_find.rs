use clap::Args;
use serde_json::{Map, Value};

use super::interface::{IndexCommand, IndexSet};
use crate::errors::Result;

/// Return the documentation target for each of the given symbols as a JSON
/// object keyed by symbol, in argument order.  Misses map to `null`.
#[derive(Debug, Args)]
pub struct Find {
    /// Symbols to look up; `struct::field` looks up a field of a struct.
    #[clap(value_parser, required = true)]
    names: Vec<String>,
}

#[derive(Debug)]
pub struct FindCommand {
    pub args: Find,
}

impl IndexCommand for FindCommand {
    fn execute(&self, set: &IndexSet) -> Result<Value> {
        let mut results = Map::new();
        for name in &self.args.names {
            let value = match set.lookup(name) {
                Some((index, entry)) => set.describe(index, entry),
                None => {
                    debug!("find miss for `{}`", name);
                    Value::Null
                }
            };
            results.insert(name.clone(), value);
        }
        Ok(Value::Object(results))
    }
}
