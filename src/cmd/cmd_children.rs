use clap::Args;
use serde_json::Value;

use super::interface::{IndexCommand, IndexSet};
use crate::errors::Result;

/// List the nested entries of a composite symbol (a struct's fields, say) in
/// documentation order.  Leaves and unknown symbols give an empty list.
#[derive(Debug, Args)]
pub struct Children {
    #[clap(value_parser)]
    name: String,
}

#[derive(Debug)]
pub struct ChildrenCommand {
    pub args: Children,
}

impl IndexCommand for ChildrenCommand {
    fn execute(&self, set: &IndexSet) -> Result<Value> {
        let children = match set.lookup(&self.args.name) {
            Some((index, entry)) => entry
                .children
                .iter()
                .map(|child| set.describe(index, child))
                .collect(),
            None => vec![],
        };
        Ok(Value::Array(children))
    }
}
