use clap::Args;
use serde_json::{json, Value};

use super::interface::{IndexCommand, IndexSet};
use crate::errors::Result;

/// Entry counts per loaded group.
#[derive(Debug, Args)]
pub struct Stats {}

#[derive(Debug)]
pub struct StatsCommand {
    pub args: Stats,
}

impl IndexCommand for StatsCommand {
    fn execute(&self, set: &IndexSet) -> Result<Value> {
        Ok(Value::Array(
            set.indexes
                .iter()
                .map(|index| {
                    json!({
                        "group": index.group,
                        "top_level": index.len(),
                        "total": index.total_len(),
                    })
                })
                .collect(),
        ))
    }
}
