use clap::Args;
use serde_json::{to_value, Value};

use super::interface::{IndexCommand, IndexSet};
use crate::errors::Result;

/// Emit every loaded group in full, siblings in documentation order.
#[derive(Debug, Args)]
pub struct Dump {
    /// Only dump this group.
    #[clap(long, value_parser)]
    group: Option<String>,
}

#[derive(Debug)]
pub struct DumpCommand {
    pub args: Dump,
}

impl IndexCommand for DumpCommand {
    fn execute(&self, set: &IndexSet) -> Result<Value> {
        let groups: Vec<&_> = set
            .indexes
            .iter()
            .filter(|index| match &self.args.group {
                Some(group) => &index.group == group,
                None => true,
            })
            .collect();
        Ok(to_value(groups)?)
    }
}
