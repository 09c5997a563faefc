use std::fmt::Debug;

use serde_json::{json, Value};
use url::Url;

use crate::errors::Result;
use crate::file_format::doc_index::{DocIndex, IndexEntry, PATH_SEPARATOR};

/// Everything a command gets to look at: the loaded indexes in config order
/// and the base URL, if we know one.
#[derive(Debug)]
pub struct IndexSet {
    pub indexes: Vec<DocIndex>,
    pub base_url: Option<Url>,
}

impl IndexSet {
    /// Look a name up in each index in turn, first hit wins.  Names containing
    /// `::` are treated as qualified paths.
    pub fn lookup(&self, name: &str) -> Option<(&DocIndex, &IndexEntry)> {
        self.indexes.iter().find_map(|index| {
            let entry = if name.contains(PATH_SEPARATOR) {
                index.find_qualified(name)
            } else {
                index.entry(name)
            };
            entry.map(|e| (index, e))
        })
    }

    /// JSON for a hit, including the absolute URL when we have a base URL.
    pub fn describe(&self, index: &DocIndex, entry: &IndexEntry) -> Value {
        let mut value = json!({
            "name": entry.name,
            "group": index.group,
            "target": entry.target,
        });
        if let Some(base) = &self.base_url {
            match entry.target.to_url(base) {
                Ok(url) => value["url"] = json!(url.as_str()),
                Err(err) => warn!("Can't resolve target [{}]: {}", entry.target, err),
            }
        }
        if !entry.is_leaf() {
            value["children"] = json!(entry.children.len());
        }
        value
    }
}

/// A `navtree-tool` subcommand, ready to run against the loaded indexes.
pub trait IndexCommand: Debug {
    fn execute(&self, set: &IndexSet) -> Result<Value>;
}
