use std::collections::HashSet;
use std::fmt;

use serde::{Deserialize, Serialize};
use url::Url;

use crate::errors::{IndexError, Result};

/// Separator used when we need to name a nested entry unambiguously, as in
/// `a4l_cmd_desc::flags`.
pub const PATH_SEPARATOR: &str = "::";

/// Where a documented symbol lives: an HTML page plus an optional in-page
/// anchor.  The textual form is `page` or `page#anchor`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", from = "String")]
pub struct TargetRef {
    pub page: String,
    pub anchor: Option<String>,
}

impl TargetRef {
    pub fn new(page: &str, anchor: Option<&str>) -> Self {
        TargetRef {
            page: page.to_string(),
            anchor: anchor.filter(|a| !a.is_empty()).map(|a| a.to_string()),
        }
    }

    /// Split on the first `#`.  A trailing `#` with nothing after it is the
    /// same as no anchor at all.
    pub fn parse(locator: &str) -> Self {
        match locator.split_once('#') {
            Some((page, anchor)) => TargetRef::new(page, Some(anchor)),
            None => TargetRef::new(locator, None),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.page.is_empty() && self.anchor.is_none()
    }

    /// Resolve against the root of the rendered documentation.  The base
    /// should end in `/` if it names a directory, per normal URL joining.
    pub fn to_url(&self, base: &Url) -> Result<Url> {
        let mut url = base.join(&self.page)?;
        url.set_fragment(self.anchor.as_deref());
        Ok(url)
    }
}

impl fmt::Display for TargetRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.anchor {
            Some(anchor) => write!(f, "{}#{}", self.page, anchor),
            None => write!(f, "{}", self.page),
        }
    }
}

impl From<String> for TargetRef {
    fn from(locator: String) -> Self {
        TargetRef::parse(&locator)
    }
}

impl From<TargetRef> for String {
    fn from(target: TargetRef) -> Self {
        target.to_string()
    }
}

/// One row of the index.  Entries whose children are non-empty are composite
/// (a struct and its fields, say); the rest are leaves.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexEntry {
    pub name: String,
    pub target: TargetRef,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<IndexEntry>,
}

impl IndexEntry {
    pub fn leaf(name: &str, target: &str) -> Self {
        IndexEntry {
            name: name.to_string(),
            target: TargetRef::parse(target),
            children: vec![],
        }
    }

    pub fn composite(name: &str, target: &str, children: Vec<IndexEntry>) -> Self {
        IndexEntry {
            name: name.to_string(),
            target: TargetRef::parse(target),
            children,
        }
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }
}

/// An entry visited by `DocIndex::walk`.
#[derive(Debug, Clone, PartialEq)]
pub struct WalkItem<'a> {
    /// 0 for top-level entries.
    pub depth: usize,
    /// Names from the top level down, joined with `PATH_SEPARATOR`.
    pub path: String,
    pub entry: &'a IndexEntry,
}

/// A documentation group's navigation forest.  Immutable once built, so it
/// can be shared freely between threads.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "DocIndexJson")]
pub struct DocIndex {
    /// The group identifier, e.g. `group__analogy__lib__async1`.
    pub group: String,
    entries: Vec<IndexEntry>,
}

/// Wire shape of a `DocIndex`; deserialized indexes go through the same
/// sibling check as `DocIndex::new`.
#[derive(Deserialize)]
struct DocIndexJson {
    group: String,
    entries: Vec<IndexEntry>,
}

impl TryFrom<DocIndexJson> for DocIndex {
    type Error = IndexError;

    fn try_from(json: DocIndexJson) -> Result<Self> {
        DocIndex::new(&json.group, json.entries)
    }
}

impl DocIndex {
    /// Build an index, rejecting sibling lists that repeat a name.
    pub fn new(group: &str, entries: Vec<IndexEntry>) -> Result<Self> {
        check_unique_siblings(&entries, "")?;
        Ok(DocIndex {
            group: group.to_string(),
            entries,
        })
    }

    /// For literals that are checked by tests rather than at runtime.
    pub(crate) fn from_trusted(group: &str, entries: Vec<IndexEntry>) -> Self {
        DocIndex {
            group: group.to_string(),
            entries,
        }
    }

    pub fn entries(&self) -> &[IndexEntry] {
        &self.entries
    }

    /// Number of top-level entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of entries at every depth.
    pub fn total_len(&self) -> usize {
        fn count(entries: &[IndexEntry]) -> usize {
            entries.iter().map(|e| 1 + count(&e.children)).sum()
        }
        count(&self.entries)
    }

    /// Exact, case-sensitive lookup across all depths.  If a name shows up at
    /// more than one depth the shallowest one wins, and within a depth the
    /// first in documentation order wins.
    pub fn entry(&self, name: &str) -> Option<&IndexEntry> {
        let mut level: Vec<&IndexEntry> = self.entries.iter().collect();
        while !level.is_empty() {
            if let Some(hit) = level.iter().find(|e| e.name == name) {
                return Some(*hit);
            }
            level = level.iter().flat_map(|e| e.children.iter()).collect();
        }
        None
    }

    pub fn find(&self, name: &str) -> Option<&TargetRef> {
        self.entry(name).map(|e| &e.target)
    }

    /// Children of the named entry, or nothing if it's a leaf or unknown.
    pub fn children_of(&self, name: &str) -> &[IndexEntry] {
        match self.entry(name) {
            Some(entry) => &entry.children,
            None => &[],
        }
    }

    /// Qualified lookup that descends one sibling list per component, so
    /// `["a4l_cmd_desc", "flags"]` can't be confused with a top-level `flags`.
    pub fn find_path(&self, path: &[&str]) -> Option<&IndexEntry> {
        let (first, rest) = path.split_first()?;
        let mut cur = self.entries.iter().find(|e| e.name == *first)?;
        for component in rest {
            cur = cur.children.iter().find(|e| e.name == *component)?;
        }
        Some(cur)
    }

    /// `find_path` on a `PATH_SEPARATOR`-joined string.
    pub fn find_qualified(&self, qualified: &str) -> Option<&IndexEntry> {
        let parts: Vec<&str> = qualified.split(PATH_SEPARATOR).collect();
        self.find_path(&parts)
    }

    /// Pre-order traversal in documentation order.
    pub fn walk(&self) -> Vec<WalkItem<'_>> {
        fn visit<'a>(
            entries: &'a [IndexEntry],
            depth: usize,
            prefix: &str,
            out: &mut Vec<WalkItem<'a>>,
        ) {
            for entry in entries {
                let path = if prefix.is_empty() {
                    entry.name.clone()
                } else {
                    format!("{}{}{}", prefix, PATH_SEPARATOR, entry.name)
                };
                out.push(WalkItem {
                    depth,
                    path: path.clone(),
                    entry,
                });
                visit(&entry.children, depth + 1, &path, out);
            }
        }

        let mut out = Vec::with_capacity(self.total_len());
        visit(&self.entries, 0, "", &mut out);
        out
    }
}

fn check_unique_siblings(entries: &[IndexEntry], parent: &str) -> Result<()> {
    let mut seen = HashSet::new();
    for entry in entries {
        if !seen.insert(entry.name.as_str()) {
            let where_ = if parent.is_empty() { "top level" } else { parent };
            return Err(IndexError::bad_input(format!(
                "duplicate name `{}` under {}",
                entry.name, where_
            )));
        }
        check_unique_siblings(&entry.children, &entry.name)?;
    }
    Ok(())
}
