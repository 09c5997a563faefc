use serde::Serialize;

use super::doc_index::{DocIndex, TargetRef, PATH_SEPARATOR};

fn uppercase(s: &str) -> String {
    s.to_ascii_uppercase()
}

struct IdentRow {
    key: String,
    group: String,
    id: String,
    name: String,
    target: TargetRef,
}

/// Sorted, case-folded view over one or more indexes that supports prefix
/// lookups by bisection.  Nested entries are keyed by their qualified path so
/// `a4l_cmd_desc::flags` sorts right after its struct.
pub struct IdentTable {
    rows: Vec<IdentRow>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IdentResult {
    /// Qualified id, e.g. `a4l_cmd_desc::flags`.
    pub id: String,
    /// Just the last component.
    pub name: String,
    pub group: String,
    pub target: TargetRef,
}

impl IdentTable {
    pub fn new(index: &DocIndex) -> Self {
        Self::from_indexes(std::slice::from_ref(index))
    }

    pub fn from_indexes(indexes: &[DocIndex]) -> Self {
        let mut rows = vec![];
        for index in indexes {
            for item in index.walk() {
                rows.push(IdentRow {
                    key: uppercase(&item.path),
                    group: index.group.clone(),
                    id: item.path,
                    name: item.entry.name.clone(),
                    target: item.entry.target.clone(),
                });
            }
        }
        rows.sort_by(|a, b| (&a.key, &a.id, &a.group).cmp(&(&b.key, &b.id, &b.group)));

        IdentTable { rows }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Index of the first row whose key is >= the needle, or with
    /// `upper_bound`, the first row whose key does not start with it.
    fn bisect(&self, needle: &str, upper_bound: bool) -> usize {
        if upper_bound {
            self.rows
                .partition_point(|row| row.key.as_str() < needle || row.key.starts_with(needle))
        } else {
            self.rows.partition_point(|row| row.key.as_str() < needle)
        }
    }

    pub fn lookup(
        &self,
        needle: &str,
        exact_match: bool,
        ignore_case: bool,
        max_results: usize,
    ) -> Vec<IdentResult> {
        let upper = uppercase(needle);
        let start = self.bisect(&upper, false);
        let end = self.bisect(&upper, true);

        let mut result = vec![];
        if max_results == 0 {
            return result;
        }

        for row in &self.rows[start..end] {
            // We only need to worry about suffix-related cases if the needle is
            // shorter than the identifier.
            if needle.len() < row.id.len() {
                let suffix = row.id.get(needle.len()..).unwrap_or("");
                if exact_match || suffix.contains(PATH_SEPARATOR) {
                    continue;
                }
            }
            if !ignore_case && !row.id.starts_with(needle) {
                continue;
            }

            result.push(IdentResult {
                id: row.id.clone(),
                name: row.name.clone(),
                group: row.group.clone(),
                target: row.target.clone(),
            });
            if result.len() == max_results {
                break;
            }
        }

        result
    }
}
