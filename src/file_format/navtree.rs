use std::fs::read_to_string;

use regex::Regex;
use serde_json::Value;

use super::doc_index::{DocIndex, IndexEntry, TargetRef};
use crate::errors::{IndexError, Result};

/// Parse the contents of a Doxygen navtree file, which looks like:
///
/// ```text
/// var group__analogy__lib__async1 =
/// [
///     [ "a4l_cmd_desc", "structa4l__cmd__desc.html", [
///       [ "chan_descs", "structa4l__cmd__desc.html#a4b5b...", null ],
///     ] ],
///     [ "A4L_CMD_BULK", "group__analogy__lib__async1.html#ga68...", null ],
/// ];
/// ```
///
/// Doxygen only emits the JSON subset of JavaScript in these files, so once
/// the `var NAME =` header is peeled off the rest goes through serde_json.
pub fn parse_navtree(text: &str) -> Result<DocIndex> {
    lazy_static! {
        static ref HEADER_RE: Regex =
            Regex::new(r"(?s)^\s*var\s+([A-Za-z_$][A-Za-z0-9_$]*)\s*=\s*(.*?)\s*;?\s*$").unwrap();
    }

    let caps = HEADER_RE
        .captures(text)
        .ok_or_else(|| IndexError::bad_input("navtree is missing its `var NAME =` header"))?;
    let group = &caps[1];
    let body: Value = serde_json::from_str(&caps[2])?;

    let rows = body
        .as_array()
        .ok_or_else(|| IndexError::bad_input(format!("navtree `{}` is not an array", group)))?;
    let entries = convert_rows(rows, group)?;
    DocIndex::new(group, entries)
}

fn convert_rows(rows: &[Value], parent: &str) -> Result<Vec<IndexEntry>> {
    rows.iter()
        .enumerate()
        .map(|(i, row)| convert_row(row, parent, i))
        .collect()
}

fn convert_row(row: &Value, parent: &str, idx: usize) -> Result<IndexEntry> {
    let bad_row = |what: &str| {
        IndexError::bad_input(format!("row {} under `{}`: {}", idx, parent, what))
    };

    let cells = row.as_array().ok_or_else(|| bad_row("not an array"))?;
    if cells.len() < 2 || cells.len() > 3 {
        return Err(bad_row(&format!("expected 2 or 3 cells, got {}", cells.len())));
    }
    let name = cells[0].as_str().ok_or_else(|| bad_row("name is not a string"))?;
    let target = cells[1].as_str().ok_or_else(|| bad_row("target is not a string"))?;

    let children = match cells.get(2) {
        None | Some(Value::Null) => vec![],
        Some(Value::Array(kids)) => convert_rows(kids, name)?,
        Some(Value::String(lazy_file)) => {
            // Doxygen splits big trees into separately loaded files; we only
            // index what is inline.
            warn!(
                "Not following lazily loaded navtree [{}] for `{}`",
                lazy_file, name
            );
            vec![]
        }
        Some(_) => return Err(bad_row("children must be null, an array or a string")),
    };

    Ok(IndexEntry {
        name: name.to_string(),
        target: TargetRef::parse(target),
        children,
    })
}

pub fn read_navtree(filename: &str) -> Result<DocIndex> {
    let _span = trace_span!("read_navtree", filename).entered();
    let text = read_to_string(filename).map_err(|err| {
        info!("Error trying to open navtree file [{}]", filename);
        IndexError::from(err).in_source(filename)
    })?;

    let index = parse_navtree(&text).map_err(|err| {
        info!("Error trying to parse navtree file [{}]: {}", filename, err);
        err.in_source(filename)
    })?;
    debug!(
        "Loaded navtree [{}] group {} with {} entries",
        filename,
        index.group,
        index.total_len()
    );
    Ok(index)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_minimal() {
        let index = parse_navtree(
            r#"var group__x =
[
    [ "s", "structs.html", [
      [ "f", "structs.html#a1", null ]
    ] ],
    [ "M", "group__x.html#ga2", null ]
];"#,
        )
        .unwrap();
        assert_eq!(index.group, "group__x");
        assert_eq!(index.len(), 2);
        assert_eq!(index.find("f").unwrap().to_string(), "structs.html#a1");
        assert!(index.children_of("M").is_empty());
    }

    #[test]
    fn test_trailing_semicolon_optional_and_two_cells_ok() {
        let index = parse_navtree(r#"var g = [ [ "A", "g.html#a" ] ]"#).unwrap();
        assert_eq!(index.find("A"), Some(&TargetRef::new("g.html", Some("a"))));
    }

    #[test]
    fn test_lazy_children_become_leaf() {
        let index = parse_navtree(r#"var g = [ [ "ns", "namespacens.html", "namespacens" ] ];"#)
            .unwrap();
        assert!(index.entry("ns").unwrap().is_leaf());
    }

    #[test]
    fn test_rejects_bad_input() {
        assert!(matches!(
            parse_navtree(r#"[ [ "A", "g.html" ] ]"#),
            Err(IndexError::BadInput(_))
        ));
        assert!(matches!(
            parse_navtree(r#"var g = [ [ "A", "g.html", null ],"#),
            Err(IndexError::Parse(_))
        ));
        assert!(matches!(
            parse_navtree(r#"var g = [ [ 1, "g.html", null ] ];"#),
            Err(IndexError::BadInput(_))
        ));
        assert!(matches!(
            parse_navtree(r#"var g = [ [ "A" ] ];"#),
            Err(IndexError::BadInput(_))
        ));
        assert!(matches!(
            parse_navtree(r#"var g = [ [ "A", "a.html", 7 ] ];"#),
            Err(IndexError::BadInput(_))
        ));
        assert!(matches!(
            parse_navtree(r#"var g = { "A": "a.html" };"#),
            Err(IndexError::BadInput(_))
        ));
        assert!(matches!(
            parse_navtree(r#"var g = [ [ "A", "a.html" ], [ "A", "b.html" ] ];"#),
            Err(IndexError::BadInput(_))
        ));
    }

    #[test]
    fn test_read_missing_file_reports_path() {
        let err = read_navtree("/nonexistent/navtree.js").unwrap_err();
        assert!(matches!(err, IndexError::Io(_)));
        assert_eq!(err.details().source.as_deref(), Some("/nonexistent/navtree.js"));
    }
}
