/*
Filtered directory enumeration built from https://crates.io/crates/globset and
https://crates.io/crates/walkdir.  Used to pick up every navtree file that
Doxygen wrote into an output directory without having to list them one by one
in the config.
*/

use std::path::Path;

use globset::GlobBuilder;
use walkdir::WalkDir;

use crate::errors::{ErrorDetails, IndexError, Result};

/// Given a path to a root dir to traverse and a glob pattern, return a sorted
/// list of the paths of all files under the root whose root-relative path
/// matches the glob.  So `group__*.js` only matches files directly in the
/// root, and `**/group__*.js` matches at any depth.
///
/// Everything operates in terms of strings because the results are handed
/// straight to `read_navtree` and logged.
pub fn glob_tree(root: &str, glob: &str) -> Result<Vec<String>> {
    // `*` must not cross directories, so `group__*.js` stays in the root.
    let matcher = GlobBuilder::new(glob)
        .literal_separator(true)
        .build()
        .map_err(|err| IndexError::BadInput(ErrorDetails::new(err.to_string()).with_source(glob)))?
        .compile_matcher();

    let root_path = Path::new(root);
    let mut paths = vec![];
    for entry in WalkDir::new(root_path) {
        let entry = entry.map_err(|err| {
            IndexError::Io(ErrorDetails::new(err.to_string()).with_source(root))
        })?;
        if !entry.file_type().is_file() {
            continue;
        }
        let rel_path = match entry.path().strip_prefix(root_path) {
            Ok(rel) => rel,
            Err(_) => continue,
        };
        if matcher.is_match(rel_path) {
            paths.push(entry.path().to_string_lossy().into_owned());
        }
    }

    paths.sort();
    trace!("glob {} under {} matched {} files", glob, root, paths.len());

    Ok(paths)
}
