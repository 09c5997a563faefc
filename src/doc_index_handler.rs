use url::Url;

use crate::file_format::builtin_groups::builtin;
use crate::file_format::doc_index::DocIndex;

/// Absolute documentation URL for `name` in `index`, or None on a miss.  A
/// target that can't be joined onto the base is logged and treated as a miss.
pub fn doc_url_in(index: &DocIndex, base: &Url, name: &str) -> Option<Url> {
    let target = index.find(name)?;
    match target.to_url(base) {
        Ok(url) => Some(url),
        Err(err) => {
            warn!("Can't resolve target [{}] for `{}`: {}", target, name, err);
            None
        }
    }
}

/// `doc_url_in` against the compiled-in index.
pub fn find_doc_url(base: &Url, name: &str) -> Option<Url> {
    doc_url_in(builtin(), base, name)
}
