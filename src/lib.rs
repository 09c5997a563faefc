extern crate globset;
extern crate regex;
extern crate serde;
extern crate serde_json;
extern crate url;
extern crate walkdir;
#[macro_use]
extern crate lazy_static;
#[macro_use]
extern crate tracing;
extern crate tracing_subscriber;

pub mod cmd;
pub mod doc_index_handler;
pub mod errors;
pub mod file_format;
pub mod glob_helper;
pub mod logging;

pub use file_format::builtin_groups::{builtin, load};
pub use file_format::doc_index::{DocIndex, IndexEntry, TargetRef};
