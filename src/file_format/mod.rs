pub mod builtin_groups;
pub mod config;
pub mod doc_index;
pub mod identifiers;
pub mod navtree;
