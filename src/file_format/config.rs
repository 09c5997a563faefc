use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::Deserialize;
use url::Url;

use super::builtin_groups;
use super::doc_index::DocIndex;
use super::navtree::read_navtree;
use crate::errors::{IndexError, Result};
use crate::glob_helper::glob_tree;

fn default_true() -> bool {
    true
}

/// A single navtree file to index.  A relative `path` in a config file is
/// relative to the directory holding that config file.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct NavtreeFile {
    pub path: String,
}

/// A directory to scan for navtree files, e.g. a Doxygen `html/` output
/// directory with `glob` set to `group__*.js`.  A relative `root` is resolved
/// like `NavtreeFile::path`.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct NavtreeDir {
    pub root: String,
    pub glob: String,
}

/// Schema for the config.json file.  Everything is optional; an empty object
/// means "just the compiled-in tables, no URLs".
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct ConfigJson {
    /// Root of the rendered documentation that targets are relative to.
    /// Should end in a `/`.
    #[serde(default)]
    pub base_url: Option<String>,
    /// Whether the compiled-in groups are part of the index.
    #[serde(default = "default_true")]
    pub include_builtin: bool,
    #[serde(default)]
    pub navtrees: Vec<NavtreeFile>,
    #[serde(default)]
    pub navtree_dirs: Vec<NavtreeDir>,
}

impl Default for ConfigJson {
    fn default() -> Self {
        ConfigJson {
            base_url: None,
            include_builtin: true,
            navtrees: vec![],
            navtree_dirs: vec![],
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    pub base_url: Option<Url>,
    pub include_builtin: bool,
    pub navtrees: Vec<NavtreeFile>,
    pub navtree_dirs: Vec<NavtreeDir>,
}

impl Config {
    pub fn from_json(json: ConfigJson) -> Result<Config> {
        let base_url = match json.base_url {
            Some(s) => Some(Url::parse(&s)?),
            None => None,
        };
        Ok(Config {
            base_url,
            include_builtin: json.include_builtin,
            navtrees: json.navtrees,
            navtree_dirs: json.navtree_dirs,
        })
    }

    /// Make relative navtree paths relative to `base_dir` instead of the
    /// process working directory.
    pub fn rebase_paths(&mut self, base_dir: &Path) {
        let rebase = |path: &str| base_dir.join(path).to_string_lossy().into_owned();
        for file in &mut self.navtrees {
            file.path = rebase(&file.path);
        }
        for dir in &mut self.navtree_dirs {
            dir.root = rebase(&dir.root);
        }
    }

    /// Load every index the config names: the compiled-in groups first, then
    /// the explicit files, then directory matches in path order.
    pub fn load_indexes(&self) -> Result<Vec<DocIndex>> {
        let mut indexes = vec![];
        if self.include_builtin {
            indexes.push(builtin_groups::load());
        }
        for file in &self.navtrees {
            indexes.push(read_navtree(&file.path)?);
        }
        for dir in &self.navtree_dirs {
            for path in glob_tree(&dir.root, &dir.glob)? {
                indexes.push(read_navtree(&path)?);
            }
        }
        info!("Loaded {} navtree groups", indexes.len());
        Ok(indexes)
    }
}

pub fn load(config_path: &str) -> Result<Config> {
    let file =
        File::open(config_path).map_err(|err| IndexError::from(err).in_source(config_path))?;
    let reader = BufReader::new(file);
    let json: ConfigJson =
        serde_json::from_reader(reader).map_err(|err| IndexError::from(err).in_source(config_path))?;
    let mut cfg = Config::from_json(json).map_err(|err| err.in_source(config_path))?;
    if let Some(base_dir) = Path::new(config_path).parent() {
        cfg.rebase_paths(base_dir);
    }
    Ok(cfg)
}
