//! Network persistence
//!
//! A store is a flat name → network map supporting whole-object
//! put/get/list. Names are validated before any data is touched.
//! Default on-disk location: `saved_networks/`, one `<name>.json` per network.

pub mod io;
mod memory;
pub mod paths;

use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::error::{NetpathError, Result};
use crate::graph::types::Network;
pub use memory::MemoryStore;
use paths::{network_file, network_name, validate_network_name};

/// Whole-object storage for named networks
pub trait NetworkStore: Send + Sync {
    /// Create or overwrite `name`
    fn put(&self, name: &str, network: &Network) -> Result<()>;

    /// Read `name`, failing with `NetworkNotFound` if absent
    fn get(&self, name: &str) -> Result<Network>;

    /// Names of all stored networks
    fn list(&self) -> Result<BTreeSet<String>>;
}

/// Filesystem-backed store
#[derive(Debug, Clone)]
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    /// Open the store at `root`, creating the directory if needed
    #[tracing::instrument(skip(root), fields(root = %root.display()))]
    pub fn open(root: &Path) -> Result<Self> {
        if root.exists() && !root.is_dir() {
            return Err(NetpathError::Other(format!(
                "store path {} is not a directory",
                root.display()
            )));
        }
        fs::create_dir_all(root)?;
        Ok(FileStore {
            root: root.to_path_buf(),
        })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl NetworkStore for FileStore {
    #[tracing::instrument(skip(self, network), fields(nodes = network.nodes.len(), edges = network.edges.len()))]
    fn put(&self, name: &str, network: &Network) -> Result<()> {
        validate_network_name(name)?;
        let bytes = serde_json::to_vec(network)?;
        io::write_atomic(&network_file(&self.root, name), &bytes)?;
        tracing::debug!(bytes = bytes.len(), "network_saved");
        Ok(())
    }

    #[tracing::instrument(skip(self))]
    fn get(&self, name: &str) -> Result<Network> {
        validate_network_name(name)?;
        let path = network_file(&self.root, name);
        let content = match fs::read(&path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(NetpathError::network_not_found(name));
            }
            Err(e) => return Err(e.into()),
        };
        Ok(serde_json::from_slice(&content)?)
    }

    fn list(&self) -> Result<BTreeSet<String>> {
        let mut names = BTreeSet::new();
        for entry in WalkDir::new(&self.root)
            .min_depth(1)
            .max_depth(1)
            .into_iter()
            .filter_map(|e| e.ok())
        {
            if !entry.file_type().is_file() {
                continue;
            }
            if let Some(name) = network_name(entry.path()) {
                names.insert(name);
            }
        }
        Ok(names)
    }
}
