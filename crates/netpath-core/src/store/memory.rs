use std::collections::{BTreeMap, BTreeSet};
use std::sync::RwLock;

use crate::error::{NetpathError, Result};
use crate::graph::types::Network;
use crate::store::paths::validate_network_name;
use crate::store::NetworkStore;

/// In-process store, mainly for tests and embedding
#[derive(Debug, Default)]
pub struct MemoryStore {
    networks: RwLock<BTreeMap<String, Network>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

fn poisoned() -> NetpathError {
    NetpathError::Other("memory store lock poisoned".to_string())
}

impl NetworkStore for MemoryStore {
    fn put(&self, name: &str, network: &Network) -> Result<()> {
        validate_network_name(name)?;
        self.networks
            .write()
            .map_err(|_| poisoned())?
            .insert(name.to_string(), network.clone());
        Ok(())
    }

    fn get(&self, name: &str) -> Result<Network> {
        validate_network_name(name)?;
        self.networks
            .read()
            .map_err(|_| poisoned())?
            .get(name)
            .cloned()
            .ok_or_else(|| NetpathError::network_not_found(name))
    }

    fn list(&self) -> Result<BTreeSet<String>> {
        Ok(self
            .networks
            .read()
            .map_err(|_| poisoned())?
            .keys()
            .cloned()
            .collect())
    }
}
