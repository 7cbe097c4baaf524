use std::path::{Path, PathBuf};

use crate::error::{NetpathError, Result};

/// Default store directory name, relative to the working directory
pub const DEFAULT_STORE_DIR: &str = "saved_networks";

/// Extension of stored network files
pub const NETWORK_EXT: &str = "json";

/// Suffix of in-flight writes; never listed as networks
pub const TEMP_SUFFIX: &str = ".tmp";

/// Reject names that could escape the store directory
pub fn validate_network_name(name: &str) -> Result<()> {
    if name.trim().is_empty() || name.contains('/') || name.contains('\\') || name.contains("..")
    {
        return Err(NetpathError::InvalidNetworkName {
            name: name.to_string(),
        });
    }
    Ok(())
}

/// File holding the network `name`. The name must already be validated.
pub fn network_file(dir: &Path, name: &str) -> PathBuf {
    dir.join(format!("{}.{}", name, NETWORK_EXT))
}

/// Recover a network name from a directory entry, skipping anything that
/// is not a finished network file
pub fn network_name(path: &Path) -> Option<String> {
    let file_name = path.file_name()?.to_str()?;
    let name = file_name.strip_suffix(&format!(".{}", NETWORK_EXT))?;
    if name.is_empty() || validate_network_name(name).is_err() {
        return None;
    }
    Some(name.to_string())
}
