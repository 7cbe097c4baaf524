//! Reading network JSON from a file or stdin

use std::fs;
use std::io::{self, Read};
use std::path::Path;

use netpath_core::error::{NetpathError, Result};
use netpath_core::graph::RawNetwork;

/// Read `{"nodes": [...], "edges": [...]}` from `file`, or stdin when the
/// path is absent or `-`
pub fn read_network(file: Option<&Path>) -> Result<RawNetwork> {
    let content = match file {
        Some(path) if path != Path::new("-") => fs::read_to_string(path).map_err(|e| {
            NetpathError::Other(format!("failed to read {}: {}", path.display(), e))
        })?,
        _ => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };

    Ok(serde_json::from_str(&content)?)
}
