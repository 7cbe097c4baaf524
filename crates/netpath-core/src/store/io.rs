use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};

use crate::error::{NetpathError, Result};
use crate::store::paths::TEMP_SUFFIX;

static TEMP_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Temp file next to `target`, unique per process and per call so that
/// concurrent writers never share one
fn temp_path(target: &Path) -> Result<PathBuf> {
    let file_name = target
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| NetpathError::Other(format!("invalid target path {}", target.display())))?;
    let seq = TEMP_COUNTER.fetch_add(1, Ordering::Relaxed);
    Ok(target.with_file_name(format!(
        "{}.{}.{}{}",
        file_name,
        std::process::id(),
        seq,
        TEMP_SUFFIX
    )))
}

/// Write `bytes` to `target` so that readers see either the old or the new
/// content, never a partial file
pub fn write_atomic(target: &Path, bytes: &[u8]) -> Result<()> {
    let temp = temp_path(target)?;

    let written = (|| -> Result<()> {
        let mut writer = BufWriter::new(File::create(&temp)?);
        writer.write_all(bytes)?;
        writer.flush()?;
        writer.get_ref().sync_all()?;
        Ok(())
    })();

    if let Err(e) = written.and_then(|_| fs::rename(&temp, target).map_err(NetpathError::from)) {
        let _ = fs::remove_file(&temp);
        return Err(e);
    }

    Ok(())
}
