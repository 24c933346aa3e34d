//! Writes generated pages to disk

use anyhow::{anyhow, Result};
use std::fs;
use std::path::Path;

/// Write `html` to `path`, replacing any previous file
pub fn write_page(path: &Path, html: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .map_err(|e| anyhow!("Failed to create directory {:?}: {}", parent, e))?;
    }

    fs::write(path, html).map_err(|e| anyhow!("Failed to write {:?}: {}", path, e))?;
    tracing::debug!("Wrote {:?} ({} bytes)", path, html.len());
    Ok(())
}
