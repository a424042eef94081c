use anyhow::{Context, Result};
use std::{fs, path::Path};

/// Replaces the contents of `path` with `contents`, creating it if needed.
pub fn write_output(
    path: &Path,
    contents: &str,
) -> Result<()> {
    fs::write(path, contents).with_context(|| format!("Could not write {:?}", path))?;
    tracing::info!("Wrote {} bytes to {:?}", contents.len(), path);
    Ok(())
}
