use crate::infrastructure::error::InfrastructureError;
use std::fs;
use std::io::Write;
use std::path::Path;
use tracing::debug;

/// Writes an evidence artifact in one step, creating its directory first.
///
/// Content goes to a temp file next to the target and is renamed over it,
/// so an interrupted run never leaves a truncated report behind.
pub fn atomic_write(path: &Path, content: impl AsRef<[u8]>) -> Result<(), InfrastructureError> {
    let dir = match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };
    fs::create_dir_all(dir)?;

    let mut staged = tempfile::NamedTempFile::new_in(dir)?;
    staged.write_all(content.as_ref())?;
    staged.persist(path).map_err(|e| InfrastructureError::Io(e.error))?;

    debug!(path = ?path, "Artifact written");
    Ok(())
}
