use std::fs;
use std::path::Path;

use super::DeviceConfigError;

/// Overwrite `path` with `content`, creating parent directories first.
pub fn write(path: impl AsRef<Path>, content: &str) -> Result<(), DeviceConfigError> {
    let path = path.as_ref();
    let write_err = |source| DeviceConfigError::Write {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(write_err)?;
    }
    fs::write(path, content).map_err(write_err)?;
    log::debug!("Wrote {} bytes to {}", content.len(), path.display());
    Ok(())
}
