use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::constants::defaults::{CONFIG_FILE_EXT, CONFIG_FILE_PREFIX};

use super::DeviceConfigError;

/// Glob-style pattern the candidates in `dir` are matched against, e.g. `config/device_*.json`
pub fn discovery_pattern(dir: impl AsRef<Path>) -> String {
    dir.as_ref()
        .join(format!("{CONFIG_FILE_PREFIX}*.{CONFIG_FILE_EXT}"))
        .display()
        .to_string()
}

/// Locate the device config in `dir`.
///
/// When several files match, the lexicographically first file name wins.
/// A missing directory is reported the same way as an empty one; any other
/// failure to list it is a read error naming the directory.
pub fn discover(dir: impl AsRef<Path>) -> Result<PathBuf, DeviceConfigError> {
    let dir = dir.as_ref();
    let not_found = || DeviceConfigError::NotFound {
        pattern: discovery_pattern(dir),
    };

    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            log::debug!("Config directory {} does not exist", dir.display());
            return Err(not_found());
        }
        Err(source) => {
            return Err(DeviceConfigError::Read {
                path: dir.to_path_buf(),
                source,
            });
        }
    };

    let mut candidates: Vec<PathBuf> = entries
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| path.is_file() && is_candidate(path))
        .collect();
    candidates.sort();

    if candidates.len() > 1 {
        log::warn!(
            "Multiple config files match {}: {:?}; using the first",
            discovery_pattern(dir),
            candidates
        );
    }

    let config_file = candidates.into_iter().next().ok_or_else(not_found)?;
    log::debug!("Discovered config file {}", config_file.display());
    Ok(config_file)
}

fn is_candidate(path: &Path) -> bool {
    let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
        return false;
    };
    name.starts_with(CONFIG_FILE_PREFIX) && name.ends_with(&format!(".{CONFIG_FILE_EXT}"))
}
