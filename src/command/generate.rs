use std::path::{Path, PathBuf};

use anyhow::Result;

use crate::constants::defaults;
use crate::device_config;

#[derive(Debug)]
pub struct Generated {
    pub config: PathBuf,
    pub header: PathBuf,
}

pub fn generate() -> Result<Generated> {
    generate_in(defaults::CONFIG_DIR)
}

pub fn generate_in(config_dir: impl AsRef<Path>) -> Result<Generated> {
    let config_dir = config_dir.as_ref();

    let config_file = device_config::discover(config_dir)?;
    let config = device_config::parse(&config_file)?;
    log::info!(
        "Loaded config for device {} in project {}",
        config.device_id,
        config.project_id
    );

    let header_file = config_dir.join(defaults::HEADER_FILE);
    device_config::write(&header_file, &device_config::render(&config))?;
    println!(
        "Generated {} from {}",
        header_file.display(),
        config_file.display()
    );

    Ok(Generated {
        config: config_file,
        header: header_file,
    })
}
