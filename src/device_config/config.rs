use std::fs;
use std::path::Path;

use serde::Deserialize;
use serde_json::Value;

use super::DeviceConfigError;

// Dotted names, checked in this order so the first absent one is reported
const REQUIRED_FIELDS: &[&str] = &[
    "project_id",
    "broker",
    "port",
    "device_id",
    "authentication",
    "authentication.ca_certificate",
    "authentication.device_certificate",
    "authentication.device_private_key",
];

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DeviceConfig {
    pub project_id: String,
    pub broker: String,
    pub port: u16,
    pub device_id: String,
    pub authentication: Authentication,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Authentication {
    pub ca_certificate: String,
    pub device_certificate: String,
    pub device_private_key: String,
}

pub fn parse(path: impl AsRef<Path>) -> Result<DeviceConfig, DeviceConfigError> {
    let path = path.as_ref();
    log::debug!("Reading config from {}", path.display());
    let config_raw = fs::read(path).map_err(|source| DeviceConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    // Encoding errors surface from serde_json as parse errors
    from_slice(&config_raw)
}

pub fn from_str(config_raw: &str) -> Result<DeviceConfig, DeviceConfigError> {
    from_slice(config_raw.as_bytes())
}

fn from_slice(config_raw: &[u8]) -> Result<DeviceConfig, DeviceConfigError> {
    let value: Value = serde_json::from_slice(config_raw).map_err(DeviceConfigError::Parse)?;

    if let Some(field) = REQUIRED_FIELDS
        .iter()
        .find(|field| value.pointer(&json_pointer(field)).is_none())
    {
        return Err(DeviceConfigError::MissingField(field.to_string()));
    }

    serde_json::from_value(value).map_err(DeviceConfigError::InvalidField)
}

fn json_pointer(dotted: &str) -> String {
    format!("/{}", dotted.replace('.', "/"))
}
