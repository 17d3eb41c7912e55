use std::path::PathBuf;

use thiserror::Error;

mod config;
mod discover;
mod header;
mod output;

pub use config::{from_str, parse, Authentication, DeviceConfig};
pub use discover::{discover, discovery_pattern};
pub use header::{format_certificate, render};
pub use output::write;

#[derive(Error, Debug)]
pub enum DeviceConfigError {
    #[error("no {pattern} file found")]
    NotFound { pattern: String },
    #[error("could not read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("could not parse config JSON: {0}")]
    Parse(#[source] serde_json::Error),
    #[error("missing required field '{0}'")]
    MissingField(String),
    #[error("invalid config field: {0}")]
    InvalidField(#[source] serde_json::Error),
    #[error("could not write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}
