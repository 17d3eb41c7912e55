pub const LOG_LEVEL: &str = "INFO";

pub const CONFIG_DIR: &str = "config";
pub const CONFIG_FILE_PREFIX: &str = "device_";
pub const CONFIG_FILE_EXT: &str = "json";
pub const HEADER_FILE: &str = "device_config.h";
