pub mod command;
pub mod constants;
pub mod device_config;
