pub mod device_config;
