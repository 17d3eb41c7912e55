pub const LOG_LEVEL: &str = "LOGGING_LEVEL";
