pub const DEFAULT_CONFIG_FILE: &str = "/etc/notesd/notesd.toml";
pub const DEFAULT_DATA_DIR: &str = "/var/notesd";
pub const DEFAULT_TEST_DATA_DIR: &str = "/var/notesd-test";
pub const APP_CONFIG_ENV_PREFIX: &str = "NOTESD_";
