use std::path::PathBuf;
use clap::Parser;
use notesd::bin_constants::DEFAULT_CONFIG_FILE;

#[derive(Clone, Debug, Eq, Parser, PartialEq)]
#[command(version, author, about)]
pub struct CliConfig {
    /// TOML file holding the storage mode and the two data directories,
    /// plus any Rocket keys (port, address). NOTESD_-prefixed environment
    /// variables override it.
    #[arg(long, default_value = DEFAULT_CONFIG_FILE)]
    pub config_file: PathBuf,

    /// Serve from the test storage target, whatever mode the config file
    /// or environment selects.
    #[arg(long, default_value_t = false)]
    pub test_mode: bool,
}
