use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::bin_constants::{DEFAULT_DATA_DIR, DEFAULT_TEST_DATA_DIR};

/// Which storage target the daemon uses. Read once at process start;
/// there is no runtime reconfiguration.
#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ExecutionMode {
    #[default]
    Normal,
    Test,
}

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(default)]
pub struct AppConfig {
    pub mode: ExecutionMode,
    pub data_directory: PathBuf,
    pub test_data_directory: PathBuf,
}

impl AppConfig {
    pub fn active_data_directory(&self) -> &Path {
        match self.mode {
            ExecutionMode::Normal => &self.data_directory,
            ExecutionMode::Test => &self.test_data_directory,
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            mode: ExecutionMode::default(),
            data_directory: PathBuf::from(DEFAULT_DATA_DIR),
            test_data_directory: PathBuf::from(DEFAULT_TEST_DATA_DIR),
        }
    }
}
