use std::path::Path;
use rocket::figment::providers::{Env, Format, Serialized, Toml};
use rocket::figment::{Error, Figment};
use crate::bin_constants::APP_CONFIG_ENV_PREFIX;
use crate::config::app_config::AppConfig;

pub trait FigmentExt {
    fn setup_app_config(self, config_file: impl AsRef<Path>) -> Figment;

    fn extract_app_config(&self) -> Result<AppConfig, Error>;
}

impl FigmentExt for Figment {
    /// Layers the application keys under the config file under the
    /// environment. Rocket's own keys (port, address) share the same file,
    /// so unknown keys cannot be rejected here.
    fn setup_app_config(self, config_file: impl AsRef<Path>) -> Figment {
        self.merge(Serialized::defaults(AppConfig::default()))
            .merge(Toml::file_exact(config_file))
            .merge(Env::prefixed(APP_CONFIG_ENV_PREFIX).global())
    }

    /// Pulls the application keys back out of the merged figment. The two
    /// storage targets must not coincide: a mode switch would otherwise
    /// serve one mode's notes to the other without any error.
    fn extract_app_config(&self) -> Result<AppConfig, Error> {
        let app_config: AppConfig = self.extract()?;
        if app_config.data_directory == app_config.test_data_directory {
            return Err(Error::from(format!(
                "data_directory and test_data_directory both point at \"{}\"",
                app_config.data_directory.display(),
            )));
        }
        Ok(app_config)
    }
}
