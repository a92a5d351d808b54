mod app_constants;
mod app_setup;
mod cli;
mod http;
mod routes;

use crate::app_setup::AppSetupFairing;
use crate::cli::CliConfig;
use crate::http::Cors;
use crate::routes::{ApiRocketBuildExt, CatchersRocketBuildExt, WebRocketBuildExt};
use clap::{crate_name, Parser};
use log::info;
use notesd::config::app_config::ExecutionMode;
use notesd::config::figment::FigmentExt;
use notesd::error_exit;
use notesd::logging::init_logging;
use rocket::figment::providers::Serialized;
use rocket::figment::Figment;
use rocket::{Build, Rocket};

fn main() {
    init_logging();

    info!("{} starting up", crate_name!());

    let cli_config = CliConfig::parse();
    if !cli_config.config_file.exists() {
        error_exit!(
            "configuration file at {} does not exist",
            cli_config.config_file.display()
        )
    }
    let mut figment = Figment::from(rocket::Config::default())
        .setup_app_config(cli_config.config_file);
    if cli_config.test_mode {
        figment = figment
            .merge(Serialized::global("mode", ExecutionMode::Test));
    }

    let result = rocket::execute(build_rocket(figment).launch());
    if let Err(e) = result {
        error_exit!("failed to launch rocket: {}", e);
    }
}

pub fn build_rocket(figment: Figment) -> Rocket<Build> {
    rocket::custom(figment)
        .attach(AppSetupFairing::new())
        .attach(Cors)
        .install_notes_api()
        .install_notes_web()
        .install_catchers()
}
