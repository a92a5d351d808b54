use log::{error, info};
use notesd::config::figment::FigmentExt;
use notesd::storage::NoteStore;
use rocket::fairing::{Fairing, Info, Kind};
use rocket::{Build, Rocket};

/// Extracts the application configuration, opens the note store against the
/// mode-selected data directory and hands both to Rocket's managed state.
pub struct AppSetupFairing;

impl AppSetupFairing {
    pub fn new() -> Self {
        AppSetupFairing
    }
}

#[rocket::async_trait]
impl Fairing for AppSetupFairing {
    fn info(&self) -> Info {
        Info {
            name: "Note store setup",
            kind: Kind::Ignite,
        }
    }

    async fn on_ignite(&self, rocket: Rocket<Build>) -> rocket::fairing::Result {
        let app_config = match rocket.figment().extract_app_config() {
            Ok(app_config) => app_config,
            Err(e) => {
                error!("configuration is invalid: {e}");
                return Err(rocket);
            }
        };
        info!(
            "running in {:?} mode, notes stored in \"{}\"",
            app_config.mode,
            NoteStore::notes_dir(&app_config).display(),
        );
        let store = match NoteStore::new(&app_config).await {
            Ok(store) => store,
            Err(e) => {
                error!("failed to open note store: {e}");
                return Err(rocket);
            }
        };
        Ok(rocket.manage(store))
    }
}
