use rocket::serde::json::Json;
use rocket::{catch, catchers, Build, Rocket};

use crate::routes::api::errors::{ErrorBody, NOT_FOUND_ERROR};

// Terminal stage for requests no route matched.
#[catch(404)]
fn not_found() -> Json<ErrorBody> {
    Json(ErrorBody { error: NOT_FOUND_ERROR })
}

pub trait CatchersRocketBuildExt {
    fn install_catchers(self) -> Self;
}

impl CatchersRocketBuildExt for Rocket<Build> {
    fn install_catchers(self) -> Self {
        self.register("/", catchers![not_found])
    }
}
