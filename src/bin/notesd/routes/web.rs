use rocket::{get, routes, Build, Rocket};
use rocket::response::content::RawHtml;
use crate::app_constants::WEB_PREFIX;

#[get("/")]
fn index() -> RawHtml<&'static str> {
    RawHtml("<h1>Server is running</h1>")
}

pub trait WebRocketBuildExt {
    fn install_notes_web(self) -> Self;
}

impl WebRocketBuildExt for Rocket<Build> {
    fn install_notes_web(self) -> Self {
        self.mount(
            WEB_PREFIX,
            routes![
                index,
            ]
        )
    }
}
