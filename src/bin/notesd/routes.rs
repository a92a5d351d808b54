mod api;
mod catchers;
mod web;

pub use api::ApiRocketBuildExt;
pub use catchers::CatchersRocketBuildExt;
pub use web::WebRocketBuildExt;
