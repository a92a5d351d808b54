pub(crate) mod errors;
mod model;
#[cfg(test)] mod tests;

use log::debug;
use notesd::data::{Note, NoteChanges, NoteDraft};
use notesd::storage::NoteStore;
use rocket::http::Status;
use rocket::response::status::Created;
use rocket::serde::json::Json;
use rocket::{delete, get, post, put, routes, Build, Rocket, State};

use crate::app_constants::API_NOTES_PREFIX;
use errors::ApiError;
use model::{CreateNoteRequest, UpdateNoteRequest};

#[get("/")]
async fn list_notes(
    store: &State<NoteStore>,
) -> Result<Json<Vec<Note>>, ApiError> {
    Ok(Json(store.list_notes().await?))
}

#[get("/<id>")]
async fn get_note(
    store: &State<NoteStore>,
    id: &str,
) -> Result<Json<Note>, ApiError> {
    store.find_note(id).await?
        .map(Json)
        .ok_or(ApiError::NotFound)
}

#[post("/", data = "<body>")]
async fn create_note(
    store: &State<NoteStore>,
    body: Option<Json<CreateNoteRequest>>,
) -> Result<Created<Json<Note>>, ApiError> {
    let body = body.ok_or(ApiError::MissingContent)?.into_inner();
    // a client-supplied date never reaches the store; the draft has no
    // place to put one
    let content = body.content
        .filter(|content| !content.is_empty())
        .ok_or(ApiError::MissingContent)?;
    let draft = NoteDraft {
        content,
        important: body.important.unwrap_or(false),
    };
    let note = store.create_note(draft).await?;
    debug!("created note {}", note.id);
    Ok(
        Created::new(format!("{API_NOTES_PREFIX}/{}", note.id))
            .body(Json(note))
    )
}

#[put("/<id>", data = "<body>")]
async fn update_note(
    store: &State<NoteStore>,
    id: &str,
    body: Option<Json<UpdateNoteRequest>>,
) -> Result<Json<Note>, ApiError> {
    let body = body.map(Json::into_inner).unwrap_or_default();
    let changes = NoteChanges {
        content: body.content,
        important: body.important,
    };
    store.update_note(id, changes).await?
        .map(Json)
        .ok_or(ApiError::NotFound)
}

// Deleting an id that matches nothing still answers 204: whether anything
// was actually removed is not surfaced to the caller.
#[delete("/<id>")]
async fn delete_note(
    store: &State<NoteStore>,
    id: &str,
) -> Result<Status, ApiError> {
    store.delete_note(id).await?;
    Ok(Status::NoContent)
}

pub trait ApiRocketBuildExt {
    fn install_notes_api(self) -> Self;
}

impl ApiRocketBuildExt for Rocket<Build> {
    fn install_notes_api(self) -> Self {
        self.mount(
            API_NOTES_PREFIX,
            routes![
                list_notes,
                get_note,
                create_note,
                update_note,
                delete_note,
            ]
        )
    }
}
