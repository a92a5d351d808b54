use log::error;
use notesd::storage::StorageError;
use rocket::http::Status;
use rocket::response::{self, Responder, Response};
use rocket::serde::json::Json;
use rocket::Request;
use serde::Serialize;
use thiserror::Error;

pub const MALFORMED_ID_ERROR: &str = "id used is malformed";
pub const MISSING_CONTENT_ERROR: &str = "Content is missing";
pub const NOT_FOUND_ERROR: &str = "Not found";

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("id used is malformed")]
    MalformedId,

    #[error("content is missing")]
    MissingContent,

    #[error("note not found")]
    NotFound,

    #[error(transparent)]
    Storage(StorageError),
}

impl From<StorageError> for ApiError {
    fn from(err: StorageError) -> Self {
        match err {
            StorageError::MalformedId(_) => ApiError::MalformedId,
            err => ApiError::Storage(err),
        }
    }
}

#[derive(Clone, Debug, Serialize)]
pub struct ErrorBody {
    pub error: &'static str,
}

/// The single translation stage from failures to HTTP responses. Anything
/// not classified below is a 500 with an empty body; the cause goes to the
/// log, never to the client.
impl<'r> Responder<'r, 'static> for ApiError {
    fn respond_to(self, request: &'r Request<'_>) -> response::Result<'static> {
        match self {
            ApiError::MalformedId =>
                (Status::BadRequest, Json(ErrorBody { error: MALFORMED_ID_ERROR }))
                    .respond_to(request),
            ApiError::MissingContent =>
                (Status::BadRequest, Json(ErrorBody { error: MISSING_CONTENT_ERROR }))
                    .respond_to(request),
            ApiError::NotFound =>
                (Status::NotFound, Json(ErrorBody { error: NOT_FOUND_ERROR }))
                    .respond_to(request),
            ApiError::Storage(e) => {
                error!("unclassified storage failure: {e}");
                Response::build()
                    .status(Status::InternalServerError)
                    .ok()
            }
        }
    }
}
