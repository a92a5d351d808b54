pub const WEB_PREFIX: &str = "/";
pub const API_NOTES_PREFIX: &str = "/api/notes";
