pub const NOTES_DIRECTORY_PATH: &str = "notes";
