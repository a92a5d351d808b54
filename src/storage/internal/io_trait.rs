use std::path::Path;
use time::OffsetDateTime;
use tokio::{fs, io};
use uuid::Uuid;

/// Filesystem access plus clock and id generation, separated out so the
/// store stays substitutable in tests.
pub(super) trait NoteStoreIo: Send + Sync {
    async fn create_dir_all(&self, path: &Path) -> io::Result<()> {
        fs::create_dir_all(path).await
    }

    async fn read_file(&self, path: &Path) -> io::Result<Vec<u8>> {
        fs::read(path).await
    }

    async fn write_file(&self, path: &Path, data: Vec<u8>) -> io::Result<()> {
        fs::write(path, data).await
    }

    async fn rename_file(&self, from: &Path, to: &Path) -> io::Result<()> {
        fs::rename(from, to).await
    }

    async fn remove_file(&self, path: &Path) -> io::Result<()> {
        fs::remove_file(path).await
    }

    async fn read_dir(&self, path: &Path) -> io::Result<fs::ReadDir> {
        fs::read_dir(path).await
    }

    fn generate_id(&self) -> Uuid {
        Uuid::new_v4()
    }

    fn now(&self) -> OffsetDateTime {
        OffsetDateTime::now_utc()
    }
}

#[derive(Debug)]
pub struct ProductionNoteStoreIo;

impl NoteStoreIo for ProductionNoteStoreIo {}
