use log::{debug, error, trace};
use std::ffi::OsString;
use std::io::ErrorKind;
use std::path::PathBuf;
use uuid::Uuid;

use crate::config::app_config::AppConfig;
use crate::data::{Note, NoteChanges, NoteDraft};
use crate::lib_constants::NOTES_DIRECTORY_PATH;
use crate::storage::errors::StorageError;

use io_trait::{NoteStoreIo, ProductionNoteStoreIo};

mod io_trait;

const HYPHENATED_UUID_SIZE: usize = 36;
const TMP_FILENAME_SUFFIX: &str = ".tmp";

pub type NoteStore = NoteStoreImpl<ProductionNoteStoreIo>;

/// The gateway to the note document store. One JSON document file per note,
/// named by the note's hyphenated UUID, written atomically via a temp file
/// and a rename into place.
#[allow(private_bounds)]
#[derive(Debug)]
pub struct NoteStoreImpl<Io: NoteStoreIo> {
    io: Io,
    basedir: PathBuf,
}

impl NoteStore {
    pub async fn new(
        app_config: &AppConfig,
    ) -> Result<NoteStore, StorageError> {
        Self::new_internal(
            Self::notes_dir(app_config),
            ProductionNoteStoreIo,
        ).await
    }

    pub fn notes_dir(app_config: &AppConfig) -> PathBuf {
        app_config.active_data_directory().join(NOTES_DIRECTORY_PATH)
    }
}

#[allow(private_bounds)]
impl<Io: NoteStoreIo> NoteStoreImpl<Io> {
    async fn new_internal(
        notes_dir: PathBuf,
        io: Io,
    ) -> Result<NoteStoreImpl<Io>, StorageError> {
        debug!("opening note store at {}", notes_dir.display());
        io.create_dir_all(&notes_dir).await?;
        Ok(NoteStoreImpl { io, basedir: notes_dir })
    }

    pub async fn list_notes(&self) -> Result<Vec<Note>, StorageError> {
        debug!("listing notes in {}", self.basedir.display());
        let mut read = self.io.read_dir(&self.basedir).await?;
        let mut ret = Vec::new();
        while let Some(entry) = read.next_entry().await? {
            let Some(id) = try_extract_id(entry.file_name()) else {
                trace!("skipping dir entry {:?}", entry.file_name());
                continue;
            };
            match self.read_document(id).await {
                Ok(Some(note)) => ret.push(note),
                // removed between the directory read and the open
                Ok(None) => {}
                Err(e) => error!("skipping unreadable note {id}: {e}"),
            }
        }
        ret.sort_by_key(|note| note.date);
        Ok(ret)
    }

    pub async fn find_note(
        &self,
        id: &str,
    ) -> Result<Option<Note>, StorageError> {
        let id = parse_note_id(id)?;
        debug!("looking up note {id}");
        self.read_document(id).await
    }

    pub async fn create_note(
        &self,
        draft: NoteDraft,
    ) -> Result<Note, StorageError> {
        if draft.content.is_empty() {
            return Err(StorageError::EmptyContent);
        }
        let note = Note {
            id: self.io.generate_id(),
            content: draft.content,
            important: draft.important,
            date: self.io.now(),
        };
        debug!("creating note {}", note.id);
        self.write_document(&note).await?;
        Ok(note)
    }

    /// Applies the fields present in `changes` to the stored note. The
    /// stored `date` and `id` survive the merge untouched.
    pub async fn update_note(
        &self,
        id: &str,
        changes: NoteChanges,
    ) -> Result<Option<Note>, StorageError> {
        let id = parse_note_id(id)?;
        debug!("updating note {id}");
        let Some(mut note) = self.read_document(id).await? else {
            return Ok(None);
        };
        if let Some(content) = changes.content {
            note.content = content;
        }
        if let Some(important) = changes.important {
            note.important = important;
        }
        self.write_document(&note).await?;
        Ok(Some(note))
    }

    pub async fn delete_note(
        &self,
        id: &str,
    ) -> Result<Option<Note>, StorageError> {
        let id = parse_note_id(id)?;
        debug!("deleting note {id}");
        let Some(note) = self.read_document(id).await? else {
            return Ok(None);
        };
        match self.io.remove_file(&self.note_path(id)).await {
            Ok(()) => Ok(Some(note)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    async fn read_document(
        &self,
        id: Uuid,
    ) -> Result<Option<Note>, StorageError> {
        let path = self.note_path(id);
        trace!("reading note document at {}", path.display());
        let bytes = match self.io.read_file(&path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };
        serde_json::from_slice(&bytes)
            .map(Some)
            .map_err(|e| StorageError::CorruptDocument { id, source: e })
    }

    async fn write_document(&self, note: &Note) -> Result<(), StorageError> {
        let filename = self.note_path(note.id);
        let tmp_filename = self.note_tmp_path(note.id);
        let data = serde_json::to_vec(note)
            .map_err(|e| StorageError::EncodeDocument {
                id: note.id,
                source: e,
            })?;
        self.io.write_file(&tmp_filename, data).await?;
        trace!(
            "renaming \"{}\" into place for note {}",
            tmp_filename.display(),
            note.id,
        );
        if let Err(e) = self.io.rename_file(&tmp_filename, &filename).await {
            error!(
                "failed to rename tmp file \"{}\" for note {}: {e}",
                tmp_filename.display(),
                note.id,
            );
            if let Err(e) = self.io.remove_file(&tmp_filename).await {
                error!(
                    "failed to remove tmp file \"{}\": {e}",
                    tmp_filename.display(),
                );
            }
            return Err(e.into());
        }
        Ok(())
    }

    fn note_path(&self, id: Uuid) -> PathBuf {
        self.basedir.join(id.hyphenated().to_string())
    }

    fn note_tmp_path(&self, id: Uuid) -> PathBuf {
        self.basedir
            .join(format!("{}{TMP_FILENAME_SUFFIX}", id.hyphenated()))
    }
}

fn parse_note_id(id: &str) -> Result<Uuid, StorageError> {
    Uuid::try_parse(id)
        .map_err(|_| StorageError::MalformedId(id.to_owned()))
}

fn try_extract_id(file_name: OsString) -> Option<Uuid> {
    let name = file_name.to_str()?;
    if name.len() != HYPHENATED_UUID_SIZE {
        return None;
    }
    Uuid::try_parse(name).ok()
}
