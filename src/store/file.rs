//! JsonFileStore - the collection as a pretty-printed JSON array on disk.
//!
//! Saves go through a sibling temp file and a rename, so concurrent readers
//! see either the previous file or the new one. A file that fails to parse
//! is moved aside to `<path>.bak` and treated as an empty collection.

use std::fs::{self, File};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tracing::{debug, error, warn};

use super::{RecordStore, StoreError};
use crate::config::BACKUP_SUFFIX;
use crate::student::Student;

const TEMP_SUFFIX: &str = ".tmp";

/// File-backed store holding the whole collection in one JSON document.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Location of the data file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Where a corrupt data file is moved to.
    pub fn backup_path(&self) -> PathBuf {
        with_suffix(&self.path, BACKUP_SUFFIX)
    }

    fn temp_path(&self) -> PathBuf {
        with_suffix(&self.path, TEMP_SUFFIX)
    }

    fn quarantine(&self) -> Result<(), StoreError> {
        let backup = self.backup_path();
        fs::rename(&self.path, &backup).map_err(|e| {
            StoreError::Io(format!(
                "failed to move corrupt {} aside: {}",
                self.path.display(),
                e
            ))
        })?;
        warn!(
            path = %self.path.display(),
            backup = %backup.display(),
            "quarantined unreadable data file"
        );
        Ok(())
    }

    /// File contents, or `None` when there is no file yet.
    fn read_bytes(&self) -> Result<Option<Vec<u8>>, StoreError> {
        match fs::read(&self.path) {
            Ok(bytes) => Ok(Some(bytes)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StoreError::Io(format!(
                "failed to read {}: {}",
                self.path.display(),
                e
            ))),
        }
    }

    fn parse(&self, bytes: &[u8]) -> Option<Vec<Student>> {
        match serde_json::from_slice::<Vec<Student>>(bytes) {
            Ok(students) => {
                debug!(path = %self.path.display(), count = students.len(), "loaded students");
                Some(students)
            }
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "data file is not a valid student list");
                None
            }
        }
    }

    fn write_temp(&self, tmp: &Path, bytes: &[u8]) -> io::Result<()> {
        if let Some(dir) = self.path.parent().filter(|d| !d.as_os_str().is_empty()) {
            fs::create_dir_all(dir)?;
        }
        let mut file = File::create(tmp)?;
        file.write_all(bytes)?;
        file.sync_all()
    }
}

impl RecordStore for JsonFileStore {
    fn load(&self) -> Result<Vec<Student>, StoreError> {
        let Some(bytes) = self.read_bytes()? else {
            return Ok(Vec::new());
        };
        match self.parse(&bytes) {
            Some(students) => Ok(students),
            None => {
                self.quarantine()?;
                Ok(Vec::new())
            }
        }
    }

    fn peek(&self) -> Result<Vec<Student>, StoreError> {
        let Some(bytes) = self.read_bytes()? else {
            return Ok(Vec::new());
        };
        Ok(self.parse(&bytes).unwrap_or_default())
    }

    fn save(&self, students: &[Student]) -> Result<(), StoreError> {
        let bytes =
            serde_json::to_vec_pretty(students).map_err(|e| StoreError::Serialize(e.to_string()))?;

        let tmp = self.temp_path();
        let written = self
            .write_temp(&tmp, &bytes)
            .and_then(|()| fs::rename(&tmp, &self.path));

        if let Err(e) = written {
            let _ = fs::remove_file(&tmp);
            error!(path = %self.path.display(), error = %e, "failed to save students");
            return Err(StoreError::Io(format!(
                "failed to write {}: {}",
                self.path.display(),
                e
            )));
        }

        debug!(path = %self.path.display(), count = students.len(), "saved students");
        Ok(())
    }
}

fn with_suffix(path: &Path, suffix: &str) -> PathBuf {
    let mut name = path.as_os_str().to_os_string();
    name.push(suffix);
    PathBuf::from(name)
}
