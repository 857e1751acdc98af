//! Record stores - whole-collection persistence for students.
//!
//! A store only knows how to load and save the complete collection as one
//! unit. It does no locking of its own; callers sequence access through
//! [`Guarded`](crate::Guarded).
//!
//! ## Example
//!
//! ```ignore
//! use student_registry::{JsonFileStore, RecordStore};
//!
//! let store = JsonFileStore::new("students.json");
//! let mut students = store.load()?;
//! students.retain(|s| s.year > 1);
//! store.save(&students)?;
//! ```

mod file;
mod in_memory;

use std::fmt;

use crate::student::Student;

pub use file::JsonFileStore;
pub use in_memory::InMemoryStore;

/// Abstract whole-collection storage.
pub trait RecordStore: Send + Sync {
    /// Read the full collection. A store with nothing persisted yields an
    /// empty collection.
    fn load(&self) -> Result<Vec<Student>, StoreError>;

    /// Read the full collection without side effects on the stored data.
    ///
    /// Used for reads outside the critical section, where `load`'s recovery
    /// steps could race a writer. Defaults to `load`.
    fn peek(&self) -> Result<Vec<Student>, StoreError> {
        self.load()
    }

    /// Replace the persisted collection with `students`.
    ///
    /// Implementations must leave either the old or the new collection
    /// readable, never a mix or a truncated file.
    fn save(&self, students: &[Student]) -> Result<(), StoreError>;
}

impl<S: RecordStore + ?Sized> RecordStore for std::sync::Arc<S> {
    fn load(&self) -> Result<Vec<Student>, StoreError> {
        (**self).load()
    }

    fn peek(&self) -> Result<Vec<Student>, StoreError> {
        (**self).peek()
    }

    fn save(&self, students: &[Student]) -> Result<(), StoreError> {
        (**self).save(students)
    }
}

/// Error type for store operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// Filesystem error while reading, writing or quarantining.
    Io(String),
    /// The collection could not be serialized.
    Serialize(String),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::Io(msg) => write!(f, "storage io error: {}", msg),
            StoreError::Serialize(msg) => write!(f, "storage serialization error: {}", msg),
        }
    }
}

impl std::error::Error for StoreError {}
