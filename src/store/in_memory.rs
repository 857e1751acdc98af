//! InMemoryStore - Vec-backed store for testing and development.

use std::sync::{Arc, RwLock};

use super::{RecordStore, StoreError};
use crate::student::Student;

/// In-memory store. Clone-friendly via Arc; clones share the same collection.
#[derive(Clone, Default)]
pub struct InMemoryStore {
    students: Arc<RwLock<Vec<Student>>>,
}

impl InMemoryStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-populated with `students`.
    pub fn with_students(students: Vec<Student>) -> Self {
        Self {
            students: Arc::new(RwLock::new(students)),
        }
    }
}

impl RecordStore for InMemoryStore {
    fn load(&self) -> Result<Vec<Student>, StoreError> {
        let students = self
            .students
            .read()
            .map_err(|_| StoreError::Io("lock poisoned".into()))?;
        Ok(students.clone())
    }

    fn save(&self, students: &[Student]) -> Result<(), StoreError> {
        let mut stored = self
            .students
            .write()
            .map_err(|_| StoreError::Io("lock poisoned".into()))?;
        *stored = students.to_vec();
        Ok(())
    }
}
