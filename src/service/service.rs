//! StudentService - one method per API operation.

use serde_json::Value;
use tracing::info;

use super::error::HandlerError;
use crate::export;
use crate::guard::{Guarded, ReadOpts};
use crate::repository;
use crate::store::RecordStore;
use crate::student::{NewStudent, Student, StudentPatch};

/// Request handlers over a guarded record store.
///
/// Mutations always go through [`Guarded::write`], so each successful
/// create/update/delete saves once.
pub struct StudentService<S> {
    guarded: Guarded<S>,
}

impl<S: RecordStore> StudentService<S> {
    pub fn new(store: S) -> Self {
        Self {
            guarded: Guarded::new(store),
        }
    }

    /// Get a reference to the guarded store.
    pub fn guarded(&self) -> &Guarded<S> {
        &self.guarded
    }

    /// Every student, in stored order.
    pub fn list(&self) -> Result<Vec<Student>, HandlerError> {
        Ok(self.guarded.read(|students| students.to_vec())?)
    }

    /// The student whose roll matches `roll`.
    pub fn get(&self, roll: &str) -> Result<Student, HandlerError> {
        self.guarded
            .read(|students| repository::find_by_roll(students, roll).cloned())?
            .ok_or_else(|| HandlerError::NotFound(roll.to_string()))
    }

    /// Create a student from a JSON body holding at least `roll` and `name`.
    pub fn create(&self, body: &Value) -> Result<Student, HandlerError> {
        let input = NewStudent::from_json(body);
        if !input.is_complete() {
            return Err(HandlerError::InvalidInput);
        }

        let student = self
            .guarded
            .write(|students| repository::create(students, input).map_err(HandlerError::from))?;
        info!(id = student.id, roll = %student.roll, "created student");
        Ok(student)
    }

    /// Apply the fields present in `body` to the student matching `roll`.
    pub fn update(&self, roll: &str, body: &Value) -> Result<Student, HandlerError> {
        let patch = StudentPatch::from_json(body);
        let student = self.guarded.write(|students| {
            repository::update(students, roll, &patch).map_err(HandlerError::from)
        })?;
        info!(id = student.id, roll = %student.roll, "updated student");
        Ok(student)
    }

    /// Remove the student matching `roll`. Returns `roll` as given.
    pub fn delete(&self, roll: &str) -> Result<String, HandlerError> {
        let removed = self
            .guarded
            .write(|students| repository::delete(students, roll).map_err(HandlerError::from))?;
        info!(roll = %roll, removed, "deleted student");
        Ok(roll.to_string())
    }

    /// The whole collection as CSV. Does not wait for writers and never
    /// moves an unreadable data file aside.
    pub fn export(&self) -> Result<String, HandlerError> {
        let csv = self
            .guarded
            .read_with(ReadOpts::no_lock(), export::to_csv)??;
        Ok(csv)
    }
}
