//! Guarded - the single critical section around a record store.
//!
//! Every mutation runs as load → mutate → save while holding one
//! process-wide mutex, so two writers can never both start from the same
//! snapshot. Reads take the mutex by default and can opt out with
//! [`ReadOpts::no_lock`] when a slightly stale view is acceptable. An
//! unlocked read goes through [`RecordStore::peek`] and never touches the
//! stored file.
//!
//! ## Example
//!
//! ```ignore
//! use student_registry::{repository, Guarded, InMemoryStore};
//!
//! let guarded = Guarded::new(InMemoryStore::new());
//! let created = guarded.write(|students| repository::create(students, input))?;
//! let count = guarded.read(|students| students.len())?;
//! ```

use std::sync::{Mutex, MutexGuard, PoisonError};

use tracing::{debug, warn};

use crate::store::{RecordStore, StoreError};
use crate::student::Student;

/// Options for read operations.
#[derive(Debug, Clone, Copy)]
pub struct ReadOpts {
    /// Whether to enter the critical section for the read.
    pub lock: bool,
}

impl Default for ReadOpts {
    fn default() -> Self {
        Self { lock: true }
    }
}

impl ReadOpts {
    /// Create options that skip locking.
    pub fn no_lock() -> Self {
        Self { lock: false }
    }
}

/// A record store whose read-modify-write cycles are serialized.
pub struct Guarded<S> {
    store: S,
    section: Mutex<()>,
}

impl<S: RecordStore> Guarded<S> {
    pub fn new(store: S) -> Self {
        Guarded {
            store,
            section: Mutex::new(()),
        }
    }

    /// Access the inner store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Enter the critical section.
    ///
    /// The mutex guards no data of its own and every save is all-or-nothing,
    /// so a panic in an earlier holder leaves nothing to repair.
    fn enter(&self) -> MutexGuard<'_, ()> {
        self.section.lock().unwrap_or_else(|poisoned| {
            warn!("previous writer panicked inside the critical section");
            PoisonError::into_inner(poisoned)
        })
    }

    /// Run `f` over a consistent snapshot taken inside the critical section.
    pub fn read<T, F>(&self, f: F) -> Result<T, StoreError>
    where
        F: FnOnce(&[Student]) -> T,
    {
        self.read_with(ReadOpts::default(), f)
    }

    /// Run `f` over a snapshot, entering the critical section only if
    /// `opts.lock` is set.
    pub fn read_with<T, F>(&self, opts: ReadOpts, f: F) -> Result<T, StoreError>
    where
        F: FnOnce(&[Student]) -> T,
    {
        let students = if opts.lock {
            let _section = self.enter();
            self.store.load()?
        } else {
            self.store.peek()?
        };
        Ok(f(&students))
    }

    /// Load, let `f` mutate, and save, all inside the critical section.
    ///
    /// The collection is saved exactly once if `f` succeeds and not at all
    /// if it fails. A failed save is returned as the error.
    pub fn write<T, E, F>(&self, f: F) -> Result<T, E>
    where
        F: FnOnce(&mut Vec<Student>) -> Result<T, E>,
        E: From<StoreError>,
    {
        let _section = self.enter();
        let mut students = self.store.load()?;
        let value = f(&mut students)?;
        self.store.save(&students)?;
        debug!(count = students.len(), "committed collection");
        Ok(value)
    }
}
