//! Repository - in-memory operations over a loaded collection.
//!
//! Everything here is pure: functions take a collection snapshot obtained
//! from a [`RecordStore`](crate::RecordStore) and mutate it in place. Roll
//! matching always goes through [`normalize_roll`](crate::normalize_roll).

mod error;
mod repository;

pub use error::RepositoryError;
pub use repository::{create, delete, find_by_roll, insert, next_id, update};
