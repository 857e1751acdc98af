pub mod config;
pub mod export;
mod guard;
pub mod repository;
pub mod service;
mod store;
mod student;

pub use export::{to_csv, ExportError};
pub use guard::{Guarded, ReadOpts};
pub use repository::RepositoryError;
pub use service::{HandlerError, StudentService};
pub use store::{InMemoryStore, JsonFileStore, RecordStore, StoreError};
pub use student::{
    coerce_text, coerce_year, normalize_roll, NewStudent, Student, StudentPatch, DEFAULT_YEAR,
};
