//! Defaults for the registry.
//!
//! Runtime configuration is handled via CLI arguments and environment
//! variables in `main.rs`; these are the values used when nothing is given.

/// Default listen address.
pub const DEFAULT_BIND: &str = "127.0.0.1:5000";

/// Default location of the data file.
pub const DEFAULT_DATA_FILE: &str = "students.json";

/// Suffix appended to a data file that failed to parse.
pub const BACKUP_SUFFIX: &str = ".bak";

/// Filename offered for the CSV download.
pub const EXPORT_FILENAME: &str = "students.csv";

/// Column order of the CSV export.
pub const CSV_HEADER: [&str; 7] = [
    "id",
    "roll",
    "name",
    "email",
    "department",
    "year",
    "created_at",
];

/// Default `tracing` filter when `RUST_LOG` is unset.
pub const DEFAULT_LOG_FILTER: &str = "student_registry=info";
