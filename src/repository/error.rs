use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RepositoryError {
    /// No record matches the given roll.
    NotFound(String),
    /// A record with an equivalent roll already exists.
    Conflict(String),
    /// The largest id present is already `u64::MAX`.
    IdExhausted,
}

impl fmt::Display for RepositoryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RepositoryError::NotFound(roll) => write!(f, "no student with roll {}", roll),
            RepositoryError::Conflict(roll) => {
                write!(f, "a student with roll {} already exists", roll)
            }
            RepositoryError::IdExhausted => write!(f, "student ids exhausted"),
        }
    }
}

impl std::error::Error for RepositoryError {}
