//! Error type for student request handlers.

use std::error::Error;
use std::fmt;

use crate::export::ExportError;
use crate::repository::RepositoryError;
use crate::store::StoreError;

/// Error type for handler operations.
///
/// The first three variants carry the exact user-facing messages; the rest
/// surface as server-side failures.
#[derive(Debug)]
pub enum HandlerError {
    /// `roll` or `name` missing or blank on create.
    InvalidInput,
    /// A student with an equivalent roll already exists.
    Conflict(String),
    /// No student with this roll.
    NotFound(String),
    /// Request body is not valid JSON.
    DecodeFailed(String),
    /// Loading or saving the collection failed.
    Storage(StoreError),
    /// CSV rendering failed.
    Export(ExportError),
    /// Other error.
    Other(Box<dyn Error + Send + Sync>),
}

impl fmt::Display for HandlerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HandlerError::InvalidInput => write!(f, "roll and name required"),
            HandlerError::Conflict(_) => write!(f, "student exists"),
            HandlerError::NotFound(_) => write!(f, "not found"),
            HandlerError::DecodeFailed(msg) => write!(f, "invalid JSON body: {}", msg),
            HandlerError::Storage(e) => write!(f, "{}", e),
            HandlerError::Export(e) => write!(f, "{}", e),
            HandlerError::Other(e) => write!(f, "handler error: {}", e),
        }
    }
}

impl Error for HandlerError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            HandlerError::Storage(e) => Some(e),
            HandlerError::Export(e) => Some(e),
            HandlerError::Other(e) => Some(e.as_ref()),
            _ => None,
        }
    }
}

impl From<RepositoryError> for HandlerError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound(roll) => HandlerError::NotFound(roll),
            RepositoryError::Conflict(roll) => HandlerError::Conflict(roll),
            err @ RepositoryError::IdExhausted => HandlerError::Other(Box::new(err)),
        }
    }
}

impl From<StoreError> for HandlerError {
    fn from(err: StoreError) -> Self {
        HandlerError::Storage(err)
    }
}

impl From<ExportError> for HandlerError {
    fn from(err: ExportError) -> Self {
        HandlerError::Export(err)
    }
}

impl From<serde_json::Error> for HandlerError {
    fn from(err: serde_json::Error) -> Self {
        HandlerError::DecodeFailed(err.to_string())
    }
}

impl HandlerError {
    /// Map this error to an HTTP-style status code.
    pub fn status_code(&self) -> u16 {
        match self {
            HandlerError::InvalidInput => 400,
            HandlerError::Conflict(_) => 409,
            HandlerError::NotFound(_) => 404,
            HandlerError::DecodeFailed(_) => 400,
            HandlerError::Storage(_) => 500,
            HandlerError::Export(_) => 500,
            HandlerError::Other(_) => 500,
        }
    }
}
