//! service - the request handlers behind the student API.
//!
//! `StudentService` maps each external operation onto repository calls run
//! inside the collection guard, and reports failures as [`HandlerError`]s
//! that carry their own HTTP status.
//!
//! ## Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use serde_json::json;
//! use student_registry::{service, JsonFileStore, StudentService};
//!
//! let service = Arc::new(StudentService::new(JsonFileStore::new("students.json")));
//!
//! // Direct calls
//! let ann = service.create(&json!({ "roll": "A1", "name": "Ann" }))?;
//!
//! // HTTP transport (requires "http" feature)
//! // service::serve(service::router(service), "127.0.0.1:5000").await?;
//! ```

mod error;
mod service;

pub use error::HandlerError;
pub use service::StudentService;

// HTTP transport (requires "http" feature)
#[cfg(feature = "http")]
mod http;
#[cfg(feature = "http")]
pub use http::{router, router_with_static, serve};
