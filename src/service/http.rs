//! HTTP transport for the student service.
//!
//! Requires the `http` feature. Uses axum for routing.
//!
//! ## Routes
//!
//! - `GET /api/students`: every student as a JSON array.
//! - `POST /api/students`: create; `201` with the new student.
//! - `GET /api/students/export`: CSV download of the collection.
//! - `GET /api/students/:roll`: one student.
//! - `PUT /api/students/:roll`: partial update.
//! - `DELETE /api/students/:roll`: `{ "deleted": roll }`.
//!
//! Errors are `{ "error": "..." }` with the status from
//! [`HandlerError::status_code`].
//!
//! ## Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use student_registry::{service, JsonFileStore, StudentService};
//!
//! let service = Arc::new(StudentService::new(JsonFileStore::new("students.json")));
//!
//! // Get the router to compose with other axum routes
//! let app = service::router(service.clone());
//!
//! // Or serve directly
//! service::serve(app, "127.0.0.1:5000").await?;
//! ```

use std::path::PathBuf;
use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::{Path, State};
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde_json::{json, Value};
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;
use tracing::{error, info};

use super::error::HandlerError;
use super::service::StudentService;
use crate::config::EXPORT_FILENAME;
use crate::store::RecordStore;

/// Build an axum `Router` serving the student API.
pub fn router<S>(service: Arc<StudentService<S>>) -> Router
where
    S: RecordStore + 'static,
{
    Router::new()
        .route("/api/students", get(list_handler).post(create_handler))
        .route("/api/students/export", get(export_handler))
        .route(
            "/api/students/:roll",
            get(get_handler).put(update_handler).delete(delete_handler),
        )
        .layer(CorsLayer::permissive())
        .with_state(service)
}

/// Like [`router`], with non-API paths served from `static_dir`
/// (`index.html` for `/`).
pub fn router_with_static<S>(
    service: Arc<StudentService<S>>,
    static_dir: impl Into<PathBuf>,
) -> Router
where
    S: RecordStore + 'static,
{
    router(service).fallback_service(ServeDir::new(static_dir.into()))
}

/// Serve `app` at the given address (e.g. `"127.0.0.1:5000"`) until Ctrl-C.
pub async fn serve(app: Router, addr: &str) -> Result<(), std::io::Error> {
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(addr = %listener.local_addr()?, "listening");
    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            let _ = tokio::signal::ctrl_c().await;
            info!("shutting down");
        })
        .await
}

impl IntoResponse for HandlerError {
    fn into_response(self) -> Response {
        let status =
            StatusCode::from_u16(self.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        if status.is_server_error() {
            error!(error = %self, "request failed");
        }
        let body = json!({ "error": self.to_string() });
        (status, Json(body)).into_response()
    }
}

/// Run blocking store work off the async executor.
async fn blocking<T, F>(f: F) -> Result<T, HandlerError>
where
    F: FnOnce() -> Result<T, HandlerError> + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(f)
        .await
        .map_err(|e| HandlerError::Other(Box::new(e)))?
}

/// Decode a request body. Empty bodies decode as `{}`.
fn json_body(body: &[u8]) -> Result<Value, HandlerError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(json!({}));
    }
    Ok(serde_json::from_slice(body)?)
}

/// `GET /api/students`
async fn list_handler<S>(
    State(service): State<Arc<StudentService<S>>>,
) -> Result<impl IntoResponse, HandlerError>
where
    S: RecordStore + 'static,
{
    let students = blocking(move || service.list()).await?;
    Ok(Json(students))
}

/// `POST /api/students`
async fn create_handler<S>(
    State(service): State<Arc<StudentService<S>>>,
    body: Bytes,
) -> Result<impl IntoResponse, HandlerError>
where
    S: RecordStore + 'static,
{
    let input = json_body(&body)?;
    let student = blocking(move || service.create(&input)).await?;
    Ok((StatusCode::CREATED, Json(student)))
}

/// `GET /api/students/:roll`
async fn get_handler<S>(
    State(service): State<Arc<StudentService<S>>>,
    Path(roll): Path<String>,
) -> Result<impl IntoResponse, HandlerError>
where
    S: RecordStore + 'static,
{
    let student = blocking(move || service.get(&roll)).await?;
    Ok(Json(student))
}

/// `PUT /api/students/:roll`
async fn update_handler<S>(
    State(service): State<Arc<StudentService<S>>>,
    Path(roll): Path<String>,
    body: Bytes,
) -> Result<impl IntoResponse, HandlerError>
where
    S: RecordStore + 'static,
{
    let patch = json_body(&body)?;
    let student = blocking(move || service.update(&roll, &patch)).await?;
    Ok(Json(student))
}

/// `DELETE /api/students/:roll`
async fn delete_handler<S>(
    State(service): State<Arc<StudentService<S>>>,
    Path(roll): Path<String>,
) -> Result<impl IntoResponse, HandlerError>
where
    S: RecordStore + 'static,
{
    let deleted = blocking(move || service.delete(&roll)).await?;
    Ok(Json(json!({ "deleted": deleted })))
}

/// `GET /api/students/export`
async fn export_handler<S>(
    State(service): State<Arc<StudentService<S>>>,
) -> Result<impl IntoResponse, HandlerError>
where
    S: RecordStore + 'static,
{
    let csv = blocking(move || service.export()).await?;
    let disposition = format!("attachment;filename={}", EXPORT_FILENAME);
    Ok((
        [
            (header::CONTENT_TYPE, "text/csv; charset=utf-8".to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        csv,
    ))
}
