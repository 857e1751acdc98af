use std::path::PathBuf;
use std::sync::Arc;

use student_registry::service::{self, StudentService};
use student_registry::JsonFileStore;
use tempfile::TempDir;

/// A running server plus the temp dir holding its data file.
pub struct TestServer {
    pub base: String,
    pub data_file: PathBuf,
    _dir: TempDir,
}

impl TestServer {
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base, path)
    }
}

/// Bind to port 0 and return the running server.
pub async fn start_server() -> TestServer {
    let dir = tempfile::tempdir().unwrap();
    let data_file = dir.path().join("students.json");
    start_server_in(dir, data_file).await
}

/// Start a server whose data file already has `contents`.
pub async fn start_server_with_file(contents: &str) -> TestServer {
    let dir = tempfile::tempdir().unwrap();
    let data_file = dir.path().join("students.json");
    std::fs::write(&data_file, contents).unwrap();
    start_server_in(dir, data_file).await
}

async fn start_server_in(dir: TempDir, data_file: PathBuf) -> TestServer {
    let registry = Arc::new(StudentService::new(JsonFileStore::new(&data_file)));
    let app = service::router(registry);
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    TestServer {
        base: format!("http://{addr}"),
        data_file,
        _dir: dir,
    }
}
