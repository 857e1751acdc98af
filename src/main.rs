use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use student_registry::config;
use student_registry::service::{self, StudentService};
use student_registry::JsonFileStore;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "student-registry", about = "Student record service backed by a JSON file")]
struct Args {
    /// Address to listen on
    #[arg(short, long, env = "STUDENT_REGISTRY_BIND", default_value = config::DEFAULT_BIND)]
    bind: String,

    /// JSON file holding the student collection
    #[arg(short, long, env = "STUDENT_REGISTRY_DATA_FILE", default_value = config::DEFAULT_DATA_FILE)]
    data_file: PathBuf,

    /// Directory served for non-API paths (index.html at `/`)
    #[arg(long, env = "STUDENT_REGISTRY_STATIC_DIR")]
    static_dir: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config::DEFAULT_LOG_FILTER))?;
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let args = Args::parse();

    if let Some(dir) = args.static_dir.as_ref().filter(|d| !d.is_dir()) {
        eprintln!("Error: static dir '{}' is not a directory", dir.display());
        std::process::exit(1);
    }

    tracing::info!(data_file = %args.data_file.display(), "starting student registry");
    let registry = Arc::new(StudentService::new(JsonFileStore::new(args.data_file)));

    let app = match args.static_dir {
        Some(dir) => service::router_with_static(registry, dir),
        None => service::router(registry),
    };

    service::serve(app, &args.bind).await?;
    Ok(())
}
