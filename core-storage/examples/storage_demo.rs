//! Portable storage walkthrough over the desktop backend
//!
//! Run with:
//! ```bash
//! cargo run -p core-storage --example storage_demo
//!
//! # JSON logs with backend events
//! cargo run -p core-storage --example storage_demo -- json
//! ```

use anyhow::Context;
use bridge_desktop::{DesktopRootProvider, TokioStorageBackend};
use bridge_traits::logging::LogLevel;
use core_runtime::config::StorageConfig;
use core_runtime::logging::{init_logging, LogFormat, LoggingConfig};
use core_storage::{CreationCollisionOption, FileSystem, NameCollisionOption};
use std::env;
use std::sync::Arc;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let format = match env::args().nth(1).as_deref() {
        Some("json") => LogFormat::Json,
        Some("compact") => LogFormat::Compact,
        _ => LogFormat::Pretty,
    };
    init_logging(
        LoggingConfig::default()
            .with_format(format)
            .with_level(LogLevel::Debug)
            .with_path_redaction(true),
    )
    .context("failed to initialize logging")?;

    let base = env::temp_dir().join("portable-storage-demo");
    let roots = DesktopRootProvider::with_directories(
        base.join("LocalState"),
        base.join("RoamingState"),
    )?;
    let config = StorageConfig::builder()
        .app_name("portable-storage-demo")
        .backend(Arc::new(TokioStorageBackend::new()))
        .root_provider(Arc::new(roots))
        .build()?;
    let fs = FileSystem::from_config(&config);

    let local = fs.local_storage();
    info!(path = %local.path(), "Local storage root");

    let docs = local
        .create_folder("Docs", CreationCollisionOption::OpenIfExists)
        .await?;
    let mut notes = docs
        .create_file("notes.txt", CreationCollisionOption::GenerateUniqueName)
        .await?;
    notes.write_all_text("remember the milk").await?;
    info!(file = %notes.name(), "Created note");

    notes
        .rename("shopping.txt", NameCollisionOption::GenerateUniqueName)
        .await?;

    for file in docs.list_files().await? {
        let text = file.read_all_text().await?;
        info!(file = %file.name(), bytes = text.len(), "Found file");
    }

    match fs.file_from_path(notes.path()).await? {
        Some(file) => info!(file = %file.name(), "Resolved by path"),
        None => info!("Note vanished before lookup"),
    }

    if let Err(e) = local.delete().await {
        info!(error = %e, "Root deletion refused");
    }

    docs.delete().await?;
    Ok(())
}
