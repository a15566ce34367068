//! Storage entry point

use bridge_traits::{RootProvider, StorageBackend};
use core_runtime::config::StorageConfig;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;
use tracing::instrument;

use crate::error::{Result, StorageError};
use crate::file::File;
use crate::folder::Folder;

/// The well-known storage roots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RootCategory {
    /// Storage local to the current device
    Local,
    /// Storage which may be synced with other devices for the same user
    Roaming,
}

/// Entry point to portable storage.
///
/// Wraps one [`StorageBackend`] and one [`RootProvider`], both chosen by the
/// host at construction.
///
/// # Example
///
/// ```ignore
/// use core_storage::{CreationCollisionOption, FileSystem};
///
/// let fs = FileSystem::from_config(&config);
/// let docs = fs
///     .local_storage()
///     .create_folder("Docs", CreationCollisionOption::OpenIfExists)
///     .await?;
/// let notes = docs
///     .create_file("notes.txt", CreationCollisionOption::ReplaceExisting)
///     .await?;
/// notes.write_all_text("hello").await?;
///
/// // Later, from a stored path
/// if let Some(file) = fs.file_from_path(notes.path()).await? {
///     println!("{}", file.read_all_text().await?);
/// }
/// ```
#[derive(Clone)]
pub struct FileSystem {
    backend: Arc<dyn StorageBackend>,
    roots: Arc<dyn RootProvider>,
}

impl fmt::Debug for FileSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FileSystem")
            .field("local", &self.roots.local_folder().path)
            .field("roaming", &self.roots.roaming_folder().path)
            .finish()
    }
}

impl FileSystem {
    pub fn new(backend: Arc<dyn StorageBackend>, roots: Arc<dyn RootProvider>) -> Self {
        Self { backend, roots }
    }

    pub fn from_config(config: &StorageConfig) -> Self {
        Self::new(
            Arc::clone(&config.backend),
            Arc::clone(&config.root_provider),
        )
    }

    /// Build a file system over the desktop defaults for `app_name`.
    #[cfg(feature = "desktop-shims")]
    pub fn desktop(app_name: &str) -> core_runtime::Result<Self> {
        let config = StorageConfig::builder().app_name(app_name).build()?;
        Ok(Self::from_config(&config))
    }

    /// A folder representing storage which is local to the current device
    pub fn local_storage(&self) -> Folder {
        self.storage(RootCategory::Local)
    }

    /// A folder representing storage which may be synced with other devices
    /// for the same user
    pub fn roaming_storage(&self) -> Folder {
        self.storage(RootCategory::Roaming)
    }

    /// The root folder for `category`
    pub fn storage(&self, category: RootCategory) -> Folder {
        let native = match category {
            RootCategory::Local => self.roots.local_folder(),
            RootCategory::Roaming => self.roots.roaming_folder(),
        };
        Folder::new(Arc::clone(&self.backend), native, Some(category))
    }

    /// Get a file given its path, as returned by [`File::path`].
    ///
    /// Returns `Ok(None)` if no file exists at that path.
    #[instrument(level = "debug", skip(self))]
    pub async fn file_from_path(&self, path: &str) -> Result<Option<File>> {
        match self.backend.file_from_path(path).await {
            Ok(native) => Ok(Some(File::new(Arc::clone(&self.backend), native))),
            Err(e) if e.is_not_found() => Ok(None),
            Err(e) => Err(StorageError::Backend(e)),
        }
    }

    /// Get a folder given its path, as returned by [`Folder::path`].
    ///
    /// Returns `Ok(None)` if no folder exists at that path. The returned
    /// handle is never root-flagged, even if the path names a root.
    #[instrument(level = "debug", skip(self))]
    pub async fn folder_from_path(&self, path: &str) -> Result<Option<Folder>> {
        match self.backend.folder_from_path(path).await {
            Ok(native) => Ok(Some(Folder::new(Arc::clone(&self.backend), native, None))),
            Err(e) if e.is_not_found() => Ok(None),
            Err(e) => Err(StorageError::Backend(e)),
        }
    }
}
