//! Storage Backend Abstractions
//!
//! Provides the platform-agnostic contract a native storage API must satisfy
//! to sit underneath the portable file/folder facade.

use async_trait::async_trait;
use bytes::Bytes;
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Reference to a folder object owned by the native backend.
///
/// `path` is an opaque, backend-defined absolute path. Callers pass it back
/// verbatim and never parse it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NativeFolder {
    pub name: String,
    pub path: String,
}

impl NativeFolder {
    pub fn new(name: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
        }
    }
}

/// Reference to a file object owned by the native backend.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NativeFile {
    pub name: String,
    pub path: String,
}

impl NativeFile {
    pub fn new(name: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
        }
    }
}

/// Backend behavior when a create call targets a name that already exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NativeCollisionOption {
    /// Append a numeric suffix until the name is free
    GenerateUniqueName,
    /// Replace the existing item
    ReplaceExisting,
    /// Fail with [`BridgeError::AlreadyExists`](crate::BridgeError::AlreadyExists)
    FailIfExists,
    /// Return the existing item untouched
    OpenIfExists,
}

/// Backend behavior when a rename or move targets a name that already exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NativeNameCollisionOption {
    GenerateUniqueName,
    ReplaceExisting,
    FailIfExists,
}

/// What, if anything, lives under a given name inside a folder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ExistenceCheckResult {
    NotFound,
    FileExists,
    FolderExists,
}

/// Provider of the well-known storage roots.
///
/// Roots are resolved once by the host and handed to the facade at
/// construction time, replacing any ambient "current application" state.
pub trait RootProvider: Send + Sync {
    /// Storage local to the current device
    fn local_folder(&self) -> NativeFolder;

    /// Storage which may be synced with other devices for the same user
    fn roaming_folder(&self) -> NativeFolder;
}

/// Native storage backend trait
///
/// Abstracts the platform storage API underneath the portable facade:
/// - Desktop: `tokio::fs` over the local file system
/// - iOS/Android: sandboxed application containers
///
/// Every call is a single backend operation. Implementations must signal a
/// missing target with [`BridgeError::NotFound`](crate::BridgeError::NotFound)
/// and a create-time name collision with
/// [`BridgeError::AlreadyExists`](crate::BridgeError::AlreadyExists) so the
/// facade can translate them.
///
/// # Example
///
/// ```ignore
/// use bridge_traits::storage::{NativeCollisionOption, StorageBackend};
///
/// async fn touch(backend: &dyn StorageBackend, path: &str) -> Result<()> {
///     let folder = backend.folder_from_path(path).await?;
///     backend
///         .create_file(&folder, "touched", NativeCollisionOption::OpenIfExists)
///         .await?;
///     Ok(())
/// }
/// ```
#[async_trait]
pub trait StorageBackend: Send + Sync {
    /// Resolve a folder by its absolute path
    async fn folder_from_path(&self, path: &str) -> Result<NativeFolder>;

    /// Resolve a file by its absolute path
    async fn file_from_path(&self, path: &str) -> Result<NativeFile>;

    /// Create a file inside `folder`
    async fn create_file(
        &self,
        folder: &NativeFolder,
        desired_name: &str,
        option: NativeCollisionOption,
    ) -> Result<NativeFile>;

    /// Look up an existing file inside `folder`
    async fn get_file(&self, folder: &NativeFolder, name: &str) -> Result<NativeFile>;

    /// List the files directly inside `folder`
    async fn list_files(&self, folder: &NativeFolder) -> Result<Vec<NativeFile>>;

    /// Create a sub-folder inside `folder`
    async fn create_folder(
        &self,
        folder: &NativeFolder,
        desired_name: &str,
        option: NativeCollisionOption,
    ) -> Result<NativeFolder>;

    /// Look up an existing sub-folder inside `folder`
    async fn get_folder(&self, folder: &NativeFolder, name: &str) -> Result<NativeFolder>;

    /// List the folders directly inside `folder`
    async fn list_folders(&self, folder: &NativeFolder) -> Result<Vec<NativeFolder>>;

    /// Report whether `name` inside `folder` is a file, a folder, or absent
    async fn check_exists(&self, folder: &NativeFolder, name: &str)
        -> Result<ExistenceCheckResult>;

    /// Delete a folder and everything below it
    async fn delete_folder(&self, folder: &NativeFolder) -> Result<()>;

    /// Delete a file
    async fn delete_file(&self, file: &NativeFile) -> Result<()>;

    /// Read entire file contents into memory
    async fn read_file(&self, file: &NativeFile) -> Result<Bytes>;

    /// Replace the file contents
    async fn write_file(&self, file: &NativeFile, data: Bytes) -> Result<()>;

    /// Rename a file within its folder
    async fn rename_file(
        &self,
        file: &NativeFile,
        new_name: &str,
        option: NativeNameCollisionOption,
    ) -> Result<NativeFile>;

    /// Move a file to a new absolute path
    async fn move_file(
        &self,
        file: &NativeFile,
        new_path: &str,
        option: NativeNameCollisionOption,
    ) -> Result<NativeFile>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_native_references() {
        let folder = NativeFolder::new("Docs", "/data/Docs");
        let file = NativeFile::new("a.txt", "/data/Docs/a.txt");

        assert_eq!(folder.name, "Docs");
        assert_eq!(file.path, "/data/Docs/a.txt");
        assert_eq!(folder.clone(), folder);
    }

    #[test]
    fn test_existence_result_serializes_by_name() {
        let json = serde_json::to_string(&ExistenceCheckResult::FolderExists).unwrap();
        assert_eq!(json, "\"FolderExists\"");
    }
}
