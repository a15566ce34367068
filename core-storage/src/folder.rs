//! Portable folder handle

use bridge_traits::{ExistenceCheckResult, NativeCollisionOption, NativeFolder, StorageBackend};
use std::fmt;
use std::sync::Arc;
use tracing::instrument;

use crate::collision::CreationCollisionOption;
use crate::error::{Result, StorageError, TranslateBridgeError};
use crate::file::File;
use crate::file_system::RootCategory;

const ROOT_DELETE_MESSAGE: &str = "Cannot delete root storage folder.";

/// Reject names that are empty or would escape the parent folder.
pub(crate) fn validate_name(name: &str) -> Result<()> {
    if name.is_empty() {
        return Err(StorageError::InvalidArgument(
            "Name cannot be empty".to_string(),
        ));
    }

    if name.contains('/') || name.contains('\\') {
        return Err(StorageError::InvalidArgument(format!(
            "Name must not contain path separators: '{}'",
            name
        )));
    }

    if name == "." || name == ".." {
        return Err(StorageError::InvalidArgument(format!(
            "Name must not be a relative path component: '{}'",
            name
        )));
    }

    Ok(())
}

/// Handle to a folder in storage.
///
/// Handles are cheap to clone and share no mutable state. A handle is not
/// durable: the folder may be removed out-of-band at any time, so every
/// operation first re-resolves the folder's own path and fails with
/// [`StorageError::DirectoryNotFound`] if it is gone.
///
/// Handles for the well-known roots returned by
/// [`FileSystem`](crate::FileSystem) carry a [`RootCategory`] and refuse
/// [`delete`](Folder::delete).
#[derive(Clone)]
pub struct Folder {
    backend: Arc<dyn StorageBackend>,
    native: NativeFolder,
    root: Option<RootCategory>,
}

impl fmt::Debug for Folder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Folder")
            .field("name", &self.native.name)
            .field("path", &self.native.path)
            .field("root", &self.root)
            .finish()
    }
}

impl Folder {
    pub(crate) fn new(
        backend: Arc<dyn StorageBackend>,
        native: NativeFolder,
        root: Option<RootCategory>,
    ) -> Self {
        Self {
            backend,
            native,
            root,
        }
    }

    fn child(&self, native: NativeFolder) -> Folder {
        Folder::new(Arc::clone(&self.backend), native, None)
    }

    fn file(&self, native: bridge_traits::NativeFile) -> File {
        File::new(Arc::clone(&self.backend), native)
    }

    /// The folder name
    pub fn name(&self) -> &str {
        &self.native.name
    }

    /// The backend-native absolute path of the folder
    pub fn path(&self) -> &str {
        &self.native.path
    }

    /// Whether this handle is one of the well-known storage roots
    pub fn is_root(&self) -> bool {
        self.root.is_some()
    }

    /// Which well-known root this handle is, if any
    pub fn root_category(&self) -> Option<RootCategory> {
        self.root
    }

    /// Create a file in this folder.
    ///
    /// Fails with [`StorageError::Conflict`] when `option` is
    /// [`FailIfExists`](CreationCollisionOption::FailIfExists) and the name
    /// is taken.
    #[instrument(level = "debug", skip(self), fields(folder = %self.native.name))]
    pub async fn create_file(
        &self,
        desired_name: &str,
        option: CreationCollisionOption,
    ) -> Result<File> {
        validate_name(desired_name)?;
        self.ensure_exists().await?;

        let native = self
            .backend
            .create_file(&self.native, desired_name, NativeCollisionOption::from(option))
            .await
            .or_conflict()?;
        Ok(self.file(native))
    }

    /// Get an existing file in this folder.
    #[instrument(level = "debug", skip(self), fields(folder = %self.native.name))]
    pub async fn get_file(&self, name: &str) -> Result<File> {
        validate_name(name)?;
        self.ensure_exists().await?;

        let native = self
            .backend
            .get_file(&self.native, name)
            .await
            .or_file_not_found()?;
        Ok(self.file(native))
    }

    /// List the files directly inside this folder, in no particular order.
    #[instrument(level = "debug", skip(self), fields(folder = %self.native.name))]
    pub async fn list_files(&self) -> Result<Vec<File>> {
        self.ensure_exists().await?;

        let natives = self
            .backend
            .list_files(&self.native)
            .await
            .or_directory_not_found()?;
        Ok(natives.into_iter().map(|native| self.file(native)).collect())
    }

    /// Create a sub-folder.
    #[instrument(level = "debug", skip(self), fields(folder = %self.native.name))]
    pub async fn create_folder(
        &self,
        desired_name: &str,
        option: CreationCollisionOption,
    ) -> Result<Folder> {
        validate_name(desired_name)?;
        self.ensure_exists().await?;

        let native = self
            .backend
            .create_folder(&self.native, desired_name, NativeCollisionOption::from(option))
            .await
            .or_conflict()?;
        Ok(self.child(native))
    }

    /// Get an existing sub-folder.
    #[instrument(level = "debug", skip(self), fields(folder = %self.native.name))]
    pub async fn get_folder(&self, name: &str) -> Result<Folder> {
        validate_name(name)?;
        self.ensure_exists().await?;

        let native = self
            .backend
            .get_folder(&self.native, name)
            .await
            .or_directory_not_found()?;
        Ok(self.child(native))
    }

    /// List the sub-folders directly inside this folder, in no particular order.
    #[instrument(level = "debug", skip(self), fields(folder = %self.native.name))]
    pub async fn list_folders(&self) -> Result<Vec<Folder>> {
        self.ensure_exists().await?;

        let natives = self
            .backend
            .list_folders(&self.native)
            .await
            .or_directory_not_found()?;
        Ok(natives
            .into_iter()
            .map(|native| self.child(native))
            .collect())
    }

    /// Check whether `name` is a file, a folder, or absent.
    #[instrument(level = "debug", skip(self), fields(folder = %self.native.name))]
    pub async fn check_exists(&self, name: &str) -> Result<ExistenceCheckResult> {
        validate_name(name)?;
        self.ensure_exists().await?;

        Ok(self.backend.check_exists(&self.native, name).await?)
    }

    /// Delete this folder and everything in it.
    ///
    /// Root folders cannot be deleted; the call fails with
    /// [`StorageError::Conflict`] without reaching the backend.
    #[instrument(level = "debug", skip(self), fields(folder = %self.native.name))]
    pub async fn delete(&self) -> Result<()> {
        if self.is_root() {
            return Err(StorageError::Conflict {
                message: ROOT_DELETE_MESSAGE.to_string(),
                source: None,
            });
        }
        self.ensure_exists().await?;

        self.backend
            .delete_folder(&self.native)
            .await
            .or_directory_not_found()
    }

    async fn ensure_exists(&self) -> Result<()> {
        self.backend
            .folder_from_path(&self.native.path)
            .await
            .or_directory_not_found()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_name() {
        assert!(validate_name("notes.txt").is_ok());
        assert!(validate_name("Docs (2)").is_ok());

        for bad in ["", ".", "..", "a/b", "a\\b"] {
            assert!(
                matches!(validate_name(bad), Err(StorageError::InvalidArgument(_))),
                "{:?} should be rejected",
                bad
            );
        }
    }
}
