//! Portable file handle

use bridge_traits::{NativeFile, NativeNameCollisionOption, StorageBackend};
use bytes::Bytes;
use std::fmt;
use std::sync::Arc;
use tracing::instrument;

use crate::collision::NameCollisionOption;
use crate::error::{Result, StorageError, TranslateBridgeError};
use crate::folder::validate_name;

/// Handle to a single file in storage.
///
/// The handle only remembers the backend's reference to the file; it holds
/// no open descriptor. Every operation first re-resolves the file's path and
/// fails with [`StorageError::FileNotFound`] if the file has disappeared.
#[derive(Clone)]
pub struct File {
    backend: Arc<dyn StorageBackend>,
    native: NativeFile,
}

impl fmt::Debug for File {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("File")
            .field("name", &self.native.name)
            .field("path", &self.native.path)
            .finish()
    }
}

impl File {
    pub(crate) fn new(backend: Arc<dyn StorageBackend>, native: NativeFile) -> Self {
        Self { backend, native }
    }

    /// The file name, including extension
    pub fn name(&self) -> &str {
        &self.native.name
    }

    /// The backend-native absolute path of the file
    pub fn path(&self) -> &str {
        &self.native.path
    }

    /// Read the entire file into memory.
    #[instrument(level = "debug", skip(self), fields(file = %self.native.name))]
    pub async fn read_all(&self) -> Result<Bytes> {
        self.ensure_exists().await?;
        self.backend
            .read_file(&self.native)
            .await
            .or_file_not_found()
    }

    /// Read the entire file as UTF-8 text.
    pub async fn read_all_text(&self) -> Result<String> {
        let data = self.read_all().await?;
        String::from_utf8(data.to_vec()).map_err(|e| {
            StorageError::InvalidData(format!(
                "File '{}' is not valid UTF-8: {}",
                self.native.name, e
            ))
        })
    }

    /// Replace the file contents.
    #[instrument(level = "debug", skip(self, data), fields(file = %self.native.name))]
    pub async fn write_all(&self, data: impl Into<Bytes>) -> Result<()> {
        self.ensure_exists().await?;
        self.backend
            .write_file(&self.native, data.into())
            .await
            .or_file_not_found()
    }

    /// Replace the file contents with UTF-8 text.
    pub async fn write_all_text(&self, text: &str) -> Result<()> {
        self.write_all(Bytes::copy_from_slice(text.as_bytes())).await
    }

    /// Delete the file.
    #[instrument(level = "debug", skip(self), fields(file = %self.native.name))]
    pub async fn delete(&self) -> Result<()> {
        self.ensure_exists().await?;
        self.backend
            .delete_file(&self.native)
            .await
            .or_file_not_found()
    }

    /// Rename the file within its folder.
    ///
    /// On success the handle points at the renamed file.
    #[instrument(level = "debug", skip(self), fields(file = %self.native.name))]
    pub async fn rename(&mut self, new_name: &str, option: NameCollisionOption) -> Result<()> {
        validate_name(new_name)?;
        self.ensure_exists().await?;

        self.native = self
            .backend
            .rename_file(&self.native, new_name, NativeNameCollisionOption::from(option))
            .await
            .or_conflict()?;
        Ok(())
    }

    /// Move the file to a new backend-native path.
    ///
    /// On success the handle points at the moved file. A missing destination
    /// folder fails with [`StorageError::DirectoryNotFound`].
    #[instrument(level = "debug", skip(self), fields(file = %self.native.name))]
    pub async fn move_to(&mut self, new_path: &str, option: NameCollisionOption) -> Result<()> {
        if new_path.is_empty() {
            return Err(StorageError::InvalidArgument(
                "Destination path cannot be empty".to_string(),
            ));
        }
        self.ensure_exists().await?;

        // The source was just re-resolved, so not-found means the destination folder
        self.native = match self
            .backend
            .move_file(&self.native, new_path, NativeNameCollisionOption::from(option))
            .await
        {
            Err(e) if e.is_not_found() => Err::<NativeFile, _>(e).or_directory_not_found(),
            other => other.or_conflict(),
        }?;
        Ok(())
    }

    async fn ensure_exists(&self) -> Result<()> {
        self.backend
            .file_from_path(&self.native.path)
            .await
            .or_file_not_found()?;
        Ok(())
    }
}
