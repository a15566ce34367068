//! Storage Backend Implementation using Tokio

use async_trait::async_trait;
use bridge_traits::{
    error::{BridgeError, Result},
    storage::{
        ExistenceCheckResult, NativeCollisionOption, NativeFile, NativeFolder,
        NativeNameCollisionOption, StorageBackend,
    },
};
use bytes::Bytes;
use std::io;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::debug;

/// Tokio-based storage backend
///
/// Maps the backend contract onto the local file system:
/// - `tokio::fs` for async operations
/// - paths are native absolute paths rendered as strings
/// - generated unique names follow the `name (2).ext` convention
#[derive(Debug, Clone, Default)]
pub struct TokioStorageBackend;

impl TokioStorageBackend {
    pub fn new() -> Self {
        Self
    }

    /// Convert std::io::Error to BridgeError, keeping the offending path
    fn map_io_error(e: io::Error, path: &Path) -> BridgeError {
        match e.kind() {
            io::ErrorKind::NotFound => BridgeError::NotFound(path.display().to_string()),
            io::ErrorKind::AlreadyExists => {
                BridgeError::AlreadyExists(path.display().to_string())
            }
            _ => BridgeError::Io(e),
        }
    }

    fn item_name(path: &Path) -> String {
        path.file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.to_string_lossy().into_owned())
    }

    fn folder_ref(path: &Path) -> NativeFolder {
        NativeFolder::new(Self::item_name(path), path.to_string_lossy())
    }

    fn file_ref(path: &Path) -> NativeFile {
        NativeFile::new(Self::item_name(path), path.to_string_lossy())
    }

    async fn probe(path: &Path) -> Result<ExistenceCheckResult> {
        match fs::metadata(path).await {
            Ok(metadata) if metadata.is_dir() => Ok(ExistenceCheckResult::FolderExists),
            Ok(_) => Ok(ExistenceCheckResult::FileExists),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(ExistenceCheckResult::NotFound),
            Err(e) => Err(Self::map_io_error(e, path)),
        }
    }

    /// Find the first free `stem (n).ext` variant of `desired_name` in `dir`
    async fn unique_path(dir: &Path, desired_name: &str) -> Result<PathBuf> {
        let candidate = dir.join(desired_name);
        if Self::probe(&candidate).await? == ExistenceCheckResult::NotFound {
            return Ok(candidate);
        }

        let desired = Path::new(desired_name);
        let stem = desired
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| desired_name.to_string());
        let extension = desired
            .extension()
            .map(|e| e.to_string_lossy().into_owned());

        let mut counter = 2u32;
        loop {
            let name = match &extension {
                Some(ext) => format!("{} ({}).{}", stem, counter, ext),
                None => format!("{} ({})", stem, counter),
            };
            let candidate = dir.join(name);
            if Self::probe(&candidate).await? == ExistenceCheckResult::NotFound {
                return Ok(candidate);
            }
            counter += 1;
        }
    }

    async fn relocate(
        source: &Path,
        target: PathBuf,
        option: NativeNameCollisionOption,
    ) -> Result<NativeFile> {
        if target == source {
            return Ok(Self::file_ref(source));
        }

        let target = match option {
            NativeNameCollisionOption::GenerateUniqueName => {
                let dir = target.parent().unwrap_or_else(|| Path::new(""));
                let name = Self::item_name(&target);
                Self::unique_path(dir, &name).await?
            }
            NativeNameCollisionOption::FailIfExists => {
                if Self::probe(&target).await? != ExistenceCheckResult::NotFound {
                    return Err(BridgeError::AlreadyExists(target.display().to_string()));
                }
                target
            }
            NativeNameCollisionOption::ReplaceExisting => target,
        };

        if let Some(parent) = target.parent().filter(|p| !p.as_os_str().is_empty()) {
            if Self::probe(parent).await? != ExistenceCheckResult::FolderExists {
                return Err(BridgeError::NotFound(parent.display().to_string()));
            }
        }

        fs::rename(source, &target)
            .await
            .map_err(|e| Self::map_io_error(e, &target))?;
        debug!(from = ?source, to = ?target, "Moved file");
        Ok(Self::file_ref(&target))
    }

    async fn list_entries(dir: &Path, want_dirs: bool) -> Result<Vec<PathBuf>> {
        let mut entries = Vec::new();
        let mut read_dir = fs::read_dir(dir)
            .await
            .map_err(|e| Self::map_io_error(e, dir))?;

        while let Some(entry) = read_dir
            .next_entry()
            .await
            .map_err(|e| Self::map_io_error(e, dir))?
        {
            let path = entry.path();
            let is_dir = match fs::metadata(&path).await {
                Ok(metadata) => metadata.is_dir(),
                // Dangling symlinks and entries removed mid-listing
                Err(e) if e.kind() == io::ErrorKind::NotFound => continue,
                Err(e) => return Err(Self::map_io_error(e, &path)),
            };
            if is_dir == want_dirs {
                entries.push(path);
            }
        }

        debug!(path = ?dir, count = entries.len(), folders = want_dirs, "Listed directory");
        Ok(entries)
    }
}

#[async_trait]
impl StorageBackend for TokioStorageBackend {
    async fn folder_from_path(&self, path: &str) -> Result<NativeFolder> {
        let path = Path::new(path);
        match Self::probe(path).await? {
            ExistenceCheckResult::FolderExists => Ok(Self::folder_ref(path)),
            _ => Err(BridgeError::NotFound(path.display().to_string())),
        }
    }

    async fn file_from_path(&self, path: &str) -> Result<NativeFile> {
        let path = Path::new(path);
        match Self::probe(path).await? {
            ExistenceCheckResult::FileExists => Ok(Self::file_ref(path)),
            _ => Err(BridgeError::NotFound(path.display().to_string())),
        }
    }

    async fn create_file(
        &self,
        folder: &NativeFolder,
        desired_name: &str,
        option: NativeCollisionOption,
    ) -> Result<NativeFile> {
        let dir = Path::new(&folder.path);
        let target = match option {
            NativeCollisionOption::GenerateUniqueName => {
                Self::unique_path(dir, desired_name).await?
            }
            _ => dir.join(desired_name),
        };

        // A folder under the same name collides unless a fresh name is generated
        if option != NativeCollisionOption::GenerateUniqueName
            && Self::probe(&target).await? == ExistenceCheckResult::FolderExists
        {
            return Err(BridgeError::AlreadyExists(target.display().to_string()));
        }

        let mut open_options = fs::OpenOptions::new();
        open_options.write(true);
        match option {
            NativeCollisionOption::GenerateUniqueName | NativeCollisionOption::FailIfExists => {
                open_options.create_new(true);
            }
            NativeCollisionOption::ReplaceExisting => {
                open_options.create(true).truncate(true);
            }
            NativeCollisionOption::OpenIfExists => {
                open_options.create(true);
            }
        }

        open_options
            .open(&target)
            .await
            .map_err(|e| Self::map_io_error(e, &target))?;
        debug!(path = ?target, option = ?option, "Created file");
        Ok(Self::file_ref(&target))
    }

    async fn get_file(&self, folder: &NativeFolder, name: &str) -> Result<NativeFile> {
        let target = Path::new(&folder.path).join(name);
        match Self::probe(&target).await? {
            ExistenceCheckResult::FileExists => Ok(Self::file_ref(&target)),
            _ => Err(BridgeError::NotFound(target.display().to_string())),
        }
    }

    async fn list_files(&self, folder: &NativeFolder) -> Result<Vec<NativeFile>> {
        let entries = Self::list_entries(Path::new(&folder.path), false).await?;
        Ok(entries.iter().map(|path| Self::file_ref(path)).collect())
    }

    async fn create_folder(
        &self,
        folder: &NativeFolder,
        desired_name: &str,
        option: NativeCollisionOption,
    ) -> Result<NativeFolder> {
        let dir = Path::new(&folder.path);
        let target = match option {
            NativeCollisionOption::GenerateUniqueName => {
                Self::unique_path(dir, desired_name).await?
            }
            _ => dir.join(desired_name),
        };

        match option {
            NativeCollisionOption::OpenIfExists => {
                if Self::probe(&target).await? == ExistenceCheckResult::FolderExists {
                    return Ok(Self::folder_ref(&target));
                }
            }
            NativeCollisionOption::ReplaceExisting => {
                if Self::probe(&target).await? == ExistenceCheckResult::FolderExists {
                    fs::remove_dir_all(&target)
                        .await
                        .map_err(|e| Self::map_io_error(e, &target))?;
                    debug!(path = ?target, "Removed folder being replaced");
                }
            }
            NativeCollisionOption::GenerateUniqueName | NativeCollisionOption::FailIfExists => {}
        }

        fs::create_dir(&target)
            .await
            .map_err(|e| Self::map_io_error(e, &target))?;
        debug!(path = ?target, option = ?option, "Created folder");
        Ok(Self::folder_ref(&target))
    }

    async fn get_folder(&self, folder: &NativeFolder, name: &str) -> Result<NativeFolder> {
        let target = Path::new(&folder.path).join(name);
        match Self::probe(&target).await? {
            ExistenceCheckResult::FolderExists => Ok(Self::folder_ref(&target)),
            _ => Err(BridgeError::NotFound(target.display().to_string())),
        }
    }

    async fn list_folders(&self, folder: &NativeFolder) -> Result<Vec<NativeFolder>> {
        let entries = Self::list_entries(Path::new(&folder.path), true).await?;
        Ok(entries.iter().map(|path| Self::folder_ref(path)).collect())
    }

    async fn check_exists(
        &self,
        folder: &NativeFolder,
        name: &str,
    ) -> Result<ExistenceCheckResult> {
        Self::probe(&Path::new(&folder.path).join(name)).await
    }

    async fn delete_folder(&self, folder: &NativeFolder) -> Result<()> {
        let path = Path::new(&folder.path);
        fs::remove_dir_all(path)
            .await
            .map_err(|e| Self::map_io_error(e, path))?;
        debug!(path = ?path, "Deleted folder");
        Ok(())
    }

    async fn delete_file(&self, file: &NativeFile) -> Result<()> {
        let path = Path::new(&file.path);
        fs::remove_file(path)
            .await
            .map_err(|e| Self::map_io_error(e, path))?;
        debug!(path = ?path, "Deleted file");
        Ok(())
    }

    async fn read_file(&self, file: &NativeFile) -> Result<Bytes> {
        let path = Path::new(&file.path);
        let data = fs::read(path)
            .await
            .map_err(|e| Self::map_io_error(e, path))?;
        debug!(path = ?path, size = data.len(), "Read file");
        Ok(Bytes::from(data))
    }

    async fn write_file(&self, file: &NativeFile, data: Bytes) -> Result<()> {
        let path = Path::new(&file.path);
        fs::write(path, data.as_ref())
            .await
            .map_err(|e| Self::map_io_error(e, path))?;
        debug!(path = ?path, size = data.len(), "Wrote file");
        Ok(())
    }

    async fn rename_file(
        &self,
        file: &NativeFile,
        new_name: &str,
        option: NativeNameCollisionOption,
    ) -> Result<NativeFile> {
        let source = Path::new(&file.path);
        let target = source
            .parent()
            .map(|parent| parent.join(new_name))
            .unwrap_or_else(|| PathBuf::from(new_name));
        Self::relocate(source, target, option).await
    }

    async fn move_file(
        &self,
        file: &NativeFile,
        new_path: &str,
        option: NativeNameCollisionOption,
    ) -> Result<NativeFile> {
        Self::relocate(Path::new(&file.path), PathBuf::from(new_path), option).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use uuid::Uuid;

    fn scratch_folder() -> NativeFolder {
        let path = env::temp_dir().join(format!("bridge-desktop-test-{}", Uuid::new_v4()));
        std::fs::create_dir_all(&path).unwrap();
        TokioStorageBackend::folder_ref(&path)
    }

    fn cleanup(folder: &NativeFolder) {
        let _ = std::fs::remove_dir_all(&folder.path);
    }

    #[tokio::test]
    async fn test_folder_from_path_missing() {
        let backend = TokioStorageBackend::new();
        let root = scratch_folder();
        let missing = Path::new(&root.path).join("nope");

        let err = backend
            .folder_from_path(&missing.to_string_lossy())
            .await
            .unwrap_err();
        assert!(err.is_not_found());

        cleanup(&root);
    }

    #[tokio::test]
    async fn test_file_from_path_rejects_folder() {
        let backend = TokioStorageBackend::new();
        let root = scratch_folder();

        let err = backend.file_from_path(&root.path).await.unwrap_err();
        assert!(err.is_not_found());

        cleanup(&root);
    }

    #[tokio::test]
    async fn test_create_file_fail_if_exists() {
        let backend = TokioStorageBackend::new();
        let root = scratch_folder();

        let file = backend
            .create_file(&root, "a.txt", NativeCollisionOption::FailIfExists)
            .await
            .unwrap();
        assert_eq!(file.name, "a.txt");

        let err = backend
            .create_file(&root, "a.txt", NativeCollisionOption::FailIfExists)
            .await
            .unwrap_err();
        assert!(err.is_already_exists());

        cleanup(&root);
    }

    #[tokio::test]
    async fn test_create_file_generate_unique_name() {
        let backend = TokioStorageBackend::new();
        let root = scratch_folder();

        let first = backend
            .create_file(&root, "report.txt", NativeCollisionOption::GenerateUniqueName)
            .await
            .unwrap();
        let second = backend
            .create_file(&root, "report.txt", NativeCollisionOption::GenerateUniqueName)
            .await
            .unwrap();
        let third = backend
            .create_file(&root, "report.txt", NativeCollisionOption::GenerateUniqueName)
            .await
            .unwrap();

        assert_eq!(first.name, "report.txt");
        assert_eq!(second.name, "report (2).txt");
        assert_eq!(third.name, "report (3).txt");

        cleanup(&root);
    }

    #[tokio::test]
    async fn test_create_file_replace_and_open() {
        let backend = TokioStorageBackend::new();
        let root = scratch_folder();

        let file = backend
            .create_file(&root, "data.bin", NativeCollisionOption::FailIfExists)
            .await
            .unwrap();
        backend
            .write_file(&file, Bytes::from_static(b"payload"))
            .await
            .unwrap();

        let opened = backend
            .create_file(&root, "data.bin", NativeCollisionOption::OpenIfExists)
            .await
            .unwrap();
        assert_eq!(backend.read_file(&opened).await.unwrap(), Bytes::from_static(b"payload"));

        let replaced = backend
            .create_file(&root, "data.bin", NativeCollisionOption::ReplaceExisting)
            .await
            .unwrap();
        assert!(backend.read_file(&replaced).await.unwrap().is_empty());

        cleanup(&root);
    }

    #[tokio::test]
    async fn test_create_folder_options() {
        let backend = TokioStorageBackend::new();
        let root = scratch_folder();

        let docs = backend
            .create_folder(&root, "Docs", NativeCollisionOption::FailIfExists)
            .await
            .unwrap();
        backend
            .create_file(&docs, "keep.txt", NativeCollisionOption::FailIfExists)
            .await
            .unwrap();

        let err = backend
            .create_folder(&root, "Docs", NativeCollisionOption::FailIfExists)
            .await
            .unwrap_err();
        assert!(err.is_already_exists());

        let opened = backend
            .create_folder(&root, "Docs", NativeCollisionOption::OpenIfExists)
            .await
            .unwrap();
        assert_eq!(backend.list_files(&opened).await.unwrap().len(), 1);

        let unique = backend
            .create_folder(&root, "Docs", NativeCollisionOption::GenerateUniqueName)
            .await
            .unwrap();
        assert_eq!(unique.name, "Docs (2)");

        let replaced = backend
            .create_folder(&root, "Docs", NativeCollisionOption::ReplaceExisting)
            .await
            .unwrap();
        assert!(backend.list_files(&replaced).await.unwrap().is_empty());

        cleanup(&root);
    }

    #[tokio::test]
    async fn test_list_separates_files_and_folders() {
        let backend = TokioStorageBackend::new();
        let root = scratch_folder();

        backend
            .create_file(&root, "a", NativeCollisionOption::FailIfExists)
            .await
            .unwrap();
        backend
            .create_folder(&root, "b", NativeCollisionOption::FailIfExists)
            .await
            .unwrap();

        let files = backend.list_files(&root).await.unwrap();
        let folders = backend.list_folders(&root).await.unwrap();

        assert_eq!(files.len(), 1);
        assert_eq!(files[0].name, "a");
        assert_eq!(folders.len(), 1);
        assert_eq!(folders[0].name, "b");

        assert_eq!(
            backend.check_exists(&root, "a").await.unwrap(),
            ExistenceCheckResult::FileExists
        );
        assert_eq!(
            backend.check_exists(&root, "b").await.unwrap(),
            ExistenceCheckResult::FolderExists
        );
        assert_eq!(
            backend.check_exists(&root, "c").await.unwrap(),
            ExistenceCheckResult::NotFound
        );

        cleanup(&root);
    }

    #[tokio::test]
    async fn test_rename_file_collisions() {
        let backend = TokioStorageBackend::new();
        let root = scratch_folder();

        let a = backend
            .create_file(&root, "a.txt", NativeCollisionOption::FailIfExists)
            .await
            .unwrap();
        backend
            .create_file(&root, "b.txt", NativeCollisionOption::FailIfExists)
            .await
            .unwrap();

        let err = backend
            .rename_file(&a, "b.txt", NativeNameCollisionOption::FailIfExists)
            .await
            .unwrap_err();
        assert!(err.is_already_exists());

        let renamed = backend
            .rename_file(&a, "b.txt", NativeNameCollisionOption::GenerateUniqueName)
            .await
            .unwrap();
        assert_eq!(renamed.name, "b (2).txt");

        let replaced = backend
            .rename_file(&renamed, "b.txt", NativeNameCollisionOption::ReplaceExisting)
            .await
            .unwrap();
        assert_eq!(replaced.name, "b.txt");
        assert_eq!(backend.list_files(&root).await.unwrap().len(), 1);

        cleanup(&root);
    }

    #[tokio::test]
    async fn test_delete_missing_file_is_not_found() {
        let backend = TokioStorageBackend::new();
        let root = scratch_folder();
        let ghost = NativeFile::new(
            "ghost.txt",
            Path::new(&root.path).join("ghost.txt").to_string_lossy(),
        );

        let err = backend.delete_file(&ghost).await.unwrap_err();
        assert!(err.is_not_found());

        cleanup(&root);
    }

    #[tokio::test]
    async fn test_create_file_over_folder_is_already_exists() {
        let backend = TokioStorageBackend::new();
        let root = scratch_folder();
        backend
            .create_folder(&root, "D", NativeCollisionOption::FailIfExists)
            .await
            .unwrap();

        for option in [
            NativeCollisionOption::OpenIfExists,
            NativeCollisionOption::ReplaceExisting,
            NativeCollisionOption::FailIfExists,
        ] {
            let err = backend.create_file(&root, "D", option).await.unwrap_err();
            assert!(err.is_already_exists(), "{:?} gave {:?}", option, err);
        }

        let unique = backend
            .create_file(&root, "D", NativeCollisionOption::GenerateUniqueName)
            .await
            .unwrap();
        assert_eq!(unique.name, "D (2)");

        cleanup(&root);
    }

    #[tokio::test]
    async fn test_move_into_missing_folder_names_destination() {
        let backend = TokioStorageBackend::new();
        let root = scratch_folder();
        let file = backend
            .create_file(&root, "a.txt", NativeCollisionOption::FailIfExists)
            .await
            .unwrap();
        let missing_dir = Path::new(&root.path).join("nodir");
        let target = missing_dir.join("a.txt");

        let err = backend
            .move_file(
                &file,
                &target.to_string_lossy(),
                NativeNameCollisionOption::FailIfExists,
            )
            .await
            .unwrap_err();
        match err {
            BridgeError::NotFound(path) => assert_eq!(path, missing_dir.display().to_string()),
            other => panic!("unexpected error: {:?}", other),
        }
        assert_eq!(
            backend.file_from_path(&file.path).await.unwrap(),
            file
        );

        cleanup(&root);
    }
}
