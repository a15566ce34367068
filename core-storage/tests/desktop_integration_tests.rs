//! End-to-end tests of the storage facade over the tokio filesystem backend

use bridge_desktop::{DesktopRootProvider, TokioStorageBackend};
use core_runtime::config::StorageConfig;
use core_storage::{
    CreationCollisionOption, ExistenceCheckResult, FileSystem, NameCollisionOption,
    PortablePath, StorageError,
};
use std::env;
use std::error::Error as _;
use std::path::PathBuf;
use std::sync::Arc;
use uuid::Uuid;

struct Sandbox {
    base: PathBuf,
    fs: FileSystem,
}

impl Sandbox {
    fn new() -> Self {
        let base = env::temp_dir().join(format!("core-storage-test-{}", Uuid::new_v4()));
        let roots =
            DesktopRootProvider::with_directories(base.join("LocalState"), base.join("RoamingState"))
                .unwrap();

        let config = StorageConfig::builder()
            .app_name("core-storage-test")
            .backend(Arc::new(TokioStorageBackend::new()))
            .root_provider(Arc::new(roots))
            .build()
            .unwrap();

        Self {
            fs: FileSystem::from_config(&config),
            base,
        }
    }
}

impl Drop for Sandbox {
    fn drop(&mut self) {
        let _ = std::fs::remove_dir_all(&self.base);
    }
}

#[tokio::test]
async fn test_create_then_get_folder() {
    let sandbox = Sandbox::new();
    let local = sandbox.fs.local_storage();

    let created = local
        .create_folder("X", CreationCollisionOption::FailIfExists)
        .await
        .unwrap();
    let fetched = local.get_folder("X").await.unwrap();

    assert_eq!(created.name(), "X");
    assert_eq!(fetched.name(), "X");
    assert_eq!(fetched.path(), created.path());
    assert!(!fetched.is_root());
    assert_eq!(
        fetched.path(),
        PortablePath::combine(&[local.path(), "X"])
    );
}

#[tokio::test]
async fn test_list_files() {
    let sandbox = Sandbox::new();
    let local = sandbox.fs.local_storage();

    for name in ["a", "b", "c"] {
        local
            .create_file(name, CreationCollisionOption::FailIfExists)
            .await
            .unwrap();
    }
    local
        .create_folder("sub", CreationCollisionOption::FailIfExists)
        .await
        .unwrap();

    let mut names: Vec<String> = local
        .list_files()
        .await
        .unwrap()
        .iter()
        .map(|f| f.name().to_string())
        .collect();
    names.sort();
    assert_eq!(names, vec!["a", "b", "c"]);

    let folders = local.list_folders().await.unwrap();
    assert_eq!(folders.len(), 1);
    assert_eq!(folders[0].name(), "sub");
}

#[tokio::test]
async fn test_fail_if_exists_is_conflict() {
    let sandbox = Sandbox::new();
    let roaming = sandbox.fs.roaming_storage();

    roaming
        .create_folder("Docs", CreationCollisionOption::FailIfExists)
        .await
        .unwrap();
    let err = roaming
        .create_folder("Docs", CreationCollisionOption::FailIfExists)
        .await
        .unwrap_err();

    assert!(err.is_conflict());
    assert!(err.source().is_some(), "backend cause must be chained");

    // Unique naming sidesteps the collision
    let unique = roaming
        .create_folder("Docs", CreationCollisionOption::GenerateUniqueName)
        .await
        .unwrap();
    assert_eq!(unique.name(), "Docs (2)");

    // Opening returns the existing folder
    let opened = roaming
        .create_folder("Docs", CreationCollisionOption::OpenIfExists)
        .await
        .unwrap();
    assert_eq!(opened.name(), "Docs");
}

#[tokio::test]
async fn test_path_lookup() {
    let sandbox = Sandbox::new();
    let local = sandbox.fs.local_storage();

    let missing = PortablePath::combine(&[local.path(), "nope.txt"]);
    assert!(sandbox.fs.file_from_path(&missing).await.unwrap().is_none());
    assert!(sandbox.fs.folder_from_path(&missing).await.unwrap().is_none());

    let file = local
        .create_file("notes.txt", CreationCollisionOption::FailIfExists)
        .await
        .unwrap();
    let found = sandbox
        .fs
        .file_from_path(file.path())
        .await
        .unwrap()
        .unwrap();
    assert_eq!(found.name(), "notes.txt");

    // Folders looked up by path are never root-flagged
    let nested = local
        .create_folder("Nested", CreationCollisionOption::FailIfExists)
        .await
        .unwrap();
    let by_path = sandbox
        .fs
        .folder_from_path(nested.path())
        .await
        .unwrap()
        .unwrap();
    by_path.delete().await.unwrap();
    assert_eq!(
        local.check_exists("Nested").await.unwrap(),
        ExistenceCheckResult::NotFound
    );
}

#[tokio::test]
async fn test_file_contents_and_relocation() {
    let sandbox = Sandbox::new();
    let local = sandbox.fs.local_storage();

    let mut file = local
        .create_file("draft.txt", CreationCollisionOption::ReplaceExisting)
        .await
        .unwrap();
    file.write_all_text("hello").await.unwrap();
    assert_eq!(file.read_all_text().await.unwrap(), "hello");

    file.rename("final.txt", NameCollisionOption::FailIfExists)
        .await
        .unwrap();
    assert_eq!(file.name(), "final.txt");
    assert_eq!(
        local.check_exists("draft.txt").await.unwrap(),
        ExistenceCheckResult::NotFound
    );
    assert_eq!(
        local.check_exists("final.txt").await.unwrap(),
        ExistenceCheckResult::FileExists
    );

    let archive = local
        .create_folder("archive", CreationCollisionOption::FailIfExists)
        .await
        .unwrap();
    let target = PortablePath::combine(&[archive.path(), "final.txt"]);
    file.move_to(&target, NameCollisionOption::FailIfExists)
        .await
        .unwrap();
    assert_eq!(file.path(), target);
    assert_eq!(file.read_all_text().await.unwrap(), "hello");

    // Replacing an existing file truncates it
    let replaced = archive
        .create_file("final.txt", CreationCollisionOption::ReplaceExisting)
        .await
        .unwrap();
    assert!(replaced.read_all().await.unwrap().is_empty());

    file.delete().await.unwrap();
    assert!(matches!(
        archive.get_file("final.txt").await,
        Err(StorageError::FileNotFound { .. })
    ));
}

#[tokio::test]
async fn test_out_of_band_removal() {
    let sandbox = Sandbox::new();
    let local = sandbox.fs.local_storage();

    let doomed = local
        .create_folder("Doomed", CreationCollisionOption::FailIfExists)
        .await
        .unwrap();
    let file = doomed
        .create_file("inside.txt", CreationCollisionOption::FailIfExists)
        .await
        .unwrap();

    std::fs::remove_dir_all(doomed.path()).unwrap();

    assert!(matches!(
        doomed.list_files().await,
        Err(StorageError::DirectoryNotFound { .. })
    ));
    assert!(matches!(
        doomed
            .create_file("again.txt", CreationCollisionOption::OpenIfExists)
            .await,
        Err(StorageError::DirectoryNotFound { .. })
    ));
    assert!(matches!(
        doomed.delete().await,
        Err(StorageError::DirectoryNotFound { .. })
    ));
    assert!(matches!(
        file.read_all().await,
        Err(StorageError::FileNotFound { .. })
    ));
    assert!(matches!(
        local.get_folder("Doomed").await,
        Err(StorageError::DirectoryNotFound { .. })
    ));
}

#[tokio::test]
async fn test_root_delete_is_refused() {
    let sandbox = Sandbox::new();
    let local = sandbox.fs.local_storage();

    let err = local.delete().await.unwrap_err();
    assert_eq!(err.to_string(), "IO conflict: Cannot delete root storage folder.");
    assert_eq!(
        sandbox.fs.folder_from_path(local.path()).await.unwrap().map(|f| f.name().to_string()),
        Some("LocalState".to_string())
    );
}

#[tokio::test]
async fn test_create_file_over_folder_is_conflict() {
    let sandbox = Sandbox::new();
    let local = sandbox.fs.local_storage();

    local
        .create_folder("D", CreationCollisionOption::FailIfExists)
        .await
        .unwrap();

    for option in [
        CreationCollisionOption::OpenIfExists,
        CreationCollisionOption::ReplaceExisting,
    ] {
        let err = local.create_file("D", option).await.unwrap_err();
        assert!(err.is_conflict(), "{:?} gave {:?}", option, err);
        assert!(err.source().is_some());
    }
    assert_eq!(
        local.check_exists("D").await.unwrap(),
        ExistenceCheckResult::FolderExists
    );
}

#[tokio::test]
async fn test_move_into_missing_folder_keeps_file() {
    let sandbox = Sandbox::new();
    let local = sandbox.fs.local_storage();

    let mut file = local
        .create_file("a.txt", CreationCollisionOption::FailIfExists)
        .await
        .unwrap();
    let original = file.path().to_string();
    let target = PortablePath::combine(&[local.path(), "nodir", "a.txt"]);

    let err = file
        .move_to(&target, NameCollisionOption::FailIfExists)
        .await
        .unwrap_err();
    match &err {
        StorageError::DirectoryNotFound { message, .. } => {
            assert!(message.contains("nodir"));
            assert!(!message.contains("a.txt"));
        }
        other => panic!("unexpected error: {:?}", other),
    }

    // The source is untouched and the handle still points at it
    assert_eq!(file.path(), original);
    assert!(sandbox.fs.file_from_path(&original).await.unwrap().is_some());
}

