//! # Portable Storage
//!
//! A uniform file/folder API over whichever native storage backend the host
//! injects.
//!
//! ## Overview
//!
//! - [`FileSystem`] - entry point: well-known roots and path lookup
//! - [`Folder`] - create, look up, enumerate and delete children
//! - [`File`] - read, write, rename, move and delete
//! - [`CreationCollisionOption`] / [`NameCollisionOption`] - collision policies,
//!   mapped onto the backend's own enums
//! - [`StorageError`] - backend signals translated into portable errors
//!
//! ## Error Translation
//!
//! | Backend signal | Where | Portable error |
//! |----------------|-------|----------------|
//! | not found | existence check, `get_folder`, listing, `move_to` destination | [`StorageError::DirectoryNotFound`] |
//! | not found | file operations, `get_file` | [`StorageError::FileNotFound`] |
//! | already exists | create, rename, move | [`StorageError::Conflict`] |
//! | anything else | everywhere | [`StorageError::Backend`], unchanged |
//!
//! Path lookups on [`FileSystem`] are the only operations that report a
//! missing target as `Ok(None)` instead of an error.
//!
//! ## Concurrency
//!
//! Handles own only a backend reference and immutable name/path strings.
//! Concurrent calls on distinct handles need no coordination; concurrent
//! calls on the same underlying object are as safe as the backend makes them.

pub mod collision;
pub mod error;
pub mod file;
pub mod file_system;
pub mod folder;
pub mod path;

pub use bridge_traits::ExistenceCheckResult;
pub use collision::{CreationCollisionOption, NameCollisionOption};
pub use error::{Result, StorageError};
pub use file::File;
pub use file_system::{FileSystem, RootCategory};
pub use folder::Folder;
pub use path::PortablePath;
