//! Workspace placeholder crate.
//!
//! This crate exposes feature flags that map to the individual workspace
//! crates (`core-storage`, `core-runtime`). Host applications can depend on
//! `portable-storage` and enable `desktop-shims` to get the Tokio-backed
//! desktop backend wired in, or `portable` to inject their own backend.

#[cfg(any(feature = "desktop-shims", feature = "portable"))]
pub use core_runtime::{config::StorageConfig, logging};

#[cfg(any(feature = "desktop-shims", feature = "portable"))]
pub use core_storage::{
    CreationCollisionOption, ExistenceCheckResult, File, FileSystem, Folder,
    NameCollisionOption, PortablePath, RootCategory, StorageError,
};
