//! # Desktop Bridge Implementations
//!
//! Default implementations of the storage bridge traits for desktop platforms
//! (macOS, Windows, Linux).
//!
//! ## Overview
//!
//! - `StorageBackend` using `tokio::fs`
//! - `RootProvider` using the `dirs` crate to locate per-user application
//!   data directories
//!
//! ## Usage
//!
//! ```ignore
//! use bridge_desktop::{DesktopRootProvider, TokioStorageBackend};
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() {
//!     let backend = Arc::new(TokioStorageBackend::new());
//!     let roots = Arc::new(DesktopRootProvider::new("my-app").unwrap());
//!
//!     // Hand both to core_storage::FileSystem::new
//! }
//! ```

mod filesystem;
mod roots;

pub use filesystem::TokioStorageBackend;
pub use roots::DesktopRootProvider;
