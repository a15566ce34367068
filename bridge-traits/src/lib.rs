//! # Storage Bridge Traits
//!
//! Platform abstraction traits that must be implemented by each storage backend.
//!
//! ## Overview
//!
//! This crate defines the contract between the portable storage facade
//! (`core-storage`) and platform-specific storage implementations. The facade
//! never talks to a platform SDK directly: it holds an
//! [`StorageBackend`](storage::StorageBackend) and a
//! [`RootProvider`](storage::RootProvider) injected at startup.
//!
//! ## Traits
//!
//! ### Storage
//! - [`StorageBackend`](storage::StorageBackend) - Create, look up, enumerate and delete files and folders
//! - [`RootProvider`](storage::RootProvider) - Well-known local and roaming storage roots
//!
//! ### Utilities
//! - [`LoggerSink`](logging::LoggerSink) - Forward structured logs to host logging
//!
//! ## Platform Requirements
//!
//! | Platform | Implementation Crate | Status |
//! |----------|---------------------|--------|
//! | Desktop  | `bridge-desktop`    | ✅ Available |
//! | iOS      | TBD                 | 📋 Planned |
//! | Android  | TBD                 | 📋 Planned |
//!
//! ## Error Handling
//!
//! All bridge traits use the [`BridgeError`](error::BridgeError) type. Backends
//! must report a missing target as [`BridgeError::NotFound`] and a create-time
//! collision as [`BridgeError::AlreadyExists`] (or an `Io` error of the matching
//! [`std::io::ErrorKind`]). The facade classifies failures through
//! [`BridgeError::kind`] and never inspects concrete error types.
//!
//! ## Thread Safety
//!
//! All bridge traits require `Send + Sync` bounds so a single backend can be
//! shared across async tasks behind an `Arc`.
//!
//! ## Examples
//!
//! ### Implementing RootProvider
//!
//! ```ignore
//! use bridge_traits::storage::{NativeFolder, RootProvider};
//!
//! pub struct FixedRoots {
//!     local: NativeFolder,
//!     roaming: NativeFolder,
//! }
//!
//! impl RootProvider for FixedRoots {
//!     fn local_folder(&self) -> NativeFolder {
//!         self.local.clone()
//!     }
//!
//!     fn roaming_folder(&self) -> NativeFolder {
//!         self.roaming.clone()
//!     }
//! }
//! ```

pub mod error;
pub mod storage;
pub mod logging;

pub use error::{BridgeError, BridgeErrorKind};

// Re-export commonly used types
pub use storage::{
    ExistenceCheckResult, NativeCollisionOption, NativeFile, NativeFolder,
    NativeNameCollisionOption, RootProvider, StorageBackend,
};
pub use logging::{ConsoleLogger, LogEntry, LogLevel, LoggerSink};
