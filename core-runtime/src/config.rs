//! # Storage Configuration Module
//!
//! Provides configuration management for the portable storage layer.
//!
//! ## Overview
//!
//! The configuration system uses a builder pattern to construct a
//! `StorageConfig` holding the storage backend and the root provider the
//! facade is wired to. Backend selection happens here, once, by explicit
//! injection; nothing downstream inspects types at runtime.
//!
//! ## Required Dependencies
//!
//! - `StorageBackend` - the native storage API
//! - `RootProvider` - the well-known local and roaming roots
//!
//! When the `desktop-shims` feature is enabled, the Tokio backend and the
//! `dirs`-based root provider from `bridge-desktop` are injected
//! automatically if not provided.
//!
//! ## Usage
//!
//! ### Desktop Defaults
//!
//! ```ignore
//! use core_runtime::config::StorageConfig;
//!
//! let config = StorageConfig::builder()
//!     .app_name("my-app")
//!     .build()
//!     .expect("Failed to build config");
//! ```
//!
//! ### Custom Bridges
//!
//! ```ignore
//! use core_runtime::config::StorageConfig;
//! use std::sync::Arc;
//!
//! let config = StorageConfig::builder()
//!     .app_name("my-app")
//!     .backend(Arc::new(MyBackend))
//!     .root_provider(Arc::new(MyRoots))
//!     .build()?;
//! ```

use crate::error::{Error, Result};
use bridge_traits::{RootProvider, StorageBackend};
use std::path::PathBuf;
use std::sync::Arc;

/// Storage configuration.
///
/// Holds the bridges the storage facade delegates to. Use
/// [`StorageConfigBuilder`] to construct instances.
#[derive(Clone)]
pub struct StorageConfig {
    /// Application name, used to derive default root directories
    pub app_name: String,

    /// Native storage backend
    pub backend: Arc<dyn StorageBackend>,

    /// Provider of the local and roaming roots
    pub root_provider: Arc<dyn RootProvider>,
}

impl std::fmt::Debug for StorageConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StorageConfig")
            .field("app_name", &self.app_name)
            .field("backend", &"StorageBackend { ... }")
            .field("root_provider", &"RootProvider { ... }")
            .finish()
    }
}

impl StorageConfig {
    /// Creates a new builder for constructing a `StorageConfig`.
    pub fn builder() -> StorageConfigBuilder {
        StorageConfigBuilder::default()
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
        validate_app_name(&self.app_name)
    }
}

fn validate_app_name(app_name: &str) -> Result<()> {
    if app_name.trim().is_empty() {
        return Err(Error::Config("Application name cannot be empty".to_string()));
    }

    if app_name.contains('/') || app_name.contains('\\') {
        return Err(Error::Config(format!(
            "Application name must not contain path separators: '{}'",
            app_name
        )));
    }

    if app_name == "." || app_name == ".." {
        return Err(Error::Config(format!(
            "Application name must not be a relative path component: '{}'",
            app_name
        )));
    }

    Ok(())
}

#[cfg_attr(feature = "desktop-shims", allow(dead_code))]
fn backend_missing_error() -> Error {
    Error::CapabilityMissing {
        capability: "StorageBackend".to_string(),
        message: "No storage backend implementation provided. \
                 Desktop: ensure the 'desktop-shims' feature is enabled to use TokioStorageBackend. \
                 Mobile: inject the platform-native storage adapter."
            .to_string(),
    }
}

#[cfg_attr(feature = "desktop-shims", allow(dead_code))]
fn root_provider_missing_error() -> Error {
    Error::CapabilityMissing {
        capability: "RootProvider".to_string(),
        message: "No root provider implementation provided. \
                 Desktop: ensure the 'desktop-shims' feature is enabled to use DesktopRootProvider. \
                 Mobile: inject the application container roots."
            .to_string(),
    }
}

#[cfg(feature = "desktop-shims")]
fn provide_default_backend() -> Result<Arc<dyn StorageBackend>> {
    use bridge_desktop::TokioStorageBackend;

    let backend: Arc<dyn StorageBackend> = Arc::new(TokioStorageBackend::new());
    Ok(backend)
}

#[cfg(not(feature = "desktop-shims"))]
fn provide_default_backend() -> Result<Arc<dyn StorageBackend>> {
    Err(backend_missing_error())
}

#[cfg(feature = "desktop-shims")]
fn provide_default_root_provider(
    app_name: &str,
    directories: Option<(PathBuf, PathBuf)>,
) -> Result<Arc<dyn RootProvider>> {
    use bridge_desktop::DesktopRootProvider;

    let provider = match directories {
        Some((local, roaming)) => DesktopRootProvider::with_directories(local, roaming),
        None => DesktopRootProvider::new(app_name),
    }
    .map_err(|e| Error::Internal(format!("Failed to initialize default RootProvider: {}", e)))?;

    let provider: Arc<dyn RootProvider> = Arc::new(provider);
    Ok(provider)
}

#[cfg(not(feature = "desktop-shims"))]
fn provide_default_root_provider(
    _app_name: &str,
    _directories: Option<(PathBuf, PathBuf)>,
) -> Result<Arc<dyn RootProvider>> {
    Err(root_provider_missing_error())
}

/// Builder for constructing [`StorageConfig`] instances.
///
/// The builder validates required dependencies and provides helpful error
/// messages.
#[derive(Default)]
pub struct StorageConfigBuilder {
    app_name: Option<String>,
    backend: Option<Arc<dyn StorageBackend>>,
    root_provider: Option<Arc<dyn RootProvider>>,
    local_dir: Option<PathBuf>,
    roaming_dir: Option<PathBuf>,
}

impl StorageConfigBuilder {
    /// Sets the application name.
    ///
    /// # Examples
    ///
    /// ```
    /// use core_runtime::config::StorageConfig;
    ///
    /// let builder = StorageConfig::builder().app_name("my-app");
    /// ```
    pub fn app_name(mut self, name: impl Into<String>) -> Self {
        self.app_name = Some(name.into());
        self
    }

    /// Sets the storage backend implementation.
    ///
    /// If not provided, the desktop default (tokio fs-based) will be used when
    /// the `desktop-shims` feature is enabled.
    pub fn backend(mut self, backend: Arc<dyn StorageBackend>) -> Self {
        self.backend = Some(backend);
        self
    }

    /// Sets the root provider implementation.
    ///
    /// If not provided, the desktop default (`dirs`-based) will be used when
    /// the `desktop-shims` feature is enabled.
    pub fn root_provider(mut self, provider: Arc<dyn RootProvider>) -> Self {
        self.root_provider = Some(provider);
        self
    }

    /// Overrides the local root directory used by the desktop default.
    ///
    /// Must be combined with [`roaming_dir`](Self::roaming_dir) and cannot
    /// be combined with a custom root provider.
    pub fn local_dir<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.local_dir = Some(path.into());
        self
    }

    /// Overrides the roaming root directory used by the desktop default.
    pub fn roaming_dir<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.roaming_dir = Some(path.into());
        self
    }

    /// Builds the final `StorageConfig` instance.
    ///
    /// Returns an error if:
    /// - the application name is missing or invalid
    /// - directory overrides are incomplete or conflict with a custom root provider
    /// - a required bridge is missing and no desktop default is available
    pub fn build(self) -> Result<StorageConfig> {
        let app_name = self.app_name.ok_or_else(|| {
            Error::Config("Application name is required. Use .app_name() to set it.".to_string())
        })?;
        validate_app_name(&app_name)?;

        let directories = match (self.local_dir, self.roaming_dir) {
            (Some(local), Some(roaming)) => Some((local, roaming)),
            (None, None) => None,
            _ => {
                return Err(Error::Config(
                    "Both .local_dir() and .roaming_dir() must be set to override root directories"
                        .to_string(),
                ))
            }
        };

        if directories.is_some() && self.root_provider.is_some() {
            return Err(Error::Config(
                "Root directory overrides cannot be combined with a custom root provider"
                    .to_string(),
            ));
        }

        let backend = match self.backend {
            Some(backend) => backend,
            None => provide_default_backend()?,
        };

        let root_provider = match self.root_provider {
            Some(provider) => provider,
            None => provide_default_root_provider(&app_name, directories)?,
        };

        let config = StorageConfig {
            app_name,
            backend,
            root_provider,
        };

        config.validate()?;

        Ok(config)
    }
}
