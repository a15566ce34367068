//! Well-known storage roots for desktop hosts

use bridge_traits::{
    error::{BridgeError, Result},
    storage::{NativeFolder, RootProvider},
};
use std::path::{Path, PathBuf};
use tracing::debug;

const LOCAL_STATE: &str = "LocalState";
const ROAMING_STATE: &str = "RoamingState";

/// Desktop root provider
///
/// Resolves the local and roaming roots once, at construction:
/// - local: `<data_local_dir>/<app>/LocalState`
/// - roaming: `<data_dir>/<app>/RoamingState`
///
/// On Windows these land in `%LOCALAPPDATA%` and `%APPDATA%` respectively;
/// on other platforms both parents usually coincide and only the leaf
/// directories keep the two roots apart.
#[derive(Debug, Clone)]
pub struct DesktopRootProvider {
    local_dir: PathBuf,
    roaming_dir: PathBuf,
}

impl DesktopRootProvider {
    /// Create a root provider under the per-user application data directories
    pub fn new(app_name: &str) -> Result<Self> {
        let local_base = dirs::data_local_dir().unwrap_or_else(std::env::temp_dir);

        let roaming_base = dirs::data_dir().unwrap_or_else(|| {
            dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".local")
                .join("share")
        });

        Self::with_directories(
            local_base.join(app_name).join(LOCAL_STATE),
            roaming_base.join(app_name).join(ROAMING_STATE),
        )
    }

    /// Create a root provider with custom directories
    ///
    /// Both directories are created if they don't exist yet.
    pub fn with_directories(local_dir: PathBuf, roaming_dir: PathBuf) -> Result<Self> {
        for dir in [&local_dir, &roaming_dir] {
            if !dir.exists() {
                std::fs::create_dir_all(dir).map_err(|e| {
                    BridgeError::OperationFailed(format!(
                        "Failed to create storage root {}: {}",
                        dir.display(),
                        e
                    ))
                })?;
                debug!(path = ?dir, "Created storage root");
            }
        }

        Ok(Self {
            local_dir,
            roaming_dir,
        })
    }

    pub fn local_dir(&self) -> &Path {
        &self.local_dir
    }

    pub fn roaming_dir(&self) -> &Path {
        &self.roaming_dir
    }

    fn native_folder(path: &Path) -> NativeFolder {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        NativeFolder::new(name, path.to_string_lossy())
    }
}

impl RootProvider for DesktopRootProvider {
    fn local_folder(&self) -> NativeFolder {
        Self::native_folder(&self.local_dir)
    }

    fn roaming_folder(&self) -> NativeFolder {
        Self::native_folder(&self.roaming_dir)
    }
}
