use bridge_traits::{BridgeError, BridgeErrorKind};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Directory not found: {message}")]
    DirectoryNotFound {
        message: String,
        #[source]
        source: BridgeError,
    },

    #[error("File not found: {message}")]
    FileNotFound {
        message: String,
        #[source]
        source: BridgeError,
    },

    #[error("IO conflict: {message}")]
    Conflict {
        message: String,
        #[source]
        source: Option<BridgeError>,
    },

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Invalid data: {0}")]
    InvalidData(String),

    #[error(transparent)]
    Backend(#[from] BridgeError),
}

impl StorageError {
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            StorageError::DirectoryNotFound { .. } | StorageError::FileNotFound { .. }
        )
    }

    pub fn is_conflict(&self) -> bool {
        matches!(self, StorageError::Conflict { .. })
    }
}

pub type Result<T> = std::result::Result<T, StorageError>;

/// Translation of backend signals into [`StorageError`] variants.
///
/// Each method rewrites exactly one [`BridgeErrorKind`]; any other backend
/// error passes through unchanged as [`StorageError::Backend`].
pub(crate) trait TranslateBridgeError<T> {
    /// `NotFound` becomes [`StorageError::DirectoryNotFound`]
    fn or_directory_not_found(self) -> Result<T>;

    /// `NotFound` becomes [`StorageError::FileNotFound`]
    fn or_file_not_found(self) -> Result<T>;

    /// `AlreadyExists` becomes [`StorageError::Conflict`]
    fn or_conflict(self) -> Result<T>;
}

impl<T> TranslateBridgeError<T> for std::result::Result<T, BridgeError> {
    fn or_directory_not_found(self) -> Result<T> {
        self.map_err(|source| match source.kind() {
            BridgeErrorKind::NotFound => StorageError::DirectoryNotFound {
                message: source.to_string(),
                source,
            },
            _ => StorageError::Backend(source),
        })
    }

    fn or_file_not_found(self) -> Result<T> {
        self.map_err(|source| match source.kind() {
            BridgeErrorKind::NotFound => StorageError::FileNotFound {
                message: source.to_string(),
                source,
            },
            _ => StorageError::Backend(source),
        })
    }

    fn or_conflict(self) -> Result<T> {
        self.map_err(|source| match source.kind() {
            BridgeErrorKind::AlreadyExists => StorageError::Conflict {
                message: source.to_string(),
                source: Some(source),
            },
            _ => StorageError::Backend(source),
        })
    }
}
