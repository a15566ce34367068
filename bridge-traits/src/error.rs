use thiserror::Error;

#[derive(Error, Debug)]
pub enum BridgeError {
    #[error("Bridge capability not available: {0}")]
    NotAvailable(String),

    #[error("Bridge operation failed: {0}")]
    OperationFailed(String),

    #[error("Storage item not found: {0}")]
    NotFound(String),

    #[error("Storage item already exists: {0}")]
    AlreadyExists(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Coarse classification of a [`BridgeError`].
///
/// The storage facade translates errors by kind, so backends are free to
/// report conditions either through the dedicated variants or through an
/// `Io` error carrying the matching [`std::io::ErrorKind`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BridgeErrorKind {
    NotFound,
    AlreadyExists,
    Other,
}

impl BridgeError {
    pub fn kind(&self) -> BridgeErrorKind {
        match self {
            BridgeError::NotFound(_) => BridgeErrorKind::NotFound,
            BridgeError::AlreadyExists(_) => BridgeErrorKind::AlreadyExists,
            BridgeError::Io(e) => match e.kind() {
                std::io::ErrorKind::NotFound => BridgeErrorKind::NotFound,
                std::io::ErrorKind::AlreadyExists => BridgeErrorKind::AlreadyExists,
                _ => BridgeErrorKind::Other,
            },
            BridgeError::NotAvailable(_) | BridgeError::OperationFailed(_) => {
                BridgeErrorKind::Other
            }
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.kind() == BridgeErrorKind::NotFound
    }

    pub fn is_already_exists(&self) -> bool {
        self.kind() == BridgeErrorKind::AlreadyExists
    }
}

pub type Result<T> = std::result::Result<T, BridgeError>;
