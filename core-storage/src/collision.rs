//! Collision policies for create, rename and move operations
//!
//! The portable enums are what callers pass in; each maps onto the backend's
//! own enum. Raw values arriving from outside Rust (FFI integers, config
//! strings) are validated through `TryFrom<i32>` / `FromStr` and rejected
//! with [`StorageError::InvalidArgument`] before any backend call.

use bridge_traits::{NativeCollisionOption, NativeNameCollisionOption};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::StorageError;

/// What to do when a file or folder being created already exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(i32)]
pub enum CreationCollisionOption {
    /// Append a number to the name until it is unique
    GenerateUniqueName = 0,
    /// Replace the existing item
    ReplaceExisting = 1,
    /// Fail with [`StorageError::Conflict`]
    FailIfExists = 2,
    /// Return the existing item
    OpenIfExists = 3,
}

impl CreationCollisionOption {
    pub const ALL: [CreationCollisionOption; 4] = [
        CreationCollisionOption::GenerateUniqueName,
        CreationCollisionOption::ReplaceExisting,
        CreationCollisionOption::FailIfExists,
        CreationCollisionOption::OpenIfExists,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CreationCollisionOption::GenerateUniqueName => "GenerateUniqueName",
            CreationCollisionOption::ReplaceExisting => "ReplaceExisting",
            CreationCollisionOption::FailIfExists => "FailIfExists",
            CreationCollisionOption::OpenIfExists => "OpenIfExists",
        }
    }
}

impl fmt::Display for CreationCollisionOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<CreationCollisionOption> for NativeCollisionOption {
    fn from(option: CreationCollisionOption) -> Self {
        match option {
            CreationCollisionOption::GenerateUniqueName => NativeCollisionOption::GenerateUniqueName,
            CreationCollisionOption::ReplaceExisting => NativeCollisionOption::ReplaceExisting,
            CreationCollisionOption::FailIfExists => NativeCollisionOption::FailIfExists,
            CreationCollisionOption::OpenIfExists => NativeCollisionOption::OpenIfExists,
        }
    }
}

impl TryFrom<i32> for CreationCollisionOption {
    type Error = StorageError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(CreationCollisionOption::GenerateUniqueName),
            1 => Ok(CreationCollisionOption::ReplaceExisting),
            2 => Ok(CreationCollisionOption::FailIfExists),
            3 => Ok(CreationCollisionOption::OpenIfExists),
            other => Err(StorageError::InvalidArgument(format!(
                "Unrecognized CreationCollisionOption value: {}",
                other
            ))),
        }
    }
}

impl FromStr for CreationCollisionOption {
    type Err = StorageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CreationCollisionOption::ALL
            .into_iter()
            .find(|option| option.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| {
                StorageError::InvalidArgument(format!(
                    "Unrecognized CreationCollisionOption value: {}",
                    s
                ))
            })
    }
}

/// What to do when a rename or move targets a name that already exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(i32)]
pub enum NameCollisionOption {
    GenerateUniqueName = 0,
    ReplaceExisting = 1,
    FailIfExists = 2,
}

impl NameCollisionOption {
    pub const ALL: [NameCollisionOption; 3] = [
        NameCollisionOption::GenerateUniqueName,
        NameCollisionOption::ReplaceExisting,
        NameCollisionOption::FailIfExists,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            NameCollisionOption::GenerateUniqueName => "GenerateUniqueName",
            NameCollisionOption::ReplaceExisting => "ReplaceExisting",
            NameCollisionOption::FailIfExists => "FailIfExists",
        }
    }
}

impl fmt::Display for NameCollisionOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<NameCollisionOption> for NativeNameCollisionOption {
    fn from(option: NameCollisionOption) -> Self {
        match option {
            NameCollisionOption::GenerateUniqueName => NativeNameCollisionOption::GenerateUniqueName,
            NameCollisionOption::ReplaceExisting => NativeNameCollisionOption::ReplaceExisting,
            NameCollisionOption::FailIfExists => NativeNameCollisionOption::FailIfExists,
        }
    }
}

impl TryFrom<i32> for NameCollisionOption {
    type Error = StorageError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(NameCollisionOption::GenerateUniqueName),
            1 => Ok(NameCollisionOption::ReplaceExisting),
            2 => Ok(NameCollisionOption::FailIfExists),
            other => Err(StorageError::InvalidArgument(format!(
                "Unrecognized NameCollisionOption value: {}",
                other
            ))),
        }
    }
}

impl FromStr for NameCollisionOption {
    type Err = StorageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NameCollisionOption::ALL
            .into_iter()
            .find(|option| option.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| {
                StorageError::InvalidArgument(format!(
                    "Unrecognized NameCollisionOption value: {}",
                    s
                ))
            })
    }
}
