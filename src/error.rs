//! # Errors
//!
//! Error type shared by the item model, the storage codecs and the list manager.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use std::{io, path::PathBuf};

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Failures raised by the grocery list core.
///
/// Every variant except `InvalidArgument` is an I/O failure: the backing
/// resource could not be read, written, or understood.
#[derive(Error, Debug)]
pub enum Error {
    /// Bad input from the caller.
    #[error("{0}")]
    InvalidArgument(String),

    #[error("I/O failure on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to deserialize grocery list from {}: {source}", path.display())]
    Deserialize {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to serialize grocery list: {0}")]
    Serialize(#[source] serde_json::Error),

    #[error("Invalid quantity '{value}' on line {line} of {}", path.display())]
    Quantity {
        path: PathBuf,
        line: usize,
        value: String,
    },
}

impl Error {
    pub(crate) fn invalid(message: impl Into<String>) -> Self {
        Self::InvalidArgument(message.into())
    }

    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Returns true for caller mistakes (bad name, quantity, or format).
    pub const fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument(_))
    }

    /// Returns true when the backing resource could not be read, written or parsed.
    pub const fn is_io_failure(&self) -> bool {
        !self.is_invalid_argument()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classification() {
        let invalid = Error::invalid("Item name must not be blank.");
        assert!(invalid.is_invalid_argument());
        assert!(!invalid.is_io_failure());

        let io = Error::io("list.json", io::Error::other("disk full"));
        assert!(io.is_io_failure());
        assert!(!io.is_invalid_argument());
    }

    #[test]
    fn test_quantity_message() {
        let err = Error::Quantity {
            path: PathBuf::from("list.csv"),
            line: 3,
            value: "many".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Invalid quantity 'many' on line 3 of list.csv"
        );
    }
}
