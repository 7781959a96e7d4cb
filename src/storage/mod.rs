//! # Storage
//!
//! Load/save contract for grocery lists and the file formats that implement it.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

pub mod csv;
pub mod json;

use std::{
    fmt, fs,
    io::{self, Write},
    path::{Path, PathBuf},
    str::FromStr,
};

use tempfile::NamedTempFile;

pub use self::{csv::CsvStorage, json::JsonStorage};
use crate::{
    constants::{FORMAT_CSV, FORMAT_JSON},
    error::{Error, Result},
    item::Item,
};

/// Persistence backend for a grocery list.
///
/// `load` returns an empty list when the resource is absent or empty.
/// `save` replaces the whole resource, creating it if needed.
pub trait Storage: Send {
    /// Reads every item from the backing resource.
    fn load(&self) -> Result<Vec<Item>>;

    /// Overwrites the backing resource with `items`.
    fn save(&self, items: &[Item]) -> Result<()>;
}

/// Supported file formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Format {
    #[default]
    Json,
    Csv,
}

impl FromStr for Format {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            FORMAT_JSON => Ok(Self::Json),
            FORMAT_CSV => Ok(Self::Csv),
            _ => Err(Error::invalid(format!("Unsupported format: {s}"))),
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Json => write!(f, "{FORMAT_JSON}"),
            Self::Csv => write!(f, "{FORMAT_CSV}"),
        }
    }
}

/// Opens the storage backend for `format` at `path`.
pub fn open(format: Format, path: impl Into<PathBuf>) -> Box<dyn Storage> {
    let path = path.into();
    match format {
        Format::Json => Box::new(JsonStorage::new(path)),
        Format::Csv => Box::new(CsvStorage::new(path)),
    }
}

/// Parses a format token and opens the matching backend.
pub fn open_by_name(format: &str, path: impl Into<PathBuf>) -> Result<Box<dyn Storage>> {
    Ok(open(format.parse()?, path))
}

/// Reads the resource at `path`.
///
/// Returns `None` when the file does not exist or holds only whitespace.
pub(crate) fn read_non_empty(path: &Path) -> Result<Option<String>> {
    match fs::read_to_string(path) {
        Ok(content) if content.trim().is_empty() => Ok(None),
        Ok(content) => Ok(Some(content)),
        Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
        Err(err) => Err(Error::io(path, err)),
    }
}

/// Replaces the file at `path` with `content` in one step.
///
/// The content goes to a temporary file next to the target which is then
/// renamed over it, so readers never observe a half-written list. A symlink is
/// followed so its target gets replaced, and an existing file keeps its
/// permissions.
pub(crate) fn write_atomic(path: &Path, content: &[u8]) -> Result<()> {
    let target = fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf());
    let dir = match target.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    };
    fs::create_dir_all(&dir).map_err(|err| Error::io(&dir, err))?;

    let mut tmp = NamedTempFile::new_in(&dir).map_err(|err| Error::io(&dir, err))?;
    tmp.write_all(content)
        .and_then(|()| tmp.as_file().sync_all())
        .map_err(|err| Error::io(&target, err))?;

    match fs::metadata(&target) {
        Ok(metadata) => tmp
            .as_file()
            .set_permissions(metadata.permissions())
            .map_err(|err| Error::io(&target, err))?,
        Err(err) if err.kind() == io::ErrorKind::NotFound => {}
        Err(err) => return Err(Error::io(&target, err)),
    }

    tmp.persist(&target).map_err(|err| Error::io(&target, err.error))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_format_parsing() {
        assert_eq!("json".parse::<Format>().unwrap(), Format::Json);
        assert_eq!("  CSV ".parse::<Format>().unwrap(), Format::Csv);
        assert_eq!("Json".parse::<Format>().unwrap(), Format::Json);
    }

    #[test]
    fn test_unsupported_format() {
        let err = "xml".parse::<Format>().unwrap_err();
        assert!(err.is_invalid_argument());
        assert_eq!(err.to_string(), "Unsupported format: xml");
        assert!(open_by_name("", "list").is_err());
    }

    #[test]
    fn test_format_display() {
        assert_eq!(Format::Json.to_string(), "json");
        assert_eq!(Format::Csv.to_string(), "csv");
    }

    #[test]
    fn test_read_non_empty() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("list.txt");
        assert!(read_non_empty(&path).unwrap().is_none());

        fs::write(&path, "  \n").unwrap();
        assert!(read_non_empty(&path).unwrap().is_none());

        fs::write(&path, "data").unwrap();
        assert_eq!(read_non_empty(&path).unwrap().as_deref(), Some("data"));
    }

    #[test]
    fn test_write_atomic_creates_parents_and_overwrites() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("list.txt");

        write_atomic(&path, b"first").unwrap();
        write_atomic(&path, b"second").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "second");
        let leftovers = fs::read_dir(path.parent().unwrap()).unwrap().count();
        assert_eq!(leftovers, 1);
    }

    #[cfg(unix)]
    #[test]
    fn test_write_atomic_keeps_permissions() {
        use std::os::unix::fs::PermissionsExt;

        let dir = TempDir::new().unwrap();
        let path = dir.path().join("list.json");
        fs::write(&path, "[]").unwrap();
        fs::set_permissions(&path, fs::Permissions::from_mode(0o644)).unwrap();

        write_atomic(&path, b"[1]").unwrap();

        let mode = fs::metadata(&path).unwrap().permissions().mode() & 0o777;
        assert_eq!(mode, 0o644);
    }

    #[cfg(unix)]
    #[test]
    fn test_write_atomic_writes_through_symlink() {
        let dir = TempDir::new().unwrap();
        let real = dir.path().join("real.csv");
        let link = dir.path().join("link.csv");
        fs::write(&real, "").unwrap();
        std::os::unix::fs::symlink(&real, &link).unwrap();

        write_atomic(&link, b"Item,Quantity,Category\n").unwrap();

        assert!(fs::symlink_metadata(&link).unwrap().file_type().is_symlink());
        assert_eq!(
            fs::read_to_string(&real).unwrap(),
            "Item,Quantity,Category\n"
        );
    }
}
