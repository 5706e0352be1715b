#![forbid(unsafe_code)]

//! Key-value preference persistence.
//!
//! The theme controller only needs a tiny string-to-string store with two
//! keys. [`PreferenceStore`] abstracts over where those strings live:
//! [`MemoryStore`] for tests and storage-less hosts, [`JsonFileStore`] for a
//! small JSON document on disk. Store failures are expected and recoverable;
//! callers log them and continue with in-memory state.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use ahash::AHashMap;

/// Error from a preference store backend.
#[derive(Debug)]
pub enum StoreError {
    /// I/O failure reading or writing the backing file.
    Io(std::io::Error),
    /// The backing document exists but does not parse.
    Format(serde_json::Error),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(err) => write!(f, "preference store i/o: {err}"),
            Self::Format(err) => write!(f, "preference store format: {err}"),
        }
    }
}

impl std::error::Error for StoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Format(err) => Some(err),
        }
    }
}

impl From<std::io::Error> for StoreError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(err: serde_json::Error) -> Self {
        Self::Format(err)
    }
}

/// String-to-string preference storage.
pub trait PreferenceStore {
    /// Read a key. Missing keys are `Ok(None)`.
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Write a key.
    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError>;
}

/// In-memory store. Never fails; contents vanish with the process.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    values: AHashMap<String, String>,
}

impl MemoryStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.values.insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}

/// JSON-file store: one flat `{"key": "value"}` document.
///
/// The whole document is read at open and rewritten on every `set`. That is
/// deliberately simple; the store holds two short strings and is only ever
/// written from the UI thread in response to a user action.
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    values: AHashMap<String, String>,
}

impl JsonFileStore {
    /// Open (or create) a store at `path`. A missing file is an empty
    /// store; an unreadable or malformed file is an error.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();
        let values = match fs::read_to_string(&path) {
            Ok(text) => serde_json::from_str(&text)?,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => AHashMap::new(),
            Err(err) => return Err(err.into()),
        };
        Ok(Self { path, values })
    }

    /// Backing file path.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn flush(&self) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }
        let text = serde_json::to_string_pretty(&self.values)?;
        fs::write(&self.path, text)?;
        Ok(())
    }
}

impl PreferenceStore for JsonFileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.values.insert(key.to_owned(), value.to_owned());
        self.flush()
    }
}
