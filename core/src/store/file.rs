//! Whole-file access to the store document.
//!
//! Every read opens the file, reads it to the end and drops the handle; every
//! write truncates and rewrites the whole file. There is no locking: two
//! processes doing read-modify-write on the same path can lose each other's
//! changes.

use std::fs::{self, File, OpenOptions};
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{Error, Result};

#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Creates the file (and its parent directory) when missing. A zero-length
    /// file is a valid, empty store.
    pub fn ensure_exists(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|e| Error::io(parent, e))?;
            }
        }
        OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|e| Error::io(&self.path, e))?;
        Ok(())
    }

    pub fn read_all(&self) -> Result<Vec<u8>> {
        self.ensure_exists()?;
        let file = File::open(&self.path).map_err(|e| Error::io(&self.path, e))?;
        let mut reader = BufReader::new(file);
        let mut bytes = Vec::new();
        reader
            .read_to_end(&mut bytes)
            .map_err(|e| Error::io(&self.path, e))?;
        debug!(path = %self.path.display(), len = bytes.len(), "read store");
        Ok(bytes)
    }

    pub fn write_all(&self, bytes: &[u8]) -> Result<()> {
        let file = File::create(&self.path).map_err(|e| Error::io(&self.path, e))?;
        let mut writer = BufWriter::new(file);
        writer
            .write_all(bytes)
            .and_then(|()| writer.flush())
            .map_err(|e| Error::io(&self.path, e))?;
        debug!(path = %self.path.display(), len = bytes.len(), "wrote store");
        Ok(())
    }
}
