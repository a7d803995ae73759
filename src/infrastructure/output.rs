//! Output directory for converted files

use crate::error::Result;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Directory receiving one file per exported tiddler
#[derive(Debug, Clone)]
pub struct OutputDirectory {
    root: PathBuf,
}

impl OutputDirectory {
    pub fn new(root: PathBuf) -> Self {
        OutputDirectory { root }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Create the directory and its parents. An existing directory is fine.
    pub fn create(&self) -> Result<()> {
        match fs::create_dir_all(&self.root) {
            Err(e) if e.kind() != ErrorKind::AlreadyExists => Err(e.into()),
            _ => Ok(()),
        }
    }

    /// Write (or overwrite) a file in the directory, returning its path
    pub fn write(&self, file_name: &str, contents: &str) -> Result<PathBuf> {
        let path = self.root.join(file_name);
        fs::write(&path, contents)?;
        Ok(path)
    }
}
