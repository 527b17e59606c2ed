//! # Working Tree Adapter
//!
//! Read/write/delete/list operations against the flat working directory.
//! The repository has no directory nesting, so `list_files` only looks at
//! plain files directly under the root — no recursive walk, and the
//! `.gitlet` directory itself is always excluded.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::GITLET_DIR;

pub struct WorkingTree {
    root: PathBuf,
}

impl WorkingTree {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    /// Names of plain files directly under the working directory root,
    /// excluding `.gitlet`.
    pub fn list_files(&self) -> Result<Vec<String>> {
        let mut out = Vec::new();
        for entry in fs::read_dir(&self.root).context("failed to read working directory")? {
            let entry = entry?;
            if !entry.file_type()?.is_file() {
                continue;
            }
            if let Some(name) = entry.file_name().to_str() {
                if name != GITLET_DIR {
                    out.push(name.to_string());
                }
            }
        }
        Ok(out)
    }

    pub fn exists(&self, name: &str) -> bool {
        self.root.join(name).is_file()
    }

    pub fn read(&self, name: &str) -> Result<Option<Vec<u8>>> {
        let path = self.root.join(name);
        if !path.is_file() {
            return Ok(None);
        }
        Ok(Some(fs::read(&path).context("failed to read working file")?))
    }

    pub fn write(&self, name: &str, bytes: &[u8]) -> Result<()> {
        fs::write(self.root.join(name), bytes).context("failed to write working file")
    }

    pub fn delete(&self, name: &str) -> Result<()> {
        fs::remove_file(self.root.join(name)).context("failed to delete working file")
    }
}
