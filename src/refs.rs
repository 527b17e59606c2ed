//! # Ref Store
//!
//! Branch pointers (`branches/<name>`, a text file holding a 40-hex
//! fingerprint) plus the single HEAD pointer (`HEAD`, a text file holding a
//! branch name — gitlet never detaches HEAD onto a bare commit).

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};

/// The branch and HEAD pointers for one repository.
pub struct RefStore {
    branches_dir: PathBuf,
    head_path: PathBuf,
}

impl RefStore {
    pub fn new(gitlet_dir: &std::path::Path) -> Self {
        Self {
            branches_dir: gitlet_dir.join("branches"),
            head_path: gitlet_dir.join("HEAD"),
        }
    }

    pub fn init(&self) -> Result<()> {
        fs::create_dir_all(&self.branches_dir).context("failed to create branches directory")
    }

    pub fn read_head(&self) -> Result<String> {
        Ok(fs::read_to_string(&self.head_path)
            .context("failed to read HEAD")?
            .trim()
            .to_string())
    }

    pub fn write_head(&self, branch_name: &str) -> Result<()> {
        fs::write(&self.head_path, branch_name).context("failed to write HEAD")
    }

    fn branch_path(&self, name: &str) -> PathBuf {
        self.branches_dir.join(name)
    }

    pub fn branch_exists(&self, name: &str) -> bool {
        self.branch_path(name).exists()
    }

    pub fn read_branch(&self, name: &str) -> Result<Option<String>> {
        let path = self.branch_path(name);
        if !path.exists() {
            return Ok(None);
        }
        Ok(Some(
            fs::read_to_string(&path)
                .context("failed to read branch")?
                .trim()
                .to_string(),
        ))
    }

    pub fn write_branch(&self, name: &str, fingerprint: &str) -> Result<()> {
        fs::write(self.branch_path(name), fingerprint).context("failed to write branch")
    }

    pub fn delete_branch(&self, name: &str) -> Result<()> {
        fs::remove_file(self.branch_path(name)).context("failed to delete branch")
    }

    /// All branch names, sorted lexicographically — the order `status` and
    /// `branch` both print in.
    pub fn list_branches(&self) -> Result<Vec<String>> {
        let mut names = Vec::new();
        for entry in fs::read_dir(&self.branches_dir).context("failed to read branches directory")? {
            let entry = entry?;
            if entry.file_type()?.is_file() {
                if let Some(name) = entry.file_name().to_str() {
                    names.push(name.to_string());
                }
            }
        }
        names.sort();
        Ok(names)
    }
}
