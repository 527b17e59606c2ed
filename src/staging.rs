//! # Staging Area
//!
//! The pair of persisted structures staged for the next commit: an
//! *addition* map (`stagingArea/ADDITION`, file name → blob fingerprint) and
//! a *removal* set (`stagingArea/REMOVAL`, file names). A missing file reads
//! back as empty, so callers never have to special-case "not initialized
//! yet".

use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};

pub struct StagingArea {
    addition_path: PathBuf,
    removal_path: PathBuf,
}

impl StagingArea {
    pub fn new(gitlet_dir: &std::path::Path) -> Self {
        let dir = gitlet_dir.join("stagingArea");
        Self {
            addition_path: dir.join("ADDITION"),
            removal_path: dir.join("REMOVAL"),
        }
    }

    pub fn init(&self) -> Result<()> {
        fs::create_dir_all(self.addition_path.parent().unwrap())
            .context("failed to create staging area directory")?;
        self.write_addition(&BTreeMap::new())?;
        self.write_removal(&BTreeSet::new())?;
        Ok(())
    }

    pub fn read_addition(&self) -> Result<BTreeMap<String, String>> {
        if !self.addition_path.exists() {
            return Ok(BTreeMap::new());
        }
        let content = fs::read_to_string(&self.addition_path).context("failed to read ADDITION")?;
        if content.trim().is_empty() {
            return Ok(BTreeMap::new());
        }
        serde_json::from_str(&content).context("failed to parse ADDITION")
    }

    pub fn write_addition(&self, addition: &BTreeMap<String, String>) -> Result<()> {
        let content = serde_json::to_string(addition).context("failed to serialize ADDITION")?;
        fs::write(&self.addition_path, content).context("failed to write ADDITION")
    }

    pub fn read_removal(&self) -> Result<BTreeSet<String>> {
        if !self.removal_path.exists() {
            return Ok(BTreeSet::new());
        }
        let content = fs::read_to_string(&self.removal_path).context("failed to read REMOVAL")?;
        if content.trim().is_empty() {
            return Ok(BTreeSet::new());
        }
        serde_json::from_str(&content).context("failed to parse REMOVAL")
    }

    pub fn write_removal(&self, removal: &BTreeSet<String>) -> Result<()> {
        let content = serde_json::to_string(removal).context("failed to serialize REMOVAL")?;
        fs::write(&self.removal_path, content).context("failed to write REMOVAL")
    }

    /// Empty both the addition map and the removal set.
    pub fn clear(&self) -> Result<()> {
        self.write_addition(&BTreeMap::new())?;
        self.write_removal(&BTreeSet::new())?;
        Ok(())
    }

    pub fn is_empty(&self) -> Result<bool> {
        Ok(self.read_addition()?.is_empty() && self.read_removal()?.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn staging(dir: &std::path::Path) -> StagingArea {
        let s = StagingArea::new(dir);
        s.init().unwrap();
        s
    }

    #[test]
    fn fresh_repo_reads_back_empty() {
        let temp = tempdir().unwrap();
        let s = staging(temp.path());
        assert!(s.read_addition().unwrap().is_empty());
        assert!(s.read_removal().unwrap().is_empty());
        assert!(s.is_empty().unwrap());
    }

    #[test]
    fn addition_roundtrip() {
        let temp = tempdir().unwrap();
        let s = staging(temp.path());

        let mut addition = BTreeMap::new();
        addition.insert("a.txt".to_string(), "f".repeat(40));
        s.write_addition(&addition).unwrap();

        assert_eq!(s.read_addition().unwrap(), addition);
        assert!(!s.is_empty().unwrap());
    }

    #[test]
    fn clear_empties_both_structures() {
        let temp = tempdir().unwrap();
        let s = staging(temp.path());

        let mut addition = BTreeMap::new();
        addition.insert("a.txt".to_string(), "f".repeat(40));
        s.write_addition(&addition).unwrap();

        let mut removal = BTreeSet::new();
        removal.insert("b.txt".to_string());
        s.write_removal(&removal).unwrap();

        s.clear().unwrap();
        assert!(s.is_empty().unwrap());
    }
}
