//! # Object Store
//!
//! Two content-addressed stores on disk, both rooted under `.gitlet`:
//! a blob store (`blobs/<fingerprint>`, raw bytes) and a commit store
//! (`commits/<fingerprint>`, the commit's canonical serialized form). Both
//! are write-once — an object that already exists on disk is never
//! rewritten, since identical fingerprint implies identical content.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::objects::Commit;

/// The content-addressed blob and commit stores for one repository.
pub struct ObjectStore {
    blobs_dir: PathBuf,
    commits_dir: PathBuf,
}

impl ObjectStore {
    pub fn new(gitlet_dir: &std::path::Path) -> Self {
        Self {
            blobs_dir: gitlet_dir.join("blobs"),
            commits_dir: gitlet_dir.join("commits"),
        }
    }

    /// Create the `blobs/` and `commits/` directories.
    pub fn init(&self) -> Result<()> {
        fs::create_dir_all(&self.blobs_dir).context("failed to create blobs directory")?;
        fs::create_dir_all(&self.commits_dir).context("failed to create commits directory")?;
        Ok(())
    }

    /// Write a blob's contents under its fingerprint; idempotent.
    pub fn put_blob(&self, bytes: &[u8]) -> Result<String> {
        let fp = crate::hash::fingerprint(bytes);
        let path = self.blobs_dir.join(&fp);
        if !path.exists() {
            fs::write(&path, bytes).context("failed to write blob")?;
        }
        Ok(fp)
    }

    /// Read a blob's contents by fingerprint.
    pub fn get_blob(&self, fingerprint: &str) -> Result<Option<Vec<u8>>> {
        let path = self.blobs_dir.join(fingerprint);
        if !path.exists() {
            return Ok(None);
        }
        Ok(Some(fs::read(&path).context("failed to read blob")?))
    }

    pub fn blob_exists(&self, fingerprint: &str) -> bool {
        self.blobs_dir.join(fingerprint).exists()
    }

    /// Write a commit under the fingerprint of its canonical serialization;
    /// idempotent. Returns that fingerprint.
    pub fn put_commit(&self, commit: &Commit) -> Result<String> {
        let bytes = commit.serialize()?;
        let fp = crate::hash::fingerprint(&bytes);
        let path = self.commits_dir.join(&fp);
        if !path.exists() {
            fs::write(&path, &bytes).context("failed to write commit")?;
        }
        Ok(fp)
    }

    /// Read a commit by its full fingerprint.
    pub fn get_commit(&self, fingerprint: &str) -> Result<Option<Commit>> {
        let path = self.commits_dir.join(fingerprint);
        if !path.exists() {
            return Ok(None);
        }
        let bytes = fs::read(&path).context("failed to read commit")?;
        Ok(Some(Commit::parse(&bytes)?))
    }

    pub fn commit_exists(&self, fingerprint: &str) -> bool {
        self.commits_dir.join(fingerprint).exists()
    }

    /// List every commit fingerprint currently in the store, in filesystem
    /// enumeration order (used by `global-log`).
    pub fn list_commits(&self) -> Result<Vec<String>> {
        let mut out = Vec::new();
        for entry in fs::read_dir(&self.commits_dir).context("failed to read commits directory")? {
            let entry = entry?;
            if entry.file_type()?.is_file() {
                if let Some(name) = entry.file_name().to_str() {
                    out.push(name.to_string());
                }
            }
        }
        Ok(out)
    }

    /// Resolve a short (prefix) commit id to its full fingerprint.
    ///
    /// Returns `None` both when nothing matches and when more than one
    /// commit matches the prefix — an ambiguous prefix is treated as "no
    /// unambiguous commit", so callers report the one fixed error message
    /// rather than guessing a winner.
    pub fn find_commit_by_prefix(&self, prefix: &str) -> Result<Option<String>> {
        if self.commit_exists(prefix) && prefix.len() == 40 {
            return Ok(Some(prefix.to_string()));
        }

        let mut matches = Vec::new();
        for entry in fs::read_dir(&self.commits_dir).context("failed to read commits directory")? {
            let entry = entry?;
            if !entry.file_type()?.is_file() {
                continue;
            }
            if let Some(name) = entry.file_name().to_str() {
                if name.starts_with(prefix) {
                    matches.push(name.to_string());
                }
            }
        }

        match matches.len() {
            1 => Ok(Some(matches.remove(0))),
            _ => Ok(None),
        }
    }
}
