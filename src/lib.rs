//! # gitlet
//!
//! A miniature, content-addressed version-control system: staging,
//! branches, history, checkout, reset, and three-way merge, built around a
//! content-addressable object store the same way Git itself is.
//!
//! ## Architecture Overview
//!
//! Every piece of data is stored as an object identified by the fingerprint
//! of its contents. Unlike Git, the repository is deliberately flat — one
//! level of file names under a working directory, no nested trees — so a
//! commit's tree is just a `name -> blob fingerprint` map embedded directly
//! in the commit record, not a separate object to fetch and parse.
//!
//! ## Repository Structure
//!
//! ```text
//! .gitlet/
//! ├── HEAD                # Name of the current branch
//! ├── blobs/<40-hex>      # Blob contents, keyed by fingerprint
//! ├── commits/<40-hex>    # Serialized commit records, keyed by fingerprint
//! ├── branches/<name>     # Branch pointer: a commit fingerprint
//! └── stagingArea/
//!     ├── ADDITION        # Staged additions: name -> blob fingerprint
//!     └── REMOVAL         # Staged removals: a set of names
//! ```
//!
//! ## Usage Example
//!
//! ```bash
//! gitlet init
//! gitlet add README.md
//! gitlet commit "initial import"
//! gitlet log
//! ```

pub mod commands;
pub mod error;
pub mod graph;
pub mod hash;
pub mod objects;
pub mod refs;
pub mod staging;
pub mod worktree;

use std::path::{Path, PathBuf};

use anyhow::Result;

use crate::error::GitletError;
use crate::objects::ObjectStore;
use crate::refs::RefStore;
use crate::staging::StagingArea;
use crate::worktree::WorkingTree;

/// The name of the gitlet directory (like `.git`)
pub const GITLET_DIR: &str = ".gitlet";

/// A gitlet repository: the working directory root plus the `.gitlet`
/// metadata directory it owns. Wires together the object store, ref store,
/// staging area, and working tree adapters that the VCS Core operates on.
#[derive(Debug)]
pub struct Repository {
    /// The root directory of the repository (where `.gitlet` lives)
    pub root: PathBuf,
    /// The `.gitlet` directory path
    pub gitlet_dir: PathBuf,
}

impl Repository {
    /// Find the repository by checking the current directory for `.gitlet`.
    ///
    /// Unlike Git, gitlet does not search parent directories — a command is
    /// only "in an initialized Gitlet directory" when `.gitlet` is a direct
    /// child of the current working directory.
    pub fn find() -> Result<Self> {
        Self::find_from(&std::env::current_dir()?)
    }

    pub fn find_from(dir: &Path) -> Result<Self> {
        let gitlet_dir = dir.join(GITLET_DIR);
        if !gitlet_dir.is_dir() {
            anyhow::bail!(GitletError::NotInitialized);
        }
        Ok(Self {
            root: dir.to_path_buf(),
            gitlet_dir,
        })
    }

    /// Initialize a new repository at `path`.
    ///
    /// Fails if `.gitlet` already exists there — unlike Git, gitlet does not
    /// support reinitializing in place.
    pub fn init(path: &Path) -> Result<Self> {
        let root = path.to_path_buf();
        let gitlet_dir = root.join(GITLET_DIR);

        if gitlet_dir.exists() {
            anyhow::bail!(GitletError::AlreadyInitialized);
        }

        let repo = Self { root, gitlet_dir };
        repo.object_store().init()?;
        repo.ref_store().init()?;
        repo.staging_area().init()?;

        let initial = objects::Commit::initial();
        let initial_fp = repo.object_store().put_commit(&initial)?;
        repo.ref_store().write_branch("master", &initial_fp)?;
        repo.ref_store().write_head("master")?;

        Ok(repo)
    }

    pub fn object_store(&self) -> ObjectStore {
        ObjectStore::new(&self.gitlet_dir)
    }

    pub fn ref_store(&self) -> RefStore {
        RefStore::new(&self.gitlet_dir)
    }

    pub fn staging_area(&self) -> StagingArea {
        StagingArea::new(&self.gitlet_dir)
    }

    pub fn working_tree(&self) -> WorkingTree {
        WorkingTree::new(self.root.clone())
    }

    /// The fingerprint of the commit the current branch (HEAD) points at.
    pub fn head_commit_fingerprint(&self) -> Result<String> {
        let refs = self.ref_store();
        let branch = refs.read_head()?;
        refs.read_branch(&branch)?
            .ok_or_else(|| anyhow::anyhow!("dangling HEAD: branch '{branch}' has no commit"))
    }

    pub fn head_commit(&self) -> Result<objects::Commit> {
        let fp = self.head_commit_fingerprint()?;
        self.object_store()
            .get_commit(&fp)?
            .ok_or_else(|| anyhow::anyhow!("dangling HEAD commit reference: {fp}"))
    }
}
