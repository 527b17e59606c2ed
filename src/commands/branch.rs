//! # Branch Command
//!
//! Create a new branch pointing at the current head commit, without
//! switching HEAD to it.
//!
//! ## Usage
//!
//! ```bash
//! gitlet branch feature
//! ```

use anyhow::Result;

use crate::error::GitletError;
use crate::Repository;

pub fn run(name: &str) -> Result<()> {
    let repo = Repository::find()?;
    let refs = repo.ref_store();

    if refs.branch_exists(name) {
        anyhow::bail!(GitletError::BranchAlreadyExists);
    }

    let head_fp = repo.head_commit_fingerprint()?;
    refs.write_branch(name, &head_fp)?;
    Ok(())
}
