//! # Commit Command
//!
//! Build a new commit from the current commit's tree plus the staging area,
//! advance the current branch, and clear staging.
//!
//! ## Usage
//!
//! ```bash
//! gitlet commit "message"
//! ```

use anyhow::Result;

use crate::error::GitletError;
use crate::objects::Commit;
use crate::Repository;

pub fn run(message: &str) -> Result<()> {
    if message.trim().is_empty() {
        anyhow::bail!(GitletError::BlankCommitMessage);
    }

    let repo = Repository::find()?;
    let staging = repo.staging_area();
    let addition = staging.read_addition()?;
    let removal = staging.read_removal()?;

    if addition.is_empty() && removal.is_empty() {
        anyhow::bail!(GitletError::NothingToCommit);
    }

    let parent_fp = repo.head_commit_fingerprint()?;
    let mut tree = repo.head_commit()?.tree;
    for (name, fp) in &addition {
        tree.insert(name.clone(), fp.clone());
    }
    for name in &removal {
        tree.remove(name);
    }

    let timestamp = now();
    let commit = Commit::new(message.to_string(), timestamp, parent_fp, tree);
    let new_fp = repo.object_store().put_commit(&commit)?;

    let refs = repo.ref_store();
    let branch = refs.read_head()?;
    refs.write_branch(&branch, &new_fp)?;
    staging.clear()?;

    Ok(())
}

fn now() -> i64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_secs() as i64)
        .unwrap_or(0)
}
