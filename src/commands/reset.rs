//! # Reset Command
//!
//! Move the current branch to an arbitrary commit, rewriting the working
//! tree to match it.
//!
//! ## Usage
//!
//! ```bash
//! gitlet reset 4a1b2c3
//! ```

use anyhow::Result;

use crate::error::GitletError;
use crate::objects::Commit;
use crate::Repository;

pub fn run(commit_id: &str) -> Result<()> {
    let repo = Repository::find()?;
    let store = repo.object_store();

    let target_fp = store
        .find_commit_by_prefix(commit_id)?
        .ok_or(GitletError::NoCommitWithId)?;
    let target = store
        .get_commit(&target_fp)?
        .ok_or_else(|| anyhow::anyhow!("dangling commit reference: {target_fp}"))?;

    rewrite_working_tree(&repo, &target)?;

    let refs = repo.ref_store();
    let branch = refs.read_head()?;
    refs.write_branch(&branch, &target_fp)?;

    Ok(())
}

/// Delete files tracked by the current commit but absent from `target`,
/// overwrite every file `target` tracks from its blob, and clear staging.
/// Fails with [`GitletError::UntrackedFileInTheWay`] if an untracked working
/// file would be clobbered. Shared by `reset`, `checkout <branch>`, and
/// fast-forward `merge`, none of which move the current branch's pointer
/// here — that is each caller's own responsibility.
pub fn rewrite_working_tree(repo: &Repository, target: &Commit) -> Result<()> {
    let current_tree = repo.head_commit()?.tree;
    let working_tree = repo.working_tree();
    let store = repo.object_store();

    for name in target.tree.keys() {
        if working_tree.exists(name) && !current_tree.contains_key(name) {
            anyhow::bail!(GitletError::UntrackedFileInTheWay);
        }
    }

    for name in current_tree.keys() {
        if !target.tree.contains_key(name) && working_tree.exists(name) {
            working_tree.delete(name)?;
        }
    }

    for (name, fp) in &target.tree {
        let content = store
            .get_blob(fp)?
            .ok_or_else(|| anyhow::anyhow!("dangling blob reference: {fp}"))?;
        working_tree.write(name, &content)?;
    }

    repo.staging_area().clear()?;
    Ok(())
}
