//! # Checkout Command
//!
//! Three forms: restore a file from the current commit, restore a file from
//! an arbitrary commit, or switch to another branch.
//!
//! ## Usage
//!
//! ```bash
//! gitlet checkout -- file.txt
//! gitlet checkout 4a1b2c3 -- file.txt
//! gitlet checkout feature
//! ```

use anyhow::Result;

use crate::commands::reset;
use crate::error::GitletError;
use crate::Repository;

/// `checkout -- <file>`: restore `file` from the current commit.
pub fn file_from_head(file: &str) -> Result<()> {
    let repo = Repository::find()?;
    file_from_commit(&repo, &repo.head_commit()?, file)
}

/// `checkout <commitId> -- <file>`: restore `file` from an arbitrary commit.
pub fn file_from_commit_id(commit_id: &str, file: &str) -> Result<()> {
    let repo = Repository::find()?;
    let store = repo.object_store();
    let fp = store
        .find_commit_by_prefix(commit_id)?
        .ok_or(GitletError::NoCommitWithId)?;
    let commit = store
        .get_commit(&fp)?
        .ok_or_else(|| anyhow::anyhow!("dangling commit reference: {fp}"))?;
    file_from_commit(&repo, &commit, file)
}

fn file_from_commit(repo: &Repository, commit: &crate::objects::Commit, file: &str) -> Result<()> {
    let fp = commit
        .tree
        .get(file)
        .cloned()
        .ok_or(GitletError::FileNotInCommit)?;
    let content = repo
        .object_store()
        .get_blob(&fp)?
        .ok_or_else(|| anyhow::anyhow!("dangling blob reference: {fp}"))?;
    repo.working_tree().write(file, &content)?;
    Ok(())
}

/// `checkout <branch>`: switch to another branch via a safe reset.
pub fn branch(name: &str) -> Result<()> {
    let repo = Repository::find()?;
    let refs = repo.ref_store();

    if !refs.branch_exists(name) {
        anyhow::bail!(GitletError::NoSuchBranchExists);
    }
    if refs.read_head()? == name {
        anyhow::bail!(GitletError::AlreadyOnBranch);
    }

    let target_fp = refs
        .read_branch(name)?
        .ok_or_else(|| anyhow::anyhow!("dangling branch reference: {name}"))?;
    let target = repo
        .object_store()
        .get_commit(&target_fp)?
        .ok_or_else(|| anyhow::anyhow!("dangling commit reference: {target_fp}"))?;

    reset::rewrite_working_tree(&repo, &target)?;
    refs.write_head(name)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn file_not_in_current_commit_fails() {
        let temp = tempdir().unwrap();
        let repo = Repository::init(temp.path()).unwrap();
        std::env::set_current_dir(&repo.root).unwrap();

        let err = file_from_head("missing.txt").unwrap_err();
        assert_eq!(err.to_string(), "File does not exist in that commit.");
    }

    #[test]
    fn restores_a_file_from_head() {
        let temp = tempdir().unwrap();
        let repo = Repository::init(temp.path()).unwrap();
        std::env::set_current_dir(&repo.root).unwrap();

        std::fs::write(repo.root.join("a.txt"), b"1").unwrap();
        super::super::add::run("a.txt").unwrap();
        super::super::commit::run("one").unwrap();

        std::fs::write(repo.root.join("a.txt"), b"changed").unwrap();
        file_from_head("a.txt").unwrap();

        assert_eq!(repo.working_tree().read("a.txt").unwrap(), Some(b"1".to_vec()));
    }

    #[test]
    fn unknown_commit_id_fails() {
        let temp = tempdir().unwrap();
        let repo = Repository::init(temp.path()).unwrap();
        std::env::set_current_dir(&repo.root).unwrap();

        let err = file_from_commit_id("abc123", "a.txt").unwrap_err();
        assert_eq!(err.to_string(), "No commit with that id exists.");
    }

    #[test]
    fn checkout_missing_branch_fails() {
        let temp = tempdir().unwrap();
        let repo = Repository::init(temp.path()).unwrap();
        std::env::set_current_dir(&repo.root).unwrap();

        let err = branch("ghost").unwrap_err();
        assert_eq!(err.to_string(), "No such branch exists.");
    }

    #[test]
    fn checkout_current_branch_fails() {
        let temp = tempdir().unwrap();
        let repo = Repository::init(temp.path()).unwrap();
        std::env::set_current_dir(&repo.root).unwrap();

        let err = branch("master").unwrap_err();
        assert_eq!(err.to_string(), "No need to checkout the current branch.");
    }

    #[test]
    fn checkout_branch_switches_head_without_moving_the_old_branch_pointer() {
        let temp = tempdir().unwrap();
        let repo = Repository::init(temp.path()).unwrap();
        std::env::set_current_dir(&repo.root).unwrap();

        super::super::branch::run("feature").unwrap();

        std::fs::write(repo.root.join("a.txt"), b"1").unwrap();
        super::super::add::run("a.txt").unwrap();
        super::super::commit::run("one").unwrap();
        let master_fp = repo.head_commit_fingerprint().unwrap();

        branch("feature").unwrap();

        assert_eq!(repo.ref_store().read_head().unwrap(), "feature");
        assert_eq!(repo.ref_store().read_branch("master").unwrap(), Some(master_fp));
    }
}
