//! # Rm-Branch Command
//!
//! Delete a branch pointer. The commits it pointed at are untouched.
//!
//! ## Usage
//!
//! ```bash
//! gitlet rm-branch feature
//! ```

use anyhow::Result;

use crate::error::GitletError;
use crate::Repository;

pub fn run(name: &str) -> Result<()> {
    let repo = Repository::find()?;
    let refs = repo.ref_store();

    if refs.read_head()? == name {
        anyhow::bail!(GitletError::CannotRemoveCurrentBranch);
    }
    if !refs.branch_exists(name) {
        anyhow::bail!(GitletError::NoSuchBranch);
    }

    refs.delete_branch(name)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn cannot_remove_the_current_branch() {
        let temp = tempdir().unwrap();
        let repo = Repository::init(temp.path()).unwrap();
        std::env::set_current_dir(&repo.root).unwrap();

        let err = run("master").unwrap_err();
        assert_eq!(err.to_string(), "Cannot remove the current branch.");
    }

    #[test]
    fn missing_branch_fails() {
        let temp = tempdir().unwrap();
        let repo = Repository::init(temp.path()).unwrap();
        std::env::set_current_dir(&repo.root).unwrap();

        let err = run("ghost").unwrap_err();
        assert_eq!(err.to_string(), "A branch with that name does not exist.");
    }

    #[test]
    fn removes_the_pointer_but_leaves_commits() {
        let temp = tempdir().unwrap();
        let repo = Repository::init(temp.path()).unwrap();
        std::env::set_current_dir(&repo.root).unwrap();

        super::super::branch::run("feature").unwrap();
        let head_fp = repo.head_commit_fingerprint().unwrap();

        run("feature").unwrap();

        assert!(!repo.ref_store().branch_exists("feature"));
        assert!(repo.object_store().commit_exists(&head_fp));
    }
}
