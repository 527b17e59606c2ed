//! # Rm Command
//!
//! Unstage a file, and if it is tracked, stage its removal and delete it
//! from the working tree.
//!
//! ## Usage
//!
//! ```bash
//! gitlet rm file.txt
//! ```

use anyhow::Result;

use crate::error::GitletError;
use crate::Repository;

pub fn run(file: &str) -> Result<()> {
    if file.trim().is_empty() {
        anyhow::bail!(GitletError::BlankFileName);
    }

    let repo = Repository::find()?;
    let staging = repo.staging_area();
    let mut addition = staging.read_addition()?;
    let tracked = repo.head_commit()?.tree.contains_key(file);

    if !addition.contains_key(file) && !tracked {
        anyhow::bail!(GitletError::NoReasonToRemove);
    }

    addition.remove(file);

    if tracked {
        let mut removal = staging.read_removal()?;
        removal.insert(file.to_string());
        staging.write_removal(&removal)?;

        let working_tree = repo.working_tree();
        if working_tree.exists(file) {
            working_tree.delete(file)?;
        }
    }

    staging.write_addition(&addition)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn init(temp: &std::path::Path) -> Repository {
        Repository::init(temp).unwrap()
    }

    #[test]
    fn blank_name_fails() {
        let temp = tempdir().unwrap();
        let repo = init(temp.path());
        std::env::set_current_dir(&repo.root).unwrap();

        let err = run("  ").unwrap_err();
        assert_eq!(err.to_string(), "Please enter a file name.");
    }

    #[test]
    fn untracked_unstaged_file_has_no_reason_to_remove() {
        let temp = tempdir().unwrap();
        let repo = init(temp.path());
        std::env::set_current_dir(&repo.root).unwrap();

        let err = run("a.txt").unwrap_err();
        assert_eq!(err.to_string(), "No reason to remove the file.");
    }

    #[test]
    fn removing_a_staged_addition_unstages_it() {
        let temp = tempdir().unwrap();
        let repo = init(temp.path());
        std::env::set_current_dir(&repo.root).unwrap();

        std::fs::write(repo.root.join("a.txt"), b"hi").unwrap();
        super::super::add::run("a.txt").unwrap();
        run("a.txt").unwrap();

        assert!(repo.staging_area().read_addition().unwrap().is_empty());
        // Never committed, so it's not tracked either; file stays on disk.
        assert!(repo.working_tree().exists("a.txt"));
    }

    #[test]
    fn removing_a_tracked_file_stages_removal_and_deletes_it() {
        let temp = tempdir().unwrap();
        let repo = init(temp.path());
        std::env::set_current_dir(&repo.root).unwrap();

        std::fs::write(repo.root.join("a.txt"), b"hi").unwrap();
        super::super::add::run("a.txt").unwrap();
        super::super::commit::run("m1").unwrap();

        run("a.txt").unwrap();

        assert!(repo.staging_area().read_removal().unwrap().contains("a.txt"));
        assert!(!repo.working_tree().exists("a.txt"));
    }

    #[test]
    fn remove_after_a_noop_re_add_still_stages_removal_since_file_is_tracked() {
        // Re-adding content identical to HEAD is a no-op stage, but rm still
        // looks at tracked-ness, not staging state, so it stages removal.
        let temp = tempdir().unwrap();
        let repo = init(temp.path());
        std::env::set_current_dir(&repo.root).unwrap();

        std::fs::write(repo.root.join("a.txt"), b"hi").unwrap();
        super::super::add::run("a.txt").unwrap();
        super::super::commit::run("m1").unwrap();

        super::super::add::run("a.txt").unwrap();
        assert!(repo.staging_area().read_addition().unwrap().is_empty());

        run("a.txt").unwrap();
        assert!(repo.staging_area().read_removal().unwrap().contains("a.txt"));
    }

    #[test]
    fn unstaging_a_never_committed_addition_leaves_staging_empty() {
        let temp = tempdir().unwrap();
        let repo = init(temp.path());
        std::env::set_current_dir(&repo.root).unwrap();

        std::fs::write(repo.root.join("a.txt"), b"hi").unwrap();
        super::super::add::run("a.txt").unwrap();
        run("a.txt").unwrap();

        assert!(repo.staging_area().is_empty().unwrap());
    }
}
