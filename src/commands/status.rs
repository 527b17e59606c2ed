//! # Status Command
//!
//! Print branches, staged/removed files, unstaged modifications, and
//! untracked files, in five fixed sections.
//!
//! ## Usage
//!
//! ```bash
//! gitlet status
//! ```

use anyhow::Result;

use crate::Repository;

pub fn run() -> Result<()> {
    let repo = Repository::find()?;
    let refs = repo.ref_store();
    let staging = repo.staging_area();
    let working_tree = repo.working_tree();

    let current_branch = refs.read_head()?;
    let branches = refs.list_branches()?;
    let addition = staging.read_addition()?;
    let removal = staging.read_removal()?;
    let tree = repo.head_commit()?.tree;

    println!("=== Branches ===");
    for branch in &branches {
        if *branch == current_branch {
            println!("*{branch}");
        } else {
            println!("{branch}");
        }
    }
    println!();

    println!("=== Staged Files ===");
    for name in addition.keys() {
        println!("{name}");
    }
    println!();

    println!("=== Removed Files ===");
    for name in &removal {
        println!("{name}");
    }
    println!();

    println!("=== Modifications Not Staged For Commit ===");
    let mut working_files = working_tree.list_files()?;
    working_files.sort();
    for f in &working_files {
        let content = working_tree.read(f)?.unwrap_or_default();
        let h = crate::hash::fingerprint(&content);
        let modified = if let Some(staged_fp) = addition.get(f) {
            *staged_fp != h
        } else if let Some(tracked_fp) = tree.get(f) {
            tracked_fp != &h
        } else {
            false
        };
        if modified {
            println!("{f} (modified)");
        }
    }
    let mut deleted: Vec<&String> = tree
        .keys()
        .filter(|f| !removal.contains(*f) && !working_tree.exists(f))
        .chain(addition.keys().filter(|f| !working_tree.exists(f)))
        .collect();
    deleted.sort();
    deleted.dedup();
    for f in deleted {
        println!("{f} (deleted)");
    }
    println!();

    println!("=== Untracked Files ===");
    for f in &working_files {
        if !addition.contains_key(f) && !tree.contains_key(f) {
            println!("{f}");
        }
    }
    println!();

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn status_runs_on_a_fresh_repository() {
        let temp = tempdir().unwrap();
        let repo = Repository::init(temp.path()).unwrap();
        std::env::set_current_dir(&repo.root).unwrap();
        assert!(run().is_ok());
    }

    #[test]
    fn status_reports_staged_removed_and_untracked_files() {
        let temp = tempdir().unwrap();
        let repo = Repository::init(temp.path()).unwrap();
        std::env::set_current_dir(&repo.root).unwrap();

        std::fs::write(repo.root.join("a.txt"), b"1").unwrap();
        super::super::add::run("a.txt").unwrap();
        super::super::commit::run("one").unwrap();

        std::fs::write(repo.root.join("b.txt"), b"2").unwrap();
        super::super::add::run("b.txt").unwrap();
        super::super::rm::run("a.txt").unwrap();
        std::fs::write(repo.root.join("c.txt"), b"3").unwrap();

        let addition = repo.staging_area().read_addition().unwrap();
        assert!(addition.contains_key("b.txt"));
        let removal = repo.staging_area().read_removal().unwrap();
        assert!(removal.contains("a.txt"));

        assert!(run().is_ok());
    }
}
