//! # Merge Command
//!
//! Three-way merge of another branch into the current one, via a
//! least-common-ancestor split point and a conflict-aware diff plan.
//!
//! ## Usage
//!
//! ```bash
//! gitlet merge feature
//! ```

use std::collections::{BTreeMap, BTreeSet};

use anyhow::Result;

use crate::error::GitletError;
use crate::graph::CommitGraph;
use crate::objects::Commit;
use crate::Repository;

pub fn run(other_branch: &str) -> Result<()> {
    let repo = Repository::find()?;
    let staging = repo.staging_area();

    if !staging.is_empty()? {
        anyhow::bail!(GitletError::UncommittedChanges);
    }

    let refs = repo.ref_store();
    let current_branch = refs.read_head()?;
    if !refs.branch_exists(other_branch) {
        anyhow::bail!(GitletError::NoSuchBranch);
    }
    if other_branch == current_branch {
        anyhow::bail!(GitletError::MergeWithSelf);
    }

    let current_fp = repo.head_commit_fingerprint()?;
    let other_fp = refs
        .read_branch(other_branch)?
        .ok_or_else(|| anyhow::anyhow!("dangling branch reference: {other_branch}"))?;

    let store = repo.object_store();
    let graph = CommitGraph::new(&store);
    let split_fp = graph.lca(&current_fp, &other_fp)?;

    if split_fp == other_fp {
        println!("Given branch is an ancestor of the current branch.");
        return Ok(());
    }
    if split_fp == current_fp {
        let other_commit = get_commit(&store, &other_fp)?;
        crate::commands::reset::rewrite_working_tree(&repo, &other_commit)?;
        refs.write_branch(&current_branch, &other_fp)?;
        println!("Current branch fast-forwarded.");
        return Ok(());
    }

    let split = get_commit(&store, &split_fp)?;
    let current = get_commit(&store, &current_fp)?;
    let other = get_commit(&store, &other_fp)?;

    let s = &split.tree;
    let c = &current.tree;
    let o = &other.tree;

    let keys_s: BTreeSet<_> = s.keys().cloned().collect();
    let keys_c: BTreeSet<_> = c.keys().cloned().collect();
    let keys_o: BTreeSet<_> = o.keys().cloned().collect();

    let curr_removed: BTreeSet<_> = keys_s.difference(&keys_c).cloned().collect();
    let other_removed: BTreeSet<_> = keys_s.difference(&keys_o).cloned().collect();
    let curr_added: BTreeSet<_> = keys_c.difference(&keys_s).cloned().collect();
    let other_added: BTreeSet<_> = keys_o.difference(&keys_s).cloned().collect();
    let curr_modified: BTreeSet<_> = keys_s
        .intersection(&keys_c)
        .filter(|f| c[*f] != s[*f])
        .cloned()
        .collect();
    let other_modified: BTreeSet<_> = keys_s
        .intersection(&keys_o)
        .filter(|f| o[*f] != s[*f])
        .cloned()
        .collect();

    let mut planned_remove: BTreeSet<String> = BTreeSet::new();
    let mut planned_add: BTreeMap<String, String> = BTreeMap::new();
    let mut conflicts: BTreeSet<String> = BTreeSet::new();

    for f in &other_removed {
        if curr_modified.contains(f) {
            conflicts.insert(f.clone());
        } else if !curr_removed.contains(f) {
            planned_remove.insert(f.clone());
        }
    }

    for f in &other_added {
        if !curr_added.contains(f) {
            planned_add.insert(f.clone(), o[f].clone());
        } else if c[f] != o[f] {
            conflicts.insert(f.clone());
        }
    }

    for f in &other_modified {
        if curr_removed.contains(f) {
            conflicts.insert(f.clone());
        } else if !curr_modified.contains(f) {
            planned_add.insert(f.clone(), o[f].clone());
        } else if c[f] != o[f] {
            conflicts.insert(f.clone());
        }
    }

    let working_tree = repo.working_tree();
    let touched: BTreeSet<&String> = planned_remove
        .iter()
        .chain(planned_add.keys())
        .chain(conflicts.iter())
        .collect();
    for f in touched {
        if working_tree.exists(f) && !c.contains_key(f) {
            anyhow::bail!(GitletError::UntrackedFileInTheWay);
        }
    }

    let mut addition = staging.read_addition()?;
    let mut removal = staging.read_removal()?;

    for f in &planned_remove {
        if working_tree.exists(f) {
            working_tree.delete(f)?;
        }
        removal.insert(f.clone());
    }

    for (f, fp) in &planned_add {
        let content = store
            .get_blob(fp)?
            .ok_or_else(|| anyhow::anyhow!("dangling blob reference: {fp}"))?;
        working_tree.write(f, &content)?;
        addition.insert(f.clone(), fp.clone());
    }

    if !conflicts.is_empty() {
        for f in &conflicts {
            let current_content = match c.get(f) {
                Some(fp) => store.get_blob(fp)?.unwrap_or_default(),
                None => Vec::new(),
            };
            let other_content = match o.get(f) {
                Some(fp) => store.get_blob(fp)?.unwrap_or_default(),
                None => Vec::new(),
            };

            let mut merged = Vec::new();
            merged.extend_from_slice(b"<<<<<<< HEAD\n");
            merged.extend_from_slice(&current_content);
            merged.extend_from_slice(b"=======\n");
            merged.extend_from_slice(&other_content);
            merged.extend_from_slice(b">>>>>>>\n");

            working_tree.write(f, &merged)?;
            let fp = store.put_blob(&merged)?;
            addition.insert(f.clone(), fp);
        }
        println!("Encountered a merge conflict.");
    }

    staging.write_addition(&addition)?;
    staging.write_removal(&removal)?;

    let mut tree = c.clone();
    for (name, fp) in &addition {
        tree.insert(name.clone(), fp.clone());
    }
    for name in &removal {
        tree.remove(name);
    }

    let timestamp = now();
    let message = format!("Merged {other_branch} into {current_branch}.");
    let commit = Commit::merge(message, timestamp, current_fp, other_fp, tree);
    let new_fp = store.put_commit(&commit)?;

    refs.write_branch(&current_branch, &new_fp)?;
    staging.clear()?;

    Ok(())
}

fn get_commit(store: &crate::objects::ObjectStore, fp: &str) -> Result<Commit> {
    store
        .get_commit(fp)?
        .ok_or_else(|| anyhow::anyhow!("dangling commit reference: {fp}"))
}

fn now() -> i64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_secs() as i64)
        .unwrap_or(0)
}
