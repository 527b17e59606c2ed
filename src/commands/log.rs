//! # Log Command
//!
//! Print the first-parent history starting at HEAD.
//!
//! ## Usage
//!
//! ```bash
//! gitlet log
//! ```

use anyhow::Result;
use chrono::{DateTime, Datelike, Utc};

use crate::graph::CommitGraph;
use crate::objects::Commit;
use crate::Repository;

pub fn run() -> Result<()> {
    let repo = Repository::find()?;
    let store = repo.object_store();
    let graph = CommitGraph::new(&store);

    let head_fp = repo.head_commit_fingerprint()?;
    let mut first = true;
    for fp in graph.first_parent_walk(&head_fp)? {
        let commit = store
            .get_commit(&fp)?
            .ok_or_else(|| anyhow::anyhow!("dangling commit reference: {fp}"))?;
        if !first {
            println!();
        }
        first = false;
        print!("{}", format_record(&fp, &commit));
    }
    Ok(())
}

/// Render a single `===`-delimited log record, ending in a message line with
/// no trailing blank line (callers join records with a blank line).
pub fn format_record(fingerprint: &str, commit: &Commit) -> String {
    let mut out = String::new();
    out.push_str("===\n");
    out.push_str(&format!("commit {fingerprint}\n"));
    if commit.is_merge() {
        let p1 = &commit.parent1.as_deref().unwrap_or_default()[..7];
        let p2 = &commit.parent2.as_deref().unwrap_or_default()[..7];
        out.push_str(&format!("Merge: {p1} {p2}\n"));
    }
    out.push_str(&format!("Date: {}\n", format_date(commit.timestamp)));
    out.push_str(&commit.message);
    out.push('\n');
    out
}

fn format_date(timestamp: i64) -> String {
    let dt = DateTime::<Utc>::from_timestamp(timestamp, 0).unwrap_or_else(|| DateTime::<Utc>::from_timestamp(0, 0).unwrap());
    format!(
        "{} {} {}",
        dt.format("%a %b"),
        dt.day(),
        dt.format("%H:%M:%S %Y %z"),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;
    use tempfile::tempdir;

    #[test]
    fn epoch_commit_formats_the_canonical_gitlet_date() {
        let c = Commit::initial();
        let record = format_record(&"a".repeat(40), &c);
        assert!(record.contains("Date: Thu Jan 1 00:00:00 1970 +0000"));
    }

    #[test]
    fn merge_commit_shows_both_parent_prefixes() {
        let mut c = Commit::new("m".to_string(), 0, "a".repeat(40), BTreeMap::new());
        c.parent2 = Some("b".repeat(40));
        let record = format_record(&"c".repeat(40), &c);
        assert!(record.contains(&format!("Merge: {} {}", "a".repeat(7), "b".repeat(7))));
    }

    #[test]
    fn log_walks_first_parent_chain_from_head() {
        let temp = tempdir().unwrap();
        let repo = Repository::init(temp.path()).unwrap();
        std::env::set_current_dir(&repo.root).unwrap();

        std::fs::write(repo.root.join("a.txt"), b"1").unwrap();
        super::super::add::run("a.txt").unwrap();
        super::super::commit::run("one").unwrap();

        assert!(run().is_ok());
    }
}
