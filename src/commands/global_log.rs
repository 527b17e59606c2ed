//! # Global-Log Command
//!
//! Print a record for every commit in the object store, in filesystem
//! enumeration order (no DAG traversal, unlike `log`).
//!
//! ## Usage
//!
//! ```bash
//! gitlet global-log
//! ```

use anyhow::Result;

use crate::commands::log::format_record;
use crate::Repository;

pub fn run() -> Result<()> {
    let repo = Repository::find()?;
    let store = repo.object_store();

    let mut first = true;
    for fp in store.list_commits()? {
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
