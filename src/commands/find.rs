//! # Find Command
//!
//! Print the fingerprint of every commit whose message equals the given
//! argument.
//!
//! ## Usage
//!
//! ```bash
//! gitlet find "fix the thing"
//! ```

use anyhow::Result;

use crate::error::GitletError;
use crate::Repository;

pub fn run(message: &str) -> Result<()> {
    let repo = Repository::find()?;
    let store = repo.object_store();

    let mut found = false;
    for fp in store.list_commits()? {
        let commit = store
            .get_commit(&fp)?
            .ok_or_else(|| anyhow::anyhow!("dangling commit reference: {fp}"))?;
        if commit.message == message {
            println!("{fp}");
            found = true;
        }
    }

    if !found {
        anyhow::bail!(GitletError::NoCommitWithMessage);
    }
    Ok(())
}
