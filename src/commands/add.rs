//! # Add Command
//!
//! Stage a single file for the next commit.
//!
//! ## Usage
//!
//! ```bash
//! gitlet add file.txt
//! ```

use anyhow::Result;

use crate::error::GitletError;
use crate::Repository;

pub fn run(file: &str) -> Result<()> {
    let repo = Repository::find()?;
    let working_tree = repo.working_tree();

    let content = working_tree
        .read(file)?
        .ok_or(GitletError::FileDoesNotExist)?;

    let fp = repo.object_store().put_blob(&content)?;

    let staging = repo.staging_area();
    let mut removal = staging.read_removal()?;
    removal.remove(file);

    let mut addition = staging.read_addition()?;
    let tracked_at = repo.head_commit()?.tree.get(file).cloned();
    if tracked_at.as_deref() == Some(fp.as_str()) {
        addition.remove(file);
    } else {
        addition.insert(file.to_string(), fp);
    }

    staging.write_addition(&addition)?;
    staging.write_removal(&removal)?;
    Ok(())
}
