//! # Init Command
//!
//! Initialize a new gitlet repository in the current directory. Fails with
//! [`GitletError::AlreadyInitialized`] if one already exists there —
//! gitlet has no "reinitialize in place" behavior.
//!
//! ## Usage
//!
//! ```bash
//! gitlet init
//! ```

use anyhow::Result;

use crate::Repository;

pub fn run() -> Result<()> {
    Repository::init(&std::env::current_dir()?)?;
    Ok(())
}
