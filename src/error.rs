//! # Error Surface
//!
//! A closed catalogue of user-visible error strings. Every variant here is
//! bit-exact with the text a command is required to print; anything else
//! (a corrupted repository, an unreadable ref file) bubbles up as a plain
//! `anyhow::Error` instead, since it falls outside the user-facing taxonomy.

use thiserror::Error;

/// One of the fixed, user-visible error conditions a command can raise.
///
/// `main` prints this to stderr via its `Display` impl and exits with code 1.
/// It deliberately carries no extra context fields beyond what the message
/// needs (e.g. the file name) — the catalogue is closed, not extensible.
#[derive(Debug, Error)]
pub enum GitletError {
    #[error("Please enter a command.")]
    NoCommand,

    #[error("No command with that name exists.")]
    UnknownCommand,

    #[error("Incorrect operands.")]
    IncorrectOperands,

    #[error("Not in an initialized Gitlet directory.")]
    NotInitialized,

    #[error("A Gitlet version-control system already exists in the current directory.")]
    AlreadyInitialized,

    #[error("File does not exist.")]
    FileDoesNotExist,

    #[error("Please enter a file name.")]
    BlankFileName,

    #[error("No reason to remove the file.")]
    NoReasonToRemove,

    #[error("Please enter a commit message.")]
    BlankCommitMessage,

    #[error("No changes added to the commit.")]
    NothingToCommit,

    #[error("Found no commit with that message.")]
    NoCommitWithMessage,

    #[error("A branch with that name already exists.")]
    BranchAlreadyExists,

    #[error("Cannot remove the current branch.")]
    CannotRemoveCurrentBranch,

    #[error("A branch with that name does not exist.")]
    NoSuchBranch,

    #[error("File does not exist in that commit.")]
    FileNotInCommit,

    #[error("No commit with that id exists.")]
    NoCommitWithId,

    #[error("No such branch exists.")]
    NoSuchBranchExists,

    #[error("No need to checkout the current branch.")]
    AlreadyOnBranch,

    #[error("There is an untracked file in the way; delete it, or add and commit it first.")]
    UntrackedFileInTheWay,

    #[error("You have uncommitted changes.")]
    UncommittedChanges,

    #[error("Cannot merge a branch with itself.")]
    MergeWithSelf,
}
