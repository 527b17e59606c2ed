//! # gitlet CLI
//!
//! Argument parsing and dispatch into the VCS Core operations.

use clap::error::ErrorKind;
use clap::{Parser, Subcommand};

use gitlet::commands;
use gitlet::error::GitletError;

/// gitlet - a miniature version-control system
///
/// Created by Sudeep Ranjan Sahoo
/// GitHub: https://github.com/srs-sudeep
#[derive(Parser)]
#[command(name = "gitlet")]
#[command(author = "Sudeep Ranjan Sahoo <sudeep.ranjan.sahoo@example.com>")]
#[command(version = "0.1.0")]
#[command(about = "A miniature content-addressed version-control system", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize a new gitlet repository in the current directory
    Init,

    /// Stage a file for the next commit
    Add { file: String },

    /// Unstage a file, staging its removal if it is tracked
    Rm { file: String },

    /// Record a new commit from the staging area
    Commit { message: String },

    /// Show the commit history along the first-parent chain from HEAD
    Log,

    /// Show every commit ever made, in no particular order
    #[command(name = "global-log")]
    GlobalLog,

    /// Print the fingerprints of all commits with an exact message match
    Find { message: String },

    /// Show branches, staged/removed files, and working tree status
    Status,

    /// Create a new branch pointing at the current head commit
    Branch { name: String },

    /// Delete a branch pointer (not its commits)
    #[command(name = "rm-branch")]
    RmBranch { name: String },

    /// Restore a file, or switch to another branch
    Checkout {
        /// Branch name, or a commit id when `file` is also given
        target: String,

        /// File to restore from `target` (or from HEAD if `target` is `--`)
        #[arg(last = true)]
        file: Option<String>,
    },

    /// Move the current branch to an arbitrary commit
    Reset { commit_id: String },

    /// Merge another branch into the current one
    Merge { branch: String },
}

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => match map_clap_error(err.kind()) {
            Some(mapped) => {
                eprintln!("{mapped}");
                std::process::exit(1);
            }
            None => err.exit(),
        },
    };

    let result = match &cli.command {
        Commands::Init => commands::init::run(),
        Commands::Add { file } => commands::add::run(file),
        Commands::Rm { file } => commands::rm::run(file),
        Commands::Commit { message } => commands::commit::run(message),
        Commands::Log => commands::log::run(),
        Commands::GlobalLog => commands::global_log::run(),
        Commands::Find { message } => commands::find::run(message),
        Commands::Status => commands::status::run(),
        Commands::Branch { name } => commands::branch::run(name),
        Commands::RmBranch { name } => commands::rm_branch::run(name),
        Commands::Checkout { target, file } => match file {
            Some(file) if target == "--" => commands::checkout::file_from_head(file),
            Some(file) => commands::checkout::file_from_commit_id(target, file),
            None => commands::checkout::branch(target),
        },
        Commands::Reset { commit_id } => commands::reset::run(commit_id),
        Commands::Merge { branch } => commands::merge::run(branch),
    };

    if let Err(err) = result {
        eprintln!("{err}");
        std::process::exit(1);
    }
}

/// Map a clap parse failure onto the catalogue's CLI-shape errors. `None`
/// means the failure is clap's own concern (`--help`, `--version`, usage
/// text) and should be rendered and exited on as clap would.
fn map_clap_error(kind: ErrorKind) -> Option<GitletError> {
    match kind {
        ErrorKind::MissingSubcommand | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand => {
            Some(GitletError::NoCommand)
        }
        ErrorKind::InvalidSubcommand => Some(GitletError::UnknownCommand),
        ErrorKind::MissingRequiredArgument
        | ErrorKind::TooManyValues
        | ErrorKind::TooFewValues
        | ErrorKind::WrongNumberOfValues
        | ErrorKind::UnknownArgument
        | ErrorKind::ArgumentConflict => Some(GitletError::IncorrectOperands),
        _ => None,
    }
}
