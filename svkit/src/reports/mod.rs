//! Report data structures for commands.
//!
//! Commands build reports, then render them to an Output target.

mod create;
mod output;

pub use create::{CreateReport, FileEntry, FileStatus};
pub use output::{Report, TerminalOutput};
