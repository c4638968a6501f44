//! Create command report data structures.

use std::path::PathBuf;

use svkit_core::{Error, WriteOutcome};

use super::output::{Output, Report};

/// Report data from a `create:*` command.
#[derive(Debug)]
pub struct CreateReport {
    /// Whether this was a dry run.
    pub dry_run: bool,
    /// One entry per requested file, in generation order.
    pub entries: Vec<FileEntry>,
}

/// A single requested file.
#[derive(Debug)]
pub struct FileEntry {
    /// Display label, e.g. `Page "about"`.
    pub label: String,
    /// Absolute target path.
    pub path: PathBuf,
    pub status: FileStatus,
}

#[derive(Debug)]
pub enum FileStatus {
    /// The file was handed to the writer.
    Written(WriteOutcome),
    /// Dry run: the file would be created with this content.
    WouldCreate(String),
    /// Dry run: the file already exists.
    WouldSkip,
}

impl CreateReport {
    pub fn created_count(&self) -> usize {
        self.count(|s| matches!(s, FileStatus::Written(o) if o.is_created()))
    }

    pub fn failed_count(&self) -> usize {
        self.count(|s| matches!(s, FileStatus::Written(o) if o.is_failed()))
    }

    fn count(&self, pred: impl Fn(&FileStatus) -> bool) -> usize {
        self.entries.iter().filter(|e| pred(&e.status)).count()
    }
}

impl Report for CreateReport {
    fn render(&self, out: &mut dyn Output) {
        for entry in &self.entries {
            render_entry(entry, out);
        }

        if self.dry_run {
            let pending = self
                .entries
                .iter()
                .filter(|e| matches!(e.status, FileStatus::WouldCreate(_)))
                .count();
            out.divider("Summary");
            out.info(&format!("{} file(s) would be created", pending));
        }
    }
}

fn render_entry(entry: &FileEntry, out: &mut dyn Output) {
    let path = entry.path.display();
    match &entry.status {
        FileStatus::Written(WriteOutcome::Created) => {
            out.success(&format!("{} created at {}", entry.label, path));
        }
        FileStatus::Written(WriteOutcome::SkippedExisting) => {
            out.warning(&format!(
                "{} already exists at {}. Skipping.",
                entry.label, path
            ));
        }
        FileStatus::Written(WriteOutcome::Failed(err)) => match err {
            Error::DirectoryCreation { .. } => {
                out.error(&format!("Failed to create directory: {}", err.reason()));
            }
            _ => {
                out.error(&format!(
                    "Failed to create {}: {}",
                    entry.label.to_lowercase(),
                    err.reason()
                ));
            }
        },
        FileStatus::WouldCreate(content) => {
            out.divider(&path.to_string());
            out.preformatted(content);
        }
        FileStatus::WouldSkip => {
            out.warning(&format!(
                "{} already exists at {}. Would skip.",
                entry.label, path
            ));
        }
    }
}
