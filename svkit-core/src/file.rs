use std::{
    fs::{self, OpenOptions},
    io::{self, Write},
    path::{Path, PathBuf},
};

use crate::{
    error::{Error, Result},
    paths::TargetLocation,
};

/// Trait for types that represent a generated file
pub trait Artifact {
    /// Where the file goes, relative to the project root
    fn location(&self) -> &TargetLocation;

    /// Human-readable name used in reports (e.g. `Page "about"`)
    fn label(&self) -> String;

    /// Render the file content
    fn render(&self) -> String;

    /// Absolute path of the file under `root`
    fn path(&self, root: &Path) -> PathBuf {
        root.join(self.location().path())
    }

    /// Check if the file exists under `root`
    fn exists(&self, root: &Path) -> bool {
        self.path(root).exists()
    }

    /// Create the parent directory, then the file unless it is already there.
    ///
    /// Never touches an existing file.
    fn write(&self, root: &Path) -> WriteOutcome {
        if let Err(err) = ensure_directory(&root.join(&self.location().dir)) {
            return WriteOutcome::Failed(err);
        }
        write_if_absent(&self.path(root), &self.render())
    }
}

/// Result of a write operation
#[derive(Debug)]
pub enum WriteOutcome {
    /// File was written
    Created,
    /// File was skipped (already exists)
    SkippedExisting,
    /// Directory creation or the write itself failed
    Failed(Error),
}

impl WriteOutcome {
    pub fn is_created(&self) -> bool {
        matches!(self, WriteOutcome::Created)
    }

    pub fn is_skipped(&self) -> bool {
        matches!(self, WriteOutcome::SkippedExisting)
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, WriteOutcome::Failed(_))
    }
}

/// Create `dir` and all missing parents. Existing directories are a no-op.
pub fn ensure_directory(dir: &Path) -> Result<()> {
    fs::create_dir_all(dir).map_err(|source| {
        tracing::warn!(dir = %dir.display(), error = %source, "directory creation failed");
        Error::DirectoryCreation {
            path: dir.to_path_buf(),
            source,
        }
    })?;
    tracing::debug!(dir = %dir.display(), "directory ensured");
    Ok(())
}

/// Write `content` to `path` only if nothing exists there yet.
///
/// The parent directory must already exist. A file that appears between the
/// existence check and the write is reported as skipped, not overwritten.
pub fn write_if_absent(path: &Path, content: &str) -> WriteOutcome {
    if path.exists() {
        tracing::debug!(path = %path.display(), "file exists, skipping");
        return WriteOutcome::SkippedExisting;
    }

    match create_new(path, content) {
        Ok(()) => {
            tracing::debug!(path = %path.display(), bytes = content.len(), "file written");
            WriteOutcome::Created
        }
        Err(err) if err.kind() == io::ErrorKind::AlreadyExists => {
            tracing::debug!(path = %path.display(), "file appeared before write, skipping");
            WriteOutcome::SkippedExisting
        }
        Err(source) => {
            tracing::warn!(path = %path.display(), error = %source, "file write failed");
            WriteOutcome::Failed(Error::FileWrite {
                path: path.to_path_buf(),
                source,
            })
        }
    }
}

fn create_new(path: &Path, content: &str) -> io::Result<()> {
    let file = OpenOptions::new().write(true).create_new(true).open(path)?;
    write_or_remove(file, path, content)
}

/// Write `content` into the freshly created `path`, removing it again on failure.
///
/// A truncated file would otherwise be skipped as existing on every later run.
fn write_or_remove(mut writer: impl Write, path: &Path, content: &str) -> io::Result<()> {
    let result = writer
        .write_all(content.as_bytes())
        .and_then(|()| writer.flush());
    if result.is_err() {
        drop(writer);
        if let Err(err) = fs::remove_file(path) {
            tracing::warn!(path = %path.display(), error = %err, "failed to remove partial file");
        }
    }
    result
}
