use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

/// Result type for svkit-core operations.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("failed to read the current working directory")]
    #[diagnostic(
        code(svkit::current_dir),
        help("pass the project directory explicitly with -C <DIR>")
    )]
    CurrentDir {
        #[source]
        source: std::io::Error,
    },

    #[error("failed to create directory '{}'", path.display())]
    #[diagnostic(
        code(svkit::directory_creation),
        help("check that no parent path component is a regular file and that it is writable")
    )]
    DirectoryCreation {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write '{}'", path.display())]
    #[diagnostic(code(svkit::file_write))]
    FileWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    /// The underlying I/O failure, rendered for the user.
    pub fn reason(&self) -> String {
        match self {
            Error::CurrentDir { source }
            | Error::DirectoryCreation { source, .. }
            | Error::FileWrite { source, .. } => source.to_string(),
        }
    }
}
