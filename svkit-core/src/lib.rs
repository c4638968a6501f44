//! Core building blocks for svkit.
//!
//! This crate resolves user-supplied names into project paths, detects the
//! project's script flavour, and writes generated files without ever touching
//! one that already exists.

mod error;
mod file;
mod paths;
mod project;
mod request;

pub use error::{Error, Result};
// File operations
pub use file::{Artifact, WriteOutcome, ensure_directory, write_if_absent};
// Path resolution
pub use paths::{
    COMPONENTS_DIR, ROUTES_DIR, ResolvedName, SVELTE_EXTENSION, TargetLocation, companion,
    resolve,
};
pub use project::{FileExtension, ProjectContext, TYPESCRIPT_MARKER};
pub use request::{ArtifactRequest, Companions, RequestKind};
