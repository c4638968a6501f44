//! Project detection and the per-invocation project context.

use std::{
    fmt,
    path::{Path, PathBuf},
    str::FromStr,
};

use crate::error::{Error, Result};

/// Marker file whose presence selects TypeScript script files.
pub const TYPESCRIPT_MARKER: &str = "tsconfig.json";

/// Extension used for `+page`/`+layout` script and server-script files.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileExtension {
    Ts,
    Js,
}

impl FileExtension {
    /// Probe `root` for the TypeScript marker file.
    ///
    /// A missing marker is the normal JavaScript case, not a failure.
    pub fn detect(root: &Path) -> Self {
        if root.join(TYPESCRIPT_MARKER).exists() {
            FileExtension::Ts
        } else {
            FileExtension::Js
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            FileExtension::Ts => "ts",
            FileExtension::Js => "js",
        }
    }
}

impl fmt::Display for FileExtension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for FileExtension {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "ts" | "typescript" => Ok(FileExtension::Ts),
            "js" | "javascript" => Ok(FileExtension::Js),
            _ => Err(format!("unknown language '{}', expected 'ts' or 'js'", s)),
        }
    }
}

/// Environment-derived settings, computed once per command and passed explicitly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectContext {
    /// Directory that generated paths are relative to.
    pub root: PathBuf,
    /// Extension for every script file generated in this invocation.
    pub extension: FileExtension,
}

impl ProjectContext {
    /// Build a context for `root`, detecting the extension unless one is forced.
    pub fn load(root: impl Into<PathBuf>, extension: Option<FileExtension>) -> Self {
        let root = root.into();
        let extension = extension.unwrap_or_else(|| FileExtension::detect(&root));
        tracing::debug!(root = %root.display(), %extension, "project context loaded");
        Self { root, extension }
    }

    /// Build a context for the process working directory.
    pub fn load_cwd(extension: Option<FileExtension>) -> Result<Self> {
        let cwd = std::env::current_dir().map_err(|source| Error::CurrentDir { source })?;
        Ok(Self::load(cwd, extension))
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_detect_without_marker_is_js() {
        let temp = TempDir::new().unwrap();
        assert_eq!(FileExtension::detect(temp.path()), FileExtension::Js);
    }

    #[test]
    fn test_detect_with_marker_is_ts() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("tsconfig.json"), "{}").unwrap();
        assert_eq!(FileExtension::detect(temp.path()), FileExtension::Ts);
    }

    #[test]
    fn test_forced_extension_skips_detection() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("tsconfig.json"), "{}").unwrap();

        let ctx = ProjectContext::load(temp.path(), Some(FileExtension::Js));
        assert_eq!(ctx.extension, FileExtension::Js);
        assert_eq!(ctx.root, temp.path());
    }

    #[test]
    fn test_from_str() {
        assert_eq!(FileExtension::from_str("ts").unwrap(), FileExtension::Ts);
        assert_eq!(
            FileExtension::from_str("TypeScript").unwrap(),
            FileExtension::Ts
        );
        assert_eq!(FileExtension::from_str("js").unwrap(), FileExtension::Js);
        assert_eq!(
            FileExtension::from_str("javascript").unwrap(),
            FileExtension::Js
        );
        assert!(FileExtension::from_str("coffee").is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(FileExtension::Ts.to_string(), "ts");
        assert_eq!(FileExtension::Js.to_string(), "js");
    }
}
