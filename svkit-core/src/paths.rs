//! Name-to-path resolution.
//!
//! Names use `.` or `/` as separators (`blog.post` and `blog/post` are the same
//! route). All paths produced here are relative to the project root; nothing in
//! this module touches the filesystem.

use std::path::PathBuf;

use crate::{project::FileExtension, request::RequestKind};

/// Components directory relative to project root.
pub const COMPONENTS_DIR: &str = "src/lib/components";

/// Routes directory relative to project root.
pub const ROUTES_DIR: &str = "src/routes";

/// File extension for Svelte components.
pub const SVELTE_EXTENSION: &str = "svelte";

/// A user-supplied name with every `.` turned into `/`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedName(String);

impl ResolvedName {
    pub fn new(raw: &str) -> Self {
        Self(raw.replace('.', "/"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Non-empty path segments. Leading, trailing and doubled separators are dropped.
    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.0.split('/').filter(|s| !s.is_empty())
    }
}

/// Directory and file name of a single artifact.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetLocation {
    pub dir: PathBuf,
    pub file_name: String,
}

impl TargetLocation {
    /// Full path relative to the project root.
    pub fn path(&self) -> PathBuf {
        self.dir.join(&self.file_name)
    }
}

impl RequestKind {
    /// Base directory every name of this kind resolves under.
    pub fn base_dir(&self) -> &'static str {
        match self {
            RequestKind::Component => COMPONENTS_DIR,
            RequestKind::Page | RequestKind::Layout => ROUTES_DIR,
        }
    }

    /// Route file stem (`+page`, `+layout`); components have none.
    pub fn route_stem(&self) -> Option<&'static str> {
        match self {
            RequestKind::Component => None,
            RequestKind::Page => Some("+page"),
            RequestKind::Layout => Some("+layout"),
        }
    }
}

/// Resolve the primary artifact location for `raw` name.
///
/// Components become `<COMPONENTS_DIR>/<parents>/<last>.svelte`. Pages and layouts
/// become a directory under [`ROUTES_DIR`] holding a fixed `+page.svelte` or
/// `+layout.svelte`; an empty name is the routes root.
pub fn resolve(kind: RequestKind, raw: &str) -> TargetLocation {
    let name = ResolvedName::new(raw);
    let mut dir = PathBuf::from(kind.base_dir());

    match kind.route_stem() {
        None => {
            let segments: Vec<&str> = name.segments().collect();
            let (last, parents) = match segments.split_last() {
                Some((last, parents)) => (*last, parents),
                None => ("", &[][..]),
            };
            dir.extend(parents);
            TargetLocation {
                dir,
                file_name: format!("{}.{}", last, SVELTE_EXTENSION),
            }
        }
        Some(stem) => {
            dir.extend(name.segments());
            TargetLocation {
                dir,
                file_name: format!("{}.{}", stem, SVELTE_EXTENSION),
            }
        }
    }
}

/// Location of a page/layout script file next to `primary`.
///
/// Returns `None` for components.
pub fn companion(
    kind: RequestKind,
    primary: &TargetLocation,
    server: bool,
    extension: FileExtension,
) -> Option<TargetLocation> {
    let stem = kind.route_stem()?;
    let file_name = if server {
        format!("{}.server.{}", stem, extension)
    } else {
        format!("{}.{}", stem, extension)
    };
    Some(TargetLocation {
        dir: primary.dir.clone(),
        file_name,
    })
}
