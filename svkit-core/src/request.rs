//! Generation requests as parsed from the command line.

/// What a `create:*` command generates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestKind {
    Component,
    Page,
    Layout,
}

impl RequestKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            RequestKind::Component => "component",
            RequestKind::Page => "page",
            RequestKind::Layout => "layout",
        }
    }
}

/// Optional script files generated next to a page or layout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Companions {
    /// `+page.{ts,js}` / `+layout.{ts,js}`
    pub script: bool,
    /// `+page.server.{ts,js}` / `+layout.server.{ts,js}`
    pub server: bool,
}

/// A single invocation's worth of artifacts to generate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactRequest {
    pub kind: RequestKind,
    /// Name exactly as typed; empty means the routes root for pages and layouts.
    pub raw_name: String,
    pub companions: Companions,
}

impl ArtifactRequest {
    /// Components never have companions.
    pub fn component(name: impl Into<String>) -> Self {
        Self {
            kind: RequestKind::Component,
            raw_name: name.into(),
            companions: Companions::default(),
        }
    }

    pub fn page(name: Option<String>, companions: Companions) -> Self {
        Self {
            kind: RequestKind::Page,
            raw_name: name.unwrap_or_default(),
            companions,
        }
    }

    pub fn layout(name: Option<String>, companions: Companions) -> Self {
        Self {
            kind: RequestKind::Layout,
            raw_name: name.unwrap_or_default(),
            companions,
        }
    }
}
