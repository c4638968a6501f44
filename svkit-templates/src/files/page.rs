//! `src/routes/**/+page.svelte`

use svkit_core::{Artifact, RequestKind, TargetLocation, resolve};

use crate::catalog::{PAGE_TITLE_FALLBACK, TemplateKind, render};

/// A SvelteKit page component.
pub struct PageFile {
    raw_name: String,
    location: TargetLocation,
}

impl PageFile {
    pub fn new(raw_name: impl Into<String>) -> Self {
        let raw_name = raw_name.into();
        Self {
            location: resolve(RequestKind::Page, &raw_name),
            raw_name,
        }
    }

    /// Heading text; the raw name, or "Home" for the routes root.
    pub fn title(&self) -> &str {
        if self.raw_name.is_empty() {
            PAGE_TITLE_FALLBACK
        } else {
            &self.raw_name
        }
    }
}

impl Artifact for PageFile {
    fn location(&self) -> &TargetLocation {
        &self.location
    }

    fn label(&self) -> String {
        format!("Page \"{}\"", self.title())
    }

    fn render(&self) -> String {
        render(TemplateKind::Page, &self.raw_name)
    }
}
