//! `src/routes/**/+layout.svelte`

use svkit_core::{Artifact, RequestKind, TargetLocation, resolve};

use crate::catalog::{LAYOUT_NAME_FALLBACK, TemplateKind, render};

/// A SvelteKit layout component.
pub struct LayoutFile {
    raw_name: String,
    location: TargetLocation,
}

impl LayoutFile {
    pub fn new(raw_name: impl Into<String>) -> Self {
        let raw_name = raw_name.into();
        Self {
            location: resolve(RequestKind::Layout, &raw_name),
            raw_name,
        }
    }
}

impl Artifact for LayoutFile {
    fn location(&self) -> &TargetLocation {
        &self.location
    }

    fn label(&self) -> String {
        let name = if self.raw_name.is_empty() {
            LAYOUT_NAME_FALLBACK
        } else {
            &self.raw_name
        };
        format!("Layout \"{}\"", name)
    }

    fn render(&self) -> String {
        render(TemplateKind::Layout, &self.raw_name)
    }
}
