//! `src/lib/components/**/<Name>.svelte`

use svkit_core::{Artifact, RequestKind, ResolvedName, TargetLocation, resolve};

use crate::catalog::{TemplateKind, render};

/// A Svelte component file.
pub struct ComponentFile {
    raw_name: String,
    name: ResolvedName,
    location: TargetLocation,
}

impl ComponentFile {
    pub fn new(raw_name: impl Into<String>) -> Self {
        let raw_name = raw_name.into();
        Self {
            name: ResolvedName::new(&raw_name),
            location: resolve(RequestKind::Component, &raw_name),
            raw_name,
        }
    }
}

impl Artifact for ComponentFile {
    fn location(&self) -> &TargetLocation {
        &self.location
    }

    fn label(&self) -> String {
        format!("Component \"{}\"", self.raw_name)
    }

    fn render(&self) -> String {
        render(TemplateKind::Component, self.name.as_str())
    }
}
