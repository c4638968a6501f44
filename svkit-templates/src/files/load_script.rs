//! `+page.{ts,js}`, `+page.server.{ts,js}` and the `+layout` equivalents.

use svkit_core::{Artifact, FileExtension, RequestKind, TargetLocation, companion};

use crate::catalog::{TemplateKind, render};

/// A `load` function stub next to a page or layout.
pub struct LoadScript {
    template: TemplateKind,
    server: bool,
    location: TargetLocation,
}

impl LoadScript {
    /// Script for the route at `primary`. Returns `None` for components.
    pub fn new(
        kind: RequestKind,
        primary: &TargetLocation,
        server: bool,
        extension: FileExtension,
    ) -> Option<Self> {
        let template = match (kind, server) {
            (RequestKind::Page, false) => TemplateKind::PageScript,
            (RequestKind::Page, true) => TemplateKind::PageServerScript,
            (RequestKind::Layout, false) => TemplateKind::LayoutScript,
            (RequestKind::Layout, true) => TemplateKind::LayoutServerScript,
            (RequestKind::Component, _) => return None,
        };
        let location = companion(kind, primary, server, extension)?;
        Some(Self {
            template,
            server,
            location,
        })
    }
}

impl Artifact for LoadScript {
    fn location(&self) -> &TargetLocation {
        &self.location
    }

    fn label(&self) -> String {
        if self.server {
            "Server script file".to_string()
        } else {
            "Script file".to_string()
        }
    }

    fn render(&self) -> String {
        render(self.template, "")
    }
}
