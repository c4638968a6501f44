//! Svelte and SvelteKit templates for svkit.
//!
//! This crate is used internally by the `svkit` CLI. It knows the seven file
//! templates and which of them a request produces:
//!
//! - `src/lib/components/**/<Name>.svelte` - components
//! - `src/routes/**/+page.svelte`, `+page.{ts,js}`, `+page.server.{ts,js}` - pages
//! - `src/routes/**/+layout.svelte`, `+layout.{ts,js}`, `+layout.server.{ts,js}` - layouts
//!
//! ```ignore
//! use svkit_core::{ArtifactRequest, ProjectContext};
//! use svkit_templates::plan;
//!
//! let ctx = ProjectContext::load_cwd(None)?;
//! for file in plan(&ArtifactRequest::component("ui.Button"), &ctx) {
//!     file.write(&ctx.root);
//! }
//! ```

mod catalog;
pub mod files;
mod plan;

pub use catalog::{LAYOUT_NAME_FALLBACK, PAGE_TITLE_FALLBACK, TemplateKind, render};
pub use plan::plan;
