//! Snapshot tests for the rendered templates.
//!
//! Run `cargo insta review` to update snapshots when making intentional changes.

use std::fs;

use svkit_core::{ArtifactRequest, Companions, FileExtension, ProjectContext};
use svkit_templates::{TemplateKind, plan, render};
use tempfile::TempDir;

#[test]
fn test_component_template() {
    insta::assert_snapshot!(render(TemplateKind::Component, "ui/Button"), @r"
    <script>
    </script>

    <div>
      <!-- ui/Button component -->
    </div>

    <style>
    </style>
    ");
}

#[test]
fn test_root_page_template() {
    insta::assert_snapshot!(render(TemplateKind::Page, ""), @r"
    <script>
    </script>

    <div>
      <h1>Home Page</h1>
    </div>

    <style>
    </style>
    ");
}

#[test]
fn test_layout_template() {
    insta::assert_snapshot!(render(TemplateKind::Layout, "admin"), @r"
    <script>
    </script>

    <div>
      <slot></slot>
    </div>

    <style>
    </style>
    ");
}

#[test]
fn test_page_script_template() {
    insta::assert_snapshot!(render(TemplateKind::PageScript, ""), @r"
    /** @type {import('./$types').PageLoad} */
    export function load() {

    }
    ");
}

#[test]
fn test_layout_server_script_template() {
    insta::assert_snapshot!(render(TemplateKind::LayoutServerScript, ""), @r"
    /** @type {import('./$types').LayoutServerLoad} */
    export async function load() {

    }
    ");
}

#[test]
fn test_written_files_match_rendered_content() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("tsconfig.json"), "{}").unwrap();
    let ctx = ProjectContext::load(temp.path(), None);
    assert_eq!(ctx.extension, FileExtension::Ts);

    let request = ArtifactRequest::page(
        Some("blog".to_string()),
        Companions {
            script: true,
            server: true,
        },
    );

    for file in plan(&request, &ctx) {
        assert!(file.write(&ctx.root).is_created());
        assert_eq!(fs::read_to_string(file.path(&ctx.root)).unwrap(), file.render());
    }

    assert!(temp.path().join("src/routes/blog/+page.ts").is_file());
    assert!(temp.path().join("src/routes/blog/+page.server.ts").is_file());
}
