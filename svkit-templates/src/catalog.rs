//! The fixed set of file templates.
//!
//! Rendering is a pure function of the template kind and a single name string.
//! Script stubs are the same for `.ts` and `.js` files.

/// Title used in the page heading when no name is given.
pub const PAGE_TITLE_FALLBACK: &str = "Home";

/// Layout name used in reports when no name is given.
pub const LAYOUT_NAME_FALLBACK: &str = "default";

/// Every template svkit knows how to render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemplateKind {
    Component,
    Page,
    PageScript,
    PageServerScript,
    Layout,
    LayoutScript,
    LayoutServerScript,
}

/// Render `kind` for `name`.
///
/// `Component` embeds the resolved (slash-separated) name in a comment and
/// `Page` uses the name as its heading, falling back to [`PAGE_TITLE_FALLBACK`].
/// The other templates ignore the name.
pub fn render(kind: TemplateKind, name: &str) -> String {
    match kind {
        TemplateKind::Component => format!(
            r#"<script>
</script>

<div>
  <!-- {name} component -->
</div>

<style>
</style>
"#
        ),
        TemplateKind::Page => {
            let title = if name.is_empty() {
                PAGE_TITLE_FALLBACK
            } else {
                name
            };
            format!(
                r#"<script>
</script>

<div>
  <h1>{title} Page</h1>
</div>

<style>
</style>
"#
            )
        }
        TemplateKind::Layout => r#"<script>
</script>

<div>
  <slot></slot>
</div>

<style>
</style>
"#
        .to_string(),
        TemplateKind::PageScript => load_stub("PageLoad", false),
        TemplateKind::PageServerScript => load_stub("PageServerLoad", true),
        TemplateKind::LayoutScript => load_stub("LayoutLoad", false),
        TemplateKind::LayoutServerScript => load_stub("LayoutServerLoad", true),
    }
}

fn load_stub(load_type: &str, server: bool) -> String {
    let asyncness = if server { "async " } else { "" };
    format!(
        r#"/** @type {{import('./$types').{load_type}}} */
export {asyncness}function load() {{

}}
"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_title_fallback() {
        assert!(render(TemplateKind::Page, "").contains("<h1>Home Page</h1>"));
        assert!(render(TemplateKind::Page, "about").contains("<h1>about Page</h1>"));
    }

    #[test]
    fn test_component_embeds_name() {
        let content = render(TemplateKind::Component, "ui/forms/Input");
        assert!(content.contains("<!-- ui/forms/Input component -->"));
    }

    #[test]
    fn test_layout_ignores_name() {
        assert_eq!(
            render(TemplateKind::Layout, ""),
            render(TemplateKind::Layout, "admin")
        );
    }

    #[test]
    fn test_script_stubs_are_pure() {
        assert_eq!(
            render(TemplateKind::PageScript, "a"),
            render(TemplateKind::PageScript, "b")
        );
        assert!(render(TemplateKind::PageServerScript, "").contains("export async function load()"));
        assert!(render(TemplateKind::LayoutScript, "").contains("export function load()"));
    }

    #[test]
    fn test_all_templates_end_with_newline() {
        let kinds = [
            TemplateKind::Component,
            TemplateKind::Page,
            TemplateKind::PageScript,
            TemplateKind::PageServerScript,
            TemplateKind::Layout,
            TemplateKind::LayoutScript,
            TemplateKind::LayoutServerScript,
        ];
        for kind in kinds {
            let content = render(kind, "x");
            assert!(content.ends_with("}\n") || content.ends_with("</style>\n"));
        }
    }
}
