//! Turning a request into the ordered list of files to generate.

use svkit_core::{Artifact, ArtifactRequest, ProjectContext, RequestKind};

use crate::files::{ComponentFile, LayoutFile, LoadScript, PageFile};

/// Files for `request`, in generation order: primary, script, server script.
pub fn plan(request: &ArtifactRequest, ctx: &ProjectContext) -> Vec<Box<dyn Artifact>> {
    let primary: Box<dyn Artifact> = match request.kind {
        RequestKind::Component => Box::new(ComponentFile::new(&request.raw_name)),
        RequestKind::Page => Box::new(PageFile::new(&request.raw_name)),
        RequestKind::Layout => Box::new(LayoutFile::new(&request.raw_name)),
    };

    let mut files = Vec::with_capacity(3);
    let companions = [
        (request.companions.script, false),
        (request.companions.server, true),
    ];
    for (wanted, server) in companions {
        if !wanted {
            continue;
        }
        if let Some(script) =
            LoadScript::new(request.kind, primary.location(), server, ctx.extension)
        {
            files.push(Box::new(script) as Box<dyn Artifact>);
        }
    }
    files.insert(0, primary);
    files
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use svkit_core::{Companions, FileExtension};

    use super::*;

    fn ctx(extension: FileExtension) -> ProjectContext {
        ProjectContext {
            root: PathBuf::from("/project"),
            extension,
        }
    }

    fn paths(files: &[Box<dyn Artifact>]) -> Vec<String> {
        files
            .iter()
            .map(|f| f.location().path().to_string_lossy().replace('\\', "/"))
            .collect()
    }

    #[test]
    fn test_page_with_both_companions() {
        let request = ArtifactRequest::page(
            Some("foo".to_string()),
            Companions {
                script: true,
                server: true,
            },
        );
        let files = plan(&request, &ctx(FileExtension::Ts));

        assert_eq!(
            paths(&files),
            vec![
                "src/routes/foo/+page.svelte",
                "src/routes/foo/+page.ts",
                "src/routes/foo/+page.server.ts",
            ]
        );
    }

    #[test]
    fn test_layout_server_only() {
        let request = ArtifactRequest::layout(
            None,
            Companions {
                script: false,
                server: true,
            },
        );
        let files = plan(&request, &ctx(FileExtension::Js));

        assert_eq!(
            paths(&files),
            vec!["src/routes/+layout.svelte", "src/routes/+layout.server.js"]
        );
    }

    #[test]
    fn test_component_is_single_file() {
        let request = ArtifactRequest::component("ui.Button");
        let files = plan(&request, &ctx(FileExtension::Ts));

        assert_eq!(paths(&files), vec!["src/lib/components/ui/Button.svelte"]);
    }
}
