//! Create operation - generate the files for one request.

use svkit_core::{ArtifactRequest, ProjectContext};
use svkit_templates::plan;

use crate::reports::{CreateReport, FileEntry, FileStatus};

/// Options for the create operation.
pub struct CreateOptions {
    /// Whether to preview without writing files.
    pub dry_run: bool,
}

/// Execute the create operation.
///
/// Files are handled one after another, primary file first. A failure for one
/// file is recorded in the report and does not stop the remaining files.
pub fn create(request: &ArtifactRequest, ctx: &ProjectContext, opts: CreateOptions) -> CreateReport {
    tracing::debug!(
        kind = request.kind.as_str(),
        name = %request.raw_name,
        dry_run = opts.dry_run,
        "creating"
    );

    let entries = plan(request, ctx)
        .iter()
        .map(|file| {
            let status = if !opts.dry_run {
                FileStatus::Written(file.write(&ctx.root))
            } else if file.exists(&ctx.root) {
                FileStatus::WouldSkip
            } else {
                FileStatus::WouldCreate(file.render())
            };
            FileEntry {
                label: file.label(),
                path: file.path(&ctx.root),
                status,
            }
        })
        .collect();

    let report = CreateReport {
        dry_run: opts.dry_run,
        entries,
    };
    tracing::debug!(
        created = report.created_count(),
        failed = report.failed_count(),
        "done"
    );
    report
}
