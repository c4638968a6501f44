use clap::Args;
use eyre::Result;
use svkit_core::{ArtifactRequest, Companions, FileExtension};

use super::GlobalArgs;
use crate::{
    ops::{self, CreateOptions},
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct PageCommand {
    /// Route name, e.g. `about` or `blog.post`; omit for `src/routes` itself
    pub name: Option<String>,

    /// Create a +page.ts/js file
    #[arg(short = 'c', long)]
    pub script: bool,

    /// Create a +page.server.ts/js file
    #[arg(short, long)]
    pub server: bool,

    /// Script language (overrides tsconfig.json detection)
    #[arg(short, long, value_name = "ts|js")]
    pub lang: Option<FileExtension>,

    /// Preview generated files without writing to disk
    #[arg(long)]
    pub dry_run: bool,
}

impl PageCommand {
    pub fn run(&self, global: &GlobalArgs) -> Result<()> {
        let ctx = global.context(self.lang)?;
        let request = ArtifactRequest::page(
            self.name.clone(),
            Companions {
                script: self.script,
                server: self.server,
            },
        );

        let report = ops::create(
            &request,
            &ctx,
            CreateOptions {
                dry_run: self.dry_run,
            },
        );

        report.render(&mut TerminalOutput::new());
        Ok(())
    }
}
