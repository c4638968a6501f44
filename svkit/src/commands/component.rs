use clap::Args;
use eyre::Result;
use svkit_core::{ArtifactRequest, ResolvedName};

use super::GlobalArgs;
use crate::{
    ops::{self, CreateOptions},
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct ComponentCommand {
    /// Component name, e.g. `Button`, `forms.Input` or `forms/Input`
    #[arg(value_parser = parse_component_name)]
    pub name: String,

    /// Preview the generated file without writing to disk
    #[arg(long)]
    pub dry_run: bool,
}

impl ComponentCommand {
    pub fn run(&self, global: &GlobalArgs) -> Result<()> {
        let ctx = global.context(None)?;
        let request = ArtifactRequest::component(&self.name);

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

fn parse_component_name(s: &str) -> Result<String, String> {
    if ResolvedName::new(s).segments().next().is_none() {
        return Err("component name must contain at least one path segment".to_string());
    }
    Ok(s.to_string())
}
