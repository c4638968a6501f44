mod completions;
mod component;
mod layout;
mod page;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use completions::CompletionsCommand;
use component::ComponentCommand;
use eyre::{Context, Result};
use layout::LayoutCommand;
use page::PageCommand;
use svkit_core::{FileExtension, ProjectContext};

/// Extension trait for exiting on setup errors with pretty formatting
pub(crate) trait UnwrapOrExit<T> {
    fn unwrap_or_exit(self) -> T;
}

impl<T> UnwrapOrExit<T> for svkit_core::Result<T> {
    fn unwrap_or_exit(self) -> T {
        match self {
            Ok(v) => v,
            Err(e) => {
                eprintln!("{}", render_diagnostic(e));
                std::process::exit(1);
            }
        }
    }
}

fn render_diagnostic(err: svkit_core::Error) -> String {
    format!("{:?}", miette::Report::new(err))
}

#[derive(Parser)]
#[command(name = "svkit")]
#[command(version)]
#[command(about = "Generate Svelte components and SvelteKit pages and layouts")]
#[command(arg_required_else_help = true)]
pub(crate) struct Cli {
    #[command(flatten)]
    global: GlobalArgs,

    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn verbose(&self) -> bool {
        self.global.verbose
    }

    pub fn run(&self) -> Result<()> {
        match &self.command {
            Commands::CreateComponent(cmd) => cmd.run(&self.global),
            Commands::CreatePage(cmd) => cmd.run(&self.global),
            Commands::CreateLayout(cmd) => cmd.run(&self.global),
            Commands::Completions(cmd) => cmd.run(),
        }
    }
}

/// Options shared by every command.
#[derive(Args)]
pub(crate) struct GlobalArgs {
    /// Run as if svkit was started in <DIR>
    #[arg(short = 'C', long = "cwd", value_name = "DIR", global = true)]
    pub cwd: Option<PathBuf>,

    /// Print debug logs to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

impl GlobalArgs {
    /// Compute the project context once for this invocation.
    pub fn context(&self, extension: Option<FileExtension>) -> Result<ProjectContext> {
        match &self.cwd {
            Some(dir) => {
                let root = std::path::absolute(dir)
                    .wrap_err_with(|| format!("Failed to resolve '{}'", dir.display()))?;
                Ok(ProjectContext::load(root, extension))
            }
            None => Ok(ProjectContext::load_cwd(extension).unwrap_or_exit()),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Create a new Svelte component, using `/` or `.` notation for nested folders
    #[command(name = "create:component")]
    CreateComponent(ComponentCommand),

    /// Create a new SvelteKit page, using `/` or `.` notation for nested folders,
    /// or directly in `src/routes` if no name is provided
    #[command(name = "create:page")]
    CreatePage(PageCommand),

    /// Create a new SvelteKit layout, using `/` or `.` notation for nested folders,
    /// or directly in `src/routes` if no name is provided
    #[command(name = "create:layout")]
    CreateLayout(LayoutCommand),

    /// Generate shell completions
    Completions(CompletionsCommand),
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_page_flags() {
        let cli = Cli::try_parse_from(["svkit", "create:page", "blog", "-c", "--server"]).unwrap();
        let Commands::CreatePage(cmd) = cli.command else {
            panic!("expected create:page");
        };
        assert_eq!(cmd.name.as_deref(), Some("blog"));
        assert!(cmd.script);
        assert!(cmd.server);
        assert!(!cmd.dry_run);
    }

    #[test]
    fn test_parse_global_cwd_after_subcommand() {
        let cli =
            Cli::try_parse_from(["svkit", "create:layout", "-C", "app", "--lang", "ts"]).unwrap();
        assert_eq!(cli.global.cwd, Some(PathBuf::from("app")));
        let Commands::CreateLayout(cmd) = cli.command else {
            panic!("expected create:layout");
        };
        assert_eq!(cmd.name, None);
        assert_eq!(cmd.lang, Some(FileExtension::Ts));
    }

    #[test]
    fn test_component_name_required() {
        assert!(Cli::try_parse_from(["svkit", "create:component"]).is_err());
        assert!(Cli::try_parse_from(["svkit", "create:component", ""]).is_err());
        assert!(Cli::try_parse_from(["svkit", "create:component", "./."]).is_err());
    }

    #[test]
    fn test_setup_error_renders_diagnostic_code() {
        let err = svkit_core::Error::CurrentDir {
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
        };

        let rendered = render_diagnostic(err);

        assert!(rendered.contains("svkit::current_dir"));
        assert!(rendered.contains("failed to read the current working directory"));
    }

    #[test]
    fn test_unknown_lang_rejected() {
        assert!(Cli::try_parse_from(["svkit", "create:page", "--lang", "coffee"]).is_err());
    }
}
