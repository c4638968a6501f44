//! Output trait for rendering reports to different targets.

use console::style;

/// Target output for reports.
///
/// Reports describe *what* to output using these semantic methods.
/// Implementations decide *how* to render.
pub trait Output {
    /// Render a success message.
    fn success(&mut self, msg: &str);

    /// Render a warning message.
    fn warning(&mut self, msg: &str);

    /// Render an error message.
    fn error(&mut self, msg: &str);

    /// Render an informational message.
    fn info(&mut self, msg: &str);

    /// Render a separator/divider with a label.
    fn divider(&mut self, label: &str);

    /// Render a block of preformatted text.
    fn preformatted(&mut self, text: &str);
}

/// A report that can render itself to an output.
pub trait Report {
    /// Render this report to the given output.
    fn render(&self, out: &mut dyn Output);
}

/// Terminal output with colored messages.
///
/// Only errors go to stderr; skip warnings are ordinary results and stay on stdout.
pub struct TerminalOutput;

impl TerminalOutput {
    pub fn new() -> Self {
        Self
    }
}

impl Default for TerminalOutput {
    fn default() -> Self {
        Self::new()
    }
}

impl Output for TerminalOutput {
    fn success(&mut self, msg: &str) {
        println!("{}", style(msg).green());
    }

    fn warning(&mut self, msg: &str) {
        println!("{}", style(msg).yellow());
    }

    fn error(&mut self, msg: &str) {
        eprintln!("{}", style(msg).red().for_stderr());
    }

    fn info(&mut self, msg: &str) {
        println!("{}", style(msg).blue());
    }

    fn divider(&mut self, label: &str) {
        println!("{}", style(format!("── {} ──", label)).bold());
    }

    fn preformatted(&mut self, text: &str) {
        println!("{}", text.trim_end_matches('\n'));
    }
}
