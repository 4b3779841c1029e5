//! Terminal output: the console the pipeline talks to.

use std::io::{self, IsTerminal};

use console::Term;

use gosprout_core::{
    application::ports::Console,
    domain::markup::{self, Piece},
};

use crate::cli::GlobalArgs;
use crate::config::AppConfig;

/// Writes pipeline lines to stdout/stderr and reads answers from stdin.
///
/// Each channel renders colour only when it is a terminal and colour has
/// not been turned off.
pub struct OutputManager {
    stdout: Term,
    stderr: Term,
    stdout_styled: bool,
    stderr_styled: bool,
}

impl OutputManager {
    /// Build an `OutputManager` from parsed CLI flags and loaded config.
    pub fn new(args: &GlobalArgs, config: &AppConfig) -> Self {
        let color = !(args.no_color || config.output.no_color);
        Self {
            stdout: Term::stdout(),
            stderr: Term::stderr(),
            stdout_styled: color && io::stdout().is_terminal(),
            stderr_styled: color && io::stderr().is_terminal(),
        }
    }

    /// `true` if ANSI colours are written to stdout.
    pub fn supports_color(&self) -> bool {
        self.stdout_styled
    }
}

impl Console for OutputManager {
    fn print(&self, line: &[Piece<'_>]) -> io::Result<()> {
        self.stdout
            .write_line(&markup::render_line(line, self.stdout_styled))
    }

    fn eprint(&self, line: &[Piece<'_>]) -> io::Result<()> {
        self.stderr
            .write_line(&markup::render_line(line, self.stderr_styled))
    }

    fn ask(&self, prompt: &str) -> io::Result<String> {
        self.stdout.write_str(prompt)?;
        self.stdout.flush()?;

        // `Term::read_line` needs a tty; answers may be piped.
        let mut input = String::new();
        io::stdin().read_line(&mut input)?;
        Ok(clean_answer(&input).to_string())
    }
}

/// Drop the line ending and surrounding spaces and tabs.
fn clean_answer(raw: &str) -> &str {
    raw.trim_matches([' ', '\t', '\r', '\n'])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_manager(no_color: bool) -> OutputManager {
        let args = GlobalArgs {
            verbose: 0,
            quiet: false,
            no_color,
        };
        OutputManager::new(&args, &AppConfig::default())
    }

    #[test]
    fn answers_lose_line_endings_and_padding() {
        assert_eq!(clean_answer("  yes \t\r\n"), "yes");
        assert_eq!(clean_answer("\n"), "");
        assert_eq!(clean_answer(""), "");
        assert_eq!(clean_answer("a b\n"), "a b");
    }

    #[test]
    fn no_color_disables_styling() {
        assert!(!make_manager(true).supports_color());
    }

    #[test]
    fn config_can_disable_colour() {
        let args = GlobalArgs {
            verbose: 0,
            quiet: false,
            no_color: false,
        };
        let mut config = AppConfig::default();
        config.output.no_color = true;
        assert!(!OutputManager::new(&args, &config).supports_color());
    }
}
