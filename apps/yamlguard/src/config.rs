//! Effective settings resolution.
//!
//! Merges CLI flags with the environment into an `Effective` value that is
//! passed explicitly to the runner and reporter.
//! Defaults:
//! - `quiet`, `verbose`, `github_actions`: false
//! - `color`: true on a terminal
//!
//! Overrides precedence: CLI > environment > defaults. Color is turned off
//! by `--no-color`, a set `NO_COLOR`, or a non-terminal stdout.

use std::io::IsTerminal;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Fully-resolved configuration used by the run after applying precedence.
pub struct Effective {
    pub quiet: bool,
    pub verbose: bool,
    pub github_actions: bool,
    pub color: bool,
}

impl Default for Effective {
    fn default() -> Self {
        Self {
            quiet: false,
            verbose: false,
            github_actions: false,
            color: true,
        }
    }
}

/// Resolve `Effective` from CLI flags and environment facts.
///
/// `no_color_env` and `stdout_tty` are passed in so callers (and tests)
/// control the environment; see `env_no_color` and `stdout_is_tty`.
pub fn resolve_effective(
    cli_quiet: bool,
    cli_verbose: bool,
    cli_github_actions: bool,
    cli_no_color: bool,
    no_color_env: bool,
    stdout_tty: bool,
) -> Effective {
    Effective {
        quiet: cli_quiet,
        verbose: cli_verbose,
        github_actions: cli_github_actions,
        color: !cli_no_color && !no_color_env && stdout_tty,
    }
}

/// `NO_COLOR` disables color whenever it is present.
pub fn env_no_color() -> bool {
    std::env::var_os("NO_COLOR").is_some()
}

pub fn stdout_is_tty() -> bool {
    std::io::stdout().is_terminal()
}
