//! Human output for validation runs.
//!
//! Warnings and errors are always written. `quiet` hides info and success
//! lines and the summary. With `verbose`, the summary is followed by every
//! recorded error, then every warning.

use crate::config::Effective;
use crate::models::{Diagnostic, LintResult, Severity};
use crate::utils::{bold, error_prefix, info_prefix, red, success_prefix, warning_prefix, yellow};
use std::io::{self, Write};

/// Line-oriented printer configured once at startup.
pub struct Reporter<W: Write> {
    out: W,
    quiet: bool,
    verbose: bool,
    color: bool,
}

impl Reporter<io::Stdout> {
    pub fn stdout(eff: &Effective) -> Self {
        Self::new(io::stdout(), eff)
    }
}

impl<W: Write> Reporter<W> {
    pub fn new(out: W, eff: &Effective) -> Self {
        Self {
            out,
            quiet: eff.quiet,
            verbose: eff.verbose,
            color: eff.color,
        }
    }

    pub fn info(&mut self, message: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        writeln!(self.out, "{}  {}", info_prefix(self.color), message)
    }

    pub fn success(&mut self, message: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        writeln!(self.out, "{}  {}", success_prefix(self.color), message)
    }

    pub fn warning(&mut self, message: &str) -> io::Result<()> {
        writeln!(self.out, "{}  {}", warning_prefix(self.color), message)
    }

    pub fn error(&mut self, message: &str) -> io::Result<()> {
        writeln!(self.out, "{}  {}", error_prefix(self.color), message)
    }

    pub fn diagnostic(&mut self, d: &Diagnostic) -> io::Result<()> {
        match d.severity {
            Severity::Error => self.error(&d.message),
            Severity::Warning => self.warning(&d.message),
        }
    }

    /// Print summary counts, plus per-message details in verbose mode.
    /// Nothing is printed in quiet mode.
    pub fn summary(&mut self, res: &LintResult) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let c = self.color;
        writeln!(self.out, "\n{}", bold("Validation Summary:", c))?;
        writeln!(
            self.out,
            "  Errors: {}",
            red(&res.summary.errors.to_string(), c)
        )?;
        writeln!(
            self.out,
            "  Warnings: {}",
            yellow(&res.summary.warnings.to_string(), c)
        )?;

        if self.verbose && (res.summary.errors > 0 || res.summary.warnings > 0) {
            writeln!(self.out, "\n{}", bold("Details:", c))?;
            for e in res.errors() {
                writeln!(self.out, "  {} {}", red("Error:", c), e)?;
            }
            for w in res.warnings() {
                writeln!(self.out, "  {} {}", yellow("Warning:", c), w)?;
            }
        }
        Ok(())
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}
