//! Lint runner: drives syntax and workflow checks over the input paths.
//!
//! Produces a `LintResult` with one `FileReport` per path, in the order
//! given. Findings are printed through the `Reporter` as each file finishes,
//! before the next file is read.

use crate::checks::{is_workflow_file, validate_workflow};
use crate::config::Effective;
use crate::error::{CheckError, Error};
use crate::models::{Diagnostics, FileReport, LintResult};
use crate::output::Reporter;
use crate::syntax::check_syntax;
use std::io::Write;
use std::path::Path;

/// Validate every path in order.
///
/// An empty `paths` is a usage error and nothing is processed. Per-file
/// failures (missing file, bad encoding, syntax errors, rule violations)
/// are recorded on that file only; the run always continues.
pub fn run_lint<W: Write>(
    paths: &[String],
    eff: &Effective,
    reporter: &mut Reporter<W>,
) -> Result<LintResult, Error> {
    if paths.is_empty() {
        return Err(Error::Usage);
    }

    let mut files: Vec<FileReport> = Vec::with_capacity(paths.len());
    for path in paths {
        files.push(lint_file(path, eff.github_actions, reporter)?);
    }
    let result = LintResult::from_files(files);
    tracing::debug!(
        files = result.summary.files,
        invalid = result.summary.invalid,
        "run finished"
    );
    Ok(result)
}

/// Lint a single path, printing its findings as soon as they are known.
fn lint_file<W: Write>(
    path: &str,
    force_workflow: bool,
    reporter: &mut Reporter<W>,
) -> Result<FileReport, Error> {
    let mut diags = Diagnostics::new();
    let p = Path::new(path);

    if !p.is_file() {
        let err = CheckError::NotFound {
            path: path.to_string(),
        };
        tracing::debug!(code = err.code(), path, "skipping file");
        diags.error(err.rule(), err.to_string());
        return finish(path, diags, reporter);
    }

    reporter.info(&format!("Validating {}", path))?;

    match check_syntax(p) {
        Err(err) => {
            let (line, column) = err.location().unwrap_or_default();
            tracing::debug!(code = err.code(), path, line, column, "syntax check failed");
            diags.error(err.rule(), err.to_string());
        }
        Ok(doc) => {
            let detected = is_workflow_file(p);
            tracing::debug!(path, detected, forced = force_workflow, "parsed");
            if detected || force_workflow {
                validate_workflow(path, &doc, &mut diags);
            }
        }
    }

    finish(path, diags, reporter)
}

fn finish<W: Write>(
    path: &str,
    diags: Diagnostics,
    reporter: &mut Reporter<W>,
) -> Result<FileReport, Error> {
    for d in diags.iter() {
        reporter.diagnostic(d)?;
    }
    let report = FileReport::new(path, diags);
    if report.is_valid() {
        reporter.success(&format!("Valid: {}", path))?;
    }
    Ok(report)
}
