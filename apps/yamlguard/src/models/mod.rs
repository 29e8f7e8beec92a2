//! Shared data models for diagnostics, per-file reports, and the run result.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Error,
    Warning,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// A single finding with severity and the rule that produced it.
pub struct Diagnostic {
    pub severity: Severity,
    pub rule: &'static str,
    pub message: String,
}

#[derive(Debug, Default)]
/// Ordered sink that rules append to, in discovery order.
pub struct Diagnostics {
    items: Vec<Diagnostic>,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn error(&mut self, rule: &'static str, message: String) {
        tracing::debug!(rule, %message, "error recorded");
        self.items.push(Diagnostic {
            severity: Severity::Error,
            rule,
            message,
        });
    }

    pub fn warning(&mut self, rule: &'static str, message: String) {
        tracing::debug!(rule, %message, "warning recorded");
        self.items.push(Diagnostic {
            severity: Severity::Warning,
            rule,
            message,
        });
    }

    pub fn error_count(&self) -> usize {
        self.items
            .iter()
            .filter(|d| d.severity == Severity::Error)
            .count()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Diagnostic> {
        self.items.iter()
    }
}

#[derive(Debug)]
/// Outcome of validating one input path.
pub struct FileReport {
    pub file: String,
    pub diagnostics: Vec<Diagnostic>,
}

impl FileReport {
    pub fn new(file: impl Into<String>, diagnostics: Diagnostics) -> Self {
        Self {
            file: file.into(),
            diagnostics: diagnostics.items,
        }
    }

    pub fn errors(&self) -> impl Iterator<Item = &str> {
        self.messages(Severity::Error)
    }

    pub fn warnings(&self) -> impl Iterator<Item = &str> {
        self.messages(Severity::Warning)
    }

    /// Warnings never make a file invalid.
    pub fn is_valid(&self) -> bool {
        self.errors().next().is_none()
    }

    fn messages(&self, severity: Severity) -> impl Iterator<Item = &str> {
        self.diagnostics
            .iter()
            .filter(move |d| d.severity == severity)
            .map(|d| d.message.as_str())
    }
}

#[derive(Debug, Default, PartialEq, Eq)]
/// Aggregated counts used by the summary printer.
pub struct Summary {
    pub files: usize,
    pub invalid: usize,
    pub errors: usize,
    pub warnings: usize,
}

#[derive(Debug)]
/// Results of a whole run, one report per input path in the order given.
pub struct LintResult {
    pub files: Vec<FileReport>,
    pub summary: Summary,
}

impl LintResult {
    pub fn from_files(files: Vec<FileReport>) -> Self {
        let mut summary = Summary {
            files: files.len(),
            ..Summary::default()
        };
        for f in &files {
            let errs = f.errors().count();
            summary.errors += errs;
            summary.warnings += f.warnings().count();
            if errs > 0 {
                summary.invalid += 1;
            }
        }
        LintResult { files, summary }
    }

    /// True iff every file is valid.
    pub fn success(&self) -> bool {
        self.summary.invalid == 0
    }

    pub fn exit_code(&self) -> i32 {
        if self.success() {
            0
        } else {
            1
        }
    }

    /// All error messages across files, in run order.
    pub fn errors(&self) -> impl Iterator<Item = &str> {
        self.files.iter().flat_map(|f| f.errors())
    }

    /// All warning messages across files, in run order.
    pub fn warnings(&self) -> impl Iterator<Item = &str> {
        self.files.iter().flat_map(|f| f.warnings())
    }
}
