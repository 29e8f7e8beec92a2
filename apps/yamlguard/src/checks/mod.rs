//! GitHub Actions workflow checks.
//!
//! `validate_workflow` runs every rule against a parsed document and appends
//! findings to the sink. Rules are independent: a failing rule never stops
//! the ones after it. Structural problems are errors; schedule problems are
//! warnings only.

pub mod jobs;
pub mod schedule;

use crate::models::Diagnostics;
use serde_yaml::Value;
use std::path::Path;

const WORKFLOW_DIR: &str = ".github/workflows";
const WORKFLOW_EXTENSIONS: [&str; 2] = ["yml", "yaml"];

const TRIGGER_KEY: &str = "on";
const JOBS_KEY: &str = "jobs";

/// Classify a path as a workflow definition without touching the filesystem.
pub fn is_workflow_file(path: &Path) -> bool {
    let normalized = path.to_string_lossy().replace('\\', "/");
    normalized.contains(WORKFLOW_DIR)
        && path
            .extension()
            .and_then(|e| e.to_str())
            .map_or(false, |ext| WORKFLOW_EXTENSIONS.contains(&ext))
}

/// Run all workflow rules. Returns true when no errors were added.
///
/// A document that is not a mapping fails the `on` and `jobs` rules; the
/// per-job and schedule rules have nothing to inspect in that case.
pub fn validate_workflow(path: &str, doc: &Value, diags: &mut Diagnostics) -> bool {
    let before = diags.error_count();

    check_trigger_key(path, doc, diags);
    check_jobs_section(path, doc, diags);
    if let Some(jobs) = doc.get(JOBS_KEY).and_then(Value::as_mapping) {
        jobs::check_jobs(path, jobs, diags);
    }
    if let Some(on) = doc.get(TRIGGER_KEY) {
        schedule::check_schedule(path, on, diags);
    }

    diags.error_count() == before
}

fn check_trigger_key(path: &str, doc: &Value, diags: &mut Diagnostics) {
    if doc.get(TRIGGER_KEY).is_none() {
        diags.error(
            "required-key",
            format!("Missing required key '{}' in {}", TRIGGER_KEY, path),
        );
    }
}

fn check_jobs_section(path: &str, doc: &Value, diags: &mut Diagnostics) {
    match doc.get(JOBS_KEY) {
        None => diags.error("jobs", format!("No 'jobs' section found in {}", path)),
        Some(jobs) if is_empty_value(jobs) => {
            diags.error("jobs", format!("Empty 'jobs' section in {}", path))
        }
        Some(_) => {}
    }
}

/// Null, `false`, zero, and empty collections/strings count as "no entries".
fn is_empty_value(v: &Value) -> bool {
    match v {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::Mapping(m) => m.is_empty(),
        Value::Sequence(s) => s.is_empty(),
        Value::String(s) => s.is_empty(),
        _ => false,
    }
}

/// Render a key or scalar the way it would read in the source file.
pub(crate) fn render_scalar(v: &Value) -> String {
    match v {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null => "null".to_string(),
        other => serde_yaml::to_string(other)
            .map(|s| s.trim_end().to_string())
            .unwrap_or_default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{FileReport, Severity};

    fn run(yaml: &str) -> (bool, FileReport) {
        let doc: Value = serde_yaml::from_str(yaml).unwrap();
        let mut diags = Diagnostics::new();
        let ok = validate_workflow("ci.yml", &doc, &mut diags);
        (ok, FileReport::new("ci.yml", diags))
    }

    #[test]
    fn test_detects_workflow_paths() {
        assert!(is_workflow_file(Path::new(".github/workflows/ci.yml")));
        assert!(is_workflow_file(Path::new("repo/.github/workflows/release.yaml")));
        assert!(is_workflow_file(Path::new(r"repo\.github\workflows\ci.yml")));
        assert!(!is_workflow_file(Path::new(".github/workflows/readme.md")));
        assert!(!is_workflow_file(Path::new("config/ci.yml")));
        assert!(!is_workflow_file(Path::new(".github/ci.yml")));
    }

    #[test]
    fn test_minimal_workflow_is_clean() {
        let (ok, report) = run(
            r#"
on: push
jobs:
  build:
    runs-on: ubuntu-latest
    steps:
      - run: cargo test
"#,
        );
        assert!(ok);
        assert!(report.diagnostics.is_empty());
    }

    #[test]
    fn test_missing_on_and_jobs_yields_two_errors() {
        let (ok, report) = run("name: nothing here\n");
        assert!(!ok);
        let errors: Vec<_> = report.errors().collect();
        assert_eq!(
            errors,
            vec![
                "Missing required key 'on' in ci.yml",
                "No 'jobs' section found in ci.yml",
            ]
        );
    }

    #[test]
    fn test_non_mapping_document_fails_structural_rules() {
        let (ok, report) = run("- just\n- a list\n");
        assert!(!ok);
        assert_eq!(report.errors().count(), 2);
    }

    #[test]
    fn test_empty_jobs_is_distinct_from_missing() {
        let (ok, report) = run("on: push\njobs: {}\n");
        assert!(!ok);
        let errors: Vec<_> = report.errors().collect();
        assert_eq!(errors, vec!["Empty 'jobs' section in ci.yml"]);

        let falsy_jobs = [
            "jobs:\n",
            "jobs: false\n",
            "jobs: 0\n",
            "jobs: 0.0\n",
            "jobs: ''\n",
        ];
        for falsy in falsy_jobs {
            let (ok, report) = run(&format!("on: push\n{}", falsy));
            assert!(!ok, "{falsy:?} should fail");
            assert_eq!(
                report.errors().collect::<Vec<_>>(),
                vec!["Empty 'jobs' section in ci.yml"]
            );
        }
    }

    #[test]
    fn test_truthy_scalar_jobs_is_present() {
        let (ok, report) = run("on: push\njobs: 1\n");
        assert!(ok);
        assert!(report.diagnostics.is_empty());
    }

    #[test]
    fn test_jobs_as_sequence_skips_job_shape() {
        let (ok, report) = run("on: push\njobs:\n  - build\n");
        assert!(ok);
        assert!(report.diagnostics.is_empty());
    }

    #[test]
    fn test_rules_report_in_order() {
        let (ok, report) = run(
            r#"
jobs:
  lint: 3
on:
  schedule:
    - cron: "a b c"
"#,
        );
        assert!(!ok);
        let got: Vec<_> = report
            .diagnostics
            .iter()
            .map(|d| (d.severity, d.rule))
            .collect();
        assert_eq!(
            got,
            vec![
                (Severity::Error, "job-shape"),
                (Severity::Warning, "cron"),
            ]
        );
    }

    #[test]
    fn test_render_scalar_variants() {
        assert_eq!(render_scalar(&Value::from("x")), "x");
        assert_eq!(render_scalar(&Value::Number(42i64.into())), "42");
        assert_eq!(render_scalar(&Value::Bool(true)), "true");
        assert_eq!(render_scalar(&Value::Null), "null");
    }
}
