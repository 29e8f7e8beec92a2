//! Per-job shape rules.

use super::render_scalar;
use crate::models::Diagnostics;
use serde_yaml::{Mapping, Value};

const RUNS_ON_KEY: &str = "runs-on";
const STEPS_KEY: &str = "steps";

/// Check every job in document order.
pub fn check_jobs(path: &str, jobs: &Mapping, diags: &mut Diagnostics) {
    for (name, config) in jobs {
        check_job(path, &render_scalar(name), config, diags);
    }
}

fn check_job(path: &str, name: &str, config: &Value, diags: &mut Diagnostics) {
    let job = match config.as_mapping() {
        Some(m) => m,
        None => {
            diags.error(
                "job-shape",
                format!("Job '{}' configuration must be an object in {}", name, path),
            );
            return;
        }
    };

    if !job.contains_key(RUNS_ON_KEY) {
        diags.error(
            "runs-on",
            format!("Job '{}' missing '{}' in {}", name, RUNS_ON_KEY, path),
        );
    }

    if let Some(steps) = job.get(STEPS_KEY) {
        match steps.as_sequence() {
            None => diags.error(
                "steps",
                format!("Job '{}' steps must be an array in {}", name, path),
            ),
            Some(s) if s.is_empty() => diags.warning(
                "steps",
                format!("Job '{}' has empty steps array in {}", name, path),
            ),
            Some(_) => {}
        }
    }
}
