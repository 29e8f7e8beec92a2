//! `on.schedule` cron sanity. Findings here are warnings and never make a
//! file invalid.

use super::render_scalar;
use crate::cron::is_valid_cron_like;
use crate::models::Diagnostics;
use serde_yaml::Value;

/// Inspect `on.schedule[*].cron` when `on` is a mapping with a schedule list.
pub fn check_schedule(path: &str, on: &Value, diags: &mut Diagnostics) {
    let entries = match on.get("schedule").and_then(Value::as_sequence) {
        Some(s) => s,
        None => return,
    };
    for (idx, entry) in entries.iter().enumerate() {
        let Some(cron) = entry.get("cron") else {
            continue;
        };
        if !cron.as_str().map_or(false, is_valid_cron_like) {
            diags.warning(
                "cron",
                format!(
                    "Invalid cron syntax '{}' in schedule[{}] in {}",
                    render_scalar(cron),
                    idx,
                    path
                ),
            );
        }
    }
}
