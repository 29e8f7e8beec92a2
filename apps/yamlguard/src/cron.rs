//! Shallow cron expression check.
//!
//! Only the shape is verified: five whitespace-separated fields made of
//! digits and `* - , /`. Calendar ranges are not checked, so `99 99 99 99 99`
//! is accepted.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref FIELD_RE: Regex = Regex::new(r"^[0-9*\-,/]+$").unwrap();
}

const FIELD_COUNT: usize = 5;

/// Return true when `expr` looks like a 5-field cron expression.
pub fn is_valid_cron_like(expr: &str) -> bool {
    let fields: Vec<&str> = expr.split_whitespace().collect();
    if fields.len() != FIELD_COUNT {
        return false;
    }
    fields.iter().all(|f| *f == "*" || FIELD_RE.is_match(f))
}
