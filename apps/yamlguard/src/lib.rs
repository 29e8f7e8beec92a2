//! yamlguard core library.
//!
//! Validates YAML files and, for GitHub Actions workflows, runs a fixed set
//! of structure and schedule checks. Built for pre-commit/pre-push hooks.
//!
//! High-level modules:
//! - `cli`: CLI argument parsing (binary uses this).
//! - `config`: Effective settings from flags and environment.
//! - `syntax`: Read, decode, and parse one file.
//! - `checks`: Workflow detection and workflow rules.
//! - `cron`: Shape-only cron expression check.
//! - `lint`: Runner that validates paths in order and aggregates results.
//! - `models`: Diagnostics, per-file reports, and the run result.
//! - `output`: Human printer for findings and the summary.
//! - `error`: Run-level and per-file error types.
//! - `utils`: Color and prefix helpers.
pub mod checks;
pub mod cli;
pub mod config;
pub mod cron;
pub mod error;
pub mod lint;
pub mod models;
pub mod output;
pub mod syntax;
pub mod utils;
