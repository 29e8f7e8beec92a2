//! Line prefixes and color helpers shared by the reporter.
//!
//! Every helper takes `color` explicitly.

use owo_colors::OwoColorize;

pub fn info_prefix(color: bool) -> String {
    if color {
        "ℹ".cyan().to_string()
    } else {
        "ℹ".to_string()
    }
}

pub fn success_prefix(color: bool) -> String {
    if color {
        "✓".green().to_string()
    } else {
        "✓".to_string()
    }
}

pub fn warning_prefix(color: bool) -> String {
    if color {
        "⚠".yellow().to_string()
    } else {
        "⚠".to_string()
    }
}

pub fn error_prefix(color: bool) -> String {
    if color {
        "✗".red().to_string()
    } else {
        "✗".to_string()
    }
}

pub fn bold(s: &str, color: bool) -> String {
    if color {
        s.bold().to_string()
    } else {
        s.to_string()
    }
}

pub fn red(s: &str, color: bool) -> String {
    if color {
        s.red().to_string()
    } else {
        s.to_string()
    }
}

pub fn yellow(s: &str, color: bool) -> String {
    if color {
        s.yellow().to_string()
    } else {
        s.to_string()
    }
}
