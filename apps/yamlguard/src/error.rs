//! Error types for yamlguard.
//!
//! `Error` is the run level: it is the only thing that can abort a run.
//! `CheckError` is the file level: the lint runner turns it into a
//! diagnostic for that one file and moves on to the next path.

use std::io;
use std::string::FromUtf8Error;
use thiserror::Error;

/// Run-level failures surfaced to the binary.
#[derive(Error, Debug)]
pub enum Error {
    #[error("No files provided for validation")]
    Usage,

    #[error("failed to write report: {0}")]
    Io(#[from] io::Error),
}

impl Error {
    /// Process exit code for this failure.
    pub fn exit_code(&self) -> i32 {
        2
    }
}

/// Per-file failures that stop further checks for that file only.
#[derive(Error, Debug)]
pub enum CheckError {
    #[error("File not found: {path}")]
    NotFound { path: String },

    #[error("Encoding error in {path}: {source}")]
    Encoding {
        path: String,
        #[source]
        source: FromUtf8Error,
    },

    #[error("YAML syntax error in {path}: {message}")]
    Syntax {
        path: String,
        message: String,
        line: Option<usize>,
        column: Option<usize>,
    },

    #[error("Unexpected error reading {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: io::Error,
    },
}

impl CheckError {
    pub fn code(&self) -> &'static str {
        match self {
            CheckError::NotFound { .. } => "FILE_NOT_FOUND",
            CheckError::Encoding { .. } => "ENCODING_ERROR",
            CheckError::Syntax { .. } => "SYNTAX_ERROR",
            CheckError::Read { .. } => "READ_ERROR",
        }
    }

    /// 1-based `(line, column)` reported by the parser, when known.
    pub fn location(&self) -> Option<(usize, usize)> {
        match self {
            CheckError::Syntax {
                line: Some(line),
                column: Some(column),
                ..
            } => Some((*line, *column)),
            _ => None,
        }
    }

    /// Rule id used for the diagnostic recorded from this error.
    pub fn rule(&self) -> &'static str {
        match self {
            CheckError::NotFound { .. } => "file-not-found",
            CheckError::Encoding { .. } => "encoding",
            CheckError::Syntax { .. } => "syntax",
            CheckError::Read { .. } => "read",
        }
    }
}
