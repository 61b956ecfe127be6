//! hg command execution layer
//!
//! This module handles executing Mercurial commands and parsing their output.

pub mod constants;
mod executor;
#[cfg(all(test, unix))]
mod fake_hg;
/// Parser module (public for integration testing)
pub mod parser;
mod repository;
mod template;

pub use executor::{HgExecutor, HgOutput};
pub use repository::HgRepository;
pub use template::Templates;

use std::io;
use thiserror::Error;

/// Errors that can occur when executing hg commands
#[derive(Error, Debug)]
pub enum HgError {
    #[error("Not a Mercurial repository: {0}")]
    NotARepository(String),

    /// Generic commit log failure: non-zero exit or unexpected stderr
    #[error("{command} returned {exit_code}: {stderr}")]
    CommandFailed {
        command: String,
        stderr: String,
        exit_code: i32,
    },

    #[error("Failed to parse hg output: {0}")]
    ParseError(String),

    #[error("IO error: {0}")]
    IoError(#[from] io::Error),

    #[error("hg is not installed or not in PATH")]
    HgNotFound,

    #[error("Mercurial {version} is not supported (minimum {minimum})")]
    UnsupportedVersion { version: String, minimum: String },
}

impl HgError {
    /// Raw stderr text carried by the error, if any
    pub fn stderr(&self) -> Option<&str> {
        match self {
            Self::CommandFailed { stderr, .. } | Self::NotARepository(stderr) => Some(stderr),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_failed_display() {
        let err = HgError::CommandFailed {
            command: "hg pull -u".to_string(),
            stderr: "abort: no suitable response from remote hg".to_string(),
            exit_code: 255,
        };
        assert_eq!(
            err.to_string(),
            "hg pull -u returned 255: abort: no suitable response from remote hg"
        );
        assert_eq!(err.stderr(), Some("abort: no suitable response from remote hg"));
    }

    #[test]
    fn test_stderr_absent_for_parse_error() {
        let err = HgError::ParseError("bad".to_string());
        assert!(err.stderr().is_none());
    }
}
