//! Version output parser (hg --version)

use super::super::HgError;
use super::super::constants::special::VERSION_PREFIX;
use super::{Parser, VERSION_REGEX};

impl Parser {
    /// Extract the version number from `hg --version`
    ///
    /// Input: "Mercurial Distributed SCM (version 6.5.2)\n(see https://...)"
    /// Output: Ok("6.5.2")
    pub fn parse_version(output: &str) -> Result<String, HgError> {
        let first_line = output.lines().next().unwrap_or("").trim();

        if !first_line.starts_with(VERSION_PREFIX) {
            return Err(HgError::ParseError(format!(
                "Unexpected hg --version output: {first_line}"
            )));
        }

        VERSION_REGEX
            .captures(first_line)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str().to_string())
            .ok_or_else(|| HgError::ParseError(format!("No version number in: {first_line}")))
    }
}
