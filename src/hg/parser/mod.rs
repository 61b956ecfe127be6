//! hg output parser
//!
//! Parses the output from hg commands into structured data.

mod date;
mod log;
mod version;


use regex::Regex;
use std::sync::LazyLock;

/// Regex for the `{date}` template keyword
/// Format: `<unix seconds>[.<fraction>][<tz offset seconds>]`
/// Examples: `1706513400.0-32400`, `1706513400.00`, `1157407993.025200`
///
/// Groups:
/// 1. unix seconds (integer part)
static HG_DATE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d+)(?:\.\d*)?(?:[+-]?\d+)?$").expect("Invalid hg date regex"));

/// Regex for `hg --version` first line
/// Example: `Mercurial Distributed SCM (version 6.5.2)`
static VERSION_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\(version ([^)\s]+)\)").expect("Invalid version regex")
});

/// Parser for hg command output
pub struct Parser;
