//! hg-specific constants
//!
//! Centralized definitions for hg command names, flags, and special values.

/// hg command binary name
pub const HG_COMMAND: &str = "hg";

/// Minimum supported Mercurial version (`rfc3339date` filter, `HGPLAIN`)
pub const MIN_HG_VERSION: &str = "2.0.0";

/// hg subcommands
pub mod commands {
    pub const CLONE: &str = "clone";
    pub const PULL: &str = "pull";
    pub const LOG: &str = "log";
}

/// hg command flags
pub mod flags {
    /// Never prompt; fail instead (global flag)
    pub const NON_INTERACTIVE: &str = "--noninteractive";
    /// Update the working directory after pull
    pub const UPDATE: &str = "-u";
    /// Specify template
    pub const TEMPLATE: &str = "--template";
    /// Specify revision/revset
    pub const REVISION: &str = "-r";
    /// End of options; following arguments are positional
    pub const END_OF_OPTIONS: &str = "--";
    /// Show version
    pub const VERSION: &str = "--version";
}

/// Environment passed to every hg invocation
pub mod env {
    /// Disables user config that alters output (aliases, i18n, color, pager)
    pub const HGPLAIN: &str = "HGPLAIN";
}

/// Special hg values
pub mod special {
    /// Line terminating every record of the log template
    pub const LOG_SENTINEL: &str = "=newlog=";

    /// DAG range operator in revsets (`start::end`)
    pub const RANGE_OPERATOR: &str = "::";

    /// Version output prefix (e.g., "Mercurial Distributed SCM (version 6.5.2)")
    pub const VERSION_PREFIX: &str = "Mercurial Distributed SCM (version ";
}

/// Placeholder values for a log record that could not be parsed
pub mod placeholder {
    pub const DATE: &str = "-";
    pub const COMMIT_ID: &str = "-";
    pub const MESSAGE: &str = "error parsing log";
}

/// Error detection patterns in hg output
pub mod errors {
    /// `hg` run outside a working copy
    pub const NO_REPO_FOUND: &str = "no repository found";
}

/// Timestamp format for log entries
pub const DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
