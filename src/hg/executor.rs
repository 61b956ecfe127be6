//! hg command executor
//!
//! Handles running hg commands and capturing their output.

use std::path::{Path, PathBuf};
use std::process::Command;

use super::HgError;
use super::constants::{self, commands, env, errors, flags, special};
use super::parser::Parser;
use super::template::Templates;

/// Captured output of a successful hg invocation
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HgOutput {
    pub stdout: String,
    pub stderr: String,
}

/// Executor for hg commands
#[derive(Debug, Clone)]
pub struct HgExecutor {
    /// hg binary to invoke (name on PATH or absolute path)
    command: PathBuf,
}

impl Default for HgExecutor {
    fn default() -> Self {
        Self::new()
    }
}

impl HgExecutor {
    /// Create a new executor using `hg` from PATH
    pub fn new() -> Self {
        Self {
            command: PathBuf::from(constants::HG_COMMAND),
        }
    }

    /// Create a new executor for a specific hg binary
    pub fn with_command(command: impl Into<PathBuf>) -> Self {
        Self {
            command: command.into(),
        }
    }

    /// Run an hg command with the given arguments inside `cwd`
    ///
    /// Runs with `HGPLAIN=1` and `--noninteractive` so output is parseable
    /// and hg never blocks on a prompt.
    pub fn run_in(&self, cwd: &Path, args: &[&str]) -> Result<HgOutput, HgError> {
        let mut cmd = Command::new(&self.command);
        cmd.current_dir(cwd)
            .env(env::HGPLAIN, "1")
            .arg(flags::NON_INTERACTIVE)
            .args(args);

        tracing::debug!(cwd = %cwd.display(), command = %self.display_command(args), "running hg");

        let output = cmd.output().map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                HgError::HgNotFound
            } else {
                HgError::IoError(e)
            }
        })?;

        let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
        let stderr = String::from_utf8_lossy(&output.stderr).into_owned();

        if output.status.success() {
            return Ok(HgOutput { stdout, stderr });
        }

        let exit_code = output.status.code().unwrap_or(-1);
        if stderr.contains(errors::NO_REPO_FOUND) {
            return Err(HgError::NotARepository(stderr));
        }

        Err(HgError::CommandFailed {
            command: self.display_command(args),
            stderr,
            exit_code,
        })
    }

    /// Render the command line for logs and error messages
    pub fn display_command(&self, args: &[&str]) -> String {
        let mut parts = vec![self.command.to_string_lossy().into_owned()];
        parts.extend(args.iter().map(|a| a.to_string()));
        parts.join(" ")
    }

    /// Get the Mercurial version
    pub fn version(&self) -> Result<String, HgError> {
        let output = self.run_in(Path::new("."), &[flags::VERSION])?;
        Parser::parse_version(&output.stdout)
    }

    /// Check if the Mercurial version is supported
    pub fn check_version(&self) -> Result<(), HgError> {
        let version = self.version()?;
        if !is_version_supported(&version, constants::MIN_HG_VERSION) {
            return Err(HgError::UnsupportedVersion {
                version,
                minimum: constants::MIN_HG_VERSION.to_string(),
            });
        }
        Ok(())
    }

    /// Run `hg clone -- <source> <dest>` from `base_dir`
    pub fn clone_raw(&self, base_dir: &Path, source: &str, dest: &str) -> Result<HgOutput, HgError> {
        self.run_in(base_dir, &[commands::CLONE, flags::END_OF_OPTIONS, source, dest])
    }

    /// Run `hg pull -u` inside a working copy
    pub fn pull_update_raw(&self, working_copy: &Path) -> Result<HgOutput, HgError> {
        self.run_in(working_copy, &[commands::PULL, flags::UPDATE])
    }

    /// Run `hg log` over the DAG range `start::end` with the log template
    pub fn log_range_raw(&self, working_copy: &Path, start: &str, end: &str) -> Result<String, HgError> {
        let revset = format!("{start}{}{end}", special::RANGE_OPERATOR);
        let args = [
            commands::LOG,
            flags::REVISION,
            revset.as_str(),
            flags::TEMPLATE,
            Templates::log(),
        ];
        Ok(self.run_in(working_copy, &args)?.stdout)
    }

    /// Run `hg log` for one revision with the RFC 3339 date template
    pub fn commit_date_raw(&self, working_copy: &Path, revision: &str) -> Result<String, HgError> {
        let args = [
            commands::LOG,
            flags::REVISION,
            revision,
            flags::TEMPLATE,
            Templates::commit_date(),
        ];
        Ok(self.run_in(working_copy, &args)?.stdout)
    }
}

/// Compare version strings (simple semver comparison)
///
/// Handles suffixes like "6.5.2+hg1.abc" or "6.6rc0" by keeping leading digits only.
fn is_version_supported(version: &str, minimum: &str) -> bool {
    let parse_version = |v: &str| -> Option<(u32, u32, u32)> {
        let leading = |p: &str| -> Option<u32> {
            let digits: String = p.chars().take_while(|c| c.is_ascii_digit()).collect();
            digits.parse().ok()
        };
        let parts: Vec<&str> = v.split('.').collect();
        if parts.len() >= 2 {
            let major = leading(parts[0])?;
            let minor = leading(parts[1])?;
            let patch = parts.get(2).and_then(|p| leading(p)).unwrap_or(0);
            Some((major, minor, patch))
        } else {
            None
        }
    };

    match (parse_version(version), parse_version(minimum)) {
        (Some(v), Some(m)) => v >= m,
        _ => false,
    }
}
