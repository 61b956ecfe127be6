//! Runtime settings
//!
//! Populated from command-line flags with environment-variable fallbacks.

use std::path::{Path, PathBuf};

use clap::{Args, ValueEnum};

use crate::hg::HgExecutor;
use crate::hg::constants::HG_COMMAND;
use crate::model::Project;

/// Directory holding all working copies unless configured otherwise
pub const DEFAULT_REPOSITORY_BASE_PATH: &str = "repos";

/// Default tracing filter when `RUST_LOG` is unset
pub const DEFAULT_LOG_FILTER: &str = "hgspeed=info";

/// Output format of the tracing subscriber
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum LogFormat {
    /// Human-readable, multi-line
    #[default]
    Pretty,
    /// One JSON object per event
    Json,
}

#[derive(Debug, Clone, Args)]
pub struct Settings {
    /// Directory where working copies are cloned
    #[arg(
        long = "base-path",
        env = "HGSPEED_REPOSITORY_BASE_PATH",
        default_value = DEFAULT_REPOSITORY_BASE_PATH,
        global = true
    )]
    pub repository_base_path: PathBuf,

    /// hg binary to run
    #[arg(long = "hg", env = "HGSPEED_HG", default_value = HG_COMMAND, global = true)]
    pub hg_command: PathBuf,

    /// Diagnostic log format (written to stderr)
    #[arg(
        long,
        env = "HGSPEED_LOG_FORMAT",
        value_enum,
        default_value_t = LogFormat::Pretty,
        global = true
    )]
    pub log_format: LogFormat,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            repository_base_path: PathBuf::from(DEFAULT_REPOSITORY_BASE_PATH),
            hg_command: PathBuf::from(HG_COMMAND),
            log_format: LogFormat::default(),
        }
    }
}

impl Settings {
    /// Executor bound to the configured hg binary
    pub fn executor(&self) -> HgExecutor {
        HgExecutor::with_command(&self.hg_command)
    }

    /// Project whose working copy lives under the base path, unless
    /// `working_copy` overrides it
    pub fn project(&self, name: &str, repo_url: &str, working_copy: Option<&Path>) -> Project {
        let mut project = Project::new(name, repo_url, &self.repository_base_path);
        if let Some(path) = working_copy {
            project.working_copy = path.to_path_buf();
        }
        project
    }
}
