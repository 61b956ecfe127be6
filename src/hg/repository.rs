//! Working-copy operations for one tracked project
//!
//! Synchronizes the local clone and reads commit logs from it.

use std::fs;

use super::HgError;
use super::constants::{commands, flags};
use super::executor::HgExecutor;
use super::parser::Parser;
use crate::model::{LogEntry, Project, Revision, UpdateMode};

/// A project's Mercurial working copy
#[derive(Debug, Clone)]
pub struct HgRepository {
    project: Project,
    executor: HgExecutor,
}

impl HgRepository {
    pub fn new(project: Project) -> Self {
        Self::with_executor(project, HgExecutor::new())
    }

    pub fn with_executor(project: Project, executor: HgExecutor) -> Self {
        Self { project, executor }
    }

    pub fn project(&self) -> &Project {
        &self.project
    }

    /// Clone the working copy if absent; otherwise pull and update it
    /// (only with [`UpdateMode::Pull`])
    ///
    /// A pull that writes anything to stderr is treated as a failure even
    /// when hg exits with 0.
    pub fn update_repo(&self, mode: UpdateMode) -> Result<(), HgError> {
        let project = &self.project;

        if project.has_working_copy() {
            if mode == UpdateMode::CloneOnly {
                return Ok(());
            }

            tracing::info!(project = %project, "pulling Mercurial repo");
            let output = self.executor.pull_update_raw(&project.working_copy)?;
            if !output.stderr.trim().is_empty() {
                return Err(HgError::CommandFailed {
                    command: self
                        .executor
                        .display_command(&[commands::PULL, flags::UPDATE]),
                    stderr: output.stderr,
                    exit_code: 0,
                });
            }
            return Ok(());
        }

        let base_path = project.base_path();
        fs::create_dir_all(base_path)?;

        let dest = project
            .working_copy
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| project.name.clone());

        tracing::info!(
            project = %project,
            repo_url = %project.repo_url,
            base_path = %base_path.display(),
            "cloning Mercurial repo"
        );
        self.executor.clone_raw(base_path, &project.repo_url, &dest)?;
        Ok(())
    }

    /// Commit log for the DAG range `start::end`
    ///
    /// Clones first if there is no working copy, but never pulls.
    pub fn logs(&self, end: &Revision, start: &Revision) -> Result<Vec<LogEntry>, HgError> {
        self.update_repo(UpdateMode::CloneOnly)?;

        let output = self.executor.log_range_raw(
            &self.project.working_copy,
            start.as_str(),
            end.as_str(),
        )?;

        let mut entries = Parser::parse_log(&output);
        drop_trailing_start(&mut entries, start);

        tracing::debug!(
            project = %self.project,
            start = %start,
            end = %end,
            count = entries.len(),
            "read hg log range"
        );
        Ok(entries)
    }

    /// RFC 3339 date of a single commit, e.g. `2024-01-29T16:30:00+09:00`
    pub fn commit_date(&self, commit_id: &Revision) -> Result<String, HgError> {
        self.update_repo(UpdateMode::CloneOnly)?;

        let output = self
            .executor
            .commit_date_raw(&self.project.working_copy, commit_id.as_str())?;
        Ok(output.trim_end().to_string())
    }
}

/// Remove the last entry when it is the start revision itself
///
/// Only applies when more than one entry was returned, so a range whose
/// start and end coincide still yields that commit.
fn drop_trailing_start(entries: &mut Vec<LogEntry>, start: &Revision) {
    if entries.len() > 1 && entries.last().is_some_and(|last| start.identifies(last)) {
        entries.pop();
    }
}
