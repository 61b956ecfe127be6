//! Tracked project data model

use std::fmt;
use std::path::{Path, PathBuf};

/// A repository tracked by the dashboard
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Project {
    /// Name; also the directory name of the clone
    pub name: String,

    /// Clone source (URL or local path)
    pub repo_url: String,

    /// Local working copy
    pub working_copy: PathBuf,
}

impl Project {
    /// Create a project whose working copy lives at `base_path/name`
    pub fn new(name: impl Into<String>, repo_url: impl Into<String>, base_path: &Path) -> Self {
        let name = name.into();
        let working_copy = base_path.join(&name);
        Self {
            name,
            repo_url: repo_url.into(),
            working_copy,
        }
    }

    /// Directory the clone is created from
    ///
    /// Falls back to `.` when the working copy has no parent.
    pub fn base_path(&self) -> &Path {
        match self.working_copy.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        }
    }

    /// Does the working copy exist on disk?
    pub fn has_working_copy(&self) -> bool {
        self.working_copy.exists()
    }
}

impl fmt::Display for Project {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// What to do with an existing working copy when synchronizing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UpdateMode {
    /// Clone if missing, otherwise `hg pull -u`
    #[default]
    Pull,
    /// Clone if missing, otherwise leave it alone
    CloneOnly,
}
