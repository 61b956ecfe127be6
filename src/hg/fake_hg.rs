//! Stand-in hg binaries for unit tests

use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};

/// Write an executable `sh` script named `hg` into `dir` and return its path
pub(crate) fn write_fake_hg(dir: &Path, body: &str) -> PathBuf {
    let path = dir.join("hg");
    fs::write(&path, format!("#!/bin/sh\n{body}\n")).expect("Failed to write fake hg");
    fs::set_permissions(&path, fs::Permissions::from_mode(0o755))
        .expect("Failed to make fake hg executable");
    path
}
