//! hgspeed - Mercurial commit logs for performance dashboards
//!
//! Keeps a local clone of a project's repository and turns `hg log`
//! output into records a dashboard can store.
//!
//! This library provides:
//! - [`hg`]: Mercurial command execution and parsing
//! - [`model`]: Domain models
//! - [`config`]: Runtime settings
//! - [`render`]: Terminal rendering of log entries

pub mod config;
pub mod hg;
pub mod model;
pub mod render;
