//! Data models for hgspeed
//!
//! Process-independent structures for the tracked project, revision
//! markers, and the commit log records handed to the dashboard.

mod log_entry;
mod project;
mod revision;

pub use log_entry::LogEntry;
pub use project::{Project, UpdateMode};
pub use revision::Revision;
