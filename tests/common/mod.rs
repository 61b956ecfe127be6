//! Common test utilities for integration tests.
//!
//! This module provides helpers for creating and managing temporary
//! Mercurial repositories in tests.
//!
//! Note: Each integration test file compiles as a separate crate,
//! so not all helpers are used in every test file. We suppress
//! dead_code warnings at the module level.

#![allow(dead_code)]
#![allow(unused_imports)]

pub mod test_repo;

pub use test_repo::{TestRepo, hg_available};

/// Return early from a test when `hg` is not installed.
#[macro_export]
macro_rules! skip_if_no_hg {
    () => {
        if !$crate::common::hg_available() {
            eprintln!("skipping: hg not found in PATH");
            return;
        }
    };
}
