// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Full-string matching of catalog patterns.
//!
//! The password pattern relies on lookahead assertions, so matching goes
//! through `fancy-regex` rather than the `regex` crate.

pub mod matcher;

pub use matcher::{CompiledPattern, DEFAULT_BACKTRACK_LIMIT, PatternError};

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
