// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Regular-expression patterns for identifiers, strong passwords, IPv4
//! addresses and Israeli mobile numbers.
//!
//! The [`catalog`] functions return plain pattern strings. They are meant for
//! full-string matching; [`CompiledPattern`] and [`Validator`] apply them that
//! way.

pub mod catalog;
pub mod config;
pub mod error;
pub mod pattern;
pub mod validator;

pub use catalog::{
    PatternKind, identifier_pattern, ipv4_pattern, mobile_israeli_pattern, password_pattern,
};
pub use config::ValidatorConfig;
pub use error::{Error, Result};
pub use pattern::{CompiledPattern, PatternError};
pub use validator::Validator;
