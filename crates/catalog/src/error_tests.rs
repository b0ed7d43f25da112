// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use yare::parameterized;

#[test]
fn config_error_display() {
    let err = Error::Config {
        message: "invalid backtrack_limit".into(),
        path: Some(PathBuf::from("catalog.toml")),
    };
    assert_eq!(err.to_string(), "config error: invalid backtrack_limit");
}

#[test]
fn io_error_display_includes_path() {
    let err = Error::Io {
        path: PathBuf::from("missing.toml"),
        source: std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
    };
    let msg = err.to_string();
    assert!(msg.contains("missing.toml"));
    assert!(msg.contains("not found"));
}

#[test]
fn pattern_error_is_transparent() {
    let inner = PatternError::Match(Box::new(fancy_regex::Error::RuntimeError(
        fancy_regex::RuntimeError::BacktrackLimitExceeded,
    )));
    let expected = inner.to_string();
    let err = Error::from(inner);
    assert_eq!(err.to_string(), expected);
}

#[parameterized(
    identifier = { PatternKind::Identifier, "pattern not enabled: identifier" },
    password = { PatternKind::Password, "pattern not enabled: password" },
    ipv4 = { PatternKind::Ipv4, "pattern not enabled: ipv4" },
    mobile = { PatternKind::MobileIsraeli, "pattern not enabled: mobile_israeli" },
)]
fn pattern_disabled_display(kind: PatternKind, expected: &str) {
    assert_eq!(Error::PatternDisabled(kind).to_string(), expected);
}

#[test]
fn unknown_pattern_display_quotes_name() {
    let err = Error::UnknownPattern("email".into());
    assert_eq!(err.to_string(), "unknown pattern: \"email\"");
}
