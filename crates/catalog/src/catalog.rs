// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! The pattern catalog.
//!
//! Each function builds its pattern from named sub-patterns on every call.
//! The strings are unanchored: consumers must apply them with full-string
//! match semantics (see [`crate::pattern::CompiledPattern`]).

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Pattern for a bare identifier: a letter or underscore, then any number of
/// letters, digits or underscores.
pub fn identifier_pattern() -> String {
    let first = "[A-Za-z_]";
    let rest = "[A-Za-z0-9_]*";

    format!("{first}{rest}")
}

/// Pattern for a strong password.
///
/// Requires at least one uppercase letter, one lowercase letter, one digit
/// and one of `#`, `$`, `%`, with a length of at least 8. Only letters,
/// digits, `#`, `$`, `%`, `_` and `-` are allowed.
pub fn password_pattern() -> String {
    // Zero-width checks, evaluated from the start before anything is consumed.
    let has_upper = "(?=.*[A-Z])";
    let has_lower = "(?=.*[a-z])";
    let has_digit = "(?=.*[0-9])";
    let has_special = "(?=.*[#$%])";

    let allowed = "[A-Za-z0-9#$%_-]{8,}";

    format!("{has_upper}{has_lower}{has_digit}{has_special}{allowed}")
}

/// Pattern for a dotted-quad IPv4 address.
///
/// Octets are 0-255 written with one to three digits. Leading zeros are
/// accepted (`000`, `01`), four-digit runs are not.
pub fn ipv4_pattern() -> String {
    let octet_250_255 = "25[0-5]";
    let octet_200_249 = "2[0-4][0-9]";
    let octet_100_199 = "1[0-9]{2}";
    let octet_0_99 = "0?[0-9]{1,2}";

    // Three digit octets only come from the first three forms, each bounded.
    let octet = format!("(?:{octet_250_255}|{octet_200_249}|{octet_100_199}|{octet_0_99})");

    format!("{octet}\\.{octet}\\.{octet}\\.{octet}")
}

/// Pattern for an Israeli mobile number.
///
/// International form is `+972-5X`, local form is `05X`, where `X` is any
/// digit. Either may be followed by an optional hyphen and a seven digit body
/// written as `xxxxxxx`, `xxx-xx-xx` or `x-xx-xx-xx`.
pub fn mobile_israeli_pattern() -> String {
    let operator = "5[0-9]";

    let body_plain = "[0-9]{7}";
    let body_3_2_2 = "[0-9]{3}-[0-9]{2}-[0-9]{2}";
    let body_1_2_2_2 = "[0-9]-[0-9]{2}-[0-9]{2}-[0-9]{2}";
    let body = format!("(?:{body_plain}|{body_3_2_2}|{body_1_2_2_2})");

    let international = format!("\\+972-{operator}-?{body}");
    let local = format!("0{operator}-?{body}");

    format!("(?:{international}|{local})")
}

/// One entry of the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PatternKind {
    Identifier,
    Password,
    Ipv4,
    MobileIsraeli,
}

impl PatternKind {
    /// Every kind, in catalog order.
    pub const ALL: [PatternKind; 4] = [
        PatternKind::Identifier,
        PatternKind::Password,
        PatternKind::Ipv4,
        PatternKind::MobileIsraeli,
    ];

    /// Build the pattern string for this kind.
    pub fn pattern(self) -> String {
        match self {
            PatternKind::Identifier => identifier_pattern(),
            PatternKind::Password => password_pattern(),
            PatternKind::Ipv4 => ipv4_pattern(),
            PatternKind::MobileIsraeli => mobile_israeli_pattern(),
        }
    }

    /// Stable name, as used in configuration.
    pub fn name(self) -> &'static str {
        match self {
            PatternKind::Identifier => "identifier",
            PatternKind::Password => "password",
            PatternKind::Ipv4 => "ipv4",
            PatternKind::MobileIsraeli => "mobile_israeli",
        }
    }
}

impl fmt::Display for PatternKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PatternKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "identifier" => Ok(PatternKind::Identifier),
            "password" => Ok(PatternKind::Password),
            "ipv4" => Ok(PatternKind::Ipv4),
            "mobile_israeli" => Ok(PatternKind::MobileIsraeli),
            _ => Err(Error::UnknownPattern(s.to_string())),
        }
    }
}

#[cfg(test)]
#[path = "catalog_tests.rs"]
mod tests;
