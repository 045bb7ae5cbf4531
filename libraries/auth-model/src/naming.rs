//! Field naming conventions for serialized records.
//!
//! Every key the auth service emits is lower-case words joined by
//! underscores, derived mechanically from the field's logical name
//! (`"phone number"`, `"phoneNumber"` and `"PhoneNumber"` all become
//! `phone_number`).

use serde::{Deserialize, Serialize};
use std::fmt;

/// Naming convention applied to field names on the way out.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NamingConvention {
    /// Lower-case words joined by `_`
    #[default]
    SnakeCase,
    /// Leave names untouched
    Preserve,
}

impl NamingConvention {
    /// Render a logical field name under this convention
    pub fn apply(&self, name: &str) -> String {
        match self {
            Self::SnakeCase => to_snake_case(name),
            Self::Preserve => name.to_string(),
        }
    }

    /// Convert to string representation
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::SnakeCase => "snake_case",
            Self::Preserve => "preserve",
        }
    }
}

impl fmt::Display for NamingConvention {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Convert a logical field name to lower snake_case.
///
/// Words break on any non-alphanumeric character, on a lower-case letter or
/// digit followed by an upper-case letter, and before the last capital of an
/// acronym that is followed by lower case (`HTTPServer` -> `http_server`).
///
/// The output only contains lower-case alphanumerics and single underscores,
/// so applying the conversion again returns the same string.
pub fn to_snake_case(name: &str) -> String {
    let chars: Vec<char> = name.chars().collect();
    let mut words: Vec<String> = Vec::new();
    let mut current = String::new();

    for (i, &c) in chars.iter().enumerate() {
        if !c.is_alphanumeric() {
            flush(&mut words, &mut current);
            continue;
        }

        if c.is_uppercase() && !current.is_empty() {
            let prev = chars[i - 1];
            let next_is_lower = chars.get(i + 1).is_some_and(|n| n.is_lowercase());
            let after_lower = prev.is_lowercase() || prev.is_numeric();
            let acronym_end = prev.is_uppercase() && next_is_lower;
            if after_lower || acronym_end {
                flush(&mut words, &mut current);
            }
        }

        // Lower-casing can expand into combining marks; keep only what
        // survives a second pass unchanged.
        current.extend(
            c.to_lowercase()
                .filter(|l| l.is_alphanumeric() && !l.is_uppercase()),
        );
    }
    flush(&mut words, &mut current);

    words.join("_")
}

fn flush(words: &mut Vec<String>, current: &mut String) {
    if !current.is_empty() {
        words.push(std::mem::take(current));
    }
}
