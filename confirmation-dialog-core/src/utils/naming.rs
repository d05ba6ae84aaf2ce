//! Confirmer naming rules

use std::sync::LazyLock;

use regex::Regex;

#[allow(clippy::expect_used)]
static NAME_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z_]+$").expect("confirmer name pattern is valid"));

/// Confirmer names may only contain ASCII letters and underscores.
pub fn is_valid_name(name: &str) -> bool {
    NAME_PATTERN.is_match(name)
}

/// Lower-case exactly the first character, leave the rest untouched.
pub fn lowercase_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Upper-case exactly the first character, leave the rest untouched.
pub fn uppercase_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
