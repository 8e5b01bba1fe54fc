//! Syntax checks shared by the value objects and aggregates.
//!
//! These are pure predicates; callers turn a `false` into a
//! [`DomainError`](crate::DomainError) naming their own field.

use std::sync::LazyLock;

use regex::Regex;
use uuid::Uuid;

/// Length of the canonical hyphenated UUID form (`8-4-4-4-12`).
const HYPHENATED_UUID_LEN: usize = 36;

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid")
});

/// Parse a UUID in its canonical hyphenated form.
///
/// Braced, URN and simple (unhyphenated) renderings are rejected.
pub fn parse_uuid(value: &str) -> Option<Uuid> {
    if value.len() != HYPHENATED_UUID_LEN {
        return None;
    }
    Uuid::try_parse(value).ok()
}

pub fn is_valid_uuid(value: &str) -> bool {
    parse_uuid(value).is_some()
}

/// `local@domain.tld` with no whitespace and exactly one `@`.
pub fn is_valid_email(value: &str) -> bool {
    EMAIL_RE.is_match(value)
}

/// Whether `value` holds between `min` and `max` characters (inclusive).
pub fn has_char_len_between(value: &str, min: usize, max: usize) -> bool {
    let len = value.chars().count();
    (min..=max).contains(&len)
}
