// src/domain/slug/lookup.rs
use crate::domain::record::RecordId;
use std::fmt;

/// A route or lookup value: either a primary key or free text that may
/// still turn out to be one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupKey {
    Key(RecordId),
    Text(String),
}

/// Primary key addressed by `value`, if any. Text only counts when it is the
/// canonical decimal rendering of a non-zero integer, so `"42"` is a key
/// while `"042"`, `"+42"`, `"42a"` and `"0"` are slugs.
pub fn parse_canonical_key(value: &str) -> Option<RecordId> {
    let parsed = value.parse::<i64>().ok()?;
    if parsed == 0 || parsed.to_string() != value {
        return None;
    }
    Some(RecordId(parsed))
}

impl From<RecordId> for LookupKey {
    fn from(value: RecordId) -> Self {
        Self::Key(value)
    }
}

impl From<i64> for LookupKey {
    fn from(value: i64) -> Self {
        Self::Key(RecordId(value))
    }
}

impl From<&str> for LookupKey {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<String> for LookupKey {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl fmt::Display for LookupKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Key(key) => write!(f, "{key}"),
            Self::Text(text) => f.write_str(text),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonical_integers_are_keys() {
        assert_eq!(parse_canonical_key("42"), Some(RecordId(42)));
        assert_eq!(parse_canonical_key("-7"), Some(RecordId(-7)));
    }

    #[test]
    fn non_canonical_numbers_are_slugs() {
        for text in ["007", "+7", "42a", "4 2", " 42", "0", "", "1e3", "99999999999999999999"] {
            assert_eq!(parse_canonical_key(text), None, "{text:?}");
        }
    }

    #[test]
    fn conversions_pick_the_variant() {
        assert_eq!(LookupKey::from(7), LookupKey::Key(RecordId(7)));
        assert_eq!(LookupKey::from("7"), LookupKey::Text("7".into()));
        assert_eq!(LookupKey::from("hello-world").to_string(), "hello-world");
    }
}
