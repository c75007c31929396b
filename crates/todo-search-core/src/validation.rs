//! Search Query Validation
//!
//! Required + minimum length, nothing else. The raw value is kept as typed;
//! case is normalized by the filter.

use crate::error::QueryError;

/// A query that passed validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery(String);

impl SearchQuery {
    /// Length is counted in `char`s, so one emoji is one character.
    pub fn parse(raw: &str, min_len: usize) -> Result<Self, QueryError> {
        if raw.is_empty() {
            return Err(QueryError::Required);
        }
        if raw.chars().count() < min_len {
            return Err(QueryError::TooShort { min: min_len });
        }
        Ok(Self(raw.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_is_required() {
        assert_eq!(SearchQuery::parse("", 3), Err(QueryError::Required));
        assert_eq!(QueryError::Required.to_string(), "Search query is required");
    }

    #[test]
    fn test_short_query_rejected() {
        let err = SearchQuery::parse("ab", 3).unwrap_err();
        assert_eq!(err, QueryError::TooShort { min: 3 });
        assert_eq!(err.to_string(), "Search query must be at least 3 characters");
        assert!(SearchQuery::parse("a", 3).is_err());
    }

    #[test]
    fn test_accepts_min_length() {
        let query = SearchQuery::parse("abc", 3).unwrap();
        assert_eq!(query.as_str(), "abc");
    }

    #[test]
    fn test_counts_characters_not_bytes() {
        // 2 chars, 6 bytes
        assert!(SearchQuery::parse("日本", 3).is_err());
        assert!(SearchQuery::parse("日本語", 3).is_ok());
    }

    #[test]
    fn test_emoji_counts_as_one_character() {
        assert!(SearchQuery::parse("😀😀", 3).is_err());
        assert!(SearchQuery::parse("😀😀😀", 3).is_ok());
    }

    #[test]
    fn test_raw_value_kept() {
        let query = SearchQuery::parse("  Buy ", 3).unwrap();
        assert_eq!(query.as_str(), "  Buy ");
    }
}
