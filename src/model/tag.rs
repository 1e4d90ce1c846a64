//! Tag data model.
//!
//! Tags label project cards and double as filter keys. A tag is whatever text
//! the tag element shows, with surrounding whitespace removed.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A classification string attached to projects.
///
/// Comparison is exact and case-sensitive: `Rust` and `rust` are different tags.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Tag(String);

impl Tag {
    /// Create a tag from element text, trimming surrounding whitespace.
    pub fn from_text(text: &str) -> Self {
        Self(text.trim().to_string())
    }

    /// The tag text.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether the trimmed text is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Tag {
    fn from(text: &str) -> Self {
        Self::from_text(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trims_whitespace() {
        assert_eq!(Tag::from_text("  Python \n").as_str(), "Python");
    }

    #[test]
    fn test_case_sensitive() {
        assert_ne!(Tag::from("Rust"), Tag::from("rust"));
        assert_eq!(Tag::from("Rust"), Tag::from(" Rust"));
    }
}
