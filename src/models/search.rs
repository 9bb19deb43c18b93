//! Search box text.

/// Text currently typed into the header search box.
///
/// The value is echoed back into the input verbatim; it is never trimmed,
/// truncated or validated while stored.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SearchQuery(String);

impl SearchQuery {
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    /// Replace the whole value with `text`.
    pub fn set(&mut self, text: impl Into<String>) {
        self.0 = text.into();
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Query with surrounding whitespace removed, or `None` if nothing is left.
    pub fn trimmed(&self) -> Option<&str> {
        let t = self.0.trim();
        (!t.is_empty()).then_some(t)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_echoes_input() {
        let mut query = SearchQuery::default();
        for text in ["", "d", "dune", "  frank herbert  ", "ß漢字 🙂", "a\tb\nc"] {
            query.set(text);
            assert_eq!(query.as_str(), text);
        }
    }

    #[test]
    fn test_set_unbounded_length() {
        let long = "x".repeat(100_000);
        let mut query = SearchQuery::new("short");
        query.set(long.clone());
        assert_eq!(query.as_str().len(), long.len());
    }

    #[test]
    fn test_trimmed() {
        assert_eq!(SearchQuery::new("  tolkien ").trimmed(), Some("tolkien"));
        assert_eq!(SearchQuery::new("   ").trimmed(), None);
        assert_eq!(SearchQuery::default().trimmed(), None);
        assert!(SearchQuery::default().is_empty());
    }
}
