//! Text normalization for keyword matching.
//!
//! Matching is plain substring search over lowercased text: no tokenization,
//! stemming, or punctuation stripping. Multi-word keywords such as
//! "rest api" must appear verbatim.

/// A lowercased copy of a document, used for all keyword containment checks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedText(String);

impl NormalizedText {
    pub fn new(text: &str) -> Self {
        Self(text.to_lowercase())
    }

    /// True if the lowercased keyword occurs anywhere in the text.
    pub fn contains(&self, keyword: &str) -> bool {
        self.0.contains(&keyword.to_lowercase())
    }

    /// True if at least one keyword occurs in the text.
    pub fn contains_any(&self, keywords: &[&str]) -> bool {
        keywords.iter().any(|k| self.contains(k))
    }
}
