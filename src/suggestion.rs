//! Completion candidates and prefix filtering.

use serde::Serialize;

/// A completion candidate: the text to insert and a short description.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Suggestion {
    /// Text inserted when the suggestion is accepted
    pub text: String,
    /// Help text shown next to the candidate
    pub description: String,
}

impl Suggestion {
    /// Create a suggestion with a description
    pub fn new(text: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            description: description.into(),
        }
    }

    /// Create a suggestion without a description
    pub fn text(text: impl Into<String>) -> Self {
        Self::new(text, String::new())
    }
}

/// Keep the suggestions whose text starts with `prefix`.
///
/// Whitespace around `prefix` is ignored and an empty prefix keeps
/// everything. Order is preserved.
#[must_use]
pub fn filter_has_prefix(
    suggestions: &[Suggestion],
    prefix: &str,
    ignore_case: bool,
) -> Vec<Suggestion> {
    let prefix = prefix.trim();
    if prefix.is_empty() {
        return suggestions.to_vec();
    }
    if ignore_case {
        let prefix = prefix.to_lowercase();
        suggestions
            .iter()
            .filter(|s| s.text.to_lowercase().starts_with(&prefix))
            .cloned()
            .collect()
    } else {
        suggestions
            .iter()
            .filter(|s| s.text.starts_with(prefix))
            .cloned()
            .collect()
    }
}
