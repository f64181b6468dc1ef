use std::fmt;

/// Cleaned, size-bounded document text ready for prompting.
///
/// Only the text normalizer constructs this type, so holders can rely on:
/// no carriage returns, no run of three or more line breaks, no leading
/// whitespace, and at most the configured character budget. Trailing
/// whitespace is absent when the source fit the budget; a hard cut at the
/// budget may end right after a space.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NormalizedText(String);

impl NormalizedText {
    pub(crate) fn from_normalized(text: String) -> Self {
        Self(text)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Length in Unicode scalar values, the unit the character budget is expressed in.
    pub fn char_count(&self) -> usize {
        self.0.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl AsRef<str> for NormalizedText {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NormalizedText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
