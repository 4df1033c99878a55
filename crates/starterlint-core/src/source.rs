//! Source units handed to the detector.

/// One unit of source text: an identifier plus its full content.
///
/// Units are owned by the caller and never mutated by the detector. The
/// identifier is usually a path but may be any name meaningful to the
/// reporting layer (an editor buffer title, a test case name).
///
/// # Example
///
/// ```
/// use starterlint_core::SourceUnit;
///
/// let unit = SourceUnit::new("buffer-1", "");
/// assert!(unit.is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceUnit {
    id: String,
    text: String,
}

impl SourceUnit {
    /// Creates a source unit.
    #[must_use]
    pub fn new(id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
        }
    }

    /// Returns the identifier.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Returns the full text.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Returns `true` when the text holds nothing but whitespace.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.trim().is_empty()
    }
}
