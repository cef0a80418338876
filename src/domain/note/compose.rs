//! Save modes and final content composition

/// Separator used by append mode unless one is given
pub const DEFAULT_SEPARATOR: &str = "\n";

/// How a save treats the content already stored in the slot
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SaveMode {
    /// Overwrite the slot with the new content
    #[default]
    Replace,
    /// Read the slot first and write `existing + separator + content`
    Append { separator: String },
}

impl SaveMode {
    /// Append mode with the default newline separator
    pub fn append() -> Self {
        Self::Append {
            separator: DEFAULT_SEPARATOR.to_string(),
        }
    }

    /// Append mode with a custom separator
    pub fn append_with(separator: impl Into<String>) -> Self {
        Self::Append {
            separator: separator.into(),
        }
    }

    pub fn is_append(&self) -> bool {
        matches!(self, Self::Append { .. })
    }
}

/// Join existing slot text and new content.
///
/// Empty existing text produces the new content alone, without a leading
/// separator.
pub fn join_content(existing: &str, separator: &str, content: &str) -> String {
    if existing.is_empty() {
        content.to_string()
    } else {
        let mut joined = String::with_capacity(existing.len() + separator.len() + content.len());
        joined.push_str(existing);
        joined.push_str(separator);
        joined.push_str(content);
        joined
    }
}
