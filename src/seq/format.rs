//! Textual rendering of sequences.
//!
//! [`SeqFormat`] holds the prefix, separator, and suffix used by
//! [`Seq::to_string_with`](super::Seq::to_string_with) and by the `Display`
//! impls of the sequence types.

use std::fmt::{self, Display, Write};

/// Rendering configuration for sequences.
///
/// # Defaults
///
/// ```
/// use u_seq::seq::{MArray, Seq, SeqFormat};
///
/// let genes = MArray::from(vec![1, 2, 3]);
/// assert_eq!(genes.to_string_with(&SeqFormat::default()), "[1,2,3]");
///
/// let format = SeqFormat::default()
///     .with_prefix("<")
///     .with_separator(" | ")
///     .with_suffix(">");
/// assert_eq!(genes.to_string_with(&format), "<1 | 2 | 3>");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeqFormat {
    /// Written before the first element.
    pub prefix: String,

    /// Written between two consecutive elements.
    pub separator: String,

    /// Written after the last element.
    pub suffix: String,
}

impl Default for SeqFormat {
    fn default() -> Self {
        Self {
            prefix: "[".into(),
            separator: ",".into(),
            suffix: "]".into(),
        }
    }
}

impl SeqFormat {
    /// Sets the prefix.
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    /// Sets the separator.
    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }

    /// Sets the suffix.
    pub fn with_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.suffix = suffix.into();
        self
    }

    /// Bare elements joined by `separator`, no brackets.
    pub fn joined(separator: impl Into<String>) -> Self {
        Self {
            prefix: String::new(),
            separator: separator.into(),
            suffix: String::new(),
        }
    }

    /// Writes `items` to `out` in this format.
    pub fn write<W, T>(&self, out: &mut W, items: &[T]) -> fmt::Result
    where
        W: Write + ?Sized,
        T: Display,
    {
        out.write_str(&self.prefix)?;
        for (i, item) in items.iter().enumerate() {
            if i > 0 {
                out.write_str(&self.separator)?;
            }
            write!(out, "{item}")?;
        }
        out.write_str(&self.suffix)
    }

    /// Renders `items` into a new `String`.
    pub fn render<T: Display>(&self, items: &[T]) -> String {
        let body = items
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(&self.separator);
        format!("{}{body}{}", self.prefix, self.suffix)
    }
}
