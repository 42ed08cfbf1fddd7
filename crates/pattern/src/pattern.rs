//! Cyclic label patterns.

use std::fmt;

use crate::error::PatternError;

/// A non-empty, ordered, cyclic sequence of opaque shift labels.
///
/// Index space is `Z/len`: [`Pattern::label`] accepts any index and wraps
/// it. Labels are never empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Pattern {
    labels: Vec<String>,
}

impl Pattern {
    /// Creates a pattern from an ordered list of labels.
    ///
    /// # Errors
    ///
    /// Returns [`PatternError::EmptyPattern`] if `labels` is empty and
    /// [`PatternError::EmptyLabel`] if any label is blank.
    pub fn new<I, S>(labels: I) -> Result<Self, PatternError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let labels: Vec<String> = labels.into_iter().map(Into::into).collect();
        if labels.is_empty() {
            return Err(PatternError::EmptyPattern);
        }
        if let Some(position) = labels.iter().position(|l| l.trim().is_empty()) {
            return Err(PatternError::EmptyLabel { position });
        }
        Ok(Self { labels })
    }

    /// Parses the stored text form: labels separated by runs of whitespace.
    ///
    /// # Errors
    ///
    /// Returns [`PatternError::EmptyPattern`] if the text holds no labels.
    ///
    /// ```
    /// use shiftcal_pattern::Pattern;
    ///
    /// let p = Pattern::parse("  day  night\toff\n").unwrap();
    /// assert_eq!(p.labels(), ["day", "night", "off"]);
    /// assert!(Pattern::parse("   ").is_err());
    /// ```
    pub fn parse(text: &str) -> Result<Self, PatternError> {
        Self::new(text.split_whitespace())
    }

    /// Number of labels in one cycle (always >= 1).
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// Always `false`; present for API symmetry with collections.
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Returns the labels in cycle order.
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Returns the label at `index`, wrapping modulo the pattern length.
    pub fn label(&self, index: usize) -> &str {
        &self.labels[index % self.labels.len()]
    }
}

/// Formats the pattern in its stored text form (labels joined by spaces).
impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.labels.join(" "))
    }
}
