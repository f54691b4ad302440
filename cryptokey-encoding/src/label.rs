//! Convenience trait for parsing type-name labels.

use alloc::string::String;
use core::{fmt, str::FromStr};

/// Maximum size of any type name label.
pub const MAX_LABEL_SIZE: usize = 64;

/// Labels naming e.g. key representation types.
///
/// Labels are the human-readable discriminators used by text encodings. They
/// must be non-empty, printable ASCII (no whitespace) and no longer than
/// [`MAX_LABEL_SIZE`] bytes.
pub trait Label: AsRef<str> + FromStr<Err = Self::Error> {
    /// Type returned in the event of a parsing error.
    type Error: From<LabelError>;

    /// Check the common label syntax, then parse the label.
    fn parse_label(label: &str) -> Result<Self, Self::Error> {
        LabelError::check(label)?;
        label.parse()
    }
}

/// Errors related to labels.
#[derive(Clone, Debug, Eq, Hash, PartialEq, PartialOrd, Ord)]
pub struct LabelError {
    /// The label that caused the error.
    label: String,
}

impl LabelError {
    /// Create a new [`LabelError`] for the given invalid label.
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
        }
    }

    /// The invalid label string (if available).
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Check that `label` satisfies the common label syntax.
    pub fn check(label: &str) -> Result<(), Self> {
        if label.is_empty()
            || label.len() > MAX_LABEL_SIZE
            || !label.bytes().all(|b| b.is_ascii_graphic())
        {
            return Err(Self::new(label));
        }

        Ok(())
    }
}

impl fmt::Display for LabelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid label: '{}'", self.label)
    }
}

impl core::error::Error for LabelError {}
