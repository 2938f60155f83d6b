//! Tag normalization.
//!
//! Tags are free-form, but a tag is rendered as a single chip, so:
//! - Surrounding whitespace is trimmed
//! - The trimmed tag cannot be empty
//! - Control characters (newlines, tabs, ...) are rejected

use thiserror::Error;

/// Normalizes a raw tag as typed by the user.
///
/// # Examples
/// ```
/// use smartnotesapp::tags::validation::normalize_tag;
///
/// assert_eq!(normalize_tag("  urgent ").unwrap(), "urgent");
/// assert_eq!(normalize_tag("two words").unwrap(), "two words");
///
/// assert!(normalize_tag("").is_err());
/// assert!(normalize_tag("   ").is_err());
/// assert!(normalize_tag("line\nbreak").is_err());
/// ```
pub fn normalize_tag(raw: &str) -> Result<String, TagValidationError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(TagValidationError::Empty);
    }

    if let Some(ch) = trimmed.chars().find(|c| c.is_control()) {
        return Err(TagValidationError::InvalidCharacter(ch));
    }

    Ok(trimmed.to_string())
}

/// Error type for tag normalization failures.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TagValidationError {
    /// Tag is empty or whitespace only
    #[error("tag cannot be empty")]
    Empty,
    /// Tag contains a control character
    #[error("tag contains invalid character {0:?}")]
    InvalidCharacter(char),
}
