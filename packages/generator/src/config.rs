//! Configuration constants and validation functions for the generator.

use crate::error::{GeneratorError, Result};

/// Default master document filename.
pub const DEFAULT_INPUT_FILE: &str = "master_cv.yaml";

/// Default output filename when the identity carries no usable name.
pub const DEFAULT_OUTPUT_FILE: &str = "cv.md";

/// Suffix appended to the name slug for the default output filename.
pub const OUTPUT_FILE_SUFFIX: &str = "_cv.md";

/// Separator between contact fields on the header line.
pub const CONTACT_SEPARATOR: &str = " | ";

/// Fallback heading when the identity carries no name.
pub const DEFAULT_NAME: &str = "Name";

/// Fallback link target when a linkedin handle has no URL.
pub const DEFAULT_LINK_URL: &str = "#";

/// Minimum accepted summary wrap width.
pub const MIN_WRAP_WIDTH: usize = 20;

/// Maximum accepted summary wrap width.
///
/// Anything wider than this never wraps in practice, so larger values
/// are almost certainly a typo for a different flag.
pub const MAX_WRAP_WIDTH: usize = 500;

/// Validate a summary wrap width.
///
/// # Arguments
/// * `width` - The requested wrap column
///
/// # Returns
/// * `Ok(())` if within bounds
/// * `Err(GeneratorError::InvalidWrapWidth)` otherwise
///
/// # Examples
/// ```
/// use mastercv_generator::config::validate_wrap_width;
///
/// assert!(validate_wrap_width(100).is_ok());
/// assert!(validate_wrap_width(5).is_err());
/// ```
pub fn validate_wrap_width(width: usize) -> Result<()> {
    if (MIN_WRAP_WIDTH..=MAX_WRAP_WIDTH).contains(&width) {
        Ok(())
    } else {
        Err(GeneratorError::InvalidWrapWidth(width))
    }
}

/// Derive a display label from a skill category key.
///
/// Underscores become spaces and each word is title-cased, so
/// `soft_skills` renders as `Soft Skills`. A letter directly after a
/// digit counts as a word start (`web3_tools` becomes `Web3 Tools`).
#[must_use]
pub fn title_case_label(key: &str) -> String {
    let mut label = String::with_capacity(key.len());
    let mut prev_is_alpha = false;

    for ch in key.chars() {
        if ch == '_' {
            label.push(' ');
            prev_is_alpha = false;
        } else if ch.is_alphabetic() {
            if prev_is_alpha {
                label.extend(ch.to_lowercase());
            } else {
                label.extend(ch.to_uppercase());
            }
            prev_is_alpha = true;
        } else {
            label.push(ch);
            prev_is_alpha = false;
        }
    }

    label
}
