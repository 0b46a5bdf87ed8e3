//! Master document loading and parsing.

use std::fs;
use std::path::Path;

use unicode_normalization::UnicodeNormalization;

use crate::error::{GeneratorError, Result};
use crate::types::MasterCv;

/// Load and parse a master document.
///
/// The raw text is NFC-normalized before parsing; editors disagree on
/// how they encode combining characters in names, and the output should
/// not depend on which one touched the file last.
///
/// # Arguments
/// * `path` - Path to the master YAML document
///
/// # Returns
/// The parsed document tree
pub fn load_master_cv(path: &Path) -> Result<MasterCv> {
    let raw = fs::read_to_string(path).map_err(|source| GeneratorError::InputRead {
        path: path.to_path_buf(),
        source,
    })?;

    let normalized: String = raw.nfc().collect();

    let cv: MasterCv =
        serde_yaml_ng::from_str(&normalized).map_err(|source| GeneratorError::InputParse {
            path: path.to_path_buf(),
            source,
        })?;

    tracing::debug!(
        path = %path.display(),
        jobs = cv.work_experience.jobs.len(),
        categories = cv.skills.categories.len(),
        "Parsed master document"
    );

    Ok(cv)
}
