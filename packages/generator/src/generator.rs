//! Main generator service that ties the pipeline phases together.

use std::path::{Path, PathBuf};

use crate::config::{DEFAULT_OUTPUT_FILE, OUTPUT_FILE_SUFFIX};
use crate::error::Result;
use crate::filter::{select, CvStats};
use crate::loader::load_master_cv;
use crate::markdown::{render_markdown, RenderOptions};
use crate::types::Identity;

/// A rendered CV, ready to be written out.
#[derive(Debug)]
pub struct BuiltCv {
    /// The rendered Markdown document.
    pub markdown: String,
    /// The identity name, if any, for console reporting.
    pub name: Option<String>,
    /// Output path to use when the caller did not specify one.
    pub default_output: PathBuf,
    /// Counts describing what was selected.
    pub stats: CvStats,
}

/// Load a master document, filter it, and render the Markdown.
///
/// # Arguments
/// * `input` - Path to the master YAML document
/// * `options` - Rendering knobs
///
/// # Returns
/// The rendered document plus reporting metadata; writing is left to
/// the caller so it can sequence its own progress output.
pub fn build_cv(input: &Path, options: &RenderOptions) -> Result<BuiltCv> {
    let cv = load_master_cv(input)?;

    let selected = select(&cv);
    let stats = selected.stats();
    let markdown = render_markdown(&cv.identity, &selected, options);

    Ok(BuiltCv {
        markdown,
        name: cv.identity.name.clone(),
        default_output: default_output_path(&cv.identity),
        stats,
    })
}

/// Default output filename for an identity.
///
/// The slugged name plus `_cv.md` (e.g. `kok_shew_juan_cv.md`), or
/// `cv.md` when there is no usable name.
#[must_use]
pub fn default_output_path(identity: &Identity) -> PathBuf {
    match identity.to_slug() {
        Some(slug) => PathBuf::from(format!("{slug}{OUTPUT_FILE_SUFFIX}")),
        None => PathBuf::from(DEFAULT_OUTPUT_FILE),
    }
}
