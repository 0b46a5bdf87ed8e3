//! Markdown file writer.

use std::fs::{self, File};
use std::io::Write;
use std::path::Path;

use crate::error::Result;

/// Save rendered Markdown to a file, overwriting any existing content.
///
/// Uses atomic write pattern: writes to temp file, syncs to disk, then
/// renames. This ensures partial writes don't corrupt an existing file
/// on crash.
pub fn save_markdown(content: &str, output_path: &Path) -> Result<()> {
    let file_name = output_path
        .file_name()
        .map_or_else(|| "cv.md".to_string(), |name| name.to_string_lossy().into_owned());
    let temp_path = output_path.with_file_name(format!(".{file_name}.tmp"));

    {
        let mut file = File::create(&temp_path)?;
        file.write_all(content.as_bytes())?;
        file.sync_all()?;
    }

    // On Windows, rename fails if the destination already exists
    #[cfg(target_os = "windows")]
    if output_path.exists() {
        fs::remove_file(output_path)?;
    }

    // Atomic rename (on most filesystems)
    fs::rename(&temp_path, output_path)?;

    tracing::debug!(
        path = %output_path.display(),
        bytes = content.len(),
        "Wrote markdown"
    );

    Ok(())
}
