//! PDF sources
//!
//! Resolution of client references to local asset files, and scoped temp
//! files for uploaded PDFs.

use std::io::Write;
use std::path::{Component, Path, PathBuf};

use tempfile::NamedTempFile;

use crate::error::{AppError, Result};

/// Resolve a `/`-rooted reference to a file under `assets_dir`
///
/// Only local references are honoured; anything not starting with `/` is
/// rejected before the filesystem is touched. The reference is
/// percent-decoded and must not climb out of the asset directory.
pub fn resolve_asset(assets_dir: &Path, reference: &str) -> Result<PathBuf> {
    if !reference.starts_with('/') {
        return Err(AppError::UnsupportedSource(
            "Only local PDFs are supported".to_string(),
        ));
    }

    let decoded = urlencoding::decode(reference)
        .map_err(|_| AppError::Validation("Invalid PDF path".to_string()))?;
    let relative = Path::new(decoded.trim_start_matches('/'));

    if !relative
        .components()
        .all(|c| matches!(c, Component::Normal(_)))
    {
        return Err(AppError::Validation("Invalid PDF path".to_string()));
    }

    let path = assets_dir.join(relative);
    if !path.is_file() {
        tracing::debug!(path = %path.display(), "Asset not found");
        return Err(AppError::NotFound("PDF file not found".to_string()));
    }

    Ok(path)
}

/// Whether `filename` carries a `.pdf` extension, ignoring case
pub fn has_pdf_extension(filename: &str) -> bool {
    filename.to_lowercase().ends_with(".pdf")
}

/// Write uploaded bytes to a uniquely named temp file in `dir`
///
/// The file is removed when the returned handle drops, on every exit path.
pub fn write_upload(dir: &Path, data: &[u8]) -> std::io::Result<NamedTempFile> {
    let mut file = tempfile::Builder::new()
        .prefix("upload-")
        .suffix(".pdf")
        .tempfile_in(dir)?;
    file.write_all(data)?;
    file.flush()?;
    Ok(file)
}
