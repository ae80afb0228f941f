//! On-disk storage for documents attached to records.
//!
//! Files land under `<upload_dir>/<resource path>/<uuid>-<name>`; the
//! returned relative path is what gets stored on the record and what the
//! `/uploads` static route serves.

#[cfg(test)]
#[path = "uploads_test.rs"]
mod uploads_test;

use std::path::Path;

use tracing::{info, warn};
use uuid::Uuid;

const MAX_NAME_LEN: usize = 80;

/// Reduce a client-supplied filename to a safe single path segment.
///
/// Keeps ASCII alphanumerics, `.`, `-` and `_`; everything else becomes `_`.
/// Leading dots are stripped so the result is never hidden or `..`.
#[must_use]
pub fn sanitize_filename(raw: &str) -> String {
    let base = raw.rsplit(['/', '\\']).next().unwrap_or_default();
    let cleaned: String = base
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '_') { c } else { '_' })
        .collect();
    let trimmed = cleaned.trim_start_matches('.');
    let mut name: String = trimmed.chars().take(MAX_NAME_LEN).collect();
    if name.is_empty() {
        name.push_str("upload");
    }
    name
}

/// Relative storage path for a new upload of `filename` under `resource`.
#[must_use]
pub fn storage_path(resource: &str, filename: &str) -> String {
    format!("{resource}/{}-{}", Uuid::new_v4(), sanitize_filename(filename))
}

/// Write `bytes` under `upload_dir` and return the stored relative path.
///
/// # Errors
///
/// Returns an I/O error if the directory cannot be created or the file
/// cannot be written.
pub async fn store(upload_dir: &Path, resource: &str, filename: &str, bytes: &[u8]) -> std::io::Result<String> {
    let relative = storage_path(resource, filename);
    let target = upload_dir.join(&relative);
    if let Some(parent) = target.parent() {
        tokio::fs::create_dir_all(parent).await?;
    }
    tokio::fs::write(&target, bytes).await?;
    info!(path = %relative, size = bytes.len(), "stored upload");
    Ok(relative)
}

/// Delete a stored upload whose record was never written.
///
/// Failure is logged and otherwise ignored; the caller is already
/// reporting a more relevant error.
pub async fn discard(upload_dir: &Path, relative: &str) {
    match tokio::fs::remove_file(upload_dir.join(relative)).await {
        Ok(()) => info!(path = %relative, "discarded upload"),
        Err(e) => warn!(path = %relative, error = %e, "failed to discard upload"),
    }
}
