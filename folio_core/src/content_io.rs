//! # Content File I/O
//!
//! Content files are JSON documents matching [`Content`]. Saves are atomic:
//! write to a `.tmp` sibling, sync, then rename over the target, so an
//! interrupted export never leaves a truncated file behind.
//!
//! ## Example
//!
//! ```rust,no_run
//! use folio_core::content_io::{load_content, save_content};
//! use folio_core::Content;
//! use std::path::Path;
//!
//! let content = Content::builtin()?;
//! save_content(&content, Path::new("portfolio.json"))?;
//!
//! let reloaded = load_content(Path::new("portfolio.json"))?;
//! assert_eq!(content, reloaded);
//! # Ok::<(), folio_core::errors::FolioError>(())
//! ```

use std::fs::{self, File};
use std::io::{Read, Write};
use std::path::Path;

use crate::content::{Content, CONTENT_SCHEMA_VERSION};
use crate::errors::{FolioError, FolioResult};

/// Content compiled into the binary
const BUILTIN_CONTENT: &str = include_str!("../content/portfolio.json");

impl Content {
    /// Parse the content shipped with the crate.
    pub fn builtin() -> FolioResult<Content> {
        parse_content(BUILTIN_CONTENT, "<builtin>")
    }
}

/// Parse, version-check and validate a content document.
///
/// `source` only appears in error messages.
pub fn parse_content(json: &str, source: &str) -> FolioResult<Content> {
    let content: Content = serde_json::from_str(json).map_err(|e| FolioError::SerializationError {
        reason: format!("Invalid JSON in {}: {}", source, e),
    })?;

    validate_version(&content.version)?;
    content.validate()?;

    Ok(content)
}

/// Load a content file.
///
/// # Returns
///
/// * `Ok(Content)` - Parsed and validated content
/// * `Err(FolioError::FileError)` - I/O error
/// * `Err(FolioError::SerializationError)` - Invalid JSON
/// * `Err(FolioError::VersionMismatch)` - Incompatible schema version
/// * `Err(FolioError::InvalidContent)` - A content rule was violated
pub fn load_content(path: &Path) -> FolioResult<Content> {
    let mut file = File::open(path).map_err(|e| {
        FolioError::file_error("open", path.display().to_string(), e.to_string())
    })?;

    let mut contents = String::new();
    file.read_to_string(&mut contents).map_err(|e| {
        FolioError::file_error("read", path.display().to_string(), e.to_string())
    })?;

    let content = parse_content(&contents, &path.display().to_string())?;
    tracing::info!(
        path = %path.display(),
        projects = content.projects.len(),
        skills = content.skills.len(),
        "loaded content file"
    );

    Ok(content)
}

/// Save content to a file with atomic write semantics.
///
/// The save process:
/// 1. Serialize content to pretty JSON
/// 2. Write to a temporary file (.tmp)
/// 3. Sync to disk (fsync)
/// 4. Rename .tmp over the target
pub fn save_content(content: &Content, path: &Path) -> FolioResult<()> {
    let json = serde_json::to_string_pretty(content).map_err(|e| FolioError::SerializationError {
        reason: e.to_string(),
    })?;

    let tmp_path = path.with_extension("json.tmp");

    let mut tmp_file = File::create(&tmp_path).map_err(|e| {
        FolioError::file_error("create temp file", tmp_path.display().to_string(), e.to_string())
    })?;

    tmp_file.write_all(json.as_bytes()).map_err(|e| {
        FolioError::file_error("write temp file", tmp_path.display().to_string(), e.to_string())
    })?;

    tmp_file.sync_all().map_err(|e| {
        FolioError::file_error("sync temp file", tmp_path.display().to_string(), e.to_string())
    })?;

    fs::rename(&tmp_path, path).map_err(|e| {
        // Clean up temp file if rename fails
        let _ = fs::remove_file(&tmp_path);
        FolioError::file_error("rename to final", path.display().to_string(), e.to_string())
    })?;

    tracing::info!(path = %path.display(), "saved content file");
    Ok(())
}

/// Validate that a file version is compatible with the current schema.
///
/// Major versions must match; for 0.x schemas the file's minor version may
/// not be newer than ours.
fn validate_version(file_version: &str) -> FolioResult<()> {
    let mismatch = || FolioError::VersionMismatch {
        file_version: file_version.to_string(),
        expected_version: CONTENT_SCHEMA_VERSION.to_string(),
    };

    let file_parts: Vec<u32> = file_version
        .split('.')
        .filter_map(|p| p.parse().ok())
        .collect();
    let current_parts: Vec<u32> = CONTENT_SCHEMA_VERSION
        .split('.')
        .filter_map(|p| p.parse().ok())
        .collect();

    if file_parts.is_empty() || current_parts.is_empty() {
        return Err(mismatch());
    }

    if file_parts[0] != current_parts[0] {
        return Err(mismatch());
    }

    if current_parts[0] == 0
        && file_parts.len() > 1
        && current_parts.len() > 1
        && file_parts[1] > current_parts[1]
    {
        return Err(mismatch());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env::temp_dir;
    use std::path::PathBuf;

    fn temp_content_path(name: &str) -> PathBuf {
        temp_dir().join(format!("folio_test_{}.json", name))
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let path = temp_content_path("roundtrip");

        let mut content = Content::builtin().unwrap();
        content.profile.location = "Manchester, England".to_string();
        save_content(&content, &path).unwrap();

        let loaded = load_content(&path).unwrap();
        assert_eq!(loaded, content);

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_atomic_save_creates_no_tmp_file() {
        let path = temp_content_path("atomic");
        let tmp_path = path.with_extension("json.tmp");

        save_content(&Content::builtin().unwrap(), &path).unwrap();

        assert!(!tmp_path.exists());
        assert!(path.exists());

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_load_missing_file() {
        let path = temp_content_path("does_not_exist");
        let _ = fs::remove_file(&path);

        let err = load_content(&path).unwrap_err();
        assert_eq!(err.error_code(), "FILE_ERROR");
    }

    #[test]
    fn test_load_malformed_json() {
        let path = temp_content_path("malformed");
        fs::write(&path, "{ \"version\": ").unwrap();

        let err = load_content(&path).unwrap_err();
        assert_eq!(err.error_code(), "SERIALIZATION_ERROR");

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_load_rejects_invalid_content() {
        let path = temp_content_path("invalid");
        let mut content = Content::builtin().unwrap();
        content.skills[0].proficiency = 150;
        save_content(&content, &path).unwrap();

        let err = load_content(&path).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_CONTENT");

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_version_validation() {
        assert!(validate_version("0.1.0").is_ok());
        assert!(validate_version("0.0.9").is_ok());
        assert!(validate_version("0.2.0").is_err());
        assert!(validate_version("1.0.0").is_err());
        assert!(validate_version("garbage").is_err());
    }
}
