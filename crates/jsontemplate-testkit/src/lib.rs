//! Test utilities for jsontemplate
//!
//! This crate provides shared testing utilities used across the jsontemplate workspace.

use serde_json::{json, Value};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Creates a temporary directory within `.tmp/` at the project root
///
/// This ensures all test temporary files are centralized in a single location
/// that is gitignored and easy to clean up manually if needed.
///
/// # Returns
///
/// A `TempDir` instance that automatically cleans up on drop.
/// The directory is created at `.tmp/<random-name>` relative to the project root.
///
/// # Panics
///
/// Panics if:
/// - Unable to determine current directory
/// - Unable to create `.tmp/` directory
/// - Unable to create temporary subdirectory
///
/// # Examples
///
/// ```rust
/// use jsontemplate_testkit::temp_dir_in_workspace;
///
/// let temp = temp_dir_in_workspace();
/// let file_path = temp.path().join("test.jsont");
/// std::fs::write(&file_path, "Hello {name}").unwrap();
/// // Cleanup happens automatically when temp is dropped
/// ```
pub fn temp_dir_in_workspace() -> TempDir {
    try_temp_dir_in_workspace().expect("Failed to create temporary directory in .tmp/")
}

/// Alternative with Result for non-test code
///
/// Use this variant when you need proper error handling instead of panics.
pub fn try_temp_dir_in_workspace() -> std::io::Result<TempDir> {
    let workspace_root = std::env::current_dir()?;
    let tmp_base = workspace_root.join(".tmp");
    std::fs::create_dir_all(&tmp_base)?;
    TempDir::new_in(&tmp_base)
}

/// Write a harness description file and return its path
///
/// The file holds the `template`, `options` and `dictionary` keys read by the
/// `jsontemplate` command.
///
/// # Panics
///
/// Panics if the file cannot be written.
pub fn write_description(
    dir: &Path,
    template: &str,
    options: Value,
    dictionary: Value,
) -> PathBuf {
    let description = json!({
        "template": template,
        "options": options,
        "dictionary": dictionary,
    });
    let path = dir.join("description.json");
    let text = serde_json::to_string_pretty(&description).expect("Failed to serialize description");
    std::fs::write(&path, text).expect("Failed to write description file");
    path
}

/// Write a template file named `name` and return its path
///
/// # Panics
///
/// Panics if the file cannot be written.
pub fn write_template(dir: &Path, name: &str, text: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, text).expect("Failed to write template file");
    path
}
