//! Path utilities for tests that need a tide constants directory.
//!
//! Predictions require an existing constants directory. Tests use a
//! temporary one so no tide model files have to be present.

use std::path::{Path, PathBuf};

/// Returns the workspace root directory.
///
/// This is determined by walking up from the current crate's manifest directory
/// until we find the workspace Cargo.toml.
pub fn workspace_root() -> PathBuf {
    let manifest_dir = env!("CARGO_MANIFEST_DIR");
    PathBuf::from(manifest_dir)
        .parent() // crates/
        .and_then(|p| p.parent()) // workspace root
        .map(|p| p.to_path_buf())
        .unwrap_or_else(|| PathBuf::from(manifest_dir))
}

/// Creates a temporary constants directory.
///
/// The directory is removed when the returned `TempDir` is dropped.
pub fn temp_constants_dir() -> tempfile::TempDir {
    tempfile::Builder::new()
        .prefix("tide_constants_")
        .tempdir()
        .expect("Failed to create temporary constants directory")
}

/// A path inside `base` that does not exist.
pub fn missing_dir(base: &Path) -> PathBuf {
    base.join("does-not-exist")
}
