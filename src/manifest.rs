//! Shader manifest model and loader
//!
//! The manifest is an ordered JSON array of build entries. Order matters:
//! pack entries are emitted in manifest order, and that order is part of the
//! pack format contract (offsets, first-occurrence duplicate policy).

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::{PackError, PackResult};

/// One shader build entry from the manifest
///
/// `defines` and `exclude` are whitespace-separated token lists, matching
/// the manifest's on-disk representation. Entries are immutable once loaded.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ManifestEntry {
    /// Pack entry name, unique per target run
    pub name: String,

    /// Source file path, relative to the source directory
    pub source: String,

    /// Target profile tag selecting the execution stage, e.g. `vs_3_0`
    pub target: String,

    /// Entry point function name
    pub entrypoint: String,

    /// Whitespace-separated preprocessor defines
    #[serde(default)]
    pub defines: String,

    /// Whitespace-separated target names this entry is excluded from
    #[serde(default)]
    pub exclude: String,
}

impl ManifestEntry {
    /// Iterate the entry's define tokens
    pub fn define_tokens(&self) -> impl Iterator<Item = &str> {
        self.defines.split_whitespace()
    }

    /// Whether this entry is excluded from the named target
    pub fn excluded_for(&self, target_name: &str) -> bool {
        self.exclude.split_whitespace().any(|t| t == target_name)
    }
}

/// Load the shader manifest from a JSON file
///
/// Returns entries in file order.
pub fn load_manifest(path: &Path) -> PackResult<Vec<ManifestEntry>> {
    let content = fs::read_to_string(path).map_err(|e| PackError::ManifestRead {
        path: path.to_path_buf(),
        source: e,
    })?;

    serde_json::from_str(&content).map_err(|e| PackError::ManifestParse {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}
