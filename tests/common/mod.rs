//! Common test utilities for shaderpack integration tests.
//!
//! This module provides:
//! - `ShaderTree`: an isolated on-disk shader directory (manifest + sources)
//! - `FakeToolchain`: an in-process stand-in for the external tools
//! - Fixtures: reusable shader source and manifest constants

#![allow(dead_code)]

pub mod fixtures;

pub use fixtures::*;
pub use toolchain::*;

use std::fs;
use std::path::PathBuf;

use tempfile::TempDir;

use shaderpack::BuildConfig;

/// Isolated shader asset directory for one test.
///
/// Creates the layout the pipeline expects: `shaders.json` at the root and
/// sources under `source/`. Pack files are written into the root.
pub struct ShaderTree {
    pub root: TempDir,
    pub config: BuildConfig,
}

impl ShaderTree {
    pub fn new() -> Self {
        let root = TempDir::new().expect("create temp shader dir");
        let config = BuildConfig::new(root.path());
        fs::create_dir_all(&config.source_dir).expect("create source dir");
        Self { root, config }
    }

    /// Write a source file under `source/`, creating parent directories
    pub fn write_source(&self, relative: &str, content: &str) -> PathBuf {
        let path = self.config.source_dir.join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("create source subdir");
        }
        fs::write(&path, content).expect("write source file");
        path
    }

    /// Write the manifest JSON
    pub fn write_manifest(&self, json: &str) {
        fs::write(&self.config.manifest_path, json).expect("write manifest");
    }

    /// Path a target's pack file will be written to
    pub fn pack_path(&self, target: shaderpack::Target) -> PathBuf {
        self.config.pack_path(&target.pack_file_name())
    }
}

impl Default for ShaderTree {
    fn default() -> Self {
        Self::new()
    }
}
