//! Build configuration
//!
//! All paths and tool names the pipeline depends on are carried in an
//! explicit [`BuildConfig`] value handed to the builder entry points.
//! Nothing here is process-global, so independent target runs can use
//! independent configurations.

use std::path::{Path, PathBuf};

/// Default compiler program name (source -> SPIR-V)
pub const DEFAULT_COMPILER: &str = "glslangValidator";

/// Default cross-compiler program name (SPIR-V -> GLSL)
pub const DEFAULT_CROSS_COMPILER: &str = "spirv-cross";

/// Configuration for a shader build run
///
/// The shader directory holds the manifest (`shaders.json`), the `source/`
/// subdirectory with shader sources, and receives the output pack files.
#[derive(Debug, Clone)]
pub struct BuildConfig {
    /// Root shader asset directory (manifest + pack output location)
    pub shader_dir: PathBuf,

    /// Directory containing shader source files
    pub source_dir: PathBuf,

    /// Path to the shader manifest
    pub manifest_path: PathBuf,

    /// Compiler program name or path
    pub compiler: String,

    /// Cross-compiler program name or path
    pub cross_compiler: String,
}

impl BuildConfig {
    /// Create a configuration rooted at the given shader directory
    ///
    /// Derives `source/` and `shaders.json` locations from the root.
    pub fn new(shader_dir: impl Into<PathBuf>) -> Self {
        let shader_dir = shader_dir.into();
        let source_dir = shader_dir.join("source");
        let manifest_path = shader_dir.join("shaders.json");
        Self {
            shader_dir,
            source_dir,
            manifest_path,
            compiler: DEFAULT_COMPILER.to_string(),
            cross_compiler: DEFAULT_CROSS_COMPILER.to_string(),
        }
    }

    /// Override the compiler program
    pub fn with_compiler(mut self, compiler: impl Into<String>) -> Self {
        self.compiler = compiler.into();
        self
    }

    /// Override the cross-compiler program
    pub fn with_cross_compiler(mut self, cross_compiler: impl Into<String>) -> Self {
        self.cross_compiler = cross_compiler.into();
        self
    }

    /// Output path for a target's pack file
    pub fn pack_path(&self, file_name: &str) -> PathBuf {
        self.shader_dir.join(file_name)
    }

    /// Resolve a manifest-relative source path
    pub fn source_path(&self, relative: &str) -> PathBuf {
        self.source_dir.join(relative)
    }

    /// Include search directories for a shader source file
    ///
    /// The file's own directory is searched first, then the shared source
    /// directory, in that order.
    pub fn search_dirs(&self, source_path: &Path) -> Vec<PathBuf> {
        let mut dirs = Vec::with_capacity(2);
        if let Some(parent) = source_path.parent() {
            dirs.push(parent.to_path_buf());
        }
        if !dirs.iter().any(|d| d == &self.source_dir) {
            dirs.push(self.source_dir.clone());
        }
        dirs
    }
}
