//! Error types for shaderpack
//!
//! Uses `thiserror` for library errors. Per-entry compile failures never
//! cross the entry boundary; the pipeline converts them into skip-and-count
//! outcomes. Only tool absence and manifest/pack I/O propagate to callers.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for shaderpack operations
pub type PackResult<T> = Result<T, PackError>;

/// Main error type for shaderpack operations
#[derive(Error, Debug)]
pub enum PackError {
    /// A required external tool binary is not installed
    #[error("required tool '{tool}' not found in PATH")]
    ToolNotFound { tool: String },

    /// Shader profile does not map to a known execution stage
    #[error("unsupported profile '{profile}' for shader '{name}' - expected a 'vs' or 'ps' prefix")]
    UnsupportedProfile { name: String, profile: String },

    /// External compiler rejected the shader source
    #[error("error compiling {name}: {output}")]
    Compile { name: String, output: String },

    /// External cross-compiler rejected the intermediate output
    #[error("error converting {name}: {output}")]
    CrossCompile { name: String, output: String },

    /// Manifest file could not be read
    #[error("cannot read manifest {path}: {source}")]
    ManifestRead {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Manifest file is not valid JSON or is missing required fields
    #[error("invalid manifest {path}: {message}")]
    ManifestParse { path: PathBuf, message: String },

    /// Pack file could not be written
    #[error("cannot write pack {path}: {source}")]
    PackWrite {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Pack file failed structural validation on read
    #[error("corrupt pack {path}: {message}")]
    CorruptPack { path: PathBuf, message: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
