//! Shaderpack - shader compilation and packaging tool
//!
//! Shaderpack turns a manifest of shader sources into per-target binary
//! packs consumable by the renderer at runtime. For each target it flattens
//! `#include` directives, patches legacy sampling calls, compiles to
//! portable SPIR-V, cross-compiles to the target's GLSL dialect and bundles
//! the results into a fixed-layout pack file.

pub mod config;
pub mod error;
pub mod manifest;
pub mod pack;
pub mod patch;
pub mod pipeline;
pub mod preprocess;
pub mod target;
pub mod toolchain;

// Re-exports for convenience
pub use config::BuildConfig;
pub use error::{PackError, PackResult};
pub use manifest::{load_manifest, ManifestEntry};
pub use pack::{read_pack, write_pack, PackEntry};
pub use patch::patch_bias_samples;
pub use pipeline::{build_all, build_target, process_entry, BuildReport, BuildSummary, EntryOutcome};
pub use preprocess::resolve_includes;
pub use target::Target;
pub use toolchain::{CliToolchain, CompileRequest, GlslDialect, Stage, Toolchain};
