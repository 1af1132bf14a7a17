//! Manifest-driven pack builder
//!
//! Drives the full per-entry progression - preprocess, compile,
//! cross-compile, accumulate - across every manifest entry for one target,
//! then hands the collected artifacts to the pack writer.
//!
//! Partial failure is first class: a broken shader variant is reported,
//! counted and skipped, and the pack still builds from the entries that
//! succeeded. Entries are processed strictly in manifest order, one at a
//! time, and the artifact list preserves that order.

use std::collections::HashSet;
use std::path::PathBuf;

use crate::config::BuildConfig;
use crate::error::{PackError, PackResult};
use crate::manifest::{load_manifest, ManifestEntry};
use crate::pack::{write_pack, PackEntry};
use crate::patch::patch_bias_samples;
use crate::preprocess::resolve_includes;
use crate::target::Target;
use crate::toolchain::{CompileRequest, Toolchain};

/// Terminal outcome of one manifest entry for one target
#[derive(Debug)]
pub enum EntryOutcome {
    /// Compiled and cross-compiled; ready for packing
    Ready(PackEntry),
    /// Excluded from this target by the manifest
    Skipped,
    /// Failed at the compile or cross-compile stage
    Failed(PackError),
}

/// Result of building one target's pack
#[derive(Debug)]
pub struct BuildSummary {
    pub target: Target,
    pub succeeded: usize,
    pub failed: usize,
    pub pack_path: PathBuf,
}

impl BuildSummary {
    /// True when every processed entry compiled
    pub fn is_clean(&self) -> bool {
        self.failed == 0
    }
}

/// Results of a multi-target run
///
/// A target whose pack could not be written lands in `target_errors`; the
/// remaining targets still build.
#[derive(Debug)]
pub struct BuildReport {
    pub summaries: Vec<BuildSummary>,
    pub target_errors: Vec<(Target, PackError)>,
}

/// Merge an entry's defines with the target's dialect defines
///
/// Entry defines come first, matching the order they reach the compiler
/// command line.
fn merge_defines(entry: &ManifestEntry, target: Target) -> Vec<String> {
    entry
        .define_tokens()
        .map(String::from)
        .chain(target.dialect_defines().iter().map(|d| (*d).to_string()))
        .collect()
}

/// Run one manifest entry through the full pipeline for one target
pub fn process_entry(
    config: &BuildConfig,
    toolchain: &dyn Toolchain,
    entry: &ManifestEntry,
    target: Target,
) -> EntryOutcome {
    if entry.excluded_for(target.name()) {
        return EntryOutcome::Skipped;
    }

    // Preprocessing: flatten includes, patch legacy sampling calls.
    let source_path = config.source_path(&entry.source);
    let search_dirs = config.search_dirs(&source_path);
    let flattened = resolve_includes(&source_path, &search_dirs);
    let source = patch_bias_samples(&flattened);

    let defines = merge_defines(entry, target);

    // Compiling: source to portable intermediate bytes.
    let request = CompileRequest {
        name: &entry.name,
        source: &source,
        entrypoint: &entry.entrypoint,
        profile: &entry.target,
        defines: &defines,
    };
    let spirv = match toolchain.compile(&request) {
        Ok(spirv) => spirv,
        Err(e) => return EntryOutcome::Failed(e),
    };

    // CrossCompiling: intermediate bytes to the target dialect.
    match toolchain.cross_compile(&entry.name, &spirv, &defines) {
        Ok(bytes) => EntryOutcome::Ready(PackEntry::new(entry.name.clone(), bytes)),
        Err(e) => EntryOutcome::Failed(e),
    }
}

/// Build and write one target's pack from a loaded manifest
///
/// Per-entry failures are reported on stderr and counted; only a failure to
/// write the pack itself is returned as an error.
pub fn build_target(
    config: &BuildConfig,
    toolchain: &dyn Toolchain,
    manifest: &[ManifestEntry],
    target: Target,
) -> PackResult<BuildSummary> {
    let mut entries = Vec::new();
    let mut seen = HashSet::new();
    let mut succeeded = 0;
    let mut failed = 0;

    for entry in manifest {
        if entry.excluded_for(target.name()) {
            continue;
        }

        // Duplicate names are a manifest authoring error; the first
        // occurrence wins so offsets stay deterministic.
        if !seen.insert(entry.name.as_str()) {
            eprintln!(
                "Warning: duplicate shader name '{}' in manifest, keeping first occurrence",
                entry.name
            );
            continue;
        }

        match process_entry(config, toolchain, entry, target) {
            EntryOutcome::Ready(pack_entry) => {
                succeeded += 1;
                entries.push(pack_entry);
            }
            EntryOutcome::Skipped => {}
            EntryOutcome::Failed(e) => {
                failed += 1;
                eprintln!("{e}");
            }
        }
    }

    let pack_path = config.pack_path(&target.pack_file_name());
    write_pack(&pack_path, &entries)?;

    Ok(BuildSummary {
        target,
        succeeded,
        failed,
        pack_path,
    })
}

/// Build packs for the given targets
///
/// Verifies the external tools before any work, loads the manifest once,
/// then builds each target in order. A target whose pack cannot be written
/// does not stop the remaining targets.
pub fn build_all(
    config: &BuildConfig,
    toolchain: &dyn Toolchain,
    targets: &[Target],
) -> PackResult<BuildReport> {
    toolchain.check_tools()?;
    let manifest = load_manifest(&config.manifest_path)?;

    let mut summaries = Vec::new();
    let mut target_errors = Vec::new();

    for &target in targets {
        match build_target(config, toolchain, &manifest, target) {
            Ok(summary) => summaries.push(summary),
            Err(e) => target_errors.push((target, e)),
        }
    }

    Ok(BuildReport {
        summaries,
        target_errors,
    })
}
