//! Include resolver
//!
//! Flattens `#include` directives into a single source blob before the
//! external compiler ever sees the file. Only inclusion is handled here; no
//! macro expansion or conditional evaluation takes place, and every other
//! line passes through byte-for-byte.
//!
//! Each resolution tree carries a visited set keyed by canonical path. A
//! file revisited within the same tree contributes empty text instead of
//! being expanded again, so cyclic include graphs terminate. An include that
//! cannot be found is left verbatim for the downstream compiler to reject.

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use regex::Regex;

/// Matches `#include "file"` and `#include <file>` directives
fn include_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r#"#include\s+["<](.+)[">]"#).expect("include regex is valid"))
}

/// Recursively resolve `#include` directives starting from `path`
///
/// Included files are located by scanning `search_dirs` in order and taking
/// the first match. Unresolvable includes and unreadable files produce a
/// diagnostic on stderr; neither aborts resolution.
pub fn resolve_includes(path: &Path, search_dirs: &[PathBuf]) -> String {
    let mut visited = HashSet::new();
    let mut output = String::new();
    resolve_into(path, search_dirs, &mut visited, &mut output);
    output
}

/// Stable identity for the visited set
///
/// Canonicalization collapses the different relative spellings a file can be
/// reached through; files that cannot be canonicalized (not yet existing,
/// permission errors) fall back to their absolute lexical path.
fn canonical_identity(path: &Path) -> PathBuf {
    fs::canonicalize(path)
        .or_else(|_| std::path::absolute(path))
        .unwrap_or_else(|_| path.to_path_buf())
}

fn resolve_into(
    path: &Path,
    search_dirs: &[PathBuf],
    visited: &mut HashSet<PathBuf>,
    output: &mut String,
) {
    // Second visit within one resolution tree resolves to empty text. This
    // silently drops repeated content as well as true cycles.
    if !visited.insert(canonical_identity(path)) {
        return;
    }

    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) => {
            eprintln!("Error: cannot read include file {}: {}", path.display(), e);
            return;
        }
    };

    for line in content.split_inclusive('\n') {
        if !line.trim_start().starts_with("#include") {
            output.push_str(line);
            continue;
        }

        let Some(captures) = include_regex().captures(line) else {
            output.push_str(line);
            continue;
        };
        let inc_file = &captures[1];

        match search_dirs.iter().map(|d| d.join(inc_file)).find(|p| p.exists()) {
            Some(found) => resolve_into(&found, search_dirs, visited, output),
            None => {
                eprintln!("Warning: include not found: {inc_file}");
                // Leave the directive for the compiler to fail on.
                output.push_str(line);
            }
        }
    }
}
