//! Legacy bias-sampling patch pass
//!
//! Modern compiler front ends reject the legacy `tex*bias` sampling
//! intrinsics, so this pass rewrites them into their plain counterparts
//! before compilation: the bias argument is dropped and the coordinate
//! vector is projected to the dimensionality of the sample kind.
//!
//! This is deliberately a textual transform, not a parse. Matching runs up
//! to the first top-level comma and the first closing parenthesis; a bias
//! expression containing nested parentheses or extra commas will not match.
//! Known limitation - the legacy sources this pass exists for never hit it.

use std::sync::OnceLock;

use regex::Regex;

fn tex2d_bias() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"tex2Dbias\s*\(([^,]+),([^)]+)\)").expect("valid regex"))
}

fn texcube_bias() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"texCUBEbias\s*\(([^,]+),([^)]+)\)").expect("valid regex"))
}

fn tex3d_bias() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"tex3Dbias\s*\(([^,]+),([^)]+)\)").expect("valid regex"))
}

/// Rewrite legacy bias-sampling calls into plain sampling calls
///
/// `tex2Dbias(s, c)` becomes `tex2D(s, (c).xy)`, and the CUBE/3D variants
/// project to `.xyz`. Sources without a `bias` substring pass through
/// untouched.
pub fn patch_bias_samples(source: &str) -> String {
    if !source.contains("bias") {
        return source.to_string();
    }

    let source = tex2d_bias().replace_all(source, "tex2D(${1}, (${2}).xy)");
    let source = texcube_bias().replace_all(&source, "texCUBE(${1}, (${2}).xyz)");
    let source = tex3d_bias().replace_all(&source, "tex3D(${1}, (${2}).xyz)");
    source.into_owned()
}
