//! Target value object - defines which GLSL dialect to pack for

use std::fmt;

/// Symbolic build target
///
/// Each target selects a GLSL dialect/version pair through its define set;
/// the cross-compiler flags are derived from those defines, not from the
/// target directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, clap::ValueEnum)]
pub enum Target {
    /// Desktop OpenGL 2.1
    Glsl,
    /// Desktop OpenGL 3.3+
    Glsl3,
    /// OpenGL ES 2.0
    Glsles,
    /// OpenGL ES 3.0
    Glsles3,
}

impl Target {
    /// All targets, in build order
    pub const ALL: [Target; 4] = [Target::Glsl, Target::Glsl3, Target::Glsles, Target::Glsles3];

    /// Target identifier used in manifest exclusion lists and pack names
    pub fn name(&self) -> &'static str {
        match self {
            Target::Glsl => "glsl",
            Target::Glsl3 => "glsl3",
            Target::Glsles => "glsles",
            Target::Glsles3 => "glsles3",
        }
    }

    /// Dialect define tokens injected into every compile for this target
    pub fn dialect_defines(&self) -> &'static [&'static str] {
        match self {
            Target::Glsl => &["GLSL"],
            Target::Glsl3 => &["GLSL", "GL3"],
            Target::Glsles => &["GLSL", "GLSLES"],
            Target::Glsles3 => &["GLSL", "GLSLES", "GL3"],
        }
    }

    /// File name of this target's output pack
    pub fn pack_file_name(&self) -> String {
        format!("shaders_{}.pack", self.name())
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
