//! External toolchain boundary
//!
//! The two external programs - the compiler (source to SPIR-V) and the
//! cross-compiler (SPIR-V to GLSL) - are reached exclusively through the
//! [`Toolchain`] trait, so the pipeline never depends on a concrete tool.
//! [`CliToolchain`] is the production implementation driving
//! `glslangValidator` and `spirv-cross` as subprocesses.
//!
//! Invocation is blocking with no timeout; this is an offline build tool.

use std::fs;
use std::io::Write;
use std::process::{Command, Output, Stdio};

use crate::error::{PackError, PackResult};

/// Execution stage derived from a target profile tag
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Vertex,
    Fragment,
}

impl Stage {
    /// Map a profile tag (e.g. `vs_3_0`) to its stage via the two-letter prefix
    pub fn from_profile(profile: &str) -> Option<Stage> {
        if profile.starts_with("vs") {
            Some(Stage::Vertex)
        } else if profile.starts_with("ps") {
            Some(Stage::Fragment)
        } else {
            None
        }
    }

    /// Temp-file suffix selecting both stage and source dialect for the compiler
    pub fn temp_suffix(&self) -> &'static str {
        match self {
            Stage::Vertex => ".vert.hlsl",
            Stage::Fragment => ".frag.hlsl",
        }
    }

    /// Preprocessor symbol identifying the stage to the shader source
    pub fn stage_define(&self) -> &'static str {
        match self {
            Stage::Vertex => "SHADER_STAGE_VS",
            Stage::Fragment => "SHADER_STAGE_PS",
        }
    }
}

/// GLSL dialect/version pair selected from a define set
///
/// This is a fixed lookup, not a general rule: the ES marker takes priority
/// over the desktop GL3 tier when both are present, because they select
/// conflicting cross-compiler flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GlslDialect {
    pub es: bool,
    pub version: &'static str,
}

impl GlslDialect {
    /// Select the output dialect for a merged define set
    pub fn for_defines(defines: &[String]) -> GlslDialect {
        let has = |token: &str| defines.iter().any(|d| d == token);

        if has("GLSLES") {
            GlslDialect {
                es: true,
                version: if has("GL3") { "300" } else { "100" },
            }
        } else if has("GL3") {
            GlslDialect {
                es: false,
                version: "140",
            }
        } else {
            GlslDialect {
                es: false,
                version: "120",
            }
        }
    }

    fn profile_flag(&self) -> &'static str {
        if self.es {
            "--es"
        } else {
            "--no-es"
        }
    }
}

/// One shader compilation request
///
/// `source` is the already flattened and patched text; `defines` is the
/// merged entry + target define token list.
#[derive(Debug)]
pub struct CompileRequest<'a> {
    pub name: &'a str,
    pub source: &'a str,
    pub entrypoint: &'a str,
    pub profile: &'a str,
    pub defines: &'a [String],
}

/// Compiler backend seam
///
/// Implementations turn flattened source into portable intermediate bytes
/// and intermediate bytes into target dialect bytes. Alternate backends
/// (in-process libraries, different CLI tools) plug in here without
/// touching the pipeline.
pub trait Toolchain {
    /// Verify every required tool is invocable; called once before any work
    fn check_tools(&self) -> PackResult<()>;

    /// Compile flattened source to the portable intermediate representation
    fn compile(&self, req: &CompileRequest<'_>) -> PackResult<Vec<u8>>;

    /// Translate intermediate bytes into the dialect selected by `defines`
    fn cross_compile(&self, name: &str, spirv: &[u8], defines: &[String]) -> PackResult<Vec<u8>>;
}

/// Production toolchain invoking external CLI programs
#[derive(Debug, Clone)]
pub struct CliToolchain {
    compiler: String,
    cross_compiler: String,
}

impl CliToolchain {
    pub fn new(compiler: impl Into<String>, cross_compiler: impl Into<String>) -> Self {
        Self {
            compiler: compiler.into(),
            cross_compiler: cross_compiler.into(),
        }
    }

    /// Probe a tool with a version query; only a failed spawn counts as absent
    fn probe(tool: &str) -> PackResult<()> {
        Command::new(tool)
            .arg("--version")
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .map_err(|_| PackError::ToolNotFound {
                tool: tool.to_string(),
            })?;
        Ok(())
    }

    fn map_spawn_error(tool: &str, e: std::io::Error) -> PackError {
        if e.kind() == std::io::ErrorKind::NotFound {
            PackError::ToolNotFound {
                tool: tool.to_string(),
            }
        } else {
            PackError::Io(e)
        }
    }
}

impl Toolchain for CliToolchain {
    fn check_tools(&self) -> PackResult<()> {
        Self::probe(&self.compiler)?;
        Self::probe(&self.cross_compiler)?;
        Ok(())
    }

    fn compile(&self, req: &CompileRequest<'_>) -> PackResult<Vec<u8>> {
        let stage =
            Stage::from_profile(req.profile).ok_or_else(|| PackError::UnsupportedProfile {
                name: req.name.to_string(),
                profile: req.profile.to_string(),
            })?;

        // Both temp files are unique per request and removed on drop, on
        // every exit path. The source suffix tells the compiler the stage
        // and the source dialect.
        let mut source_file = tempfile::Builder::new()
            .prefix("shader-")
            .suffix(stage.temp_suffix())
            .tempfile()?;
        source_file.write_all(req.source.as_bytes())?;
        source_file.flush()?;

        let spirv_file = tempfile::Builder::new()
            .prefix("shader-")
            .suffix(".spv")
            .tempfile()?;

        // -V selects portable SPIR-V output semantics.
        let mut cmd = Command::new(&self.compiler);
        cmd.arg("-V")
            .arg("-e")
            .arg(req.entrypoint)
            .arg("-o")
            .arg(spirv_file.path())
            .arg(source_file.path())
            .arg(format!("-D{}", stage.stage_define()));
        for define in req.defines {
            cmd.arg(format!("-D{define}"));
        }

        let output = cmd
            .output()
            .map_err(|e| Self::map_spawn_error(&self.compiler, e))?;

        if !output.status.success() {
            return Err(PackError::Compile {
                name: req.name.to_string(),
                output: combined_output(&output),
            });
        }

        Ok(fs::read(spirv_file.path())?)
    }

    fn cross_compile(&self, name: &str, spirv: &[u8], defines: &[String]) -> PackResult<Vec<u8>> {
        let dialect = GlslDialect::for_defines(defines);

        let mut spirv_file = tempfile::Builder::new()
            .prefix("shader-")
            .suffix(".spv")
            .tempfile()?;
        spirv_file.write_all(spirv)?;
        spirv_file.flush()?;

        let output = Command::new(&self.cross_compiler)
            .arg(spirv_file.path())
            .arg(dialect.profile_flag())
            .arg("--version")
            .arg(dialect.version)
            .output()
            .map_err(|e| Self::map_spawn_error(&self.cross_compiler, e))?;

        if !output.status.success() {
            return Err(PackError::CrossCompile {
                name: name.to_string(),
                output: combined_output(&output),
            });
        }

        // The translated source is the tool's stdout.
        Ok(output.stdout)
    }
}

/// Merge captured stdout and stderr into one diagnostic blob
fn combined_output(output: &Output) -> String {
    let mut combined = String::from_utf8_lossy(&output.stdout).into_owned();
    let stderr = String::from_utf8_lossy(&output.stderr);
    if !stderr.trim().is_empty() {
        if !combined.is_empty() && !combined.ends_with('\n') {
            combined.push('\n');
        }
        combined.push_str(&stderr);
    }
    combined.trim_end().to_string()
}
