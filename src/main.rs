//! Shaderpack CLI - shader compilation and packaging tool
//!
//! Usage: shaderpack <COMMAND>
//!
//! Commands:
//!   build    Compile manifest shaders and write per-target packs
//!   inspect  Dump a pack file's entry table

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use shaderpack::config::{DEFAULT_COMPILER, DEFAULT_CROSS_COMPILER};
use shaderpack::pack::{ENTRY_SIZE, HEADER_SIZE};
use shaderpack::{
    build_target, load_manifest, read_pack, BuildConfig, CliToolchain, Target, Toolchain,
};

/// Shaderpack - shader compilation and packaging tool
#[derive(Parser, Debug)]
#[command(name = "shaderpack")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Output format for CI
    #[arg(long, default_value = "false")]
    json: bool,

    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Compile manifest shaders and write per-target packs
    Build {
        /// Path to the shader asset directory (manifest, sources, pack output)
        #[arg(short, long, default_value = "assets/shaders")]
        shaders: PathBuf,

        /// Build only the given targets (repeatable; default: all)
        #[arg(short, long)]
        target: Vec<Target>,

        /// Compiler program
        #[arg(long, default_value = DEFAULT_COMPILER)]
        compiler: String,

        /// Cross-compiler program
        #[arg(long, default_value = DEFAULT_CROSS_COMPILER)]
        cross_compiler: String,
    },

    /// Dump a pack file's entry table
    Inspect {
        /// Path to a .pack file
        pack: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Build {
            shaders,
            target,
            compiler,
            cross_compiler,
        } => cmd_build(shaders, &target, compiler, cross_compiler, cli.json, cli.verbose),
        Commands::Inspect { pack } => cmd_inspect(&pack, cli.json),
    }
}

fn cmd_build(
    shaders: PathBuf,
    targets: &[Target],
    compiler: String,
    cross_compiler: String,
    json: bool,
    verbose: u8,
) -> Result<()> {
    let config = BuildConfig::new(shaders)
        .with_compiler(compiler)
        .with_cross_compiler(cross_compiler);

    let targets: Vec<Target> = if targets.is_empty() {
        Target::ALL.to_vec()
    } else {
        targets.to_vec()
    };

    if !json {
        println!("📦 Shaderpack Build");
        println!("Source: {}", config.shader_dir.display());
        if verbose > 0 {
            println!("Manifest: {}", config.manifest_path.display());
            println!("Tools: {} / {}", config.compiler, config.cross_compiler);
        }
    }

    // A missing tool aborts before any entry is processed; individual
    // shader failures never fail the process.
    let toolchain = CliToolchain::new(&config.compiler, &config.cross_compiler);
    toolchain.check_tools()?;

    let manifest = load_manifest(&config.manifest_path)?;

    if !json {
        println!("\n✓ Loaded {} manifest entries", manifest.len());
    }

    for target in targets {
        if !json {
            println!("\nPacking shaders for target: {}", target);
        }

        match build_target(&config, &toolchain, &manifest, target) {
            Ok(summary) => {
                if json {
                    let event = serde_json::json!({
                        "event": "pack",
                        "target": target.name(),
                        "succeeded": summary.succeeded,
                        "failed": summary.failed,
                        "pack": summary.pack_path.display().to_string(),
                    });
                    println!("{}", serde_json::to_string(&event)?);
                } else {
                    println!("Packed {} shaders. {} failed.", summary.succeeded, summary.failed);
                }
            }
            Err(e) => {
                // Fatal for this target only; remaining targets still build.
                if json {
                    let event = serde_json::json!({
                        "event": "pack_error",
                        "target": target.name(),
                        "error": e.to_string(),
                    });
                    println!("{}", serde_json::to_string(&event)?);
                } else {
                    eprintln!("✗ {}: {}", target, e);
                }
            }
        }
    }

    Ok(())
}

fn cmd_inspect(pack: &PathBuf, json: bool) -> Result<()> {
    let entries = read_pack(pack)?;

    if json {
        for entry in &entries {
            let event = serde_json::json!({
                "event": "entry",
                "name": entry.name,
                "size": entry.data.len(),
                "md5": entry.digest_hex(),
            });
            println!("{}", serde_json::to_string(&event)?);
        }
    } else {
        println!("🔍 Inspecting pack: {}", pack.display());
        println!("\nFound {} entries:\n", entries.len());

        let mut offset = HEADER_SIZE + entries.len() * ENTRY_SIZE;
        for entry in &entries {
            println!("┌─ {}", entry.name);
            println!("│  Size: {} bytes", entry.data.len());
            println!("│  Offset: {}", offset);
            println!("│  MD5: {}", entry.digest_hex());
            println!("└─");
            offset += entry.data.len();
        }
    }

    Ok(())
}
