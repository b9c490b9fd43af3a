//! Workspace build tasks: `cargo xtask <command>`.

use std::path::{Path, PathBuf};
use std::process::Command;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use scrollscape::Options;

#[derive(Parser, Debug)]
#[command(about = "Build tasks for the scrollscape workspace")]
struct Cli {
    #[command(subcommand)]
    command: Task,
}

#[derive(Subcommand, Debug)]
enum Task {
    /// Build the wasm bundle into web/pkg.
    Web {
        /// Optimized build.
        #[arg(long)]
        release: bool,
    },
    /// Print the options JSON Schema.
    Schema,
    /// Write the default options as a TOML preset.
    Preset {
        /// Destination file.
        path: PathBuf,
    },
}

const WASM_TARGET: &str = "wasm32-unknown-unknown";

fn workspace_root() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .map_or_else(|| PathBuf::from("."), Path::to_path_buf)
}

fn run(cmd: &mut Command) -> Result<()> {
    let status = cmd
        .status()
        .with_context(|| format!("failed to spawn {cmd:?}"))?;
    if !status.success() {
        bail!("{cmd:?} exited with {status}");
    }
    Ok(())
}

fn build_web(release: bool) -> Result<()> {
    let root = workspace_root();
    let cargo = std::env::var("CARGO").unwrap_or_else(|_| "cargo".to_owned());

    let mut build = Command::new(&cargo);
    let _ = build
        .current_dir(&root)
        .args(["rustc", "-p", "scrollscape", "--lib", "--target", WASM_TARGET])
        .args(["--no-default-features", "--features", "web"]);
    if release {
        let _ = build.arg("--release");
    }
    let _ = build.args(["--crate-type", "cdylib"]);
    run(&mut build)?;

    let profile = if release { "release" } else { "debug" };
    let wasm = root
        .join("target")
        .join(WASM_TARGET)
        .join(profile)
        .join("scrollscape.wasm");
    let out_dir = root.join("web").join("pkg");
    run(Command::new("wasm-bindgen")
        .arg(&wasm)
        .args(["--target", "web", "--no-typescript", "--out-dir"])
        .arg(&out_dir))
    .context("wasm-bindgen failed (install with `cargo install wasm-bindgen-cli`)")?;

    println!("wrote {}", out_dir.display());
    Ok(())
}

fn main() -> Result<()> {
    match Cli::parse().command {
        Task::Web { release } => build_web(release),
        Task::Schema => {
            let schema = serde_json::to_string_pretty(&Options::json_schema())?;
            println!("{schema}");
            Ok(())
        }
        Task::Preset { path } => {
            Options::default()
                .save(&path)
                .map_err(|e| anyhow::anyhow!("writing {}: {e}", path.display()))?;
            println!("wrote {}", path.display());
            Ok(())
        }
    }
}
