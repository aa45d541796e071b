use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

use crate::compiler::Glslc;

mod compiler;
mod runner;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Directory containing the shader sources to compile.
    #[arg(default_value = "shaders")]
    dir: PathBuf,
}

fn main() -> anyhow::Result<()> {
    log4rs::init_file("log4rs.yml", Default::default())
        .context("failed to load logging config file")?;

    let args = Args::parse();

    let summary = runner::compile_directory(&args.dir, &Glslc)
        .with_context(|| format!("failed to build shaders in {}", args.dir.display()))?;

    log::info!(
        "Compiled {} shader(s), skipped {} already compiled",
        summary.compiled.len(),
        summary.skipped
    );

    if !summary.failed.is_empty() {
        anyhow::bail!("{} shader(s) failed to compile", summary.failed.len());
    }

    Ok(())
}
