use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;

use crate::compiler::Compiler;

#[derive(Default)]
pub struct BuildSummary {
    pub compiled: Vec<PathBuf>,
    pub failed: Vec<PathBuf>,
    pub skipped: usize,
}

pub fn compile_directory(dir: &Path, compiler: &dyn Compiler) -> anyhow::Result<BuildSummary> {
    let entries = fs::read_dir(dir)
        .with_context(|| format!("failed to read shader directory {}", dir.display()))?;

    let mut summary = BuildSummary::default();
    for entry in entries {
        let entry = entry.context("failed to read directory entry")?;
        let path = entry.path();

        if !path.is_file() {
            continue;
        }
        if path.extension().is_some_and(|ext| ext == "spv") {
            summary.skipped += 1;
            continue;
        }

        let output = output_path(&path);
        log::info!("Compiling {} -> {}", path.display(), output.display());
        match compiler.compile(&path, &output) {
            Ok(()) => summary.compiled.push(path),
            Err(e) => {
                log::error!("Failed to compile {}: {:?}", path.display(), e);
                summary.failed.push(path);
            }
        }
    }

    Ok(summary)
}

// Only the final extension is replaced: `gbuffer.frag.glsl` maps to
// `gbuffer.frag.spv`. A name with no extension gets `.spv` appended.
fn output_path(input: &Path) -> PathBuf {
    input.with_extension("spv")
}
