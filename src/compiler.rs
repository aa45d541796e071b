use std::path::Path;
use std::process::Command;

use anyhow::Context;

/// One shader source in, one compiled binary out.
pub trait Compiler {
    fn compile(&self, input: &Path, output: &Path) -> anyhow::Result<()>;
}

/// Shells out to the glslc executable on the search path.
pub struct Glslc;

impl Compiler for Glslc {
    fn compile(&self, input: &Path, output: &Path) -> anyhow::Result<()> {
        let status = Command::new("glslc")
            .arg(input)
            .arg("-o")
            .arg(output)
            .status()
            .with_context(|| format!("failed to run glslc on {}", input.display()))?;

        if !status.success() {
            anyhow::bail!("glslc exited with {} for {}", status, input.display());
        }

        Ok(())
    }
}
