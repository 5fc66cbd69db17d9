//! The bundle pipeline.
//!
//! A single linear run: load manifests, concatenate their sources into a
//! temporary file, then either copy it to the output path verbatim or hand
//! the original sources to the external compiler. The temporary file is
//! removed on every exit path, including early failures.

use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tempfile::NamedTempFile;

use crate::compiler::{CompileJob, Compiler};
use crate::core::shim;
use crate::core::Manifest;
use crate::util::context::GlobalContext;
use crate::util::fs;

/// Options for one bundle run.
#[derive(Debug, Clone, Default)]
pub struct BundleOptions {
    /// Manifest names to concatenate, in order.
    pub includes: Vec<String>,

    /// Extern declaration files for the minifier.
    pub externs: Vec<String>,

    /// Wrap the bundle in the module-definition shim.
    pub amd: bool,

    /// Route through the external compiler instead of a raw copy.
    pub minify: bool,

    /// Suppress checkVars diagnostics in the minifier.
    pub nocheckvars: bool,

    /// Emit a companion source map and reference comment.
    pub sourcemaps: bool,

    /// Destination file path.
    pub output: PathBuf,
}

/// The assembled bundle text plus the resolved source list that produced
/// it, in manifest order.
struct Bundle {
    text: String,
    sources: Vec<PathBuf>,
}

/// Run the whole pipeline for `opts`, producing the output artifact.
pub fn build(ctx: &GlobalContext, opts: &BundleOptions, compiler: &dyn Compiler) -> Result<()> {
    fs::ensure_parent_dir(&opts.output)?;

    println!(" * Building {}", opts.output.display());

    let bundle = assemble(ctx, &opts.includes, opts.amd)?;

    let mut tmp = NamedTempFile::new().context("failed to create temporary bundle file")?;
    tmp.write_all(bundle.text.as_bytes())
        .context("failed to write temporary bundle file")?;
    tmp.flush().context("failed to flush temporary bundle file")?;

    if !opts.minify {
        fs::copy_file(tmp.path(), &opts.output)?;
        fs::set_artifact_mode(&opts.output)?;
        return Ok(());
    }

    let map = opts
        .sourcemaps
        .then(|| PathBuf::from(format!("{}.map", opts.output.display())));

    let job = CompileJob {
        sources: &bundle.sources,
        externs: &opts.externs,
        output: &opts.output,
        check_vars: !opts.nocheckvars,
        source_map: map.as_deref(),
    };

    // The compiler is an opaque collaborator: a failed run does not fail
    // the build, it only leaves a warning behind.
    match compiler.compile(&job) {
        Ok(status) if !status.success() => {
            tracing::warn!("compiler exited with status {status}");
        }
        Ok(_) => {}
        Err(e) => {
            tracing::warn!("failed to launch compiler: {e:#}");
        }
    }

    if let Some(map) = map {
        append_source_map_reference(&opts.output, &map)?;
    }

    Ok(())
}

/// Concatenate every fragment of every included manifest, each followed by
/// a newline, optionally wrapped in the module shim.
fn assemble(ctx: &GlobalContext, includes: &[String], amd: bool) -> Result<Bundle> {
    let mut text = String::new();
    let mut sources = Vec::new();

    if amd {
        text.push_str(shim::PREAMBLE);
    }

    for include in includes {
        let manifest = Manifest::load(&ctx.manifest_path(include))?;
        for fragment in manifest.files() {
            let path = ctx.resolve_fragment(fragment);
            let content = fs::read_to_string(&path)?;
            text.push_str(&content);
            text.push('\n');
            sources.push(path);
        }
    }

    if amd {
        text.push_str(shim::FOOTER);
    }

    Ok(Bundle { text, sources })
}

/// Rewrite the output file with a trailing magic comment pointing at the
/// companion map file.
fn append_source_map_reference(output: &Path, map: &Path) -> Result<()> {
    let text = fs::read_to_string(output)?;
    std::fs::write(output, format!("{text}\n//@ sourceMappingURL={}", map.display()))
        .with_context(|| format!("failed to write file: {}", output.display()))
}
