//! CLI definitions using clap.

use std::path::PathBuf;

use clap::Parser;

/// jsbuild - concatenate manifest-listed sources into one bundle
#[derive(Parser)]
#[command(name = "jsbuild")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Manifest name(s) to concatenate, in order (reads <name>.json)
    #[arg(long = "include", required = true)]
    pub include: Vec<String>,

    /// Extern declaration files passed to the minifier after the
    /// baked-in common.js
    #[arg(long = "externs")]
    pub externs: Vec<String>,

    /// Wrap the bundle in the AMD/CommonJS/global module shim
    #[arg(long)]
    pub amd: bool,

    /// Minify through the Closure Compiler instead of copying raw
    #[arg(long)]
    pub minify: bool,

    /// Suppress variable-check diagnostics in the minifier
    #[arg(long)]
    pub nocheckvars: bool,

    /// Destination file path
    #[arg(long, default_value = "")]
    pub output: PathBuf,

    /// Emit a companion source map and reference comment
    #[arg(long)]
    pub sourcemaps: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}
