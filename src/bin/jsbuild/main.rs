//! jsbuild CLI - manifest-driven JavaScript bundle builder

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;

use cli::Cli;

use jsbuild::ops::bundle::{build, BundleOptions};
use jsbuild::ClosureCompiler;
use jsbuild::GlobalContext;

fn main() {
    preflight();

    if let Err(e) = run() {
        eprintln!("error: {:#}", e);
        std::process::exit(1);
    }
}

/// Process-wide precondition, checked before any argument parsing.
///
/// Manifests are resolved in the working directory and sources one level
/// above it, so the working directory must be resolvable and have a parent.
fn preflight() {
    let cwd = std::env::current_dir().ok();
    if cwd.as_ref().and_then(|c| c.parent()).is_none() {
        println!("jsbuild must run inside a project checkout: sources are resolved one level above the working directory.");
        println!("Please cd into the project's build directory and re-run.");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    // Parse CLI
    let cli = Cli::parse();

    // Set up logging
    let filter = if cli.verbose {
        EnvFilter::new("jsbuild=debug")
    } else {
        EnvFilter::new("jsbuild=info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .init();

    let ctx = GlobalContext::new()?;
    let compiler = ClosureCompiler::new();

    // common.js always leads the extern list; user externs follow it.
    let mut externs = vec!["common.js".to_string()];
    externs.extend(cli.externs);

    let opts = BundleOptions {
        includes: cli.include,
        externs,
        amd: cli.amd,
        minify: cli.minify,
        nocheckvars: cli.nocheckvars,
        sourcemaps: cli.sourcemaps,
        output: cli.output,
    };

    build(&ctx, &opts, &compiler)
}
