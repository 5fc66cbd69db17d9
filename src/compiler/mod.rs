//! External minifier boundary.
//!
//! The Closure Compiler is an opaque collaborator: jsbuild hands it the
//! ordered source list plus flags and takes whatever it writes to the
//! output path. Its exit status is reported back to the caller but does
//! not fail the build (see `ops::bundle`).

use std::path::{Path, PathBuf};
use std::process::ExitStatus;

use anyhow::Result;

use crate::util::process::{find_executable, ProcessBuilder};

/// Pinned compiler jar, resolved relative to the working directory.
pub const CLOSURE_JAR: &str = "closure-compiler/closure-compiler-v20161024.jar";

/// One minification request: the original sources in manifest order, the
/// extern declarations the compiler must not rename away, and the output
/// locations.
#[derive(Debug)]
pub struct CompileJob<'a> {
    /// Source files, in manifest order. The compiler consumes the original
    /// sources rather than the concatenated bundle so that source maps
    /// point back at real files.
    pub sources: &'a [PathBuf],

    /// Extern declaration files, passed through untouched.
    pub externs: &'a [String],

    /// Destination for the minified output.
    pub output: &'a Path,

    /// Emit checkVars diagnostics (disabled by `--nocheckvars`).
    pub check_vars: bool,

    /// Companion map file to create, when source maps are requested.
    pub source_map: Option<&'a Path>,
}

/// An external compiler that can minify a set of sources.
pub trait Compiler {
    /// Run the compiler for `job`, blocking until it exits.
    ///
    /// `Err` means the compiler could not be launched at all; a launched
    /// compiler that exits non-zero is reported through the status.
    fn compile(&self, job: &CompileJob<'_>) -> Result<ExitStatus>;
}

/// The Google Closure Compiler, invoked as a pinned Java jar.
#[derive(Debug, Clone)]
pub struct ClosureCompiler {
    java: PathBuf,
    jar: PathBuf,
}

impl ClosureCompiler {
    /// Locate `java` on PATH; fall back to the bare name and let the spawn
    /// surface the problem.
    pub fn new() -> Self {
        ClosureCompiler {
            java: find_executable("java").unwrap_or_else(|| PathBuf::from("java")),
            jar: PathBuf::from(CLOSURE_JAR),
        }
    }

    /// Build the full compiler command line for `job`.
    pub fn command(&self, job: &CompileJob<'_>) -> ProcessBuilder {
        let mut cmd = ProcessBuilder::new(&self.java)
            .arg("-jar")
            .arg(&self.jar)
            .arg("--warning_level=VERBOSE")
            .arg("--jscomp_off=globalThis");

        if !job.check_vars {
            cmd = cmd.arg("--jscomp_off=checkVars");
        }

        for extern_file in job.externs {
            cmd = cmd.arg("--externs").arg(extern_file);
        }

        cmd = cmd
            .arg("--jscomp_off=checkTypes")
            .arg("--language_in=ECMASCRIPT5_STRICT")
            .arg("--js")
            .args(job.sources)
            .arg("--js_output_file")
            .arg(job.output);

        if let Some(map) = job.source_map {
            cmd = cmd
                .arg("--create_source_map")
                .arg(map)
                .arg("--source_map_format=V3");
        }

        cmd
    }
}

impl Default for ClosureCompiler {
    fn default() -> Self {
        Self::new()
    }
}

impl Compiler for ClosureCompiler {
    fn compile(&self, job: &CompileJob<'_>) -> Result<ExitStatus> {
        let cmd = self.command(job);
        tracing::debug!("running {}", cmd.display_command());
        cmd.status()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn job<'a>(
        sources: &'a [PathBuf],
        externs: &'a [String],
        output: &'a Path,
        map: Option<&'a Path>,
    ) -> CompileJob<'a> {
        CompileJob {
            sources,
            externs,
            output,
            check_vars: true,
            source_map: map,
        }
    }

    #[test]
    fn test_command_flag_order() {
        let compiler = ClosureCompiler {
            java: PathBuf::from("java"),
            jar: PathBuf::from(CLOSURE_JAR),
        };
        let sources = vec![PathBuf::from("../src/a.js"), PathBuf::from("../src/b.js")];
        let externs = vec!["common.js".to_string()];
        let output = Path::new("out/bundle.min.js");

        let cmd = compiler.command(&job(&sources, &externs, output, None));

        assert_eq!(
            cmd.get_args(),
            [
                "-jar",
                CLOSURE_JAR,
                "--warning_level=VERBOSE",
                "--jscomp_off=globalThis",
                "--externs",
                "common.js",
                "--jscomp_off=checkTypes",
                "--language_in=ECMASCRIPT5_STRICT",
                "--js",
                "../src/a.js",
                "../src/b.js",
                "--js_output_file",
                "out/bundle.min.js",
            ]
        );
    }

    #[test]
    fn test_command_repeats_externs_flag() {
        let compiler = ClosureCompiler {
            java: PathBuf::from("java"),
            jar: PathBuf::from(CLOSURE_JAR),
        };
        let sources = vec![PathBuf::from("../a.js")];
        let externs = vec!["common.js".to_string(), "extra.js".to_string()];
        let output = Path::new("o.js");

        let cmd = compiler.command(&job(&sources, &externs, output, None));
        let args = cmd.get_args();

        let externs_positions: Vec<_> = args
            .iter()
            .enumerate()
            .filter(|(_, a)| *a == "--externs")
            .map(|(i, _)| i)
            .collect();
        assert_eq!(externs_positions.len(), 2);
        assert_eq!(args[externs_positions[0] + 1], "common.js");
        assert_eq!(args[externs_positions[1] + 1], "extra.js");
    }

    #[test]
    fn test_command_nocheckvars_and_sourcemaps() {
        let compiler = ClosureCompiler {
            java: PathBuf::from("java"),
            jar: PathBuf::from(CLOSURE_JAR),
        };
        let sources = vec![PathBuf::from("../a.js")];
        let externs = vec!["common.js".to_string()];
        let output = Path::new("o.js");
        let map = PathBuf::from("o.js.map");

        let mut job = job(&sources, &externs, output, Some(&map));
        job.check_vars = false;

        let cmd = compiler.command(&job);
        let args = cmd.get_args();

        assert!(args.contains(&"--jscomp_off=checkVars".to_string()));
        let map_pos = args
            .iter()
            .position(|a| a == "--create_source_map")
            .unwrap();
        assert_eq!(args[map_pos + 1], "o.js.map");
        assert_eq!(args[map_pos + 2], "--source_map_format=V3");
        // Map flags come after the output flag, like the original command line.
        assert!(map_pos > args.iter().position(|a| a == "--js_output_file").unwrap());
    }
}
