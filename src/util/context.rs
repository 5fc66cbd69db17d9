//! Global context for jsbuild operations.
//!
//! Centralizes the two path conventions the whole tool relies on:
//! manifests are named `<name>.json` and live in the working directory,
//! and the fragments they list are resolved against the source root one
//! level above it.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

/// Paths and environment for a single build invocation.
#[derive(Debug, Clone)]
pub struct GlobalContext {
    work_dir: PathBuf,
}

impl GlobalContext {
    /// Create a context rooted at the process working directory.
    pub fn new() -> Result<Self> {
        let work_dir =
            std::env::current_dir().context("failed to determine current directory")?;
        Ok(GlobalContext { work_dir })
    }

    /// Create a context rooted at an explicit directory.
    pub fn at(work_dir: impl Into<PathBuf>) -> Self {
        GlobalContext {
            work_dir: work_dir.into(),
        }
    }

    /// The invocation directory.
    pub fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    /// Path of the manifest named `name`.
    pub fn manifest_path(&self, name: &str) -> PathBuf {
        self.work_dir.join(format!("{name}.json"))
    }

    /// Resolve a manifest fragment against the source root (one level up).
    pub fn resolve_fragment(&self, fragment: &str) -> PathBuf {
        self.work_dir.join("..").join(fragment)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manifest_path() {
        let ctx = GlobalContext::at("/proj/build");
        assert_eq!(
            ctx.manifest_path("core"),
            PathBuf::from("/proj/build/core.json")
        );
    }

    #[test]
    fn test_fragments_resolve_one_level_up() {
        let ctx = GlobalContext::at("/proj/build");
        assert_eq!(
            ctx.resolve_fragment("src/main.js"),
            PathBuf::from("/proj/build/../src/main.js")
        );
    }
}
