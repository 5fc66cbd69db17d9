//! jsbuild - a manifest-driven JavaScript bundle builder
//!
//! This crate provides the core library functionality for jsbuild:
//! loading JSON build manifests, concatenating their sources into a
//! single bundle, and optionally handing the sources to the external
//! Closure Compiler for minification and source maps.

pub mod compiler;
pub mod core;
pub mod ops;
pub mod util;

pub use core::manifest::Manifest;

pub use compiler::{ClosureCompiler, CompileJob, Compiler};
pub use ops::bundle::{build, BundleOptions};
pub use util::context::GlobalContext;
