//! High-level operations.

pub mod bundle;

pub use bundle::{build, BundleOptions};
