//! Core domain types.

pub mod manifest;
pub mod shim;

pub use manifest::{Manifest, ManifestError};
