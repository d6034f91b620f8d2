//! Configuration types
//!
//! Board-agnostic settings for the renderer and the scan/brightness task.

pub mod types;

pub use types::*;
