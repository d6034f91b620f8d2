//! Hardware abstraction traits
//!
//! These traits define the interface between the renderer and the
//! panel-specific driver implementations.

pub mod display;

pub use display::{PixelDisplay, ScanOut};
