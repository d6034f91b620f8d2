//! Board-agnostic core logic for scrolling text on LED dot-matrix panels
//!
//! This crate contains everything that does not depend on a specific
//! panel or microcontroller:
//!
//! - Display abstraction traits (pixel surface, scan-out)
//! - Bitmap font table decoding
//! - Per-letter rasterizer with display-edge clipping
//! - Circular message state and the two scroll schedulers
//! - Configuration type definitions
//!
//! # Architecture
//!
//! ```text
//! ┌────────────┐    ┌──────────────┐    ┌────────────────┐
//! │ Font table │ ─▶ │  Rasterizer  │ ◀─ │  Text scroll   │ ◀─ main loop
//! └────────────┘    └──────────────┘    └────────────────┘
//!                          │
//!                          ▼
//!                   ┌──────────────┐
//!                   │ PixelDisplay │ ◀─ scan/brightness task (timer)
//!                   └──────────────┘
//! ```
//!
//! Rendering is cooperative: nothing here blocks, allocates, or waits on the
//! scan task.

#![no_std]
#![deny(unsafe_code)]

pub mod config;
pub mod font;
pub mod render;
pub mod scroll;
pub mod traits;

#[cfg(test)]
mod testing;

pub use config::{BrightnessConfig, ConfigError, GlyphFallback, ScrollConfig};
pub use font::{Font, FontError, Glyph};
pub use render::write_letter;
pub use scroll::{Commit, ScrollError, Sweep, TextScroll};
pub use traits::{PixelDisplay, ScanOut};
