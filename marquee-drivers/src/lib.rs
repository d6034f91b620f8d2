//! Hardware driver implementations
//!
//! This crate provides concrete implementations of the traits defined
//! in marquee-core for LED dot-matrix hardware:
//!
//! - DMD panel driver (32x16, 1/4 scan, SPI shift registers)
//! - Brightness duty cycle and the periodic scan task
//! - Panel sharing between the render loop and the scan task

#![no_std]
#![deny(unsafe_code)]

pub mod panel;
pub mod scan;
pub mod shared;

pub use panel::{DisplayError, Dmd, DmdFrameBuffer};
pub use scan::{BrightnessCycle, ScanTask};
pub use shared::SharedPanel;
