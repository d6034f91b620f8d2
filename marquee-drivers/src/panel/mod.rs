//! Dot-matrix panel drivers
//!
//! Currently supports the Freetronics-style DMD: a 32x16 single-colour
//! panel built from daisy-chained shift registers, multiplexed 1/4 scan.
//! Rows `p`, `p + 4`, `p + 8` and `p + 12` are lit together during phase
//! `p`, selected by the A/B lines.

pub mod dmd;
pub mod framebuffer;

#[cfg(feature = "embedded-graphics")]
mod graphics;

pub use dmd::Dmd;
pub use framebuffer::DmdFrameBuffer;

/// Panel width in pixels
pub const WIDTH: u16 = 32;

/// Panel height in pixels
pub const HEIGHT: u16 = 16;

/// Bytes per pixel row (1 bit per pixel)
pub const ROW_BYTES: usize = WIDTH as usize / 8;

/// Number of multiplex phases per full scan
pub const SCAN_PHASES: u8 = 4;

/// Rows lit together in one phase
pub const ROWS_PER_PHASE: usize = HEIGHT as usize / SCAN_PHASES as usize;

/// Bytes shifted out per phase
pub const PHASE_BYTES: usize = ROW_BYTES * ROWS_PER_PHASE;

/// Frame buffer size in bytes
pub const BUFFER_SIZE: usize = ROW_BYTES * HEIGHT as usize;

/// Panel driver errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DisplayError<SpiErr, PinErr> {
    /// SPI transfer to the shift registers failed
    Spi(SpiErr),
    /// Row-select, latch or output-enable pin failed
    Pin(PinErr),
}
