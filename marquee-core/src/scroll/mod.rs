//! Text scrolling
//!
//! Holds the committed message and the scroll cursors, and advances them
//! in one of two ways:
//!
//! - **Full-frame** ([`TextScroll::step_display`]): shift one column and
//!   redraw the whole display width in one call.
//! - **Incremental** ([`TextScroll::step_display_partial`]): draw at most
//!   one letter per call; a frame is complete after enough calls to cover
//!   the display width.

pub mod message;
pub mod scheduler;

pub use message::Message;
pub use scheduler::TextScroll;

use crate::config::ConfigError;

/// Errors raised while setting up or committing a message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ScrollError {
    /// Buffer cannot hold the separator gap and terminator
    BufferTooSmall { capacity: usize, required: usize },
    /// Message character not covered by the font (reject policy only)
    OutOfRangeCharacter { index: usize, byte: u8 },
    /// Invalid scroll configuration
    Config(ConfigError),
}

impl From<ConfigError> for ScrollError {
    fn from(err: ConfigError) -> Self {
        ScrollError::Config(err)
    }
}

/// Outcome of committing a message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Commit {
    /// Committed length, separator gap included
    pub length: usize,
    /// Text was longer than the buffer allows and was cut
    pub truncated: bool,
    /// Characters replaced by spaces under the fallback policy
    pub substituted: usize,
}

/// Progress of an incremental step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Sweep {
    /// Nothing to draw (no message committed or zero-width display)
    Idle,
    /// Letter drawn, frame not yet complete
    InProgress,
    /// The display width is covered; the next call starts one column further left
    FrameComplete,
}
