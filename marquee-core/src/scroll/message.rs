//! Message buffer and commit logic
//!
//! The buffer is supplied by the caller and borrowed for the lifetime of
//! the scroller. A committed message occupies the front of the buffer:
//!
//! ```text
//! ┌──────────────┬─────────────┬────┬──────────┐
//! │ TEXT         │ GAP         │ \0 │ (unused) │
//! │ ≤ cap-gap-1  │ gap × ' '   │ 1B │          │
//! └──────────────┴─────────────┴────┴──────────┘
//! ```

use super::{Commit, ScrollError};
use crate::config::{GlyphFallback, ScrollConfig};
use crate::font::Font;

/// Caller-owned message buffer with its committed length
#[derive(Debug)]
pub struct Message<'a> {
    buffer: &'a mut [u8],
    /// Length of the text as supplied, before truncation
    source_len: usize,
    /// Committed length, separator gap included
    length: usize,
}

impl<'a> Message<'a> {
    /// Wrap a caller buffer, taking any zero-terminated text already in it
    pub fn new(buffer: &'a mut [u8], config: &ScrollConfig) -> Result<Self, ScrollError> {
        let required = config.min_capacity();
        if buffer.len() < required {
            return Err(ScrollError::BufferTooSmall {
                capacity: buffer.len(),
                required,
            });
        }

        let source_len = buffer.iter().position(|&b| b == 0).unwrap_or(buffer.len());
        Ok(Self {
            buffer,
            source_len,
            length: 0,
        })
    }

    /// Total buffer size in bytes
    pub fn capacity(&self) -> usize {
        self.buffer.len()
    }

    /// Longest text that fits alongside the gap and terminator
    pub fn max_text_len(&self, config: &ScrollConfig) -> usize {
        self.capacity() - config.min_capacity()
    }

    /// Committed length including the separator gap, 0 before the first commit
    pub fn len(&self) -> usize {
        self.length
    }

    /// Check whether a message has been committed
    pub fn is_empty(&self) -> bool {
        self.length == 0
    }

    /// Committed bytes, separator gap included
    pub fn as_bytes(&self) -> &[u8] {
        &self.buffer[..self.length]
    }

    /// Character at `index` of the committed message
    pub fn at(&self, index: usize) -> u8 {
        self.as_bytes().get(index).copied().unwrap_or(b' ')
    }

    /// Replace the text in the buffer
    ///
    /// Copies up to the first zero byte, truncated to what fits. Under
    /// [`GlyphFallback::Reject`] the text is validated before anything is
    /// copied, so a rejected text leaves the buffer untouched.
    pub fn set_text(
        &mut self,
        text: &[u8],
        font: &Font<'_>,
        config: &ScrollConfig,
    ) -> Result<(), ScrollError> {
        let source_len = text.iter().position(|&b| b == 0).unwrap_or(text.len());
        let fit = source_len.min(self.max_text_len(config));

        if config.fallback == GlyphFallback::Reject {
            check_renderable(&text[..fit], font)?;
        }

        self.buffer[..fit].copy_from_slice(&text[..fit]);
        self.buffer[fit] = 0;
        self.source_len = source_len;
        Ok(())
    }

    /// Commit the text currently in the buffer
    ///
    /// Truncates to the capacity, applies the glyph fallback policy, then
    /// appends the separator gap and a terminator. Committing the same text
    /// again yields the same result.
    pub fn commit(&mut self, font: &Font<'_>, config: &ScrollConfig) -> Result<Commit, ScrollError> {
        let max = self.max_text_len(config);
        let text_len = self.source_len.min(max);
        let text = &mut self.buffer[..text_len];

        let substituted = match config.fallback {
            GlyphFallback::Reject => {
                check_renderable(text, font)?;
                0
            }
            GlyphFallback::Space => {
                let mut count = 0;
                for byte in text.iter_mut().filter(|b| !font.can_render(**b)) {
                    *byte = b' ';
                    count += 1;
                }
                count
            }
        };

        let gap = config.separator_gap as usize;
        self.buffer[text_len..text_len + gap].fill(b' ');
        self.buffer[text_len + gap] = 0;
        self.length = text_len + gap;

        Ok(Commit {
            length: self.length,
            truncated: self.source_len > max,
            substituted,
        })
    }
}

fn check_renderable(text: &[u8], font: &Font<'_>) -> Result<(), ScrollError> {
    match text.iter().position(|&b| !font.can_render(b)) {
        Some(index) => Err(ScrollError::OutOfRangeCharacter {
            index,
            byte: text[index],
        }),
        None => Ok(()),
    }
}
