//! In-memory frame buffer for the DMD panel

use super::{BUFFER_SIZE, HEIGHT, PHASE_BYTES, ROW_BYTES, ROWS_PER_PHASE, SCAN_PHASES, WIDTH};

/// 1bpp active-low frame buffer
///
/// A cleared bit lights the LED. Within a row byte, bit 7 is the left-most
/// pixel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DmdFrameBuffer {
    bytes: [u8; BUFFER_SIZE],
}

impl Default for DmdFrameBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl DmdFrameBuffer {
    /// Create a frame buffer with every LED off
    pub const fn new() -> Self {
        Self {
            bytes: [0xFF; BUFFER_SIZE],
        }
    }

    /// Raw buffer bytes, row-major
    pub fn bytes(&self) -> &[u8; BUFFER_SIZE] {
        &self.bytes
    }

    /// Turn every LED off
    pub fn clear(&mut self) {
        self.bytes.fill(0xFF);
    }

    /// Set a pixel state
    ///
    /// Returns `false` and leaves the buffer untouched when out of bounds.
    pub fn set_pixel(&mut self, col: u16, row: u16, on: bool) -> bool {
        let Some((index, mask)) = Self::locate(col, row) else {
            return false;
        };

        if on {
            self.bytes[index] &= !mask;
        } else {
            self.bytes[index] |= mask;
        }
        true
    }

    /// Read a pixel state
    pub fn pixel(&self, col: u16, row: u16) -> Option<bool> {
        let (index, mask) = Self::locate(col, row)?;
        Some(self.bytes[index] & mask == 0)
    }

    /// Bytes to shift out for one multiplex phase
    ///
    /// Each byte column is sent bottom row first so that, once the chain is
    /// full, row `phase` sits nearest the panel input.
    pub fn phase_payload(&self, phase: u8) -> [u8; PHASE_BYTES] {
        let phase = (phase % SCAN_PHASES) as usize;
        let mut payload = [0u8; PHASE_BYTES];
        let mut out = payload.iter_mut();

        for byte in 0..ROW_BYTES {
            for quarter in (0..ROWS_PER_PHASE).rev() {
                let row = phase + quarter * SCAN_PHASES as usize;
                if let Some(slot) = out.next() {
                    *slot = self.bytes[row * ROW_BYTES + byte];
                }
            }
        }
        payload
    }

    fn locate(col: u16, row: u16) -> Option<(usize, u8)> {
        if col >= WIDTH || row >= HEIGHT {
            return None;
        }
        let index = row as usize * ROW_BYTES + col as usize / 8;
        Some((index, 0x80 >> (col % 8)))
    }
}
