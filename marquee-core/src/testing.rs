//! Shared fixtures for unit tests

use crate::traits::PixelDisplay;

/// 'A' (3 columns) and 'B' (2 columns), 10 rows tall, space width 3
pub const AB_FONT: [u8; 18] = [
    0x00, 0x00, 4, 10, b'A', 2, 3, 2, // header + widths
    0x01, 0x02, 0x04, 0x00, 0x01, 0x02, // 'A'
    0xFF, 0x81, 0x03, 0x00, // 'B'
];

/// In-memory pixel surface that records out-of-bounds writes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Canvas<const W: usize, const H: usize> {
    pixels: [[bool; H]; W],
    outside: usize,
    clears: usize,
}

impl<const W: usize, const H: usize> Canvas<W, H> {
    pub fn new() -> Self {
        Self {
            pixels: [[false; H]; W],
            outside: 0,
            clears: 0,
        }
    }

    /// Turn every pixel on
    pub fn fill(&mut self) {
        self.pixels = [[true; H]; W];
    }

    /// Row mask of one column, bit `r` = row `r`
    pub fn column(&self, col: usize) -> u16 {
        self.pixels[col]
            .iter()
            .enumerate()
            .filter(|&(_, &on)| on)
            .fold(0, |mask, (row, _)| mask | 1 << row)
    }

    pub fn is_blank(&self) -> bool {
        self.pixels.iter().flatten().all(|&on| !on)
    }

    pub fn same_pixels(&self, other: &Self) -> bool {
        self.pixels == other.pixels
    }

    pub fn writes_outside(&self) -> usize {
        self.outside
    }

    pub fn clears(&self) -> usize {
        self.clears
    }
}

impl<const W: usize, const H: usize> PixelDisplay for Canvas<W, H> {
    fn set_pixel(&mut self, col: u16, row: u16, on: bool) {
        match self
            .pixels
            .get_mut(col as usize)
            .and_then(|c| c.get_mut(row as usize))
        {
            Some(pixel) => *pixel = on,
            None => self.outside += 1,
        }
    }

    fn clear_all(&mut self) {
        self.pixels = [[false; H]; W];
        self.clears += 1;
    }

    fn dimensions(&self) -> (u16, u16) {
        (W as u16, H as u16)
    }
}
