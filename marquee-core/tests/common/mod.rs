//! Host-side fixtures shared by the integration tests

#![allow(dead_code)]

use marquee_core::PixelDisplay;

/// Pixel matrix that panics on out-of-bounds writes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Matrix {
    width: u16,
    height: u16,
    pixels: Vec<bool>,
}

impl Matrix {
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            pixels: vec![false; width as usize * height as usize],
        }
    }

    pub fn pixel(&self, col: u16, row: u16) -> bool {
        self.pixels[row as usize * self.width as usize + col as usize]
    }

    /// Row mask of one column, bit `r` = row `r`
    pub fn column(&self, col: u16) -> u32 {
        (0..self.height)
            .filter(|&row| self.pixel(col, row))
            .fold(0, |mask, row| mask | 1 << row)
    }

    pub fn is_blank(&self) -> bool {
        self.pixels.iter().all(|&on| !on)
    }
}

impl PixelDisplay for Matrix {
    fn set_pixel(&mut self, col: u16, row: u16, on: bool) {
        assert!(
            col < self.width && row < self.height,
            "pixel ({col}, {row}) outside {}x{}",
            self.width,
            self.height
        );
        self.pixels[row as usize * self.width as usize + col as usize] = on;
    }

    fn clear_all(&mut self) {
        self.pixels.fill(false);
    }

    fn dimensions(&self) -> (u16, u16) {
        (self.width, self.height)
    }
}

/// Build a font blob from per-glyph `(low, high)` column planes
pub fn font_blob(target_width: u8, height: u8, first: u8, glyphs: &[(&[u8], &[u8])]) -> Vec<u8> {
    let mut blob = vec![0, 0, target_width, height, first, glyphs.len() as u8];
    blob.extend(glyphs.iter().map(|(low, _)| low.len() as u8));
    for (low, high) in glyphs {
        assert_eq!(low.len(), high.len());
        blob.extend_from_slice(low);
        blob.extend_from_slice(high);
    }
    blob
}
