//! Bitmap font tables
//!
//! Fonts are read-only blobs baked into flash. Decoding only reads the
//! header and validates the width table; glyph pixel data is indexed in
//! place at render time and never copied.
//!
//! Blob layout:
//! ```text
//! ┌──────┬────────┬────────┬───────┬───────┬─────────────┬──────────────────┐
//! │ SIZE │ TARGET │ HEIGHT │ FIRST │ COUNT │ WIDTHS      │ COLUMN DATA      │
//! │ 2B   │ 1B     │ 1B     │ 1B    │ 1B    │ COUNT bytes │ 2 × Σwidths bytes│
//! └──────┴────────┴────────┴───────┴───────┴─────────────┴──────────────────┘
//! ```
//!
//! Each glyph of width `w` stores `w` low-plane bytes (rows 0-7, one per
//! column) followed by `w` high-plane bytes (rows 8-15). Bit `r` of
//! `low | high << 8` is the pixel at row `r`.

pub mod builtin;

pub use builtin::SYSTEM_5X7;

/// Offset of the target (space) width byte
const TARGET_WIDTH_OFFSET: usize = 2;

/// Offset of the glyph height byte
const HEIGHT_OFFSET: usize = 3;

/// Offset of the first character code byte
const FIRST_CHAR_OFFSET: usize = 4;

/// Offset of the glyph count byte
const CHAR_COUNT_OFFSET: usize = 5;

/// Offset of the per-glyph width table
pub const WIDTH_TABLE_OFFSET: usize = 6;

/// Rows representable by a two-byte column
pub const MAX_GLYPH_HEIGHT: u8 = 16;

/// Errors that can occur while decoding a font blob
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FontError {
    /// Blob ends before the header, width table, or column data
    Truncated,
    /// Glyph count is zero
    NoGlyphs,
    /// Glyph height exceeds what a two-byte column can hold
    TooTall { height: u8 },
}

/// Decoded font metrics over a borrowed blob
#[derive(Debug, Clone, Copy)]
pub struct Font<'a> {
    data: &'a [u8],
    target_width: u8,
    height: u8,
    first_char: u8,
    char_count: u8,
    /// Start of packed column data, cached at load
    bitmap_base: usize,
}

impl<'a> Font<'a> {
    /// Decode the header of a font blob
    ///
    /// Validates that the column data implied by the width table fits in
    /// the blob, so glyph lookups never index past the end.
    pub fn load(data: &'a [u8]) -> Result<Self, FontError> {
        if data.len() < WIDTH_TABLE_OFFSET {
            return Err(FontError::Truncated);
        }

        let target_width = data[TARGET_WIDTH_OFFSET];
        let height = data[HEIGHT_OFFSET];
        let first_char = data[FIRST_CHAR_OFFSET];
        let char_count = data[CHAR_COUNT_OFFSET];

        if char_count == 0 {
            return Err(FontError::NoGlyphs);
        }
        if height > MAX_GLYPH_HEIGHT {
            return Err(FontError::TooTall { height });
        }

        let bitmap_base = WIDTH_TABLE_OFFSET + char_count as usize;
        let widths = data
            .get(WIDTH_TABLE_OFFSET..bitmap_base)
            .ok_or(FontError::Truncated)?;
        let total_columns: usize = widths.iter().map(|&w| w as usize).sum();
        if data.len() < bitmap_base + total_columns * 2 {
            return Err(FontError::Truncated);
        }

        #[cfg(feature = "defmt")]
        defmt::debug!(
            "Font loaded: {} glyphs from {=u8:#x}, height {}, space width {}",
            char_count,
            first_char,
            height,
            target_width
        );

        Ok(Self {
            data,
            target_width,
            height,
            first_char,
            char_count,
            bitmap_base,
        })
    }

    /// Nominal width used for the space character
    pub fn target_width(&self) -> u8 {
        self.target_width
    }

    /// Pixel rows per glyph
    pub fn height(&self) -> u8 {
        self.height
    }

    /// First character code covered by the font
    pub fn first_char(&self) -> u8 {
        self.first_char
    }

    /// Number of glyphs in the font
    pub fn char_count(&self) -> u8 {
        self.char_count
    }

    /// Offset of the packed column data within the blob
    pub fn bitmap_base(&self) -> usize {
        self.bitmap_base
    }

    /// Columns drawn for a space (before the separator column)
    pub fn space_width(&self) -> u8 {
        self.target_width.saturating_sub(1)
    }

    /// Check whether the font has a glyph for `c`
    pub fn contains(&self, c: u8) -> bool {
        self.index_of(c).is_some()
    }

    /// Check whether `c` can be rendered, either as a glyph or as a space
    pub fn can_render(&self, c: u8) -> bool {
        c == b' ' || self.contains(c)
    }

    /// Width in columns of the glyph for `c`
    pub fn width_of(&self, c: u8) -> Option<u8> {
        let index = self.index_of(c)?;
        self.data.get(WIDTH_TABLE_OFFSET + index).copied()
    }

    /// Look up the glyph for `c`
    ///
    /// Returns `None` for characters outside the font's range.
    pub fn glyph(&self, c: u8) -> Option<Glyph<'a>> {
        let index = self.index_of(c)?;
        let widths = &self.data[WIDTH_TABLE_OFFSET..self.bitmap_base];
        let width = widths[index];

        let preceding: usize = widths[..index].iter().map(|&w| w as usize).sum();
        let start = self.bitmap_base + preceding * 2;
        let data = self.data.get(start..start + width as usize * 2)?;

        Some(Glyph { width, data })
    }

    fn index_of(&self, c: u8) -> Option<usize> {
        let index = c.checked_sub(self.first_char)?;
        (index < self.char_count).then_some(index as usize)
    }
}

/// One glyph's column bitmaps, borrowed from the font blob
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Glyph<'a> {
    width: u8,
    data: &'a [u8],
}

impl<'a> Glyph<'a> {
    /// Width in columns
    pub fn width(&self) -> u8 {
        self.width
    }

    /// Row mask of a single column, bit `r` = row `r`
    pub fn column(&self, col: u8) -> Option<u16> {
        if col >= self.width {
            return None;
        }
        let low = self.data[col as usize];
        let high = self.data[(self.width + col) as usize];
        Some(u16::from(low) | u16::from(high) << 8)
    }

    /// Iterate over the row masks of all columns, left to right
    pub fn columns(&self) -> impl Iterator<Item = u16> + 'a {
        let (low, high) = self.data.split_at(self.width as usize);
        low.iter()
            .zip(high)
            .map(|(&lo, &hi)| u16::from(lo) | u16::from(hi) << 8)
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for Font<'_> {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(
            f,
            "Font[{} glyphs from {=u8:#x}, {}px tall, space {}]",
            self.char_count,
            self.first_char,
            self.height,
            self.target_width
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::AB_FONT;

    #[test]
    fn test_load_metrics() {
        let font = Font::load(&AB_FONT).unwrap();
        assert_eq!(font.target_width(), 4);
        assert_eq!(font.height(), 10);
        assert_eq!(font.first_char(), b'A');
        assert_eq!(font.char_count(), 2);
        assert_eq!(font.bitmap_base(), 8);
        assert_eq!(font.space_width(), 3);
    }

    #[test]
    fn test_glyph_columns_combine_planes() {
        let font = Font::load(&AB_FONT).unwrap();

        let a = font.glyph(b'A').unwrap();
        assert_eq!(a.width(), 3);
        assert_eq!(a.column(0), Some(0x0001));
        assert_eq!(a.column(1), Some(0x0102));
        assert_eq!(a.column(2), Some(0x0204));
        assert_eq!(a.column(3), None);

        let b = font.glyph(b'B').unwrap();
        let mut columns = b.columns();
        assert_eq!(columns.next(), Some(0x03FF));
        assert_eq!(columns.next(), Some(0x0081));
        assert_eq!(columns.next(), None);
    }

    #[test]
    fn test_out_of_range_characters() {
        let font = Font::load(&AB_FONT).unwrap();
        assert!(font.glyph(b'@').is_none());
        assert!(font.glyph(b'C').is_none());
        assert!(!font.contains(b' '));
        assert!(font.can_render(b' '));
        assert!(!font.can_render(b'z'));
        assert_eq!(font.width_of(b'B'), Some(2));
        assert_eq!(font.width_of(b'C'), None);
    }

    #[test]
    fn test_zero_glyphs_rejected() {
        let blob = [0, 0, 4, 8, b'A', 0];
        assert_eq!(Font::load(&blob).unwrap_err(), FontError::NoGlyphs);
    }

    #[test]
    fn test_too_tall_rejected() {
        let blob = [0, 0, 4, 17, b'A', 1, 0];
        assert_eq!(
            Font::load(&blob).unwrap_err(),
            FontError::TooTall { height: 17 }
        );
    }

    #[test]
    fn test_truncated_blobs_rejected() {
        assert_eq!(Font::load(&[0, 0, 4]).unwrap_err(), FontError::Truncated);

        // Width table cut short
        let blob = [0, 0, 4, 8, b'A', 3, 1];
        assert_eq!(Font::load(&blob).unwrap_err(), FontError::Truncated);

        // Column data one byte short
        assert_eq!(
            Font::load(&AB_FONT[..AB_FONT.len() - 1]).unwrap_err(),
            FontError::Truncated
        );
    }

    #[test]
    fn test_zero_target_width_space() {
        let blob = [0, 0, 0, 8, b'A', 1, 0];
        let font = Font::load(&blob).unwrap();
        assert_eq!(font.space_width(), 0);
    }
}
