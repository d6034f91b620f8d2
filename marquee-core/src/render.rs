//! Letter rasterizer
//!
//! Draws one character at a signed column/row origin, clipping column by
//! column so glyphs can hang off either display edge.

use crate::font::Font;
use crate::traits::PixelDisplay;

/// Draw `letter` with its left edge at `start_col` and top edge at `start_row`
///
/// Writes the glyph's columns followed by one cleared separator column.
/// A space (and any character the font does not cover) is drawn as
/// `target_width - 1` cleared columns. Columns outside the display are
/// skipped entirely.
///
/// Returns the number of columns actually drawn, separator included. Zero
/// means the letter is completely off-screen.
pub fn write_letter<D>(
    font: &Font<'_>,
    display: &mut D,
    letter: u8,
    start_col: i32,
    start_row: i32,
) -> u16
where
    D: PixelDisplay + ?Sized,
{
    let (width, height) = display.dimensions();
    let glyph = if letter == b' ' {
        None
    } else {
        font.glyph(letter)
    };
    let width_cols = glyph.map_or(font.space_width(), |g| g.width());

    let mut written = 0u16;
    for delta_col in 0..width_cols {
        let Some(col) = offset(start_col, delta_col).and_then(|pos| on_screen(pos, width)) else {
            continue;
        };
        written += 1;

        let mask = glyph.and_then(|g| g.column(delta_col)).unwrap_or(0);
        for delta_row in 0..font.height() {
            let row = offset(start_row, delta_row).and_then(|pos| on_screen(pos, height));
            if let Some(row) = row {
                display.set_pixel(col, row, mask & (1 << delta_row) != 0);
            }
        }
    }

    if let Some(col) = offset(start_col, width_cols).and_then(|pos| on_screen(pos, width)) {
        written += 1;
        display.clear_column(col);
    }

    written
}

/// Columns a letter occupies when fully visible, separator included
pub fn advance_of(font: &Font<'_>, letter: u8) -> u16 {
    let width = match letter {
        b' ' => font.space_width(),
        _ => font.width_of(letter).unwrap_or(font.space_width()),
    };
    u16::from(width) + 1
}

/// `None` past the end of the coordinate range, which is off-screen too
fn offset(origin: i32, delta: u8) -> Option<i32> {
    origin.checked_add(i32::from(delta))
}

fn on_screen(pos: i32, limit: u16) -> Option<u16> {
    if (0..i32::from(limit)).contains(&pos) {
        Some(pos as u16)
    } else {
        None
    }
}
