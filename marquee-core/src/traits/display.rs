//! Display driver traits for dot-matrix panels

/// Addressable monochrome pixel surface
///
/// The surface is owned by the panel driver. The renderer only ever sets or
/// clears individual pixels and never issues coordinates outside
/// `dimensions()`, so implementations are not required to bounds-check.
pub trait PixelDisplay {
    /// Set (`on = true`) or clear a single pixel
    ///
    /// - `col`: Column, 0 at the left edge
    /// - `row`: Row, 0 at the top edge
    fn set_pixel(&mut self, col: u16, row: u16, on: bool);

    /// Clear every pixel on the surface
    fn clear_all(&mut self);

    /// Get the surface dimensions
    ///
    /// Returns (width, height) in pixels
    fn dimensions(&self) -> (u16, u16);

    /// Clear a full-height column
    fn clear_column(&mut self, col: u16) {
        let (_, height) = self.dimensions();
        for row in 0..height {
            self.set_pixel(col, row, false);
        }
    }
}

/// Periodic scan-out of a multiplexed panel
///
/// Called from a fixed-period timer task, independently of rendering. A scan
/// may observe a frame that is only partially rendered; the tear corrects
/// itself on the next render pass.
pub trait ScanOut {
    /// Error type for bus or pin failures
    type Error;

    /// Shift out the next multiplex phase of the pixel buffer
    fn scan_out(&mut self) -> Result<(), Self::Error>;

    /// Drive the panel's output-enable line
    ///
    /// Used for brightness control by time-division.
    fn set_output_enabled(&mut self, enabled: bool) -> Result<(), Self::Error>;
}
