//! DMD panel driver
//!
//! Drives a 32x16 Freetronics-style panel through `embedded-hal` 1.0: pixel
//! data over an [`SpiBus`], row select on A/B, a latch line to move the
//! shift registers to the outputs and an output-enable line (high = lit).
//!
//! Each [`ScanOut::scan_out`] call refreshes one quarter of the rows, so the
//! panel must be scanned continuously from a timer task.

use embedded_hal::digital::OutputPin;
use embedded_hal::spi::SpiBus;
use marquee_core::traits::{PixelDisplay, ScanOut};

use super::framebuffer::DmdFrameBuffer;
use super::{DisplayError, HEIGHT, SCAN_PHASES, WIDTH};

/// DMD panel driver
///
/// All control pins must share one error type, as is the case for the GPIO
/// pins of a single HAL.
#[derive(Debug)]
pub struct Dmd<SPI, A, B, OE, LAT> {
    spi: SPI,
    a: A,
    b: B,
    oe: OE,
    latch: LAT,
    frame: DmdFrameBuffer,
    /// Next multiplex phase to shift out
    phase: u8,
}

impl<SPI, A, B, OE, LAT> Dmd<SPI, A, B, OE, LAT>
where
    SPI: SpiBus<u8>,
    A: OutputPin,
    B: OutputPin<Error = A::Error>,
    OE: OutputPin<Error = A::Error>,
    LAT: OutputPin<Error = A::Error>,
{
    /// Create a driver with a dark frame
    ///
    /// Pins are left as configured by the HAL; the first scan drives them.
    pub fn new(spi: SPI, a: A, b: B, oe: OE, latch: LAT) -> Self {
        Self {
            spi,
            a,
            b,
            oe,
            latch,
            frame: DmdFrameBuffer::new(),
            phase: 0,
        }
    }

    /// Release the bus and pins
    pub fn release(self) -> (SPI, A, B, OE, LAT) {
        (self.spi, self.a, self.b, self.oe, self.latch)
    }

    fn select_rows(&mut self, phase: u8) -> Result<(), A::Error> {
        match phase {
            0 => {
                self.a.set_low()?;
                self.b.set_low()
            }
            1 => {
                self.a.set_high()?;
                self.b.set_low()
            }
            2 => {
                self.a.set_low()?;
                self.b.set_high()
            }
            _ => {
                self.a.set_high()?;
                self.b.set_high()
            }
        }
    }
}

impl<SPI, A, B, OE, LAT> Dmd<SPI, A, B, OE, LAT> {
    /// Current frame contents
    pub fn frame(&self) -> &DmdFrameBuffer {
        &self.frame
    }

    /// Frame contents for direct drawing
    pub fn frame_mut(&mut self) -> &mut DmdFrameBuffer {
        &mut self.frame
    }

    /// Multiplex phase the next scan will shift out
    pub fn phase(&self) -> u8 {
        self.phase
    }
}

impl<SPI, A, B, OE, LAT> PixelDisplay for Dmd<SPI, A, B, OE, LAT> {
    fn set_pixel(&mut self, col: u16, row: u16, on: bool) {
        self.frame.set_pixel(col, row, on);
    }

    fn clear_all(&mut self) {
        self.frame.clear();
    }

    fn dimensions(&self) -> (u16, u16) {
        (WIDTH, HEIGHT)
    }
}

impl<SPI, A, B, OE, LAT> ScanOut for Dmd<SPI, A, B, OE, LAT>
where
    SPI: SpiBus<u8>,
    A: OutputPin,
    B: OutputPin<Error = A::Error>,
    OE: OutputPin<Error = A::Error>,
    LAT: OutputPin<Error = A::Error>,
{
    type Error = DisplayError<SPI::Error, A::Error>;

    fn scan_out(&mut self) -> Result<(), Self::Error> {
        let phase = self.phase;
        let payload = self.frame.phase_payload(phase);
        self.spi.write(&payload).map_err(DisplayError::Spi)?;
        self.spi.flush().map_err(DisplayError::Spi)?;

        // Blank while the outputs and row select change
        self.oe.set_low().map_err(DisplayError::Pin)?;
        self.latch.set_high().map_err(DisplayError::Pin)?;
        self.latch.set_low().map_err(DisplayError::Pin)?;
        self.select_rows(phase).map_err(DisplayError::Pin)?;
        self.oe.set_high().map_err(DisplayError::Pin)?;

        self.phase = (phase + 1) % SCAN_PHASES;
        Ok(())
    }

    fn set_output_enabled(&mut self, enabled: bool) -> Result<(), Self::Error> {
        if enabled {
            self.oe.set_high().map_err(DisplayError::Pin)
        } else {
            self.oe.set_low().map_err(DisplayError::Pin)
        }
    }
}
