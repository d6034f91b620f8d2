//! `embedded-graphics` drawing onto the DMD frame

use core::convert::Infallible;

use embedded_graphics_core::draw_target::DrawTarget;
use embedded_graphics_core::geometry::{OriginDimensions, Size};
use embedded_graphics_core::pixelcolor::BinaryColor;
use embedded_graphics_core::Pixel;

use super::dmd::Dmd;
use super::framebuffer::DmdFrameBuffer;
use super::{HEIGHT, WIDTH};

impl DrawTarget for DmdFrameBuffer {
    type Color = BinaryColor;
    type Error = Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels {
            let (Ok(col), Ok(row)) = (u16::try_from(point.x), u16::try_from(point.y)) else {
                continue;
            };
            let _ = self.set_pixel(col, row, color.is_on());
        }
        Ok(())
    }
}

impl OriginDimensions for DmdFrameBuffer {
    fn size(&self) -> Size {
        Size::new(u32::from(WIDTH), u32::from(HEIGHT))
    }
}

impl<SPI, A, B, OE, LAT> DrawTarget for Dmd<SPI, A, B, OE, LAT> {
    type Color = BinaryColor;
    type Error = Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        self.frame_mut().draw_iter(pixels)
    }
}

impl<SPI, A, B, OE, LAT> OriginDimensions for Dmd<SPI, A, B, OE, LAT> {
    fn size(&self) -> Size {
        Size::new(u32::from(WIDTH), u32::from(HEIGHT))
    }
}
