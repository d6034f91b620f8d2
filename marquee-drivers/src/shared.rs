//! Panel shared between the render loop and the scan task
//!
//! The render loop writes pixels while a timer-driven task scans the same
//! frame out. [`SharedPanel`] puts the panel behind a blocking mutex so a
//! `&SharedPanel` can be handed to both sides; each pixel write or scan
//! step holds the lock only for that one operation.
//!
//! ```ignore
//! static PANEL: SharedPanel<CriticalSectionRawMutex, MyDmd> = SharedPanel::new(dmd);
//!
//! let mut scan = ScanTask::new(&PANEL, BrightnessConfig::default())?;
//! scroll.step_display(&mut &PANEL);
//! ```

use core::cell::RefCell;

use embassy_sync::blocking_mutex::raw::RawMutex;
use embassy_sync::blocking_mutex::Mutex;
use marquee_core::traits::{PixelDisplay, ScanOut};

/// Panel wrapped for shared access
pub struct SharedPanel<M: RawMutex, P> {
    inner: Mutex<M, RefCell<P>>,
}

impl<M: RawMutex, P> SharedPanel<M, P> {
    /// Wrap a panel
    pub const fn new(panel: P) -> Self {
        Self {
            inner: Mutex::new(RefCell::new(panel)),
        }
    }

    /// Run `f` with exclusive access to the panel
    pub fn with<R>(&self, f: impl FnOnce(&mut P) -> R) -> R {
        self.inner.lock(|cell| f(&mut cell.borrow_mut()))
    }

    /// Unwrap the panel
    pub fn into_inner(self) -> P {
        self.inner.into_inner().into_inner()
    }
}

impl<M: RawMutex, P: PixelDisplay> PixelDisplay for &SharedPanel<M, P> {
    fn set_pixel(&mut self, col: u16, row: u16, on: bool) {
        self.with(|panel| panel.set_pixel(col, row, on));
    }

    fn clear_all(&mut self) {
        self.with(|panel| panel.clear_all());
    }

    fn dimensions(&self) -> (u16, u16) {
        self.with(|panel| panel.dimensions())
    }

    fn clear_column(&mut self, col: u16) {
        self.with(|panel| panel.clear_column(col));
    }
}

impl<M: RawMutex, P: ScanOut> ScanOut for &SharedPanel<M, P> {
    type Error = P::Error;

    fn scan_out(&mut self) -> Result<(), Self::Error> {
        self.with(|panel| panel.scan_out())
    }

    fn set_output_enabled(&mut self, enabled: bool) -> Result<(), Self::Error> {
        self.with(|panel| panel.set_output_enabled(enabled))
    }
}
