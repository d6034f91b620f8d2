//! Periodic scan task
//!
//! One [`ScanTask::tick`] per timer period: shift out the next multiplex
//! phase, then drive output-enable from the brightness duty cycle.
//!
//! ```ignore
//! let mut scan = ScanTask::new(&panel, BrightnessConfig::default())?;
//!
//! // From a 1 ms timer interrupt:
//! scan.tick()?;
//!
//! // Or, with the `embassy` feature, as a task of its own:
//! scan.run().await;
//! ```

use marquee_core::config::{BrightnessConfig, ConfigError};
use marquee_core::traits::ScanOut;

use super::brightness::BrightnessCycle;

/// Scan/brightness driver for one panel
#[derive(Debug)]
pub struct ScanTask<P> {
    panel: P,
    brightness: BrightnessCycle,
    step_period_us: u32,
}

impl<P: ScanOut> ScanTask<P> {
    /// Create a scan task for `panel`
    pub fn new(panel: P, config: BrightnessConfig) -> Result<Self, ConfigError> {
        let brightness = BrightnessCycle::from_config(&config)?;

        #[cfg(feature = "defmt")]
        defmt::debug!(
            "Scan task: {}/{} steps lit, {} us period",
            config.on_cycles,
            config.cycles,
            config.step_period_us
        );

        Ok(Self {
            panel,
            brightness,
            step_period_us: config.step_period_us,
        })
    }

    /// Scan one phase and apply the brightness step
    ///
    /// Returns whether the output was left enabled. The brightness cycle
    /// advances only after a successful scan.
    pub fn tick(&mut self) -> Result<bool, P::Error> {
        self.panel.scan_out()?;
        let enabled = self.brightness.advance();
        self.panel.set_output_enabled(enabled)?;
        Ok(enabled)
    }

    /// Scan one phase without touching brightness
    pub fn flash(&mut self) -> Result<(), P::Error> {
        self.panel.scan_out()
    }

    /// Change the number of lit steps per brightness period
    pub fn set_brightness(&mut self, on_cycles: u8) {
        self.brightness.set_on_cycles(on_cycles);
    }

    pub fn brightness(&self) -> &BrightnessCycle {
        &self.brightness
    }

    /// Interval between ticks in microseconds
    pub fn step_period_us(&self) -> u32 {
        self.step_period_us
    }

    pub fn panel(&self) -> &P {
        &self.panel
    }

    pub fn panel_mut(&mut self) -> &mut P {
        &mut self.panel
    }

    /// Stop scanning and hand back the panel
    pub fn into_inner(self) -> P {
        self.panel
    }

    /// Tick forever at the configured period
    ///
    /// Scan errors are logged and the loop carries on with the next tick.
    #[cfg(feature = "embassy")]
    pub async fn run(&mut self) -> ! {
        use embassy_time::{Duration, Ticker};

        #[cfg(feature = "defmt")]
        defmt::info!("Scan task started");

        let mut ticker = Ticker::every(Duration::from_micros(self.step_period_us as u64));

        loop {
            ticker.next().await;

            if self.tick().is_err() {
                #[cfg(feature = "defmt")]
                defmt::warn!("Panel scan failed");
            }
        }
    }
}
