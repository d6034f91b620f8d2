//! Brightness duty cycle

use marquee_core::config::{BrightnessConfig, ConfigError};

/// Output-enable duty cycle over a fixed number of scan steps
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BrightnessCycle {
    cycles: u8,
    on_cycles: u8,
    /// Current step in the period (0..cycles)
    counter: u8,
}

impl BrightnessCycle {
    /// Create a duty cycle with `on_cycles` lit steps out of `cycles`
    pub fn new(cycles: u8, on_cycles: u8) -> Result<Self, ConfigError> {
        if cycles == 0 {
            return Err(ConfigError::ZeroBrightnessCycles);
        }
        if on_cycles > cycles {
            return Err(ConfigError::OnCyclesExceedCycles);
        }
        Ok(Self {
            cycles,
            on_cycles,
            counter: 0,
        })
    }

    /// Create a duty cycle from a validated configuration
    pub fn from_config(config: &BrightnessConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Self::new(config.cycles, config.on_cycles)
    }

    /// Move to the next step
    ///
    /// Returns whether the output should be enabled for this step.
    pub fn advance(&mut self) -> bool {
        let enabled = self.counter < self.on_cycles;
        self.counter += 1;
        if self.counter >= self.cycles {
            self.counter = 0;
        }
        enabled
    }

    /// Change the number of lit steps, clamped to the period
    pub fn set_on_cycles(&mut self, on_cycles: u8) {
        self.on_cycles = on_cycles.min(self.cycles);
    }

    pub fn on_cycles(&self) -> u8 {
        self.on_cycles
    }

    pub fn cycles(&self) -> u8 {
        self.cycles
    }

    pub fn counter(&self) -> u8 {
        self.counter
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_duty_cycle() {
        let mut cycle = BrightnessCycle::from_config(&BrightnessConfig::default()).unwrap();

        let mut lit = [false; 10];
        for step in lit.iter_mut() {
            *step = cycle.advance();
        }
        assert_eq!(
            lit,
            [true, true, true, false, false, false, false, false, false, false]
        );
        assert_eq!(cycle.counter(), 0);
    }

    #[test]
    fn test_full_and_zero_brightness() {
        let mut full = BrightnessCycle::new(4, 4).unwrap();
        let mut off = BrightnessCycle::new(4, 0).unwrap();

        for _ in 0..12 {
            assert!(full.advance());
            assert!(!off.advance());
        }
    }

    #[test]
    fn test_set_on_cycles_clamps() {
        let mut cycle = BrightnessCycle::new(10, 3).unwrap();

        cycle.set_on_cycles(200);
        assert_eq!(cycle.on_cycles(), 10);
        cycle.set_on_cycles(1);
        assert_eq!(cycle.on_cycles(), 1);
    }

    #[test]
    fn test_invalid_cycles() {
        assert_eq!(
            BrightnessCycle::new(0, 0),
            Err(ConfigError::ZeroBrightnessCycles)
        );
        assert_eq!(
            BrightnessCycle::new(5, 6),
            Err(ConfigError::OnCyclesExceedCycles)
        );

        let config = BrightnessConfig {
            step_period_us: 0,
            ..Default::default()
        };
        assert_eq!(
            BrightnessCycle::from_config(&config),
            Err(ConfigError::ZeroStepPeriod)
        );
    }
}
