//! Configuration type definitions
//!
//! Defaults match a single 32x16 panel refreshed every millisecond at 30%
//! brightness with one blank character between message repeats.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Default number of blank characters between message repeats
pub const DEFAULT_SEPARATOR_GAP: u8 = 1;

/// Default number of steps in one brightness period
pub const DEFAULT_BRIGHTNESS_CYCLES: u8 = 10;

/// Default number of enabled steps per brightness period
pub const DEFAULT_BRIGHTNESS_ON_CYCLES: u8 = 3;

/// Default interval between scan/brightness steps (µs)
pub const DEFAULT_STEP_PERIOD_US: u32 = 1000;

/// Configuration validation errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Messages need at least one blank character between repeats
    ZeroSeparatorGap,
    /// Brightness period has no steps
    ZeroBrightnessCycles,
    /// More enabled steps than steps in the period
    OnCyclesExceedCycles,
    /// Scan step period is zero
    ZeroStepPeriod,
}

/// What to do with message characters the font has no glyph for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum GlyphFallback {
    /// Replace the character with a space when the message is committed
    #[default]
    Space,
    /// Refuse to commit the message
    Reject,
}

/// Text scroll configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ScrollConfig {
    /// Blank characters appended after the message
    pub separator_gap: u8,
    /// Policy for characters outside the font
    pub fallback: GlyphFallback,
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self {
            separator_gap: DEFAULT_SEPARATOR_GAP,
            fallback: GlyphFallback::Space,
        }
    }
}

impl ScrollConfig {
    /// Check the configuration for values the renderer cannot work with
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.separator_gap == 0 {
            return Err(ConfigError::ZeroSeparatorGap);
        }
        Ok(())
    }

    /// Smallest message buffer that can hold the gap and a terminator
    pub fn min_capacity(&self) -> usize {
        self.separator_gap as usize + 1
    }
}

/// Brightness duty-cycle configuration
///
/// Output is enabled for `on_cycles` out of every `cycles` scan steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BrightnessConfig {
    /// Steps in one brightness period
    pub cycles: u8,
    /// Enabled steps per period
    pub on_cycles: u8,
    /// Interval between steps in microseconds
    pub step_period_us: u32,
}

impl Default for BrightnessConfig {
    fn default() -> Self {
        Self {
            cycles: DEFAULT_BRIGHTNESS_CYCLES,
            on_cycles: DEFAULT_BRIGHTNESS_ON_CYCLES,
            step_period_us: DEFAULT_STEP_PERIOD_US,
        }
    }
}

impl BrightnessConfig {
    /// Check the configuration for values the scan task cannot work with
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.cycles == 0 {
            return Err(ConfigError::ZeroBrightnessCycles);
        }
        if self.on_cycles > self.cycles {
            return Err(ConfigError::OnCyclesExceedCycles);
        }
        if self.step_period_us == 0 {
            return Err(ConfigError::ZeroStepPeriod);
        }
        Ok(())
    }

    /// Brightness as a percentage of full on-time
    pub fn percent(&self) -> u8 {
        if self.cycles == 0 {
            return 0;
        }
        (self.on_cycles as u16 * 100 / self.cycles as u16) as u8
    }

    /// Length of one full brightness period in microseconds
    pub fn period_us(&self) -> u32 {
        self.step_period_us.saturating_mul(self.cycles as u32)
    }
}
