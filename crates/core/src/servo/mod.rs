//! Thruster PWM conversion
//!
//! Bidirectional thruster ESCs take a PWM pulse centred on a neutral width:
//! pulses above neutral spin one way, below neutral the other. This module
//! converts between normalized commands (-1.0 to +1.0) and pulse widths.
//!
//! The same conversion is used for RC override channels, which share the
//! 1100-1500-1900 µs convention.

/// Pulse width calibration for a bidirectional output (µs)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PwmRange {
    pub min: u16,     // Default: 1100 (full reverse)
    pub neutral: u16, // Default: 1500 (stopped)
    pub max: u16,     // Default: 1900 (full forward)
}

impl PwmRange {
    /// Standard thruster/RC range: 1100-1500-1900 µs
    pub const THRUSTER: PwmRange = PwmRange {
        min: 1100,
        neutral: 1500,
        max: 1900,
    };

    /// Pulse width for a normalized command
    pub fn pulse(&self, normalized: f32) -> u16 {
        normalized_to_pulse(normalized, self.min, self.neutral, self.max)
    }

    /// Normalized command for a pulse width
    pub fn normalize(&self, pulse_us: u16) -> f32 {
        pulse_to_normalized(pulse_us, self.min, self.neutral, self.max)
    }
}

impl Default for PwmRange {
    fn default() -> Self {
        Self::THRUSTER
    }
}

/// Convert normalized value to PWM pulse width (microseconds)
///
/// # Arguments
///
/// * `normalized` - Normalized value (-1.0 to +1.0), clamped
/// * `min` - Minimum pulse width (μs)
/// * `neutral` - Neutral pulse width (μs)
/// * `max` - Maximum pulse width (μs)
///
/// The pulse is computed in float and truncated once, so a fractional
/// negative offset rounds toward `min` (1500 - 133.3 gives 1366).
pub fn normalized_to_pulse(normalized: f32, min: u16, neutral: u16, max: u16) -> u16 {
    let clamped = normalized.clamp(-1.0, 1.0);

    let range = if clamped < 0.0 {
        // Negative: interpolate between min and neutral
        (neutral - min) as f32
    } else {
        // Positive: interpolate between neutral and max
        (max - neutral) as f32
    };

    (neutral as f32 + range * clamped) as u16
}

/// Convert PWM pulse width to a normalized value
///
/// Inverse of [`normalized_to_pulse`]. Pulses outside `min..=max` saturate
/// at ±1.0.
pub fn pulse_to_normalized(pulse_us: u16, min: u16, neutral: u16, max: u16) -> f32 {
    let pulse = pulse_us.clamp(min, max);

    if pulse < neutral {
        -((neutral - pulse) as f32) / (neutral - min) as f32
    } else {
        (pulse - neutral) as f32 / (max - neutral) as f32
    }
}
