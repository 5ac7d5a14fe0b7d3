//! RC input state and channel mapping
//!
//! Pilot input reaches the vehicle as RC override channels carrying PWM
//! pulse widths (1100-1500-1900 µs). This module stores them and maps them
//! onto the submarine's control axes.
//!
//! ## Channel map (1-indexed)
//!
//! | Channel | Axis     |
//! |---------|----------|
//! | 1       | Pitch    |
//! | 2       | Roll     |
//! | 3       | Throttle |
//! | 4       | Yaw      |
//! | 5       | Forward  |
//! | 6       | Lateral  |

use crate::servo::PwmRange;

/// Number of RC override channels tracked
pub const RC_CHANNEL_COUNT: usize = 8;

/// Full-scale roll/pitch/yaw pilot input (angle-rate units)
pub const ROLL_PITCH_YAW_INPUT_MAX: f32 = 4500.0;

pub const CHANNEL_PITCH: usize = 1;
pub const CHANNEL_ROLL: usize = 2;
pub const CHANNEL_THROTTLE: usize = 3;
pub const CHANNEL_YAW: usize = 4;
pub const CHANNEL_FORWARD: usize = 5;
pub const CHANNEL_LATERAL: usize = 6;

/// Pilot input for one control cycle
///
/// Roll, pitch and yaw are in ±4500 units; throttle, forward and lateral are
/// normalized to ±1.0.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PilotInput {
    pub roll: f32,
    pub pitch: f32,
    pub yaw: f32,
    pub throttle: f32,
    pub forward: f32,
    pub lateral: f32,
}

/// RC override state
#[derive(Debug, Clone)]
pub struct RcInput {
    /// Channel pulse widths (µs)
    channels: [u16; RC_CHANNEL_COUNT],
    /// Pulse calibration shared by all channels
    range: PwmRange,
    /// Roll trim added to the roll stick (±4500 units)
    roll_trim: f32,
    /// Pitch trim added to the pitch stick (±4500 units)
    pitch_trim: f32,
}

impl Default for RcInput {
    fn default() -> Self {
        Self::new()
    }
}

impl RcInput {
    /// Create RC input with every channel at neutral
    pub const fn new() -> Self {
        Self {
            channels: [PwmRange::THRUSTER.neutral; RC_CHANNEL_COUNT],
            range: PwmRange::THRUSTER,
            roll_trim: 0.0,
            pitch_trim: 0.0,
        }
    }

    /// Store new override pulse widths
    ///
    /// Extra values beyond [`RC_CHANNEL_COUNT`] are ignored; channels not
    /// covered by `pulses` keep their previous value.
    pub fn update_from_pwm(&mut self, pulses: &[u16]) {
        for (slot, &pulse) in self.channels.iter_mut().zip(pulses.iter()) {
            *slot = pulse;
        }
    }

    /// Force every channel to its neutral pulse and clear roll/pitch trim
    ///
    /// Used on mode entry so commands held for the previous mode do not
    /// carry over.
    pub fn set_neutral_controls(&mut self) {
        self.channels = [self.range.neutral; RC_CHANNEL_COUNT];
        self.roll_trim = 0.0;
        self.pitch_trim = 0.0;
    }

    /// Set roll/pitch trim, clamped to the stick range
    pub fn set_trim(&mut self, roll: f32, pitch: f32) {
        self.roll_trim = roll.clamp(-ROLL_PITCH_YAW_INPUT_MAX, ROLL_PITCH_YAW_INPUT_MAX);
        self.pitch_trim = pitch.clamp(-ROLL_PITCH_YAW_INPUT_MAX, ROLL_PITCH_YAW_INPUT_MAX);
    }

    /// Current (roll, pitch) trim
    pub fn trim(&self) -> (f32, f32) {
        (self.roll_trim, self.pitch_trim)
    }

    /// Raw pulse width of a channel (1-indexed), `None` if out of range
    pub fn pulse(&self, channel: usize) -> Option<u16> {
        channel
            .checked_sub(1)
            .and_then(|index| self.channels.get(index))
            .copied()
    }

    /// Normalized channel value (1-indexed), 0.0 if out of range
    pub fn norm_input(&self, channel: usize) -> f32 {
        self.pulse(channel)
            .map(|pulse| self.range.normalize(pulse))
            .unwrap_or(0.0)
    }

    /// Map the channels onto the control axes
    ///
    /// Roll and pitch include trim and saturate at full stick.
    pub fn pilot_input(&self) -> PilotInput {
        PilotInput {
            roll: trimmed(self.norm_input(CHANNEL_ROLL), self.roll_trim),
            pitch: trimmed(self.norm_input(CHANNEL_PITCH), self.pitch_trim),
            yaw: self.norm_input(CHANNEL_YAW) * ROLL_PITCH_YAW_INPUT_MAX,
            throttle: self.norm_input(CHANNEL_THROTTLE),
            forward: self.norm_input(CHANNEL_FORWARD),
            lateral: self.norm_input(CHANNEL_LATERAL),
        }
    }
}

fn trimmed(norm: f32, trim: f32) -> f32 {
    (norm * ROLL_PITCH_YAW_INPUT_MAX + trim)
        .clamp(-ROLL_PITCH_YAW_INPUT_MAX, ROLL_PITCH_YAW_INPUT_MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_is_neutral() {
        let rc = RcInput::new();
        assert_eq!(rc.pilot_input(), PilotInput::default());
        assert_eq!(rc.pulse(1), Some(1500));
    }

    #[test]
    fn test_pulse_out_of_range() {
        let rc = RcInput::new();
        assert_eq!(rc.pulse(0), None);
        assert_eq!(rc.pulse(RC_CHANNEL_COUNT + 1), None);
        assert_eq!(rc.norm_input(0), 0.0);
    }

    #[test]
    fn test_channel_mapping() {
        let mut rc = RcInput::new();
        rc.update_from_pwm(&[1700, 1300, 1900, 1100, 1600, 1400]);

        let input = rc.pilot_input();
        assert!((input.pitch - 2250.0).abs() < 0.01);
        assert!((input.roll + 2250.0).abs() < 0.01);
        assert!((input.throttle - 1.0).abs() < 0.0001);
        assert!((input.yaw + 4500.0).abs() < 0.01);
        assert!((input.forward - 0.25).abs() < 0.0001);
        assert!((input.lateral + 0.25).abs() < 0.0001);
    }

    #[test]
    fn test_partial_update_keeps_other_channels() {
        let mut rc = RcInput::new();
        rc.update_from_pwm(&[1600, 1600, 1600, 1600, 1600, 1600, 1600, 1600]);
        rc.update_from_pwm(&[1500]);

        assert_eq!(rc.pulse(1), Some(1500));
        assert_eq!(rc.pulse(2), Some(1600));
    }

    #[test]
    fn test_set_neutral_controls() {
        let mut rc = RcInput::new();
        rc.update_from_pwm(&[1900, 1100, 1900, 1100, 1900, 1100, 1900, 1100]);
        rc.set_trim(300.0, -450.0);
        rc.set_neutral_controls();

        for channel in 1..=RC_CHANNEL_COUNT {
            assert_eq!(rc.pulse(channel), Some(1500));
        }
        assert_eq!(rc.trim(), (0.0, 0.0));
        assert_eq!(rc.pilot_input(), PilotInput::default());
    }

    #[test]
    fn test_trim_offsets_roll_and_pitch() {
        let mut rc = RcInput::new();
        rc.set_trim(300.0, -450.0);

        let input = rc.pilot_input();
        assert_eq!(input.roll, 300.0);
        assert_eq!(input.pitch, -450.0);
        assert_eq!(input.yaw, 0.0);
    }

    #[test]
    fn test_trimmed_input_saturates() {
        let mut rc = RcInput::new();
        rc.set_trim(10000.0, -1000.0);
        assert_eq!(rc.trim(), (4500.0, -1000.0));

        // Full stick on both axes plus trim stays at full stick
        rc.update_from_pwm(&[1100, 1900]);
        let input = rc.pilot_input();
        assert_eq!(input.roll, 4500.0);
        assert_eq!(input.pitch, -4500.0);
    }
}
