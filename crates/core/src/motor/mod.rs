//! Thruster output abstraction
//!
//! The vehicle carries eight bidirectional thrusters: four horizontal
//! (indices 0-3) vectored for surge, sway and yaw, and four vertical
//! (indices 4-7) for heave, roll and pitch. Mixing and PWM generation belong
//! to the platform layer behind the [`Motors`] trait; this module defines
//! that interface plus the pieces of the maintenance override that are pure
//! arithmetic.
//!
//! # Safety
//!
//! Implementations must ignore raw thruster writes while disarmed.

use core::fmt;

use crate::servo::PwmRange;

/// Number of thrusters on the frame
pub const THRUSTER_COUNT: usize = 8;

/// Horizontal (vectored) thrusters
pub const HORIZONTAL_THRUSTERS: [u8; 4] = [0, 1, 2, 3];

/// Vertical thrusters
pub const VERTICAL_THRUSTERS: [u8; 4] = [4, 5, 6, 7];

/// Thruster output error types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MotorError {
    /// Thruster index outside the frame layout
    InvalidMotor,
    /// System not armed - raw outputs refused
    NotArmed,
    /// Hardware PWM channel unavailable
    HardwareFault,
}

impl MotorError {
    /// Return variant description as a static string (usable with defmt on embedded)
    pub fn as_str(&self) -> &'static str {
        match self {
            MotorError::InvalidMotor => "invalid thruster index",
            MotorError::NotArmed => "thrusters not armed",
            MotorError::HardwareFault => "thruster output fault",
        }
    }
}

impl fmt::Display for MotorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Requested readiness of the thruster output stage
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpoolState {
    /// Outputs off
    Shutdown,
    /// Outputs at idle, commands ignored
    GroundIdle,
    /// Full authority
    ThrottleUnlimited,
}

/// Installation direction of a thruster
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ThrusterDirection {
    #[default]
    Normal,
    Reversed,
}

impl ThrusterDirection {
    /// Decode a `MOT_n_DIRECTION` value: negative means reversed, anything
    /// else normal
    pub fn from_param(value: i32) -> Self {
        if value < 0 {
            ThrusterDirection::Reversed
        } else {
            ThrusterDirection::Normal
        }
    }

    /// +1.0 for normal, -1.0 for reversed
    pub fn sign(self) -> f32 {
        match self {
            ThrusterDirection::Normal => 1.0,
            ThrusterDirection::Reversed => -1.0,
        }
    }

    pub fn as_param(self) -> i32 {
        match self {
            ThrusterDirection::Normal => 1,
            ThrusterDirection::Reversed => -1,
        }
    }
}

/// Thruster mixer and output layer
pub trait Motors {
    /// Whether the vehicle is armed
    fn armed(&self) -> bool;

    /// Request a spool state
    fn set_desired_spool_state(&mut self, state: SpoolState);

    /// Vertical thrust demand (-1.0 to +1.0)
    fn set_throttle(&mut self, throttle: f32);

    /// Forward thrust demand (-1.0 to +1.0)
    fn set_forward(&mut self, forward: f32);

    /// Lateral thrust demand (-1.0 to +1.0)
    fn set_lateral(&mut self, lateral: f32);

    /// Write a raw pulse to one thruster, bypassing the mixer
    ///
    /// # Errors
    ///
    /// Returns `MotorError::InvalidMotor` for an index outside the frame.
    /// Returns `MotorError::NotArmed` while disarmed.
    fn output_test_num(&mut self, index: u8, pulse_us: u16) -> Result<(), MotorError>;

    /// Configured installation direction of a thruster
    fn motor_direction(&self, index: u8) -> ThrusterDirection;
}

/// Pulse for a vertical thruster during the maintenance override
///
/// Neutral offset by `gain` of the full thruster span, in the direction that
/// pushes the vehicle the same way regardless of how the thruster is mounted.
///
/// # Arguments
///
/// * `direction` - Thruster installation direction
/// * `gain` - Override gain (0.0 to 1.0); 0.0 gives neutral
pub fn vertical_override_pulse(direction: ThrusterDirection, gain: f32) -> u16 {
    PwmRange::THRUSTER.pulse(direction.sign() * gain.clamp(0.0, 1.0))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_thruster_groups_cover_frame() {
        let mut seen = [false; THRUSTER_COUNT];
        for index in HORIZONTAL_THRUSTERS.iter().chain(VERTICAL_THRUSTERS.iter()) {
            assert!(!seen[*index as usize]);
            seen[*index as usize] = true;
        }
        assert!(seen.iter().all(|s| *s));
    }

    #[test]
    fn test_direction_from_param() {
        assert_eq!(ThrusterDirection::from_param(1), ThrusterDirection::Normal);
        assert_eq!(ThrusterDirection::from_param(-1), ThrusterDirection::Reversed);
        assert_eq!(ThrusterDirection::from_param(0), ThrusterDirection::Normal);
        assert_eq!(ThrusterDirection::Reversed.sign(), -1.0);
        assert_eq!(ThrusterDirection::Reversed.as_param(), -1);
    }

    #[test]
    fn test_override_pulse_zero_gain_is_neutral() {
        assert_eq!(vertical_override_pulse(ThrusterDirection::Normal, 0.0), 1500);
        assert_eq!(vertical_override_pulse(ThrusterDirection::Reversed, 0.0), 1500);
    }

    #[test]
    fn test_override_pulse_follows_direction() {
        assert_eq!(vertical_override_pulse(ThrusterDirection::Normal, 0.5), 1700);
        assert_eq!(vertical_override_pulse(ThrusterDirection::Reversed, 0.5), 1300);
        assert_eq!(vertical_override_pulse(ThrusterDirection::Normal, 1.0), 1900);
        assert_eq!(vertical_override_pulse(ThrusterDirection::Reversed, 1.0), 1100);
    }

    #[test]
    fn test_override_pulse_truncates_after_offset() {
        // 1500 + 400/3 = 1633.3 and 1500 - 400/3 = 1366.7, both truncated
        assert_eq!(vertical_override_pulse(ThrusterDirection::Normal, 1.0 / 3.0), 1633);
        assert_eq!(vertical_override_pulse(ThrusterDirection::Reversed, 1.0 / 3.0), 1366);
    }

    #[test]
    fn test_override_pulse_gain_clamped() {
        assert_eq!(vertical_override_pulse(ThrusterDirection::Normal, 1.5), 1900);
        assert_eq!(vertical_override_pulse(ThrusterDirection::Reversed, 1.5), 1100);
        assert_eq!(vertical_override_pulse(ThrusterDirection::Normal, -0.5), 1500);
    }

    #[test]
    fn test_motor_error_display() {
        assert_eq!(MotorError::InvalidMotor.as_str(), "invalid thruster index");
        assert_eq!(MotorError::NotArmed.as_str(), "thrusters not armed");
    }
}
