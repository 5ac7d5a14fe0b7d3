//! Controller traits
//!
//! Platform-agnostic interface to the attitude and position controllers.

use nalgebra::Vector3;

use super::acro_rates::RateRequest;

/// Attitude controller
///
/// Angles are centidegrees, rates centidegrees per second.
pub trait AttitudeControl {
    /// Command a body-frame rate target
    fn input_rate_bf_roll_pitch_yaw(&mut self, rates: RateRequest);

    /// Command an Euler attitude target
    ///
    /// # Arguments
    ///
    /// * `roll_cd`, `pitch_cd`, `yaw_cd` - Target angles
    /// * `slew_yaw` - Rate-limit the yaw change toward the target
    fn input_euler_angle_roll_pitch_yaw(
        &mut self,
        roll_cd: f32,
        pitch_cd: f32,
        yaw_cd: f32,
        slew_yaw: bool,
    );

    /// Command a collective throttle directly
    ///
    /// # Arguments
    ///
    /// * `throttle` - Throttle (0.0 to 1.0)
    /// * `apply_angle_boost` - Compensate for lean angle
    /// * `filter_cutoff_hz` - Throttle input filter cutoff (0 disables)
    fn set_throttle_out(&mut self, throttle: f32, apply_angle_boost: bool, filter_cutoff_hz: f32);

    /// Reset the attitude target to the current attitude and clear integrators
    fn relax_attitude_controllers(&mut self);

    /// Current attitude target as Euler angles (radians)
    fn attitude_target_euler_rad(&self) -> Vector3<f32>;
}

/// Vertical position controller
pub trait PositionControl {
    /// Set the altitude (depth) hold target in centimetres
    fn set_alt_target(&mut self, alt_cm: f32);
}
