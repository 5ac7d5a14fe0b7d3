//! Attitude snapshot and frame utilities
//!
//! The acro controller reads the vehicle attitude once per cycle into an
//! [`AttitudeSnapshot`] and works on it in centidegrees, the unit the pilot
//! input and trainer gains are expressed in.

use libm::{cosf, sinf};
use nalgebra::Vector3;

use crate::ahrs::AhrsState;

/// Attitude as seen by the rate shaper for one control cycle
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AttitudeSnapshot {
    /// Roll angle in centidegrees (±18000)
    pub roll_cd: f32,
    /// Pitch angle in centidegrees (±18000)
    pub pitch_cd: f32,
    /// Heading in centidegrees (0..36000)
    pub yaw_cd: f32,
    /// Cosine of the actual pitch angle
    pub cos_pitch: f32,
    /// Attitude controller's current Euler target (radians), used to rotate
    /// earth-frame rates into the body frame
    pub target_euler_rad: Vector3<f32>,
}

impl AttitudeSnapshot {
    /// Snapshot where the attitude target equals the actual attitude
    ///
    /// # Arguments
    ///
    /// * `roll`, `pitch`, `yaw` - Euler angles in radians
    pub fn new(roll: f32, pitch: f32, yaw: f32) -> Self {
        Self {
            roll_cd: wrap_180_cd(roll.to_degrees() * 100.0),
            pitch_cd: wrap_180_cd(pitch.to_degrees() * 100.0),
            yaw_cd: wrap_360_cd(yaw.to_degrees() * 100.0),
            cos_pitch: cosf(pitch),
            target_euler_rad: Vector3::new(roll, pitch, yaw),
        }
    }

    /// Build from the estimator state and the attitude controller's target
    pub fn from_ahrs(ahrs: &AhrsState, target_euler_rad: Vector3<f32>) -> Self {
        Self {
            roll_cd: ahrs.roll_cd(),
            pitch_cd: ahrs.pitch_cd(),
            yaw_cd: ahrs.yaw_cd(),
            cos_pitch: ahrs.cos_pitch(),
            target_euler_rad,
        }
    }
}

impl Default for AttitudeSnapshot {
    fn default() -> Self {
        Self::new(0.0, 0.0, 0.0)
    }
}

/// Wrap an angle in centidegrees to the -18000..=18000 range
pub fn wrap_180_cd(angle_cd: f32) -> f32 {
    let mut a = angle_cd % 36000.0;
    if a > 18000.0 {
        a -= 36000.0;
    } else if a < -18000.0 {
        a += 36000.0;
    }
    a
}

/// Wrap an angle in centidegrees to the 0..36000 range
pub fn wrap_360_cd(angle_cd: f32) -> f32 {
    let a = angle_cd % 36000.0;
    if a < 0.0 {
        a + 36000.0
    } else {
        a
    }
}

/// Convert Euler angle rates into body-frame angular velocity
///
/// # Arguments
///
/// * `euler_rad` - Orientation (roll, pitch, yaw) in radians
/// * `euler_rate` - Earth-frame Euler rates (any consistent unit)
///
/// # Returns
///
/// Body-frame angular velocity in the unit of `euler_rate`
pub fn euler_rate_to_ang_vel(euler_rad: &Vector3<f32>, euler_rate: &Vector3<f32>) -> Vector3<f32> {
    let sin_theta = sinf(euler_rad.y);
    let cos_theta = cosf(euler_rad.y);
    let sin_phi = sinf(euler_rad.x);
    let cos_phi = cosf(euler_rad.x);

    Vector3::new(
        euler_rate.x - sin_theta * euler_rate.z,
        cos_phi * euler_rate.y + sin_phi * cos_theta * euler_rate.z,
        -sin_phi * euler_rate.y + cos_theta * cos_phi * euler_rate.z,
    )
}
