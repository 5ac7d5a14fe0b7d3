//! AHRS state snapshot
//!
//! Attitude handed from the estimator to the control layer. Angles are
//! radians; the `*_cd` accessors expose the centidegree values the acro
//! controller works in.

use crate::attitude::{wrap_180_cd, wrap_360_cd};

/// AHRS state output
///
/// # Coordinate System
///
/// - Frame: NED (North-East-Down)
/// - Euler sequence: ZYX (yaw-pitch-roll)
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct AhrsState {
    /// Roll angle in radians
    pub roll: f32,

    /// Pitch angle in radians
    pub pitch: f32,

    /// Yaw angle in radians (heading, 0 = north)
    pub yaw: f32,
}

impl AhrsState {
    /// Create a new AhrsState with given Euler angles (radians)
    pub fn new(roll: f32, pitch: f32, yaw: f32) -> Self {
        Self { roll, pitch, yaw }
    }

    /// Roll in centidegrees, wrapped to ±18000
    pub fn roll_cd(&self) -> f32 {
        wrap_180_cd(self.roll.to_degrees() * 100.0)
    }

    /// Pitch in centidegrees, wrapped to ±18000
    pub fn pitch_cd(&self) -> f32 {
        wrap_180_cd(self.pitch.to_degrees() * 100.0)
    }

    /// Heading in centidegrees, wrapped to 0..36000
    pub fn yaw_cd(&self) -> f32 {
        wrap_360_cd(self.yaw.to_degrees() * 100.0)
    }

    /// Cosine of the pitch angle
    pub fn cos_pitch(&self) -> f32 {
        libm::cosf(self.pitch)
    }
}
