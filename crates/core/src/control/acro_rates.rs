//! Pilot rate shaping for rate-controlled flight
//!
//! Converts roll/pitch/yaw stick input into a body-frame angular rate request
//! (centidegrees per second). Shaping happens in four steps:
//!
//! 1. Circular limit on roll/pitch so a diagonal stick never exceeds
//!    single-axis authority
//! 2. Expo curve on roll/pitch (linear/cubic blend), linear yaw
//! 3. Optional trainer: an earth-frame self-leveling rate rotated into the
//!    body frame
//! 4. Blend of trainer and stick, either unconditional (limited trainer) or
//!    faded out by stick deflection and rate-limited (continuous trainer)
//!
//! The shaper is a pure function. Configuration arrives validated: expo is
//! clamped to [0, 1] when the config is built, never while shaping.

use libm::{fabsf, sqrtf};
use nalgebra::Vector3;

use crate::attitude::{euler_rate_to_ang_vel, AttitudeSnapshot};

/// Maximum combined roll/pitch stick input
pub const ROLL_PITCH_INPUT_MAX: f32 = 4500.0;

/// Maximum lean angle the trainer levels against (centidegrees)
pub const ACRO_LEVEL_MAX_ANGLE: f32 = 3000.0;

/// Body-frame angular rate request (centidegrees/s)
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct RateRequest {
    pub roll: f32,
    pub pitch: f32,
    pub yaw: f32,
}

impl From<Vector3<f32>> for RateRequest {
    fn from(v: Vector3<f32>) -> Self {
        Self {
            roll: v.x,
            pitch: v.y,
            yaw: v.z,
        }
    }
}

/// Trainer (self-leveling) behaviour
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TrainerMode {
    /// Pure rate control
    Disabled,
    /// Leveling blended out as the pilot deflects the sticks
    Continuous,
    /// Leveling always applied, plus a hard pull back inside the angle limit
    #[default]
    Limited,
}

impl TrainerMode {
    /// Decode the `ACRO_TRAINER` parameter (0, 1, 2); out-of-range values
    /// saturate to the nearest mode
    pub fn from_param(value: i32) -> Self {
        match value {
            i32::MIN..=0 => TrainerMode::Disabled,
            1 => TrainerMode::Continuous,
            _ => TrainerMode::Limited,
        }
    }

    pub fn as_param(self) -> i32 {
        match self {
            TrainerMode::Disabled => 0,
            TrainerMode::Continuous => 1,
            TrainerMode::Limited => 2,
        }
    }
}

/// Stick response curve
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExpoConfig {
    rp_p: f32,
    yaw_p: f32,
    expo: f32,
}

impl ExpoConfig {
    /// Build a response curve
    ///
    /// # Arguments
    ///
    /// * `rp_p` - Roll/pitch input-to-rate gain
    /// * `yaw_p` - Yaw input-to-rate gain
    /// * `expo` - Cubic blend factor; values above 1.0 are stored as 1.0,
    ///   values at or below 0.0 select the linear curve
    pub fn new(rp_p: f32, yaw_p: f32, expo: f32) -> Self {
        Self {
            rp_p,
            yaw_p,
            expo: expo.min(1.0),
        }
    }

    pub fn rp_p(&self) -> f32 {
        self.rp_p
    }

    pub fn yaw_p(&self) -> f32 {
        self.yaw_p
    }

    pub fn expo(&self) -> f32 {
        self.expo
    }

    /// Rate request for a single roll or pitch input
    pub fn roll_pitch_rate(&self, input: f32) -> f32 {
        if self.expo <= 0.0 {
            return input * self.rp_p;
        }

        let rp_in = input / ROLL_PITCH_INPUT_MAX;
        let rp_in3 = rp_in * rp_in * rp_in;
        let rp_out = (self.expo * rp_in3) + ((1.0 - self.expo) * rp_in);
        ROLL_PITCH_INPUT_MAX * rp_out * self.rp_p
    }

    /// Rate request for a yaw input (no expo)
    pub fn yaw_rate(&self, input: f32) -> f32 {
        input * self.yaw_p
    }
}

/// Trainer configuration
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrainerConfig {
    pub mode: TrainerMode,
    /// Roll leveling gain
    pub balance_roll: f32,
    /// Pitch leveling gain
    pub balance_pitch: f32,
    /// Lean angle limit enforced in limited mode (centidegrees)
    pub angle_max_cd: f32,
}

impl TrainerConfig {
    /// Trainer switched off
    pub const DISABLED: TrainerConfig = TrainerConfig {
        mode: TrainerMode::Disabled,
        balance_roll: 0.0,
        balance_pitch: 0.0,
        angle_max_cd: 0.0,
    };

    /// Earth-frame leveling rate for the current attitude
    ///
    /// Yaw is never leveled. In limited mode an extra term proportional to the
    /// excess over `angle_max_cd` pulls the vehicle back inside the limit.
    pub fn earth_frame_level(&self, attitude: &AttitudeSnapshot) -> Vector3<f32> {
        if self.mode == TrainerMode::Disabled {
            return Vector3::zeros();
        }

        let roll = attitude.roll_cd;
        let pitch = attitude.pitch_cd;

        let mut level = Vector3::new(
            -roll.clamp(-ACRO_LEVEL_MAX_ANGLE, ACRO_LEVEL_MAX_ANGLE) * self.balance_roll,
            -pitch.clamp(-ACRO_LEVEL_MAX_ANGLE, ACRO_LEVEL_MAX_ANGLE) * self.balance_pitch,
            0.0,
        );

        if self.mode == TrainerMode::Limited {
            level.x -= self.balance_roll * excess_angle(roll, self.angle_max_cd);
            level.y -= self.balance_pitch * excess_angle(pitch, self.angle_max_cd);
        }

        level
    }
}

/// Signed amount by which `angle` lies outside `±limit` (0 inside)
fn excess_angle(angle: f32, limit: f32) -> f32 {
    if angle > limit {
        angle - limit
    } else if angle < -limit {
        angle + limit
    } else {
        0.0
    }
}

/// Scale roll/pitch so their combined magnitude does not exceed `max`
///
/// Direction is preserved. Inputs already inside the circle are returned
/// unchanged.
pub fn circular_limit(roll_in: f32, pitch_in: f32, max: f32) -> (f32, f32) {
    let total_in = sqrtf(pitch_in * pitch_in + roll_in * roll_in);

    if total_in > max {
        let ratio = max / total_in;
        (roll_in * ratio, pitch_in * ratio)
    } else {
        (roll_in, pitch_in)
    }
}

/// Continuous trainer blend factor
///
/// 1.0 at centre stick, 0.0 at full deflection on any axis, further scaled by
/// `cos_pitch` so the leveling fades out approaching vertical.
pub fn level_mix(roll_in: f32, pitch_in: f32, yaw_in: f32, cos_pitch: f32) -> f32 {
    let max_in = fabsf(roll_in).max(fabsf(pitch_in)).max(fabsf(yaw_in));
    (1.0 - max_in / ROLL_PITCH_INPUT_MAX).clamp(0.0, 1.0) * cos_pitch
}

/// Transform pilot roll/pitch/yaw input into a body-frame rate request
///
/// # Arguments
///
/// * `roll_in`, `pitch_in`, `yaw_in` - Stick input, ±4500
/// * `attitude` - Attitude snapshot for this cycle
/// * `expo` - Response curve
/// * `trainer` - Trainer configuration
///
/// # Returns
///
/// Rate request in centidegrees per second
pub fn pilot_desired_rates(
    roll_in: f32,
    pitch_in: f32,
    yaw_in: f32,
    attitude: &AttitudeSnapshot,
    expo: &ExpoConfig,
    trainer: &TrainerConfig,
) -> RateRequest {
    let (roll_in, pitch_in) = circular_limit(roll_in, pitch_in, ROLL_PITCH_INPUT_MAX);

    let mut request = Vector3::new(
        expo.roll_pitch_rate(roll_in),
        expo.roll_pitch_rate(pitch_in),
        expo.yaw_rate(yaw_in),
    );

    if trainer.mode == TrainerMode::Disabled {
        return request.into();
    }

    let level_ef = trainer.earth_frame_level(attitude);
    let level_bf = euler_rate_to_ang_vel(&attitude.target_euler_rad, &level_ef);

    match trainer.mode {
        TrainerMode::Limited => request += level_bf,
        TrainerMode::Continuous => {
            let mix = level_mix(roll_in, pitch_in, yaw_in, attitude.cos_pitch);
            let level_bf = level_bf * mix;

            // Leveling may not push a rate beyond the headroom the stick leaves,
            // otherwise the rate flips when flying through inverted
            for axis in 0..3 {
                let rate_limit = fabsf(fabsf(request[axis]) - fabsf(level_bf[axis]));
                request[axis] = (request[axis] + level_bf[axis]).clamp(-rate_limit, rate_limit);
            }
        }
        TrainerMode::Disabled => {}
    }

    request.into()
}
