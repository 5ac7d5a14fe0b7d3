//! Rate shaping and attitude controller interface
//!
//! - [`acro_rates`]: Pilot input to body-frame rate request
//! - [`AttitudeControl`] / [`PositionControl`]: Controllers the modes drive.
//!   The controllers themselves (gains, stabilization loops) live outside
//!   this crate.

pub mod acro_rates;
mod traits;

pub use acro_rates::{
    circular_limit, level_mix, pilot_desired_rates, ExpoConfig, RateRequest, TrainerConfig,
    TrainerMode, ACRO_LEVEL_MAX_ANGLE, ROLL_PITCH_INPUT_MAX,
};
pub use traits::{AttitudeControl, PositionControl};
