//! Acro Mode Parameter Definitions
//!
//! # Parameters
//!
//! - `ACRO_RP_P` - Roll/pitch stick-to-rate gain
//! - `ACRO_YAW_P` - Yaw stick-to-rate gain
//! - `ACRO_EXPO` - Roll/pitch expo (0 = linear, 1 = cubic)
//! - `ACRO_TRAINER` - Trainer mode (0 = disabled, 1 = continuous, 2 = limited)
//! - `ACRO_BAL_ROLL` / `ACRO_BAL_PITCH` - Trainer leveling gains
//! - `ANGLE_MAX` - Lean angle limit in centidegrees
//! - `PILOT_THR_FILT` - Throttle filter cutoff in Hz (0 = off)
//! - `ACRO_DOCK` - Maintenance action (0 = thruster override, 1 = docking)
//! - `ACRO_DOCK_GAIN` - Vertical thruster override gain
//!
//! Names and defaults follow ArduSub where an equivalent exists.

use super::error::ParameterError;
use super::storage::{ParamFlags, ParamValue, ParameterStore};
use crate::control::{ExpoConfig, TrainerConfig, TrainerMode};
use crate::mode::MaintenanceAction;

const DEFAULT_RP_P: f32 = 4.5;
const DEFAULT_YAW_P: f32 = 4.5;
const DEFAULT_EXPO: f32 = 0.3;
const DEFAULT_TRAINER: i32 = 2;
const DEFAULT_BALANCE: f32 = 1.0;
const DEFAULT_ANGLE_MAX: i32 = 8000;
const DEFAULT_THR_FILT: f32 = 0.0;
const DEFAULT_DOCK: i32 = 1;
const DEFAULT_DOCK_GAIN: f32 = 0.0;

const MIN_P: f32 = 1.0;
const MAX_P: f32 = 10.0;
const MAX_BALANCE: f32 = 3.0;
const MIN_ANGLE_MAX: i32 = 1000;
const MAX_ANGLE_MAX: i32 = 8000;
const MAX_THR_FILT: f32 = 10.0;

/// Acro mode parameters loaded from parameter store
#[derive(Debug, Clone, PartialEq)]
pub struct AcroParams {
    /// Roll/pitch stick-to-rate gain
    pub rp_p: f32,
    /// Yaw stick-to-rate gain
    pub yaw_p: f32,
    /// Expo factor, always within [0, 1]
    pub expo: f32,
    /// Trainer mode
    pub trainer: TrainerMode,
    /// Roll leveling gain
    pub balance_roll: f32,
    /// Pitch leveling gain
    pub balance_pitch: f32,
    /// Lean angle limit (centidegrees)
    pub angle_max_cd: i32,
    /// Throttle filter cutoff (Hz)
    pub throttle_filt_hz: f32,
    /// Maintenance action selected on mode entry
    pub maintenance: MaintenanceAction,
    /// Vertical thruster override gain, within [0, 1]
    pub dock_gain: f32,
}

impl Default for AcroParams {
    fn default() -> Self {
        Self {
            rp_p: DEFAULT_RP_P,
            yaw_p: DEFAULT_YAW_P,
            expo: DEFAULT_EXPO,
            trainer: TrainerMode::from_param(DEFAULT_TRAINER),
            balance_roll: DEFAULT_BALANCE,
            balance_pitch: DEFAULT_BALANCE,
            angle_max_cd: DEFAULT_ANGLE_MAX,
            throttle_filt_hz: DEFAULT_THR_FILT,
            maintenance: MaintenanceAction::from_param(DEFAULT_DOCK),
            dock_gain: DEFAULT_DOCK_GAIN,
        }
    }
}

impl AcroParams {
    /// Register acro parameters with default values
    pub fn register_defaults(store: &mut ParameterStore) -> Result<(), ParameterError> {
        let flags = ParamFlags::empty();

        store.register("ACRO_RP_P", ParamValue::Float(DEFAULT_RP_P), flags)?;
        store.register("ACRO_YAW_P", ParamValue::Float(DEFAULT_YAW_P), flags)?;
        store.register("ACRO_EXPO", ParamValue::Float(DEFAULT_EXPO), flags)?;
        store.register("ACRO_TRAINER", ParamValue::Int(DEFAULT_TRAINER), flags)?;
        store.register("ACRO_BAL_ROLL", ParamValue::Float(DEFAULT_BALANCE), flags)?;
        store.register("ACRO_BAL_PITCH", ParamValue::Float(DEFAULT_BALANCE), flags)?;
        store.register("ANGLE_MAX", ParamValue::Int(DEFAULT_ANGLE_MAX), flags)?;
        store.register("PILOT_THR_FILT", ParamValue::Float(DEFAULT_THR_FILT), flags)?;
        store.register("ACRO_DOCK", ParamValue::Int(DEFAULT_DOCK), flags)?;
        store.register("ACRO_DOCK_GAIN", ParamValue::Float(DEFAULT_DOCK_GAIN), flags)?;

        Ok(())
    }

    /// Load acro parameters from parameter store
    ///
    /// Every value is clamped into its valid range; missing parameters fall
    /// back to defaults. The result always passes [`AcroParams::is_valid`].
    pub fn from_store(store: &ParameterStore) -> Self {
        let rp_p = store
            .get_f32("ACRO_RP_P")
            .map_or(DEFAULT_RP_P, |v| v.clamp(MIN_P, MAX_P));
        let yaw_p = store
            .get_f32("ACRO_YAW_P")
            .map_or(DEFAULT_YAW_P, |v| v.clamp(MIN_P, MAX_P));
        let expo = store
            .get_f32("ACRO_EXPO")
            .map_or(DEFAULT_EXPO, |v| v.clamp(0.0, 1.0));
        let trainer = TrainerMode::from_param(store.get_i32("ACRO_TRAINER").unwrap_or(DEFAULT_TRAINER));
        let balance_roll = store
            .get_f32("ACRO_BAL_ROLL")
            .map_or(DEFAULT_BALANCE, |v| v.clamp(0.0, MAX_BALANCE));
        let balance_pitch = store
            .get_f32("ACRO_BAL_PITCH")
            .map_or(DEFAULT_BALANCE, |v| v.clamp(0.0, MAX_BALANCE));
        let angle_max_cd = store
            .get_i32("ANGLE_MAX")
            .map_or(DEFAULT_ANGLE_MAX, |v| v.clamp(MIN_ANGLE_MAX, MAX_ANGLE_MAX));
        let throttle_filt_hz = store
            .get_f32("PILOT_THR_FILT")
            .map_or(DEFAULT_THR_FILT, |v| v.clamp(0.0, MAX_THR_FILT));
        let maintenance =
            MaintenanceAction::from_param(store.get_i32("ACRO_DOCK").unwrap_or(DEFAULT_DOCK));
        let dock_gain = store
            .get_f32("ACRO_DOCK_GAIN")
            .map_or(DEFAULT_DOCK_GAIN, |v| v.clamp(0.0, 1.0));

        Self {
            rp_p,
            yaw_p,
            expo,
            trainer,
            balance_roll,
            balance_pitch,
            angle_max_cd,
            throttle_filt_hz,
            maintenance,
            dock_gain,
        }
    }

    /// Validate acro parameters
    pub fn is_valid(&self) -> bool {
        (MIN_P..=MAX_P).contains(&self.rp_p)
            && (MIN_P..=MAX_P).contains(&self.yaw_p)
            && (0.0..=1.0).contains(&self.expo)
            && (0.0..=MAX_BALANCE).contains(&self.balance_roll)
            && (0.0..=MAX_BALANCE).contains(&self.balance_pitch)
            && (MIN_ANGLE_MAX..=MAX_ANGLE_MAX).contains(&self.angle_max_cd)
            && (0.0..=MAX_THR_FILT).contains(&self.throttle_filt_hz)
            && (0.0..=1.0).contains(&self.dock_gain)
    }

    /// Stick response curve for the rate shaper
    pub fn expo_config(&self) -> ExpoConfig {
        ExpoConfig::new(self.rp_p, self.yaw_p, self.expo)
    }

    /// Trainer configuration for the rate shaper
    pub fn trainer_config(&self) -> TrainerConfig {
        TrainerConfig {
            mode: self.trainer,
            balance_roll: self.balance_roll,
            balance_pitch: self.balance_pitch,
            angle_max_cd: self.angle_max_cd as f32,
        }
    }
}
