//! Thruster Parameter Definitions
//!
//! - `MOT_1_DIRECTION` .. `MOT_8_DIRECTION` - Installation direction of each
//!   thruster (1 = normal, -1 = reversed)

use super::error::ParameterError;
use super::storage::{ParamFlags, ParamValue, ParameterStore};
use crate::motor::{ThrusterDirection, THRUSTER_COUNT};

const DIRECTION_PARAMS: [&str; THRUSTER_COUNT] = [
    "MOT_1_DIRECTION",
    "MOT_2_DIRECTION",
    "MOT_3_DIRECTION",
    "MOT_4_DIRECTION",
    "MOT_5_DIRECTION",
    "MOT_6_DIRECTION",
    "MOT_7_DIRECTION",
    "MOT_8_DIRECTION",
];

/// Thruster parameters loaded from parameter store
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MotorParams {
    directions: [ThrusterDirection; THRUSTER_COUNT],
}

impl MotorParams {
    /// Parameters with explicit directions
    pub fn new(directions: [ThrusterDirection; THRUSTER_COUNT]) -> Self {
        Self { directions }
    }

    /// Register thruster parameters with default values (all normal)
    pub fn register_defaults(store: &mut ParameterStore) -> Result<(), ParameterError> {
        for name in DIRECTION_PARAMS {
            store.register(name, ParamValue::Int(1), ParamFlags::empty())?;
        }
        Ok(())
    }

    /// Load thruster parameters from parameter store
    pub fn from_store(store: &ParameterStore) -> Self {
        let mut directions = [ThrusterDirection::Normal; THRUSTER_COUNT];
        for (direction, name) in directions.iter_mut().zip(DIRECTION_PARAMS) {
            *direction = ThrusterDirection::from_param(store.get_i32(name).unwrap_or(1));
        }
        Self { directions }
    }

    /// Installation direction of a thruster; out-of-range indices read as normal
    pub fn direction(&self, index: u8) -> ThrusterDirection {
        self.directions
            .get(index as usize)
            .copied()
            .unwrap_or_default()
    }
}
