//! Submarine vehicle implementation
//!
//! Vehicle-specific control logic, following ArduPilot's per-vehicle layout
//! (ArduSub/, Rover/). The [`Sub`] context bundles the collaborators a mode
//! drives; modes receive it by mutable reference on every lifecycle call.
//!
//! ## Modules
//!
//! - `mode`: Control mode implementations (Acro)
//!
//! ## References
//!
//! - ArduPilot Sub: https://github.com/ArduPilot/ardupilot/tree/master/ArduSub

pub mod mode;

pub use mode::AcroMode;

use pico_sub_core::ahrs::AhrsState;
use pico_sub_core::attitude::AttitudeSnapshot;
use pico_sub_core::control::{pilot_desired_rates, AttitudeControl, PositionControl, RateRequest};
use pico_sub_core::motor::Motors;
use pico_sub_core::parameters::AcroParams;
use pico_sub_core::rc::{PilotInput, RcInput};

/// Inputs read once at the start of a control cycle
///
/// Everything a mode decides on during one cycle comes from this snapshot,
/// so a cycle sees a consistent view even if the sources change mid-cycle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CycleInputs {
    pub armed: bool,
    pub pilot: PilotInput,
    pub attitude: AttitudeSnapshot,
}

/// Vehicle context
///
/// # Type Parameters
///
/// * `M` - Thruster mixer and output layer
/// * `A` - Attitude controller
/// * `P` - Vertical position controller
pub struct Sub<M, A, P> {
    pub motors: M,
    pub attitude_control: A,
    pub pos_control: P,
    /// RC override channels, updated by the telemetry layer
    pub rc: RcInput,
    /// Latest attitude estimate
    pub ahrs: AhrsState,
    /// Acro parameters loaded from the parameter store
    pub acro: AcroParams,
}

impl<M, A, P> Sub<M, A, P>
where
    M: Motors,
    A: AttitudeControl,
    P: PositionControl,
{
    /// Create a vehicle context with neutral RC input and a level attitude
    pub fn new(motors: M, attitude_control: A, pos_control: P, acro: AcroParams) -> Self {
        Self {
            motors,
            attitude_control,
            pos_control,
            rc: RcInput::new(),
            ahrs: AhrsState::default(),
            acro,
        }
    }

    /// Snapshot this cycle's inputs
    pub fn cycle_inputs(&self) -> CycleInputs {
        CycleInputs {
            armed: self.motors.armed(),
            pilot: self.rc.pilot_input(),
            attitude: AttitudeSnapshot::from_ahrs(
                &self.ahrs,
                self.attitude_control.attitude_target_euler_rad(),
            ),
        }
    }

    /// Body-frame rate request for the pilot's sticks
    pub fn pilot_desired_rates(&self, inputs: &CycleInputs) -> RateRequest {
        pilot_desired_rates(
            inputs.pilot.roll,
            inputs.pilot.pitch,
            inputs.pilot.yaw,
            &inputs.attitude,
            &self.acro.expo_config(),
            &self.acro.trainer_config(),
        )
    }

    /// Shape the pilot's sticks and hand the result to the rate controller
    ///
    /// Used by rate-controlled flight paths. Returns the request sent.
    pub fn fly_pilot_rates(&mut self, inputs: &CycleInputs) -> RateRequest {
        let rates = self.pilot_desired_rates(inputs);
        self.attitude_control.input_rate_bf_roll_pitch_yaw(rates);
        rates
    }
}

#[cfg(test)]
pub(crate) mod mock;
