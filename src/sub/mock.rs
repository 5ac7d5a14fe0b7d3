//! Recording collaborators for host tests

use nalgebra::Vector3;
use pico_sub_core::control::{AttitudeControl, PositionControl, RateRequest};
use pico_sub_core::motor::{MotorError, Motors, SpoolState, ThrusterDirection, THRUSTER_COUNT};
use pico_sub_core::parameters::MotorParams;

/// Thruster layer that records every command
pub struct MockMotors {
    pub armed: bool,
    pub params: MotorParams,
    pub spool: Option<SpoolState>,
    pub throttle: Option<f32>,
    pub forward: Option<f32>,
    pub lateral: Option<f32>,
    pub outputs: [Option<u16>; THRUSTER_COUNT],
    /// Fail every raw write with this error
    pub fault: Option<MotorError>,
}

impl MockMotors {
    pub fn new() -> Self {
        Self {
            armed: false,
            params: MotorParams::default(),
            spool: None,
            throttle: None,
            forward: None,
            lateral: None,
            outputs: [None; THRUSTER_COUNT],
            fault: None,
        }
    }

    /// Forget recorded commands, keep configuration
    pub fn clear(&mut self) {
        self.spool = None;
        self.throttle = None;
        self.forward = None;
        self.lateral = None;
        self.outputs = [None; THRUSTER_COUNT];
    }

    pub fn any_output(&self) -> bool {
        self.outputs.iter().any(Option::is_some)
    }
}

impl Motors for MockMotors {
    fn armed(&self) -> bool {
        self.armed
    }

    fn set_desired_spool_state(&mut self, state: SpoolState) {
        self.spool = Some(state);
    }

    fn set_throttle(&mut self, throttle: f32) {
        self.throttle = Some(throttle);
    }

    fn set_forward(&mut self, forward: f32) {
        self.forward = Some(forward);
    }

    fn set_lateral(&mut self, lateral: f32) {
        self.lateral = Some(lateral);
    }

    fn output_test_num(&mut self, index: u8, pulse_us: u16) -> Result<(), MotorError> {
        if let Some(fault) = self.fault {
            return Err(fault);
        }
        let slot = self
            .outputs
            .get_mut(index as usize)
            .ok_or(MotorError::InvalidMotor)?;
        if !self.armed {
            return Err(MotorError::NotArmed);
        }
        *slot = Some(pulse_us);
        Ok(())
    }

    fn motor_direction(&self, index: u8) -> ThrusterDirection {
        self.params.direction(index)
    }
}

/// Throttle-out command as recorded by [`MockAttitude`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThrottleOut {
    pub throttle: f32,
    pub apply_angle_boost: bool,
    pub filter_cutoff_hz: f32,
}

/// Attitude controller that records every command
pub struct MockAttitude {
    pub target_euler_rad: Vector3<f32>,
    pub last_rates: Option<RateRequest>,
    /// (roll_cd, pitch_cd, yaw_cd, slew_yaw)
    pub last_euler: Option<(f32, f32, f32, bool)>,
    pub last_throttle_out: Option<ThrottleOut>,
    pub relax_count: u32,
}

impl MockAttitude {
    pub fn new() -> Self {
        Self {
            target_euler_rad: Vector3::zeros(),
            last_rates: None,
            last_euler: None,
            last_throttle_out: None,
            relax_count: 0,
        }
    }

    pub fn clear(&mut self) {
        self.last_rates = None;
        self.last_euler = None;
        self.last_throttle_out = None;
        self.relax_count = 0;
    }
}

impl AttitudeControl for MockAttitude {
    fn input_rate_bf_roll_pitch_yaw(&mut self, rates: RateRequest) {
        self.last_rates = Some(rates);
    }

    fn input_euler_angle_roll_pitch_yaw(
        &mut self,
        roll_cd: f32,
        pitch_cd: f32,
        yaw_cd: f32,
        slew_yaw: bool,
    ) {
        self.last_euler = Some((roll_cd, pitch_cd, yaw_cd, slew_yaw));
    }

    fn set_throttle_out(&mut self, throttle: f32, apply_angle_boost: bool, filter_cutoff_hz: f32) {
        self.last_throttle_out = Some(ThrottleOut {
            throttle,
            apply_angle_boost,
            filter_cutoff_hz,
        });
    }

    fn relax_attitude_controllers(&mut self) {
        self.relax_count += 1;
    }

    fn attitude_target_euler_rad(&self) -> Vector3<f32> {
        self.target_euler_rad
    }
}

/// Position controller that records the altitude target
pub struct MockPosition {
    pub alt_target_cm: Option<f32>,
}

impl MockPosition {
    pub fn new() -> Self {
        Self {
            alt_target_cm: None,
        }
    }
}

impl PositionControl for MockPosition {
    fn set_alt_target(&mut self, alt_cm: f32) {
        self.alt_target_cm = Some(alt_cm);
    }
}
