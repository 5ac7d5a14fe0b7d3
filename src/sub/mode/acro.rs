//! Acro Mode
//!
//! Maintenance mode for the submarine. On entry the pilot's controls are
//! neutralized and the current heading is captured; each cycle then runs one
//! of three states.
//!
//! ## Behavior
//!
//! - **Disarmed**: spool to ground idle, zero throttle, relax the attitude
//!   controller. Nothing else is commanded.
//! - **Docking** (armed, `ACRO_DOCK` = 1): hold roll 0, pitch 89 deg and the
//!   captured heading; throttle, forward and lateral sticks pass straight to
//!   the mixer.
//! - **Override** (armed, `ACRO_DOCK` = 0): bypass the attitude controller.
//!   Horizontal thrusters sit at neutral, vertical thrusters are pushed by
//!   `ACRO_DOCK_GAIN` of their span, corrected for installation direction.
//!
//! ## Safety
//!
//! - The armed check runs first, every cycle, before the session is consulted
//! - Raw thruster writes are refused by the output layer while disarmed
//! - The advisory on entry marks the mode as a maintenance mode on the GCS
//!
//! ## References
//!
//! - ArduPilot Sub Acro Mode: https://github.com/ArduPilot/ardupilot/blob/master/ArduSub/mode_acro.cpp

use pico_sub_core::control::{AttitudeControl, PositionControl};
use pico_sub_core::mode::{
    AcroSession, AcroState, MaintenanceAction, Mode, ACRO_ADVISORY, DOCK_PITCH_CD,
};
use pico_sub_core::motor::{
    vertical_override_pulse, Motors, SpoolState, HORIZONTAL_THRUSTERS, VERTICAL_THRUSTERS,
};
use pico_sub_core::servo::PwmRange;

use crate::communication::mavlink::status_notifier::send_info;
use crate::sub::{CycleInputs, Sub};

/// Acro Mode
pub struct AcroMode {
    /// Present between `enter()` and `exit()`
    session: Option<AcroSession>,
    /// State of the previous cycle, for transition logging
    last_state: Option<AcroState>,
}

impl Default for AcroMode {
    fn default() -> Self {
        Self::new()
    }
}

impl AcroMode {
    /// Create an inactive Acro mode
    pub const fn new() -> Self {
        Self {
            session: None,
            last_state: None,
        }
    }

    /// Active session, `None` outside `enter()`..`exit()`
    pub fn session(&self) -> Option<&AcroSession> {
        self.session.as_ref()
    }

    /// State run by the most recent cycle
    pub fn state(&self) -> Option<AcroState> {
        self.last_state
    }

    /// Switch between docking and thruster override
    ///
    /// Takes effect on the next cycle and lasts until the mode is left;
    /// re-entering starts again from `ACRO_DOCK`.
    pub fn set_maintenance(&mut self, maintenance: MaintenanceAction) -> Result<(), &'static str> {
        let session = self.session.as_mut().ok_or("Acro mode not active")?;
        session.set_maintenance(maintenance);
        crate::log_info!("Acro maintenance action: {}", maintenance.name());
        Ok(())
    }

    fn transition(&mut self, state: AcroState) {
        if self.last_state != Some(state) {
            crate::log_info!("Acro state: {}", state.name());
            self.last_state = Some(state);
        }
    }
}

impl<M, A, P> Mode<Sub<M, A, P>> for AcroMode
where
    M: Motors,
    A: AttitudeControl,
    P: PositionControl,
{
    fn enter(&mut self, sub: &mut Sub<M, A, P>) -> Result<(), &'static str> {
        sub.pos_control.set_alt_target(0.0);
        sub.rc.set_neutral_controls();
        send_info(ACRO_ADVISORY);

        let session = AcroSession::new(sub.ahrs.yaw_cd(), sub.acro.maintenance, sub.acro.dock_gain);
        crate::log_info!(
            "Entering Acro mode (reference yaw {} cd, {}, gain {})",
            session.reference_yaw_cd(),
            session.maintenance().name(),
            session.gain()
        );

        self.session = Some(session);
        self.last_state = None;
        Ok(())
    }

    fn update(&mut self, sub: &mut Sub<M, A, P>, _dt: f32) -> Result<(), &'static str> {
        let inputs = sub.cycle_inputs();

        // Disarmed needs no session, so it is decided before the lookup
        let session = if inputs.armed {
            Some(self.session.ok_or("Acro mode not entered")?)
        } else {
            None
        };

        let state = session.map_or(AcroState::Disarmed, |session| session.state(inputs.armed));
        self.transition(state);

        match (state, session) {
            (AcroState::ArmedDocking, Some(session)) => run_docking(sub, &session, &inputs),
            (AcroState::ArmedOverride, Some(session)) => run_override(sub, &session)?,
            _ => run_disarmed(sub),
        }

        Ok(())
    }

    fn exit(&mut self, _sub: &mut Sub<M, A, P>) -> Result<(), &'static str> {
        crate::log_info!("Exiting Acro mode");
        self.session = None;
        self.last_state = None;
        Ok(())
    }

    fn name(&self) -> &'static str {
        "Acro"
    }
}

fn run_disarmed<M, A, P>(sub: &mut Sub<M, A, P>)
where
    M: Motors,
    A: AttitudeControl,
    P: PositionControl,
{
    sub.motors.set_desired_spool_state(SpoolState::GroundIdle);
    sub.attitude_control.set_throttle_out(0.0, true, sub.acro.throttle_filt_hz);
    sub.attitude_control.relax_attitude_controllers();
}

fn run_docking<M, A, P>(sub: &mut Sub<M, A, P>, session: &AcroSession, inputs: &CycleInputs)
where
    M: Motors,
    A: AttitudeControl,
    P: PositionControl,
{
    sub.motors.set_desired_spool_state(SpoolState::ThrottleUnlimited);
    sub.attitude_control.input_euler_angle_roll_pitch_yaw(
        0.0,
        DOCK_PITCH_CD,
        session.reference_yaw_cd(),
        true,
    );

    sub.motors.set_throttle(inputs.pilot.throttle);
    sub.motors.set_forward(inputs.pilot.forward);
    sub.motors.set_lateral(inputs.pilot.lateral);
}

fn run_override<M, A, P>(sub: &mut Sub<M, A, P>, session: &AcroSession) -> Result<(), &'static str>
where
    M: Motors,
    A: AttitudeControl,
    P: PositionControl,
{
    sub.motors.set_desired_spool_state(SpoolState::ThrottleUnlimited);

    for index in HORIZONTAL_THRUSTERS {
        write_thruster(&mut sub.motors, index, PwmRange::THRUSTER.neutral)?;
    }

    for index in VERTICAL_THRUSTERS {
        let pulse = vertical_override_pulse(sub.motors.motor_direction(index), session.gain());
        write_thruster(&mut sub.motors, index, pulse)?;
    }

    Ok(())
}

fn write_thruster<M: Motors>(motors: &mut M, index: u8, pulse_us: u16) -> Result<(), &'static str> {
    motors.output_test_num(index, pulse_us).map_err(|e| {
        crate::log_error!("Thruster {} override failed: {}", index + 1, e.as_str());
        e.as_str()
    })
}
