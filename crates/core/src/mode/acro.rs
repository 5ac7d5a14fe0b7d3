//! Acro mode session and state selection
//!
//! Acro mode on this vehicle doubles as a maintenance mode. While armed it
//! performs one of two actions, chosen by the operator:
//!
//! - **Dock**: hold zero roll, nose pitched up to 89 deg and the heading
//!   captured on entry, while the pilot drives throttle/forward/lateral
//!   directly.
//! - **Override**: bypass the attitude controller and mixer, park the
//!   horizontal thrusters at neutral and push the vertical thrusters by a
//!   fixed fraction of their span.
//!
//! Disarmed always wins and is evaluated first.

/// Pitch target while docking (centidegrees)
pub const DOCK_PITCH_CD: f32 = 8900.0;

/// Advisory sent to the ground station on mode entry
pub const ACRO_ADVISORY: &str = "#Acrobatics mode for maintenance work";

/// Maintenance action performed while armed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MaintenanceAction {
    /// Raw vertical-thruster override
    Override,
    /// Pitch-up docking maneuver
    #[default]
    Dock,
}

impl MaintenanceAction {
    /// Decode the `ACRO_DOCK` parameter: 0 selects the override, anything
    /// else docking
    pub fn from_param(value: i32) -> Self {
        if value == 0 {
            MaintenanceAction::Override
        } else {
            MaintenanceAction::Dock
        }
    }

    pub fn as_param(self) -> i32 {
        match self {
            MaintenanceAction::Override => 0,
            MaintenanceAction::Dock => 1,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            MaintenanceAction::Override => "override",
            MaintenanceAction::Dock => "dock",
        }
    }
}

/// Per-cycle acro state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AcroState {
    /// Outputs idle, controllers relaxed
    Disarmed,
    /// Attitude hold at the docking pitch, thrust axes passed through
    ArmedDocking,
    /// Direct thruster override
    ArmedOverride,
}

impl AcroState {
    /// Select this cycle's state
    ///
    /// The armed check comes first and is exclusive; the maintenance action
    /// only matters while armed.
    pub fn select(armed: bool, maintenance: MaintenanceAction) -> Self {
        if !armed {
            return AcroState::Disarmed;
        }

        match maintenance {
            MaintenanceAction::Dock => AcroState::ArmedDocking,
            MaintenanceAction::Override => AcroState::ArmedOverride,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            AcroState::Disarmed => "disarmed",
            AcroState::ArmedDocking => "docking",
            AcroState::ArmedOverride => "override",
        }
    }
}

/// State owned by one acro session, from mode entry to mode exit
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AcroSession {
    reference_yaw_cd: f32,
    maintenance: MaintenanceAction,
    gain: f32,
}

impl AcroSession {
    /// Start a session
    ///
    /// # Arguments
    ///
    /// * `reference_yaw_cd` - Heading captured on entry (centidegrees)
    /// * `maintenance` - Initial maintenance action
    /// * `gain` - Vertical override gain, clamped to [0, 1]
    pub fn new(reference_yaw_cd: f32, maintenance: MaintenanceAction, gain: f32) -> Self {
        Self {
            reference_yaw_cd,
            maintenance,
            gain: gain.clamp(0.0, 1.0),
        }
    }

    /// Heading held while docking (centidegrees)
    pub fn reference_yaw_cd(&self) -> f32 {
        self.reference_yaw_cd
    }

    pub fn maintenance(&self) -> MaintenanceAction {
        self.maintenance
    }

    /// Switch the maintenance action; takes effect on the next cycle
    pub fn set_maintenance(&mut self, maintenance: MaintenanceAction) {
        self.maintenance = maintenance;
    }

    /// Vertical override gain
    pub fn gain(&self) -> f32 {
        self.gain
    }

    /// State for a cycle with the given armed status
    pub fn state(&self, armed: bool) -> AcroState {
        AcroState::select(armed, self.maintenance)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_disarmed_wins() {
        assert_eq!(
            AcroState::select(false, MaintenanceAction::Dock),
            AcroState::Disarmed
        );
        assert_eq!(
            AcroState::select(false, MaintenanceAction::Override),
            AcroState::Disarmed
        );
    }

    #[test]
    fn test_maintenance_selects_armed_state() {
        assert_eq!(
            AcroState::select(true, MaintenanceAction::Dock),
            AcroState::ArmedDocking
        );
        assert_eq!(
            AcroState::select(true, MaintenanceAction::Override),
            AcroState::ArmedOverride
        );
    }

    #[test]
    fn test_maintenance_from_param() {
        assert_eq!(MaintenanceAction::from_param(0), MaintenanceAction::Override);
        assert_eq!(MaintenanceAction::from_param(1), MaintenanceAction::Dock);
        assert_eq!(MaintenanceAction::from_param(5), MaintenanceAction::Dock);
        assert_eq!(MaintenanceAction::Override.as_param(), 0);
    }

    #[test]
    fn test_session_gain_clamped() {
        assert_eq!(AcroSession::new(0.0, MaintenanceAction::Override, 1.5).gain(), 1.0);
        assert_eq!(AcroSession::new(0.0, MaintenanceAction::Override, -0.5).gain(), 0.0);
        assert_eq!(AcroSession::new(0.0, MaintenanceAction::Override, 0.4).gain(), 0.4);
    }

    #[test]
    fn test_session_switch_maintenance() {
        let mut session = AcroSession::new(9000.0, MaintenanceAction::Dock, 0.2);
        assert_eq!(session.state(true), AcroState::ArmedDocking);

        session.set_maintenance(MaintenanceAction::Override);
        assert_eq!(session.state(true), AcroState::ArmedOverride);
        assert_eq!(session.state(false), AcroState::Disarmed);
        assert_eq!(session.reference_yaw_cd(), 9000.0);
    }
}
