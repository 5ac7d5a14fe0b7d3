//! AHRS (Attitude and Heading Reference System) types
//!
//! Attitude estimation itself is an external collaborator. This module only
//! defines the state it hands to the control layer each cycle.

mod state;

pub use state::AhrsState;
