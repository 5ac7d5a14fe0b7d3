//! Submarine control modes
//!
//! Each mode implements the core `Mode` trait over the [`Sub`](super::Sub)
//! vehicle context, with enter/update/exit lifecycle hooks.
//!
//! ## Available Modes
//!
//! - **Acro**: Maintenance mode (docking maneuver or thruster override)

pub mod acro;

pub use acro::AcroMode;
pub use pico_sub_core::mode::Mode;
