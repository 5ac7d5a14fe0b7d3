//! Mode State Machine Types
//!
//! Pure types for flight mode state machines. Mode implementations that
//! drive hardware collaborators live in the firmware crate.
//!
//! # Contents
//!
//! - `Mode` trait definition (platform-agnostic lifecycle)
//! - Acro mode session and per-cycle state selection

mod acro;
mod traits;

pub use acro::{AcroSession, AcroState, MaintenanceAction, ACRO_ADVISORY, DOCK_PITCH_CD};
pub use traits::Mode;
