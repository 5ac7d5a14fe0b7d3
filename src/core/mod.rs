//! Core autopilot infrastructure
//!
//! Logging shared by every module of the firmware layer.

pub mod logging;
