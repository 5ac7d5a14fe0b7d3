#![cfg_attr(not(test), no_std)]

//! pico_sub - Embedded autopilot layer for a thrust-vectored submersible
//!
//! This library provides the vehicle context, flight modes and GCS status
//! reporting on top of the pure control logic in `pico_sub_core`.

// Core systems (logging)
pub mod core;

// Communication protocols (STATUSTEXT queue)
pub mod communication;

// Vehicle logic and flight modes
pub mod sub;
