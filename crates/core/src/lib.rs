//! pico_sub_core - Pure no_std control logic for the pico_sub autopilot
//!
//! This crate contains platform-agnostic algorithms and types
//! that can be tested on host without any feature flags or embassy dependencies.
//!
//! # Design Principles
//!
//! - **Zero cfg**: No `#[cfg(feature = ...)]` directives allowed
//! - **Pure no_std**: No std library dependencies
//! - **Trait abstractions**: Controllers and thruster outputs injected via traits
//!
//! # Modules
//!
//! - [`ahrs`]: Attitude estimate handed over by the estimator
//! - [`attitude`]: Per-cycle attitude snapshot and angle utilities
//! - [`control`]: Acro rate shaping and controller traits
//! - [`mode`]: Mode trait and acro session state
//! - [`motor`]: Thruster output abstraction
//! - [`parameters`]: Parameter store and typed parameter groups
//! - [`rc`]: RC override channels and pilot input mapping
//! - [`servo`]: PWM pulse conversion

#![no_std]

pub mod ahrs;
pub mod attitude;
pub mod control;
pub mod mode;
pub mod motor;
pub mod parameters;
pub mod rc;
pub mod servo;
