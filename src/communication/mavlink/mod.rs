//! MAVLink 2.0 Protocol Communication
//!
//! GCS-facing pieces of the MAVLink protocol used by the control layer.
//!
//! # Usage
//!
//! ```ignore
//! use pico_sub::communication::mavlink::status_notifier::send_warning;
//!
//! send_warning("Thruster override active");
//! ```

pub mod status_notifier; // STATUSTEXT notification system
