//! Parameter management
//!
//! The `ParameterStore` holds named values; per-subsystem parameter structs
//! register their defaults and load a range-checked snapshot from it. Values
//! are validated once at load time so the control code can rely on them.

pub mod acro;
pub mod error;
pub mod motors;
pub mod storage;

pub use acro::AcroParams;
pub use error::ParameterError;
pub use motors::MotorParams;
pub use storage::{ParamFlags, ParamMetadata, ParamValue, ParameterStore};
pub use storage::{MAX_PARAMS, PARAM_NAME_LEN};
