//! Communication Protocols
//!
//! Ground control station integration. Only the outgoing status-text queue
//! lives here; framing and transports belong to the platform layer.

pub mod mavlink;
