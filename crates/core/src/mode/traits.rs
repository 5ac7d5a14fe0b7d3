//! Mode trait definition
//!
//! Platform-agnostic interface for flight mode state machines.

/// Flight mode trait
///
/// `V` is the vehicle context the mode drives. It is passed into every call
/// rather than held by the mode, so a mode owns only its own session state.
///
/// # Lifecycle
///
/// 1. `enter()` - Called once when entering the mode
/// 2. `update(dt)` - Called every control cycle (100 Hz or faster)
/// 3. `exit()` - Called once when exiting the mode
pub trait Mode<V: ?Sized> {
    /// Initialize mode (called once on mode entry)
    ///
    /// Returns `Err` if mode cannot be entered.
    fn enter(&mut self, vehicle: &mut V) -> Result<(), &'static str>;

    /// Run one control cycle
    ///
    /// # Arguments
    ///
    /// * `vehicle` - Vehicle context
    /// * `dt` - Delta time since last update (seconds)
    fn update(&mut self, vehicle: &mut V, dt: f32) -> Result<(), &'static str>;

    /// Cleanup mode (called once on mode exit)
    fn exit(&mut self, vehicle: &mut V) -> Result<(), &'static str>;

    /// Get mode name for logging and telemetry
    fn name(&self) -> &'static str;
}
