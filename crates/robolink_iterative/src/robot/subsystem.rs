use robolink_core::lifecycle::Controllable;

/// An opaque behavior object a subsystem may hand to the host runtime, to
/// be run when nothing else claims the subsystem.
///
/// This layer never executes commands; it only moves them into the host's
/// binding slot. The surface is intentionally tiny so hosts and tests can
/// run them without a scheduler.
pub trait Command {
    /// Command name (for logging and slot bookkeeping).
    fn name(&self) -> &str;

    /// One unit of work, invoked by the host at its own cadence.
    fn execute(&mut self);
}

/// Host-side binding slot for default commands.
///
/// This is intentionally tiny so we can:
/// - unit test installation without a real runtime
/// - adapt a concrete runtime's command registry in the host layer
pub trait CommandSlot {
    /// Receive `subsystem`'s default command, or `None` when it has none.
    /// Called once per subsystem, in registration order.
    fn install(&mut self, subsystem: &str, command: Option<Box<dyn Command>>);
}

/// A robot component that receives broadcast lifecycle hooks and may carry
/// a default command.
pub trait Subsystem: Controllable {
    /// Subsystem name (for logging and slot keying).
    fn name(&self) -> &str;

    /// Hand over the default command, if any.
    ///
    /// Called during the host's default-command installation request.
    /// Ownership moves to the host; the subsystem does not retain it.
    fn default_command(&mut self) -> Option<Box<dyn Command>> {
        None
    }
}
