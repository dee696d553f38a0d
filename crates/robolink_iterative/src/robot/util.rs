use robolink_core::lifecycle::EnabledGate;

/// Execute a closure only when the robot is enabled.
///
/// Intended for subsystem periodic helpers:
/// - return `true` if executed
/// - return `false` if suppressed
pub fn run_if_enabled<F>(gate: &EnabledGate, f: F) -> bool
where
    F: FnOnce(),
{
    if gate.is_enabled() {
        f();
        true
    } else {
        false
    }
}
