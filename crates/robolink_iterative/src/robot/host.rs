/// The inbound boundary with the host runtime.
///
/// The host owns timing and match state. It invokes these entry points on
/// its own cadence, serialized on its own calling thread:
/// - `robot_init` once at startup
/// - `robot_periodic` every cycle, regardless of mode
/// - the `*_init` entry point when the match enters that mode
/// - the matching `*_periodic` entry point every cycle while in that mode
///
/// Implementations perform no timing, threading, or blocking of their own;
/// control flow is entirely inbound.
pub trait HostRobot {
    fn robot_init(&mut self);

    fn robot_periodic(&mut self);

    fn disabled_init(&mut self);

    fn disabled_periodic(&mut self);

    fn autonomous_init(&mut self);

    fn autonomous_periodic(&mut self);

    fn teleop_init(&mut self);

    fn teleop_periodic(&mut self);
}
