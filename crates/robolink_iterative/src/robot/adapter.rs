use std::sync::Arc;

use robolink_core::error::{CoreError, Domain, ErrorKind, Result};
use robolink_core::lifecycle::{
    dispatch, entry_hooks, exit_hook, Controllable, EnabledGate, Hook, Mode,
};
use tracing::debug;

use super::host::HostRobot;
use super::subsystem::{CommandSlot, Subsystem};

/// Wrapper-side robot lifecycle adapter.
///
/// Responsibilities:
/// - Hold the current mode (initially Disabled)
/// - Hold the application's top-level `Controllable` and the fixed,
///   ordered subsystem list
/// - Fan broadcast hooks out to the robot first, then each subsystem in
///   registration order
/// - Keep the enabled gate in step with the mode for gated helpers
/// - Expose the host runtime entry points (`HostRobot`)
pub struct RobotAdapter {
    name: String,
    mode: Mode,
    gate: Arc<EnabledGate>,
    robot: Box<dyn Controllable>,
    subsystems: Vec<Box<dyn Subsystem>>,
}

impl std::fmt::Debug for RobotAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RobotAdapter")
            .field("name", &self.name)
            .field("mode", &self.mode)
            .field("subsystems", &self.subsystems.len())
            .finish_non_exhaustive()
    }
}

/// Public API (library user facing).
impl RobotAdapter {
    /// Create a new adapter.
    ///
    /// Starts in `Disabled` with the gate off. The subsystem list is fixed
    /// for the adapter's lifetime; broadcast order is registration order.
    pub fn new(
        name: impl Into<String>,
        robot: Box<dyn Controllable>,
        subsystems: Vec<Box<dyn Subsystem>>,
    ) -> Result<Self> {
        Self::with_gate(name, robot, subsystems, Arc::new(EnabledGate::new()))
    }

    /// Create a new adapter around an existing gate.
    ///
    /// Use this when subsystems hold gated helpers and therefore need the
    /// gate before the adapter exists.
    pub fn with_gate(
        name: impl Into<String>,
        robot: Box<dyn Controllable>,
        subsystems: Vec<Box<dyn Subsystem>>,
        gate: Arc<EnabledGate>,
    ) -> Result<Self> {
        let name = name.into();
        if name.is_empty() {
            return Err(CoreError::error()
                .domain(Domain::Lifecycle)
                .kind(ErrorKind::InvalidArgument)
                .msg("robot name must not be empty")
                .build());
        }

        Ok(Self {
            name,
            mode: Mode::Disabled,
            gate,
            robot,
            subsystems,
        })
    }

    /// Current mode.
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Robot name (for logging/introspection).
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Shared enabled gate for wrapper-managed helpers.
    pub fn enabled_gate(&self) -> Arc<EnabledGate> {
        Arc::clone(&self.gate)
    }

    /// Number of registered subsystems.
    pub fn subsystem_count(&self) -> usize {
        self.subsystems.len()
    }

    /// Ask each subsystem for its default command and hand the result (or
    /// `None`) to the host's binding slot, in registration order.
    pub fn init_default_commands(&mut self, slot: &mut dyn CommandSlot) {
        for subsystem in &mut self.subsystems {
            let command = subsystem.default_command();
            slot.install(subsystem.name(), command);
        }
    }
}

/// Internal wrapper plumbing (called by the host entry points).
impl RobotAdapter {
    /// Fire `hook` on the robot, then (broadcast hooks only) on each
    /// subsystem in registration order.
    ///
    /// No isolation: a panicking hook aborts the rest of the broadcast for
    /// this cycle and propagates to the host caller.
    fn fire(&mut self, hook: Hook) {
        dispatch(self.robot.as_mut(), hook);

        if hook.is_broadcast() {
            for subsystem in &mut self.subsystems {
                dispatch(&mut **subsystem, hook);
            }
        }
    }

    /// Apply a mode entry reported by the host: end hook for the previous
    /// mode first, then the mode assignment and gate update, then the entry
    /// hooks for the new mode.
    ///
    /// Re-entering the current mode fires no end hook but does re-fire the
    /// entry hooks. Hosts are not expected to do this, and existing robots
    /// observe the double-fire when one does, so no guard is added.
    fn enter_mode(&mut self, next: Mode) {
        let previous = self.mode;

        if let Some(end) = exit_hook(previous, next) {
            self.fire(end);
        }

        self.mode = next;
        if next.is_enabled() {
            self.gate.enable();
        } else {
            self.gate.disable();
        }
        debug!(
            robot = %self.name,
            from = previous.label(),
            to = next.label(),
            "mode entry"
        );

        for hook in entry_hooks(next) {
            self.fire(*hook);
        }
    }
}

impl HostRobot for RobotAdapter {
    fn robot_init(&mut self) {
        self.fire(Hook::Create);
    }

    fn robot_periodic(&mut self) {
        self.fire(Hook::Tick);
    }

    fn disabled_init(&mut self) {
        self.enter_mode(Mode::Disabled);
    }

    fn disabled_periodic(&mut self) {
        self.fire(Hook::TickDisabled);
    }

    fn autonomous_init(&mut self) {
        self.enter_mode(Mode::Autonomous);
    }

    fn autonomous_periodic(&mut self) {
        self.fire(Hook::TickAuto);
    }

    fn teleop_init(&mut self) {
        self.enter_mode(Mode::Teleoperated);
    }

    fn teleop_periodic(&mut self) {
        self.fire(Hook::TickTeleop);
    }
}
