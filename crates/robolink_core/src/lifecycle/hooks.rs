/// The capability interface for robot control.
///
/// Any type participates in lifecycle dispatch by implementing a subset of
/// these hooks; unimplemented hooks are no-ops. Hooks are pure side effects:
/// no return values, no error channel. A hook that panics propagates to the
/// host caller.
pub trait Controllable {
    /// Once, when the host runtime starts up.
    fn on_create(&mut self) {}

    /// Entering an enabled mode. Fired on autonomous entry only; teleop
    /// entry goes straight to `on_teleop_start` (see `entry_hooks`).
    fn on_enabled(&mut self) {}

    /// Entering Disabled.
    fn on_disabled(&mut self) {}

    fn on_auto_start(&mut self) {}

    fn on_teleop_start(&mut self) {}

    /// Leaving Autonomous, before the mode field updates.
    fn on_auto_end(&mut self) {}

    /// Leaving Teleoperated, before the mode field updates.
    fn on_teleop_end(&mut self) {}

    /// Every host cycle, regardless of mode.
    fn on_tick(&mut self) {}

    fn on_tick_auto(&mut self) {}

    fn on_tick_teleop(&mut self) {}

    fn on_tick_disabled(&mut self) {}
}

/// Hook names as data, so dispatch order can be table-driven and recorded.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Hook {
    Create,
    Enabled,
    Disabled,
    AutoStart,
    TeleopStart,
    AutoEnd,
    TeleopEnd,
    Tick,
    TickAuto,
    TickTeleop,
    TickDisabled,
}

/// Internal, compact IDs for debugging/telemetry.
impl Hook {
    pub const fn id(self) -> u8 {
        match self {
            Hook::Create => 0,
            Hook::Enabled => 1,
            Hook::Disabled => 2,
            Hook::AutoStart => 3,
            Hook::TeleopStart => 4,
            Hook::AutoEnd => 5,
            Hook::TeleopEnd => 6,
            Hook::Tick => 7,
            Hook::TickAuto => 8,
            Hook::TickTeleop => 9,
            Hook::TickDisabled => 10,
        }
    }

    /// Stable, human-readable label for logging.
    pub const fn label(self) -> &'static str {
        match self {
            Hook::Create => "create",
            Hook::Enabled => "enabled",
            Hook::Disabled => "disabled",
            Hook::AutoStart => "auto_start",
            Hook::TeleopStart => "teleop_start",
            Hook::AutoEnd => "auto_end",
            Hook::TeleopEnd => "teleop_end",
            Hook::Tick => "tick",
            Hook::TickAuto => "tick_auto",
            Hook::TickTeleop => "tick_teleop",
            Hook::TickDisabled => "tick_disabled",
        }
    }

    /// True for hooks that fan out to registered subsystems as well as the
    /// robot itself. Create, Enabled, Disabled, and the generic/disabled
    /// ticks stay with the robot alone.
    pub const fn is_broadcast(self) -> bool {
        matches!(
            self,
            Hook::AutoStart
                | Hook::TeleopStart
                | Hook::AutoEnd
                | Hook::TeleopEnd
                | Hook::TickAuto
                | Hook::TickTeleop
        )
    }
}

/// Canonical list of all hooks, in declaration order.
pub const ALL_HOOKS: [Hook; 11] = [
    Hook::Create,
    Hook::Enabled,
    Hook::Disabled,
    Hook::AutoStart,
    Hook::TeleopStart,
    Hook::AutoEnd,
    Hook::TeleopEnd,
    Hook::Tick,
    Hook::TickAuto,
    Hook::TickTeleop,
    Hook::TickDisabled,
];

/// Invoke `hook` on `target`.
///
/// Generic over unsized implementers so `dyn Controllable` and trait objects
/// of subtraits both dispatch without an upcast.
pub fn dispatch<C>(target: &mut C, hook: Hook)
where
    C: Controllable + ?Sized,
{
    match hook {
        Hook::Create => target.on_create(),
        Hook::Enabled => target.on_enabled(),
        Hook::Disabled => target.on_disabled(),
        Hook::AutoStart => target.on_auto_start(),
        Hook::TeleopStart => target.on_teleop_start(),
        Hook::AutoEnd => target.on_auto_end(),
        Hook::TeleopEnd => target.on_teleop_end(),
        Hook::Tick => target.on_tick(),
        Hook::TickAuto => target.on_tick_auto(),
        Hook::TickTeleop => target.on_tick_teleop(),
        Hook::TickDisabled => target.on_tick_disabled(),
    }
}
