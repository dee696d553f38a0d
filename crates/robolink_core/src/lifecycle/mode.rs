/// Robot operating modes as reported by the host runtime.
///
/// `Disabled` is the initial mode and the only mode without an end hook.
/// `Autonomous` and `Teleoperated` are the enabled modes; the host decides
/// when each begins and ends.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Mode {
    Disabled,
    Autonomous,
    Teleoperated,
}

/// Internal, compact IDs for debugging/telemetry.
///
/// These are **not** host protocol IDs. They are stable, lightweight
/// identifiers inside robolink_core.
impl Mode {
    pub const fn id(self) -> u8 {
        match self {
            Mode::Disabled => 0,
            Mode::Autonomous => 1,
            Mode::Teleoperated => 2,
        }
    }

    /// True for modes in which operator or autonomous code may run.
    pub const fn is_enabled(self) -> bool {
        !matches!(self, Mode::Disabled)
    }

    /// Stable, human-readable label for host-facing adapters.
    pub const fn label(self) -> &'static str {
        match self {
            Mode::Disabled => "Disabled",
            Mode::Autonomous => "Autonomous",
            Mode::Teleoperated => "Teleoperated",
        }
    }
}

/// Canonical list of all modes.
pub const ALL_MODES: [Mode; 3] = [Mode::Disabled, Mode::Autonomous, Mode::Teleoperated];
