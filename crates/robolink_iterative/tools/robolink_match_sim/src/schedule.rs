use robolink_core::lifecycle::Mode;
use robolink_iterative::robot::HostRobot;

use crate::config::Config;

/// Phase of a simulated match, derived from the tick index.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum MatchPhase {
    PreMatch,
    Autonomous,
    Teleop,
    PostMatch,
}

impl MatchPhase {
    /// The mode the host reports for this phase.
    pub fn mode(self) -> Mode {
        match self {
            MatchPhase::PreMatch | MatchPhase::PostMatch => Mode::Disabled,
            MatchPhase::Autonomous => Mode::Autonomous,
            MatchPhase::Teleop => Mode::Teleoperated,
        }
    }

    /// Stable, human-readable label for logging.
    pub fn label(self) -> &'static str {
        match self {
            MatchPhase::PreMatch => "pre_match",
            MatchPhase::Autonomous => "autonomous",
            MatchPhase::Teleop => "teleop",
            MatchPhase::PostMatch => "post_match",
        }
    }
}

/// Tick-indexed match timeline: a one-second disabled lead-in, then
/// autonomous, then teleop, then a one-second disabled lead-out.
#[derive(Debug, Copy, Clone)]
pub struct MatchSchedule {
    lead_ticks: u64,
    auto_ticks: u64,
    teleop_ticks: u64,
}

impl MatchSchedule {
    pub fn new(tick_ms: u64, auto_secs: u64, teleop_secs: u64) -> Self {
        let tick_ms = tick_ms.max(1);
        Self {
            lead_ticks: (1000 / tick_ms).max(1),
            auto_ticks: ticks_for(auto_secs, tick_ms),
            teleop_ticks: ticks_for(teleop_secs, tick_ms),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.tick_ms, config.auto_secs, config.teleop_secs)
    }

    pub fn phase_at(&self, tick: u64) -> MatchPhase {
        let auto_start = self.lead_ticks;
        let teleop_start = auto_start + self.auto_ticks;
        let post_start = teleop_start + self.teleop_ticks;

        if tick < auto_start {
            MatchPhase::PreMatch
        } else if tick < teleop_start {
            MatchPhase::Autonomous
        } else if tick < post_start {
            MatchPhase::Teleop
        } else {
            MatchPhase::PostMatch
        }
    }

    /// Ticks in the whole timeline, lead-out included.
    pub fn total_ticks(&self) -> u64 {
        self.lead_ticks * 2 + self.auto_ticks + self.teleop_ticks
    }

    pub fn is_complete(&self, tick: u64) -> bool {
        tick >= self.total_ticks()
    }
}

fn ticks_for(secs: u64, tick_ms: u64) -> u64 {
    secs.saturating_mul(1000) / tick_ms
}

/// Drive one host cycle: the mode-entry call when the phase changes, then
/// the periodic calls for the current phase.
///
/// This is the part of the host contract the simulator owns; the adapter
/// performs no timing of its own.
pub fn drive_tick(robot: &mut dyn HostRobot, current: &mut MatchPhase, next: MatchPhase) {
    if next != *current {
        match next {
            MatchPhase::Autonomous => robot.autonomous_init(),
            MatchPhase::Teleop => robot.teleop_init(),
            MatchPhase::PreMatch | MatchPhase::PostMatch => robot.disabled_init(),
        }
        *current = next;
    }

    robot.robot_periodic();
    match *current {
        MatchPhase::PreMatch | MatchPhase::PostMatch => robot.disabled_periodic(),
        MatchPhase::Autonomous => robot.autonomous_periodic(),
        MatchPhase::Teleop => robot.teleop_periodic(),
    }
}
