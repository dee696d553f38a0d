use std::sync::atomic::{AtomicBool, Ordering};

/// Shared enabled/disabled flag for gated helpers.
///
/// Intended use (wrapper layer):
/// - `enable()` when the robot enters Autonomous or Teleoperated
/// - `disable()` when it enters Disabled
/// - output/util wrappers check `is_enabled()` to allow or suppress work
#[derive(Debug)]
pub struct EnabledGate {
    enabled: AtomicBool,
}

impl EnabledGate {
    /// A new gate starts disabled, matching the initial mode.
    pub const fn new() -> Self {
        Self {
            enabled: AtomicBool::new(false),
        }
    }

    pub fn enable(&self) {
        self.enabled.store(true, Ordering::Release);
    }

    pub fn disable(&self) {
        self.enabled.store(false, Ordering::Release);
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled.load(Ordering::Acquire)
    }
}

impl Default for EnabledGate {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gate_starts_disabled_and_toggles() {
        let gate = EnabledGate::default();
        assert!(!gate.is_enabled());

        gate.enable();
        assert!(gate.is_enabled());

        gate.enable();
        assert!(gate.is_enabled());

        gate.disable();
        assert!(!gate.is_enabled());
    }
}
