use super::{Hook, Mode};

/// Which end hook fires when the host reports entry into `next` while the
/// current mode is `current`.
///
/// Rules:
/// - re-entering the current mode fires no end hook
/// - leaving Disabled fires no end hook
/// - leaving Autonomous or Teleoperated fires the matching end hook,
///   exactly once, before the mode field is updated
pub fn exit_hook(current: Mode, next: Mode) -> Option<Hook> {
    if current == next {
        return None;
    }

    match current {
        Mode::Disabled => None,
        Mode::Autonomous => Some(Hook::AutoEnd),
        Mode::Teleoperated => Some(Hook::TeleopEnd),
    }
}

/// Hooks fired on entering `next`, in order, after any end hook.
///
/// Autonomous entry fires the generic enabled hook before its start hook;
/// teleop entry does not. The narrower teleop sequence is long-standing
/// observable behavior and downstream robots may depend on it, so it stays.
pub fn entry_hooks(next: Mode) -> &'static [Hook] {
    match next {
        Mode::Disabled => &[Hook::Disabled],
        Mode::Autonomous => &[Hook::Enabled, Hook::AutoStart],
        Mode::Teleoperated => &[Hook::TeleopStart],
    }
}

//
// Tests
//
