//! robolink_iterative::robot
//!
//! Wrapper-side robot API façade.
//!
//! Exposes application-facing robot primitives while keeping lifecycle
//! semantics in robolink_core.

/// Re-export core lifecycle types
pub use robolink_core::lifecycle::{Controllable, EnabledGate, Hook, Mode};

// Host runtime boundary.
mod host;
pub use host::HostRobot;

// Subsystem + default command module.
mod subsystem;
pub use subsystem::{Command, CommandSlot, Subsystem};

// Gated actuator output module.
mod gated_output;
pub use gated_output::{GatedOutput, OutputLike};

// Utility functions for gated work.
mod util;
pub use util::run_if_enabled;

// Robot adapter module.
mod adapter;
pub use adapter::RobotAdapter;
