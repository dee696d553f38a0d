//! robolink_core::lifecycle
//!
//! Pure (host-agnostic) lifecycle semantics for iterative robot runtimes.
//! This module intentionally contains **no** host runtime code.
//!
//! Key ideas:
//! - Three externally-driven modes; the host owns all timing
//! - Hooks as data: a `Hook` enum plus `dispatch()` onto `Controllable`
//! - Explicit mode entry: end hook -> mode assignment -> entry hooks
//! - Wrapper layer is responsible for the host boundary and broadcast policy

mod engine;
mod gate;
mod hooks;
mod mode;

pub use engine::{entry_hooks, exit_hook};
pub use gate::EnabledGate;
pub use hooks::{dispatch, Controllable, Hook, ALL_HOOKS};
pub use mode::{Mode, ALL_MODES};
