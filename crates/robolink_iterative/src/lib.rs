//! robolink_iterative
//!
//! Host-facing adapter layer for iterative robot runtimes.
//! Maps the runtime's init/periodic entry points onto `Controllable` hooks
//! and a subsystem broadcast, while keeping lifecycle semantics in
//! `robolink_core`.

// Public modules
pub mod error;

pub mod robot;

// Re-export core types that wrapper users will commonly need
pub use robolink_core::error::{CoreError, Result};
pub use robolink_core::lifecycle::{Controllable, Hook, Mode};
